use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use doom_cli::config::Config;
use doom_cli::maps::{discover_maps, map_label};
use doom_cli::prompt::{print_choices, prompt_index};
use doom_cli::render::{describe_map, difficulty_label, outcome_message};
use doom_cli::seed::{generate_runtime_seed, resolve_seed};
use doom_cli::session::run_session;
use doom_cli::{format_seed, format_snapshot_hash, reason_code};
use doom_core::{Difficulty, Game, InputJournal, load_map};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Normal,
    Impossible,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Impossible => Difficulty::Impossible,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Escape the Dungeon of Doom before the bot catches you", long_about = None)]
struct Args {
    /// Map file to play; skips the map prompt
    #[arg(long)]
    map: Option<PathBuf>,

    /// Directory searched for map files
    #[arg(long)]
    maps_dir: Option<PathBuf>,

    /// Bot difficulty; skips the difficulty prompt
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// RNG seed for spawns, gold and bot wandering
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a dungeon.toml config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the input journal of this game to the given JSON file
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::resolve(args.config.as_deref()).context("failed to load configuration")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let map_path = match args.map {
        Some(path) => path,
        None => {
            let maps_dir = args.maps_dir.unwrap_or_else(|| config.maps_dir.clone());
            let Some(path) = choose_map(&maps_dir, &mut input, &mut out)? else {
                return Ok(());
            };
            path
        }
    };
    let map = load_map(&map_path)
        .with_context(|| format!("failed to load map {}", map_path.display()))?;

    let difficulty = match args.difficulty.map(Difficulty::from).or(config.difficulty) {
        Some(difficulty) => difficulty,
        None => {
            let Some(difficulty) = choose_difficulty(&mut input, &mut out)? else {
                return Ok(());
            };
            difficulty
        }
    };

    let seed = resolve_seed(args.seed, config.seed, generate_runtime_seed);
    info!(?seed, ?difficulty, map = %map.name, "starting game");

    writeln!(out, "Welcome to the Dungeon of Doom!")?;
    writeln!(out, "The chosen difficulty is: {}.", difficulty.label())?;
    for line in describe_map(&map) {
        writeln!(out, "{line}")?;
    }

    let mut journal = InputJournal::new(seed.value(), difficulty, map.name.clone());
    let mut game = Game::new(map, difficulty, seed.value()).context("failed to start the game")?;
    let outcome = run_session(&mut game, &mut input, &mut out, &mut journal)?;

    info!(
        outcome = reason_code(outcome),
        seed = %format_seed(seed.value()),
        snapshot = %format_snapshot_hash(game.snapshot_hash()),
        "game finished: {}",
        outcome_message(outcome)
    );

    let record_path = args.record.or_else(|| {
        config.journal_dir.map(|dir| dir.join(format!("{}.json", format_seed(seed.value()))))
    });
    if let Some(path) = record_path {
        journal
            .write_atomic(&path)
            .with_context(|| format!("failed to write journal {}", path.display()))?;
        info!(path = %path.display(), "journal written");
    }

    Ok(())
}

fn choose_map<R: BufRead, W: Write>(
    maps_dir: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    let maps = discover_maps(maps_dir)
        .with_context(|| format!("failed to list maps in {}", maps_dir.display()))?;
    if maps.is_empty() {
        bail!(
            "no map files found in {} (.txt only, excluding README files)",
            maps_dir.display()
        );
    }
    let labels: Vec<String> = maps.iter().map(|path| map_label(path)).collect();
    print_choices(out, &labels)?;
    let choice = prompt_index(input, out, "Select a map by entering the index: ", maps.len())?;
    Ok(choice.map(|index| maps[index].clone()))
}

fn choose_difficulty<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Difficulty>> {
    let labels: Vec<String> = Difficulty::ALL.iter().map(|difficulty| difficulty_label(*difficulty)).collect();
    print_choices(out, &labels)?;
    let choice =
        prompt_index(input, out, "Select a difficulty by entering the index: ", labels.len())?;
    Ok(choice.map(|index| Difficulty::ALL[index]))
}
