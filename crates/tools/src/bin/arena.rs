use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use doom_core::{Command, Difficulty, Direction, Game, Side, load_map, render_map};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Normal,
    Impossible,
}

#[derive(Parser)]
#[command(author, version, about = "Pit a bot against a random-walking human", long_about = None)]
struct Args {
    #[arg(short, long)]
    map: PathBuf,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u64,
    #[arg(short, long, value_enum, default_value_t = BotArg::Normal)]
    difficulty: BotArg,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn check_invariants(game: &Game) -> Result<()> {
    let state = game.state();
    for side in [Side::Human, Side::Bot] {
        let pos = state.player(side).pos;
        let tile = state.map.tile(pos).with_context(|| format!("{side:?} left the map at {pos:?}"))?;
        ensure!(tile.can_enter(), "Invariant failed: {side:?} inside a wall at {pos:?}");
    }
    let gold_tiles = state.map.tiles().filter(|tile| tile.has_gold()).count();
    ensure!(
        gold_tiles == state.map.gold_on_map() as usize,
        "Invariant failed: gold_on_map {} but {gold_tiles} gold tiles",
        state.map.gold_on_map()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let difficulty = match args.difficulty {
        BotArg::Normal => Difficulty::Normal,
        BotArg::Impossible => Difficulty::Impossible,
    };

    println!("Starting arena on seed {} for max {} turns...", args.seed, args.turns);
    let map = load_map(&args.map)
        .with_context(|| format!("Failed to load map file: {}", args.map.display()))?;
    let mut game = Game::new(map, difficulty, args.seed).context("Failed to start the game")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let walker = [
        Command::Move(Direction::North),
        Command::Move(Direction::East),
        Command::Move(Direction::South),
        Command::Move(Direction::West),
        Command::Pickup,
    ];

    while !game.is_over() && game.turn() < args.turns {
        match game.to_move() {
            Side::Human => game.play_human(choose(&mut rng, &walker))?,
            Side::Bot => game.play_bot()?,
        }
        if let Err(err) = check_invariants(&game) {
            error!(turn = game.turn(), seed = args.seed, "invariant broken, dumping map");
            for line in render_map(game.map()) {
                eprintln!("{line}");
            }
            return Err(err);
        }
    }
    info!(turn = game.turn(), outcome = ?game.outcome(), "arena finished");

    match game.outcome() {
        Some(outcome) => println!("Finished with outcome {outcome:?} after {} turns", game.turn()),
        None => println!("No outcome after {} turns", game.turn()),
    }
    let state = game.state();
    println!("Gold: human {} / bot {} (win {})", state.human.gold, state.bot.gold, state.map.win_gold);
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());

    Ok(())
}
