use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use doom_core::{InputJournal, ReplayResult, load_map, replay::replay_to_end};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Replay a recorded Dungeon of Doom journal", long_about = None)]
struct Args {
    /// Map file the journal was recorded on
    #[arg(short, long)]
    map: PathBuf,

    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let map = load_map(&args.map)
        .with_context(|| format!("Failed to load map file: {}", args.map.display()))?;
    let journal = InputJournal::load(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;

    let result: ReplayResult =
        replay_to_end(&map, &journal).context("Replay failed during execution")?;
    info!(
        inputs = journal.inputs.len(),
        turn = result.final_turn,
        outcome = ?result.final_outcome,
        "replay finished"
    );

    println!("Replay complete.");
    println!("Final Turn: {}", result.final_turn);
    match result.final_outcome {
        Some(outcome) => println!("Outcome: {outcome:?}"),
        None => println!("Outcome: unfinished"),
    }
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
