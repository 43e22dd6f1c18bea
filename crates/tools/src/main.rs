use anyhow::{Context, Result};
use clap::Parser;
use game_core::{InputJournal, ReplayResult, replay::replay_to_end};
use std::fs;

/// Replay a recorded input journal headlessly and report the outcome.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
    /// How many fixed 60 Hz ticks to simulate
    #[arg(short, long, default_value_t = 20_000)]
    ticks: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(&journal, args.ticks)
        .map_err(|e| anyhow::anyhow!("Replay failed during execution: {e:?}"))?;

    println!("Replay complete.");
    println!("Final Tick: {}", result.final_tick);
    println!("Final Score: {}", result.final_score);
    println!("Final Phase: {:?}", result.final_phase);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
