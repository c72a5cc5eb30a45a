use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quartet_core::{IntentJournal, ReplayResult, replay_journal, replay_with_rules};
use quartet_tools::{RULES_ENV, init_tracing, load_rules, read_json};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Rules TOML overriding the rules recorded in the journal
    #[arg(short, long, env = RULES_ENV)]
    rules: Option<PathBuf>,
    /// Print every rejected intent
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let journal: IntentJournal = read_json(&args.journal)?;
    info!(intents = journal.intents.len(), build = %journal.build_id, "journal loaded");

    let result: ReplayResult = match &args.rules {
        Some(path) => replay_with_rules(&load_rules(path)?, &journal),
        None => replay_journal(&journal),
    }
    .with_context(|| format!("Replay failed: {}", args.journal.display()))?;

    println!("Replay complete.");
    println!("Final Turn: {}", result.final_turn);
    println!("Outcome: {:?}", result.outcome);
    println!("Accepted: {}  Rejected: {}", result.accepted, result.rejected);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);
    if args.verbose {
        for (seq, error) in &result.rejections {
            println!("  #{seq}: {error}");
        }
    }

    Ok(())
}
