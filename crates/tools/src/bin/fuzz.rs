use std::fs;
use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use quartet_core::{Direction, GRID_SIZE, Game, GameState, Intent, IntentJournal, Pos, SkillId};
use quartet_tools::{RULES_ENV, init_tracing, rules_or_default};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    intents: u32,
    #[arg(short, long, env = RULES_ENV)]
    rules: Option<PathBuf>,
    /// Write the generated intent journal here
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_cell(rng: &mut ChaCha8Rng) -> Pos {
    let size = GRID_SIZE as u64;
    Pos::new((rng.next_u64() % size) as i32 + 1, (rng.next_u64() % size) as i32 + 1)
}

fn random_intent(rng: &mut ChaCha8Rng) -> Intent {
    match rng.next_u64() % 20 {
        0..=9 => {
            let (dx, dy) = choose(rng, &Direction::ALL).delta();
            Intent::Move { dx, dy }
        }
        10 => Intent::SelectSkill { skill: choose(rng, &[SkillId::Rewind, SkillId::Freeze]) },
        11 | 12 => Intent::ClickCell { pos: random_cell(rng) },
        13 => Intent::RewindPlayer,
        14 => Intent::RewindEnemy { index: (rng.next_u64() % 5) as usize },
        15 => Intent::Freeze { center: random_cell(rng) },
        16 | 17 => Intent::EndTurn,
        18 => Intent::Undo,
        _ => Intent::Redo,
    }
}

fn check_invariants(game: &Game) -> Result<()> {
    let state: &GameState = game.state();
    ensure!(state.player.pos.in_grid(), "player left the grid at {}", state.player.pos);
    for (index, enemy) in state.enemies.iter().enumerate() {
        ensure!(enemy.pos.in_grid(), "enemy #{index} left the grid at {}", enemy.pos);
    }
    ensure!(state.player.moves_left <= game.rules().moves_per_turn, "move budget overflow");
    for skill in [SkillId::Rewind, SkillId::Freeze] {
        ensure!(
            state.skills.get(skill).uses_remaining <= game.rules().skill_charges,
            "{skill} gained charges"
        );
    }
    let mut board = state.board.clone();
    let changed = board.recompute_doors(state.toggle_latch, &state.enemies);
    ensure!(changed.is_empty(), "door state out of sync with plates: {changed:?}");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let rules = rules_or_default(args.rules.as_deref())?;

    info!(seed = args.seed, intents = args.intents, "starting fuzz harness");
    let mut game = Game::new(rules.clone());
    let mut journal = IntentJournal::new(rules);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut restarts = 0u32;

    for _ in 0..args.intents {
        let intent = if game.outcome().is_some() {
            restarts += 1;
            Intent::Restart
        } else {
            random_intent(&mut rng)
        };
        let _ = game.apply(&intent);
        journal.append(intent);
        if let Err(error) = check_invariants(&game) {
            warn!(seq = journal.intents.len() - 1, %error, "invariant violated");
            return Err(error);
        }
    }

    if let Some(path) = &args.journal_out {
        fs::write(path, serde_json::to_string_pretty(&journal)?)?;
        info!(path = %path.display(), "journal written");
    }

    println!("Fuzz complete: {} intents, {} restarts", args.intents, restarts);
    println!("Final Turn: {}", game.state().turn.number);
    println!("Snapshot Hash: {}", game.snapshot_hash());
    Ok(())
}
