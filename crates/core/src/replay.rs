use thiserror::Error;
use tracing::debug;

use crate::{
    ActionError, RunOutcome,
    config::{ConfigError, RulesConfig},
    game::Game,
    journal::IntentJournal,
};

#[derive(Debug, PartialEq, Error)]
pub enum ReplayError {
    #[error("journal rules are invalid: {0}")]
    InvalidRules(#[from] ConfigError),
}

/// Summary of a replayed journal. Rejected intents are counted, not treated as replay failures.
#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub outcome: Option<RunOutcome>,
    pub final_turn: u32,
    pub accepted: usize,
    pub rejected: usize,
    pub rejections: Vec<(u64, ActionError)>,
    pub final_snapshot_hash: u64,
}

pub fn replay_journal(journal: &IntentJournal) -> Result<ReplayResult, ReplayError> {
    replay_with_rules(&journal.rules, journal)
}

/// Replay `journal`'s intents under `rules` instead of the rules it was recorded with.
pub fn replay_with_rules(
    rules: &RulesConfig,
    journal: &IntentJournal,
) -> Result<ReplayResult, ReplayError> {
    rules.validate()?;
    let mut game = Game::new(rules.clone());
    let mut accepted = 0;
    let mut rejections = Vec::new();

    for record in &journal.intents {
        match game.apply(&record.intent) {
            Ok(()) => accepted += 1,
            Err(error) => rejections.push((record.seq, error)),
        }
    }

    debug!(accepted, rejected = rejections.len(), outcome = ?game.outcome(), "replay finished");
    Ok(ReplayResult {
        outcome: game.outcome(),
        final_turn: game.state().turn.number,
        accepted,
        rejected: rejections.len(),
        rejections,
        final_snapshot_hash: game.snapshot_hash(),
    })
}
