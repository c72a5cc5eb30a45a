//! The turn/rule engine. `Game` owns the live `GameState` and its undo/redo history;
//! every public operation runs to completion and returns `Result<_, ActionError>`.

use tracing::{debug, trace};

use crate::config::RulesConfig;
use crate::state::{Board, Enemy, GameState};
use crate::types::*;

mod bootstrap;
mod enemies;
mod hash;
mod history;
mod intent;
mod movement;
mod pathfinding;
mod plates;
mod skills;
mod turns;

#[cfg(test)]
mod test_support;

pub use enemies::{advance_enemy, predict_next_position};
pub use history::History;

pub struct Game {
    rules: RulesConfig,
    state: GameState,
    history: History,
}

impl Game {
    pub fn new(rules: RulesConfig) -> Self {
        let state = bootstrap::initial_state(&rules);
        Self::from_state(rules, state)
    }

    /// Start from an arbitrary state, e.g. a custom board for a hint layer or a test.
    pub fn from_state(rules: RulesConfig, state: GameState) -> Self {
        let history = History::new(rules.history_limit);
        let mut game = Self { rules, state, history };
        game.refresh_doors();
        game
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Read-only view for the presentation layer.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.state.outcome
    }

    pub fn action_log(&self) -> &[LogEvent] {
        &self.state.log
    }

    pub fn action_log_lines(&self) -> Vec<String> {
        self.state.log.iter().map(ToString::to_string).collect()
    }

    /// Reinitialize to the starting configuration. History is discarded, not recorded.
    pub fn restart(&mut self) {
        self.state = bootstrap::initial_state(&self.rules);
        self.history.clear();
        self.refresh_doors();
        self.state.log.push(LogEvent::Restarted);
        debug!("game restarted");
    }

    fn ensure_can_act(&mut self) -> Result<(), ActionError> {
        if self.state.is_terminal() {
            return Err(self.reject(ActionError::GameOver));
        }
        if !self.state.turn.is_player_phase {
            return Err(self.reject(ActionError::NotPlayerPhase));
        }
        Ok(())
    }

    /// Record a refused intent in the action log and hand the error back to the caller.
    fn reject(&mut self, error: ActionError) -> ActionError {
        trace!(%error, "intent rejected");
        self.state.log.push(LogEvent::Rejected(error.clone()));
        error
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}
