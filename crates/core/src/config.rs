//! Numeric rule parameters for one game instance.
//! The board layout is fixed content and lives in `content`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub max_turns: u32,
    pub moves_per_turn: u8,
    pub skill_charges: u8,
    pub enemy_steps_per_turn: u8,
    /// Enemy turns skipped after being frozen.
    pub stun_turns: u8,
    /// Maximum undo depth. `None` keeps every snapshot.
    pub history_limit: Option<usize>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_turns: 20,
            moves_per_turn: 6,
            skill_charges: 3,
            enemy_steps_per_turn: 4,
            stun_turns: 1,
            history_limit: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{0}` must be greater than zero")]
    ZeroBudget(&'static str),
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroBudget("max_turns"));
        }
        if self.moves_per_turn == 0 {
            return Err(ConfigError::ZeroBudget("moves_per_turn"));
        }
        if self.enemy_steps_per_turn == 0 {
            return Err(ConfigError::ZeroBudget("enemy_steps_per_turn"));
        }
        if self.stun_turns == 0 {
            return Err(ConfigError::ZeroBudget("stun_turns"));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroBudget("history_limit"));
        }
        Ok(())
    }
}
