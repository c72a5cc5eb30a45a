pub mod config;
pub mod content;
pub mod game;
pub mod journal;
pub mod replay;
pub mod state;
pub mod types;

pub use config::{ConfigError, RulesConfig};
pub use game::Game;
pub use journal::{IntentJournal, IntentRecord};
pub use replay::*;
pub use state::{Board, Enemy, GameState};
pub use types::*;
