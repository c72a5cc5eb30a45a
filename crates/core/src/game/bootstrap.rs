//! Starting-state assembly from the reference content and the active rules.

use super::*;
use crate::content::{PLAYER_START, reference_board, reference_roster};
use crate::state::{Player, RewindAnchors, Skills, TurnState};

pub(super) fn initial_state(rules: &RulesConfig) -> GameState {
    GameState::on_board(rules, reference_board(), PLAYER_START, reference_roster())
}

impl GameState {
    /// A first-turn state on a caller-supplied board.
    pub fn on_board(
        rules: &RulesConfig,
        board: Board,
        player_start: Pos,
        enemies: Vec<Enemy>,
    ) -> Self {
        Self {
            board,
            toggle_latch: false,
            player: Player { pos: player_start, moves_left: rules.moves_per_turn },
            enemies,
            turn: TurnState {
                number: 1,
                max_turns: rules.max_turns,
                is_first_turn: true,
                is_player_phase: true,
            },
            skills: Skills::new(rules.skill_charges),
            armed: None,
            anchors: RewindAnchors { player: player_start, enemies: None },
            outcome: None,
            log: Vec::new(),
        }
    }
}
