//! Shared fixtures for the `game` submodule test suites.
//! It does not own production gameplay logic.

use std::collections::BTreeSet;

use super::*;
use crate::content::reference_walls;
use crate::state::WallSegment;

/// Boundary walls only: no doors, no passages, no sensed plates.
pub(super) fn open_board() -> Board {
    let walls: BTreeSet<WallSegment> = reference_walls()
        .into_iter()
        .filter(|wall| match wall.orientation {
            WallOrientation::Horizontal => wall.y == 1 || wall.y == 9,
            WallOrientation::Vertical => wall.x == 1 || wall.x == 9,
        })
        .collect();
    Board {
        walls,
        one_way: Vec::new(),
        doors: Vec::new(),
        toggle_plate: Pos::new(1, 8),
        sensed_plates: Vec::new(),
        goal: Pos::new(8, 8),
    }
}

pub(super) fn game_on(board: Board, player: Pos, enemies: Vec<Enemy>) -> Game {
    let rules = RulesConfig::default();
    let state = GameState::on_board(&rules, board, player, enemies);
    Game::from_state(rules, state)
}

pub(super) fn open_game(player: Pos, enemies: Vec<Enemy>) -> Game {
    game_on(open_board(), player, enemies)
}

pub(super) fn enemy(x: i32, y: i32, facing: Direction) -> Enemy {
    Enemy::new(Pos::new(x, y), facing)
}
