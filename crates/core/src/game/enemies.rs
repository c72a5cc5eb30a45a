//! Deterministic enemy bounce movement and its side-effect-free look-ahead.
//! It does not own door recomputation; the engine refreshes doors after the whole phase.

use super::*;

/// Run one enemy's turn: a stunned enemy burns one stun turn and stays put,
/// otherwise it takes `steps` bounce sub-steps.
pub fn advance_enemy(board: &Board, enemy: &mut Enemy, steps: u8) {
    if enemy.is_stunned() {
        enemy.stun_turns -= 1;
        return;
    }
    for _ in 0..steps {
        bounce_step(board, enemy);
    }
}

/// Where `enemy` will stand after its next turn, without touching it.
pub fn predict_next_position(board: &Board, enemy: &Enemy, steps: u8) -> Pos {
    if enemy.is_stunned() {
        return enemy.pos;
    }
    let mut scratch = enemy.clone();
    advance_enemy(board, &mut scratch, steps);
    scratch.pos
}

/// Step forward; when blocked, reverse along the same axis and try once from the same cell.
fn bounce_step(board: &Board, enemy: &mut Enemy) {
    let ahead = enemy.pos.step(enemy.facing);
    if board.can_move(enemy.pos, ahead) {
        enemy.pos = ahead;
        return;
    }
    enemy.facing = enemy.facing.reversed();
    let behind = enemy.pos.step(enemy.facing);
    if board.can_move(enemy.pos, behind) {
        enemy.pos = behind;
    }
}

impl Game {
    pub(super) fn run_enemy_phase(&mut self) {
        let steps = self.rules.enemy_steps_per_turn;
        let board = &self.state.board;
        for enemy in &mut self.state.enemies {
            advance_enemy(board, enemy, steps);
        }
        debug!(
            turn = self.state.turn.number,
            positions = ?self.state.enemies.iter().map(|enemy| enemy.pos).collect::<Vec<_>>(),
            "enemy phase complete"
        );
        self.refresh_doors();
    }

    pub fn predict_enemy_position(&self, index: usize) -> Option<Pos> {
        let enemy = self.state.enemies.get(index)?;
        Some(predict_next_position(&self.state.board, enemy, self.rules.enemy_steps_per_turn))
    }

    /// Look-ahead positions for the whole roster, in roster order.
    pub fn predicted_enemy_positions(&self) -> Vec<Pos> {
        let steps = self.rules.enemy_steps_per_turn;
        self.state
            .enemies
            .iter()
            .map(|enemy| predict_next_position(&self.state.board, enemy, steps))
            .collect()
    }
}
