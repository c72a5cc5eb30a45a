//! Player movement and the turn boundary.

use super::*;

impl Game {
    /// Move from a raw input delta. Anything but a single axis step is refused.
    pub fn move_intent(&mut self, dx: i32, dy: i32) -> Result<Pos, ActionError> {
        let Some(direction) = Direction::from_delta(dx, dy) else {
            return Err(self.reject(ActionError::InvalidDirection { dx, dy }));
        };
        self.move_player(direction)
    }

    pub fn move_player(&mut self, direction: Direction) -> Result<Pos, ActionError> {
        self.ensure_can_act()?;
        if self.state.player.moves_left == 0 {
            return Err(self.reject(ActionError::OutOfMoves));
        }
        let from = self.state.player.pos;
        let to = from.step(direction);
        if !self.state.board.can_move(from, to) {
            return Err(self.reject(ActionError::Blocked { from, to }));
        }

        self.save_state();
        self.state.player.pos = to;
        self.state.player.moves_left -= 1;
        self.state.log.push(LogEvent::PlayerMoved { direction, from, to });

        if to == self.state.board.toggle_plate {
            self.state.toggle_latch = !self.state.toggle_latch;
            self.refresh_doors();
            self.state.log.push(LogEvent::LatchToggled { active: self.state.toggle_latch });
        }
        if to == self.state.board.goal {
            self.state.outcome = Some(RunOutcome::Victory);
            self.state.log.push(LogEvent::GoalReached);
            debug!(turn = self.state.turn.number, "goal reached");
        }
        Ok(to)
    }

    /// Close the player phase, run the enemy phase and open the next player phase.
    /// Running past the turn limit ends the game in defeat before any enemy moves.
    pub fn end_turn(&mut self) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        self.save_state();

        self.state.turn.is_first_turn = false;
        self.state.turn.number += 1;
        if self.state.turn.number > self.state.turn.max_turns {
            self.state.outcome = Some(RunOutcome::Defeat);
            self.state.log.push(LogEvent::TurnLimitReached);
            debug!(turn = self.state.turn.number, "turn limit reached");
            return Ok(());
        }

        self.state.player.moves_left = self.rules.moves_per_turn;
        self.state.skills.start_turn();
        self.state.armed = None;
        self.state.log.clear();

        self.state.turn.is_player_phase = false;
        self.state.anchors.enemies = Some(self.state.enemies.clone());
        self.run_enemy_phase();
        self.state.anchors.player = self.state.player.pos;
        self.state.turn.is_player_phase = true;

        self.state.log.push(LogEvent::TurnStarted { turn: self.state.turn.number });
        debug!(turn = self.state.turn.number, "turn started");
        Ok(())
    }
}
