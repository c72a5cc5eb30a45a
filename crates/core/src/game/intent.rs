//! Dispatch of serialized intents onto the engine operations.
//! This module exists so replays and input layers share one entry point.

use super::*;

impl Game {
    /// Apply one intent. `Restart` always succeeds; everything else reports the engine's verdict.
    pub fn apply(&mut self, intent: &Intent) -> Result<(), ActionError> {
        trace!(?intent, "applying intent");
        match *intent {
            Intent::Move { dx, dy } => self.move_intent(dx, dy).map(drop),
            Intent::SelectSkill { skill } => self.select_skill(skill).map(drop),
            Intent::ClickCell { pos } => self.click_cell(pos),
            Intent::RewindPlayer => self.use_rewind_on_player().map(drop),
            Intent::RewindEnemy { index } => self.use_rewind_on_enemy(index).map(drop),
            Intent::Freeze { center } => self.use_freeze(center).map(drop),
            Intent::EndTurn => self.end_turn(),
            Intent::Undo => self.undo(),
            Intent::Redo => self.redo(),
            Intent::Restart => {
                self.restart();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_reach_the_matching_operation() {
        let mut game = Game::default();
        assert_eq!(game.apply(&Intent::Move { dx: 0, dy: 1 }), Ok(()));
        assert_eq!(game.state().player.pos, Pos::new(2, 3));
        assert_eq!(
            game.apply(&Intent::Move { dx: 1, dy: -1 }),
            Err(ActionError::InvalidDirection { dx: 1, dy: -1 })
        );
        assert_eq!(game.apply(&Intent::Undo), Ok(()));
        assert_eq!(game.state().player.pos, Pos::new(2, 2));
        assert_eq!(game.apply(&Intent::EndTurn), Ok(()));
        assert_eq!(game.state().turn.number, 2);
        assert_eq!(game.apply(&Intent::RewindEnemy { index: 3 }), Ok(()));
        assert_eq!(game.state().enemies[3].pos, Pos::new(1, 5));
    }

    #[test]
    fn restart_always_succeeds_and_clears_history() {
        let mut game = Game::default();
        game.apply(&Intent::EndTurn).unwrap();
        assert_eq!(game.apply(&Intent::Restart), Ok(()));
        assert_eq!(game.state().turn.number, 1);
        assert_eq!(game.undo_depth(), 0);
        assert_eq!(game.action_log(), &[LogEvent::Restarted]);
    }
}
