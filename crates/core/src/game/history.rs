//! Linear undo/redo over full-state snapshots.
//! Snapshots are owned clones of `GameState`, so later mutation of the live state
//! can never reach a stored entry.

use std::collections::VecDeque;

use super::*;

#[derive(Clone, Debug, Default)]
pub struct History {
    undo: VecDeque<GameState>,
    redo: Vec<GameState>,
    limit: Option<usize>,
}

impl History {
    pub fn new(limit: Option<usize>) -> Self {
        Self { undo: VecDeque::new(), redo: Vec::new(), limit }
    }

    /// Push a pre-action snapshot. A new action invalidates the redo future.
    pub fn record(&mut self, snapshot: GameState) {
        self.undo.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
        self.redo.clear();
    }

    pub fn step_back(&mut self, current: &GameState) -> Option<GameState> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current.clone());
        Some(previous)
    }

    pub fn step_forward(&mut self, current: &GameState) -> Option<GameState> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.clone());
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

impl Game {
    pub(super) fn save_state(&mut self) {
        self.history.record(self.state.clone());
    }

    pub fn undo(&mut self) -> Result<(), ActionError> {
        if self.state.is_terminal() {
            return Err(self.reject(ActionError::GameOver));
        }
        let Some(previous) = self.history.step_back(&self.state) else {
            return Err(self.reject(ActionError::NothingToUndo));
        };
        self.state = previous;
        debug!(turn = self.state.turn.number, depth = self.history.undo_depth(), "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), ActionError> {
        if self.state.is_terminal() {
            return Err(self.reject(ActionError::GameOver));
        }
        let Some(next) = self.history.step_forward(&self.state) else {
            return Err(self.reject(ActionError::NothingToRedo));
        };
        self.state = next;
        debug!(turn = self.state.turn.number, depth = self.history.redo_depth(), "redo");
        Ok(())
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}
