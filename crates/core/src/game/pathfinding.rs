//! Deterministic shortest-path search over the movement rule set.
//! This module exists so a hint or auto-move layer can ask for routes without touching state.
//! It does not own enemy avoidance or any plate/door planning; the board is searched as-is.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::*;

impl Board {
    /// Breadth-first search from `start` to `goal` using `can_move`, expanding neighbors in
    /// `Direction::ALL` order. Returns the direction sequence of a shortest route.
    pub fn find_path(&self, start: Pos, goal: Pos) -> Option<Vec<Direction>> {
        if !start.in_grid() || !goal.in_grid() {
            return None;
        }
        if start == goal {
            return Some(vec![]);
        }

        let mut visited = BTreeSet::from([start]);
        let mut came_from = BTreeMap::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for direction in Direction::ALL {
                let next = current.step(direction);
                if !self.can_move(current, next) || !visited.insert(next) {
                    continue;
                }
                came_from.insert(next, (current, direction));
                if next == goal {
                    return reconstruct_path(&came_from, start, goal);
                }
                queue.push_back(next);
            }
        }
        None
    }
}

fn reconstruct_path(
    came_from: &BTreeMap<Pos, (Pos, Direction)>,
    start: Pos,
    goal: Pos,
) -> Option<Vec<Direction>> {
    let mut path = Vec::new();
    let mut cursor = goal;
    while cursor != start {
        let &(previous, direction) = came_from.get(&cursor)?;
        path.push(direction);
        cursor = previous;
    }
    path.reverse();
    Some(path)
}

impl Game {
    /// Shortest route for the player on the current board, with doors as they stand now.
    pub fn find_path(&self, start: Pos, goal: Pos) -> Option<Vec<Direction>> {
        self.state.board.find_path(start, goal)
    }

    pub fn path_to_goal(&self) -> Option<Vec<Direction>> {
        self.find_path(self.state.player.pos, self.state.board.goal)
    }
}
