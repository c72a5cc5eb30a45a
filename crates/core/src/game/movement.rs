//! Movement legality between adjacent cells.
//! This module exists so player moves, enemy bouncing and path search share one rule set.
//! It does not own any state mutation.

use super::*;
use crate::state::WallSegment;

impl Board {
    /// Whether a single step from `from` to the adjacent cell `to` is legal.
    ///
    /// Vetoes apply in order: grid bounds, wall segments, closed doors, one-way passages.
    pub fn can_move(&self, from: Pos, to: Pos) -> bool {
        if !to.in_grid() {
            return false;
        }
        if self.wall_between(from, to) {
            return false;
        }
        if self.doors.iter().any(|door| !door.open && door.separates(from, to)) {
            return false;
        }
        self.one_way_allows(from, to)
    }

    fn wall_between(&self, from: Pos, to: Pos) -> bool {
        // Segments are keyed by the higher coordinate of the crossed pair.
        let crossed = if from.x != to.x {
            WallSegment::vertical(from.x.max(to.x), from.y)
        } else {
            WallSegment::horizontal(from.x, from.y.max(to.y))
        };
        self.walls.contains(&crossed)
    }

    fn one_way_allows(&self, from: Pos, to: Pos) -> bool {
        for passage in &self.one_way {
            if from == passage.entry() && to == passage.cell {
                return true;
            }
            if from == passage.cell && to == passage.entry() {
                return false;
            }
        }
        true
    }
}
