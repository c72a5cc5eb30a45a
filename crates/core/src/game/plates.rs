//! Door state derived from plate occupancy.
//! Door `open` flags are only ever written here.

use super::*;

impl Board {
    /// Recompute every door from the toggle latch and current enemy positions.
    /// Returns the doors whose state changed.
    pub fn recompute_doors(&mut self, toggle_latch: bool, enemies: &[Enemy]) -> Vec<DoorId> {
        let mut changed = Vec::new();
        for index in 0..self.doors.len() {
            let open = match self.doors[index].id.color() {
                PlateColor::Yellow => toggle_latch,
                color => self.plate_group(color).is_some_and(|group| {
                    group.cells.iter().all(|cell| enemies.iter().any(|enemy| enemy.pos == *cell))
                }),
            };
            let door = &mut self.doors[index];
            if door.open != open {
                door.open = open;
                changed.push(door.id);
            }
        }
        changed
    }
}

impl Game {
    pub(super) fn refresh_doors(&mut self) {
        let changed = self.state.board.recompute_doors(self.state.toggle_latch, &self.state.enemies);
        if !changed.is_empty() {
            debug!(?changed, "doors changed state");
        }
    }
}
