//! The fixed reference level: walls, passages, doors, plates and the starting roster.

use std::collections::BTreeSet;

use crate::state::{Board, Door, Enemy, OneWayPassage, PlateGroup, WallSegment};
use crate::types::*;

pub const PLAYER_START: Pos = Pos::new(2, 2);
pub const GOAL: Pos = Pos::new(7, 2);
pub const TOGGLE_PLATE: Pos = Pos::new(1, 3);

/// Interior horizontal walls as `(y, x range)`; each sits under row `y`.
const HORIZONTAL_RUNS: [(i32, i32, i32); 4] = [(5, 1, 8), (6, 1, 6), (7, 1, 7), (8, 1, 8)];

/// Interior vertical walls; each sits left of the named cell.
const VERTICAL_WALLS: [(i32, i32); 10] =
    [(3, 1), (3, 4), (5, 3), (5, 4), (7, 1), (7, 3), (7, 4), (5, 5), (7, 6), (8, 7)];

pub fn reference_walls() -> BTreeSet<WallSegment> {
    let mut walls = BTreeSet::new();
    for i in 1..=GRID_SIZE {
        walls.insert(WallSegment::horizontal(i, 1));
        walls.insert(WallSegment::horizontal(i, GRID_SIZE + 1));
        walls.insert(WallSegment::vertical(1, i));
        walls.insert(WallSegment::vertical(GRID_SIZE + 1, i));
    }
    for (y, from_x, to_x) in HORIZONTAL_RUNS {
        for x in from_x..=to_x {
            walls.insert(WallSegment::horizontal(x, y));
        }
    }
    for (x, y) in VERTICAL_WALLS {
        walls.insert(WallSegment::vertical(x, y));
    }
    walls
}

pub fn reference_board() -> Board {
    let door = |id, a: (i32, i32), b: (i32, i32)| Door {
        id,
        between: (Pos::new(a.0, a.1), Pos::new(b.0, b.1)),
        open: false,
    };
    let group = |color, cells: &[(i32, i32)]| PlateGroup {
        color,
        cells: cells.iter().map(|&(x, y)| Pos::new(x, y)).collect(),
    };

    Board {
        walls: reference_walls(),
        one_way: vec![
            OneWayPassage { cell: Pos::new(2, 3), direction: Direction::Left },
            OneWayPassage { cell: Pos::new(4, 1), direction: Direction::Left },
        ],
        doors: vec![
            door(DoorId::Yellow1, (1, 6), (2, 6)),
            door(DoorId::Yellow2, (1, 7), (2, 7)),
            door(DoorId::Yellow3, (7, 8), (8, 8)),
            door(DoorId::Green, (2, 2), (3, 2)),
            door(DoorId::Purple, (4, 2), (5, 2)),
            door(DoorId::Blue, (6, 2), (7, 2)),
        ],
        toggle_plate: TOGGLE_PLATE,
        sensed_plates: vec![
            group(PlateColor::Blue, &[(5, 8), (5, 7), (5, 6)]),
            group(PlateColor::Green, &[(3, 7), (3, 6), (3, 5)]),
            group(PlateColor::Purple, &[(7, 8), (7, 7)]),
        ],
        goal: GOAL,
    }
}

pub fn reference_roster() -> Vec<Enemy> {
    [(1, 8), (1, 7), (1, 6), (1, 5)]
        .into_iter()
        .map(|(x, y)| Enemy::new(Pos::new(x, y), Direction::Right))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_closed_on_all_sides() {
        let walls = reference_walls();
        for i in 1..=GRID_SIZE {
            assert!(walls.contains(&WallSegment::horizontal(i, 1)));
            assert!(walls.contains(&WallSegment::horizontal(i, 9)));
            assert!(walls.contains(&WallSegment::vertical(1, i)));
            assert!(walls.contains(&WallSegment::vertical(9, i)));
        }
    }

    #[test]
    fn reference_layout_counts() {
        let board = reference_board();
        assert_eq!(board.walls.len(), 32 + 8 + 6 + 7 + 8 + 10);
        assert_eq!(board.doors.len(), 6);
        assert!(board.doors.iter().all(|door| !door.open));
        assert_eq!(reference_roster().len(), 4);
    }

    #[test]
    fn plates_and_roster_start_inside_the_grid() {
        let board = reference_board();
        let cells = board.sensed_plates.iter().flat_map(|group| group.cells.iter().copied());
        assert!(cells.chain([board.toggle_plate, board.goal, PLAYER_START]).all(Pos::in_grid));
        assert!(reference_roster().iter().all(|enemy| enemy.pos.in_grid()));
    }
}
