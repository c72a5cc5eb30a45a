use std::collections::BTreeSet;

use crate::types::*;

/// A wall on the low side of cell `(x, y)`.
///
/// A `Horizontal` segment sits under the cell and separates `(x, y - 1)` from `(x, y)`.
/// A `Vertical` segment sits left of the cell and separates `(x - 1, y)` from `(x, y)`.
/// The outer boundary is therefore `(x, 1, H)`, `(x, 9, H)`, `(1, y, V)` and `(9, y, V)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallSegment {
    pub x: i32,
    pub y: i32,
    pub orientation: WallOrientation,
}

impl WallSegment {
    pub const fn horizontal(x: i32, y: i32) -> Self {
        Self { x, y, orientation: WallOrientation::Horizontal }
    }

    pub const fn vertical(x: i32, y: i32) -> Self {
        Self { x, y, orientation: WallOrientation::Vertical }
    }
}

/// A boundary crossable only by moving in `direction` into `cell`.
/// The neighbor it is entered from is `cell` stepped against `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OneWayPassage {
    pub cell: Pos,
    pub direction: Direction,
}

impl OneWayPassage {
    pub fn entry(&self) -> Pos {
        self.cell.step(self.direction.reversed())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Door {
    pub id: DoorId,
    pub between: (Pos, Pos),
    pub open: bool,
}

impl Door {
    pub fn separates(&self, a: Pos, b: Pos) -> bool {
        let (p, q) = self.between;
        (p == a && q == b) || (p == b && q == a)
    }
}

/// Cells that must all hold an enemy at once for the doors of `color` to open.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlateGroup {
    pub color: PlateColor,
    pub cells: Vec<Pos>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub walls: BTreeSet<WallSegment>,
    pub one_way: Vec<OneWayPassage>,
    pub doors: Vec<Door>,
    pub toggle_plate: Pos,
    pub sensed_plates: Vec<PlateGroup>,
    pub goal: Pos,
}

impl Board {
    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.iter().find(|door| door.id == id)
    }

    pub fn plate_group(&self, color: PlateColor) -> Option<&PlateGroup> {
        self.sensed_plates.iter().find(|group| group.color == color)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Enemy {
    pub pos: Pos,
    pub facing: Direction,
    pub stun_turns: u8,
}

impl Enemy {
    pub const fn new(pos: Pos, facing: Direction) -> Self {
        Self { pos, facing, stun_turns: 0 }
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_turns > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub pos: Pos,
    pub moves_left: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkillCharges {
    pub uses_remaining: u8,
    pub used_this_turn: bool,
}

impl SkillCharges {
    pub fn new(uses: u8) -> Self {
        Self { uses_remaining: uses, used_this_turn: false }
    }

    pub fn check(&self, skill: SkillId) -> Result<(), ActionError> {
        if self.used_this_turn {
            return Err(ActionError::SkillUsedThisTurn(skill));
        }
        if self.uses_remaining == 0 {
            return Err(ActionError::NoCharges(skill));
        }
        Ok(())
    }

    pub fn consume(&mut self) {
        self.uses_remaining = self.uses_remaining.saturating_sub(1);
        self.used_this_turn = true;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Skills {
    pub rewind: SkillCharges,
    pub freeze: SkillCharges,
}

impl Skills {
    pub fn new(uses: u8) -> Self {
        Self { rewind: SkillCharges::new(uses), freeze: SkillCharges::new(uses) }
    }

    pub fn get(&self, skill: SkillId) -> &SkillCharges {
        match skill {
            SkillId::Rewind => &self.rewind,
            SkillId::Freeze => &self.freeze,
        }
    }

    pub fn get_mut(&mut self, skill: SkillId) -> &mut SkillCharges {
        match skill {
            SkillId::Rewind => &mut self.rewind,
            SkillId::Freeze => &mut self.freeze,
        }
    }

    pub fn start_turn(&mut self) {
        self.rewind.used_this_turn = false;
        self.freeze.used_this_turn = false;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TurnState {
    pub number: u32,
    pub max_turns: u32,
    pub is_first_turn: bool,
    pub is_player_phase: bool,
}

/// Rewind targets captured at each turn boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RewindAnchors {
    pub player: Pos,
    /// `None` until enemies have moved for the first time.
    pub enemies: Option<Vec<Enemy>>,
}

/// Every mutable field of a game. A clone is a complete, independent snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub toggle_latch: bool,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub turn: TurnState,
    pub skills: Skills,
    pub armed: Option<SkillId>,
    pub anchors: RewindAnchors,
    pub outcome: Option<RunOutcome>,
    pub log: Vec<LogEvent>,
}

impl GameState {
    pub fn is_won(&self) -> bool {
        self.outcome == Some(RunOutcome::Victory)
    }

    pub fn is_lost(&self) -> bool {
        self.outcome == Some(RunOutcome::Defeat)
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Roster index of the first enemy standing on `pos`.
    pub fn enemy_at(&self, pos: Pos) -> Option<usize> {
        self.enemies.iter().position(|enemy| enemy.pos == pos)
    }

    pub fn door_open(&self, id: DoorId) -> bool {
        self.board.door(id).is_some_and(|door| door.open)
    }
}
