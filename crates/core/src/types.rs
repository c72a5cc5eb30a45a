use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the square play grid. Coordinates run `1..=GRID_SIZE` on both axes.
pub const GRID_SIZE: i32 = 8;

/// A grid cell. `y` grows upward; `(1, 1)` is the bottom-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_grid(self) -> bool {
        (1..=GRID_SIZE).contains(&self.x) && (1..=GRID_SIZE).contains(&self.y)
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor enumeration order shared by path search and any hint layer.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The opposite facing along the same axis.
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.delta() == (dx, dy))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

/// The two limited-use skills. `Rewind` is skill 1, `Freeze` is skill 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillId {
    Rewind,
    Freeze,
}

impl SkillId {
    pub const fn number(self) -> u8 {
        match self {
            SkillId::Rewind => 1,
            SkillId::Freeze => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SkillId::Rewind => "rewind",
            SkillId::Freeze => "freeze",
        }
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill {} ({})", self.number(), self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlateColor {
    Yellow,
    Green,
    Purple,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DoorId {
    Yellow1,
    Yellow2,
    Yellow3,
    Green,
    Purple,
    Blue,
}

impl DoorId {
    pub const ALL: [DoorId; 6] = [
        DoorId::Yellow1,
        DoorId::Yellow2,
        DoorId::Yellow3,
        DoorId::Green,
        DoorId::Purple,
        DoorId::Blue,
    ];

    /// The plate color that drives this door. Yellow doors follow the toggle latch;
    /// every other color follows the sensed plate group of the same color.
    pub const fn color(self) -> PlateColor {
        match self {
            DoorId::Yellow1 | DoorId::Yellow2 | DoorId::Yellow3 => PlateColor::Yellow,
            DoorId::Green => PlateColor::Green,
            DoorId::Purple => PlateColor::Purple,
            DoorId::Blue => PlateColor::Blue,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DoorId::Yellow1 => "yellow1",
            DoorId::Yellow2 => "yellow2",
            DoorId::Yellow3 => "yellow3",
            DoorId::Green => "green",
            DoorId::Purple => "purple",
            DoorId::Blue => "blue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// Why an intent was refused. None of these are fatal; the game state is left as it was.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("it is not the player's phase")]
    NotPlayerPhase,
    #[error("no moves left this turn")]
    OutOfMoves,
    #[error("({dx},{dy}) is not a unit step")]
    InvalidDirection { dx: i32, dy: i32 },
    #[error("{0} is outside the grid")]
    OutOfBounds(Pos),
    #[error("cannot move from {from} to {to}")]
    Blocked { from: Pos, to: Pos },
    #[error("{0} was already used this turn")]
    SkillUsedThisTurn(SkillId),
    #[error("{0} has no charges left")]
    NoCharges(SkillId),
    #[error("enemies have not moved yet, nothing to rewind")]
    RewindNotAvailableYet,
    #[error("there is no enemy #{0}")]
    NoSuchEnemy(usize),
    #[error("no enemy within range of {0}")]
    NoEnemiesInArea(Pos),
    #[error("no unit at {0}")]
    NoUnitAtCell(Pos),
    #[error("no skill is armed")]
    NoSkillArmed,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
}

/// One entry of the per-turn action log. `Display` renders the line shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogEvent {
    PlayerMoved { direction: Direction, from: Pos, to: Pos },
    LatchToggled { active: bool },
    GoalReached,
    PlayerRewound { from: Pos, to: Pos },
    EnemyRewound { enemy: usize, from: Pos, to: Pos },
    EnemiesFrozen { center: Pos, count: usize },
    TurnStarted { turn: u32 },
    TurnLimitReached,
    Restarted,
    Rejected(ActionError),
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::PlayerMoved { direction, from, to } => {
                write!(f, "moved {}: {from} -> {to}", direction.label())
            }
            LogEvent::LatchToggled { active: true } => write!(f, "yellow plate: doors open"),
            LogEvent::LatchToggled { active: false } => write!(f, "yellow plate: doors closed"),
            LogEvent::GoalReached => write!(f, "goal reached, victory"),
            LogEvent::PlayerRewound { from, to } => write!(f, "rewound player: {from} -> {to}"),
            LogEvent::EnemyRewound { enemy, from, to } => {
                write!(f, "rewound enemy #{}: {from} -> {to}", enemy + 1)
            }
            LogEvent::EnemiesFrozen { center, count } => {
                write!(f, "froze {count} enemies around {center}")
            }
            LogEvent::TurnStarted { turn } => write!(f, "turn {turn} begins"),
            LogEvent::TurnLimitReached => write!(f, "out of turns, defeat"),
            LogEvent::Restarted => write!(f, "game restarted"),
            LogEvent::Rejected(error) => write!(f, "{error}"),
        }
    }
}

/// A discrete player intent, as forwarded by an input layer or stored in a journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move { dx: i32, dy: i32 },
    SelectSkill { skill: SkillId },
    ClickCell { pos: Pos },
    RewindPlayer,
    RewindEnemy { index: usize },
    Freeze { center: Pos },
    EndTurn,
    Undo,
    Redo,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_its_delta() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
            assert_eq!(direction.reversed().reversed(), direction);
        }
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn reversal_stays_on_the_same_axis() {
        assert_eq!(Direction::Right.reversed(), Direction::Left);
        assert_eq!(Direction::Up.reversed(), Direction::Down);
    }

    #[test]
    fn grid_bounds_are_one_indexed() {
        assert!(Pos::new(1, 1).in_grid());
        assert!(Pos::new(8, 8).in_grid());
        assert!(!Pos::new(0, 4).in_grid());
        assert!(!Pos::new(4, 9).in_grid());
    }

    #[test]
    fn chebyshev_distance_covers_diagonals() {
        assert_eq!(Pos::new(3, 3).chebyshev(Pos::new(4, 4)), 1);
        assert_eq!(Pos::new(3, 3).chebyshev(Pos::new(5, 3)), 2);
    }

    #[test]
    fn log_lines_are_human_readable() {
        let moved = LogEvent::PlayerMoved {
            direction: Direction::Right,
            from: Pos::new(2, 2),
            to: Pos::new(3, 2),
        };
        assert_eq!(moved.to_string(), "moved right: (2,2) -> (3,2)");
        assert_eq!(
            LogEvent::Rejected(ActionError::RewindNotAvailableYet).to_string(),
            "enemies have not moved yet, nothing to rewind"
        );
        let rewound = LogEvent::EnemyRewound { enemy: 0, from: Pos::new(5, 8), to: Pos::new(1, 8) };
        assert_eq!(rewound.to_string(), "rewound enemy #1: (5,8) -> (1,8)");
    }
}
