use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self { row: self.row + d_row, col: self.col + d_col }
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Square-radius distance; a 5x5 window is every tile within 2 of the centre.
    pub fn chebyshev(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(Direction::North),
            'e' => Some(Direction::East),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    Exit,
}

impl TileKind {
    pub fn glyph(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
            TileKind::Exit => 'E',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }
}

/// What the bounded-vision bot remembers it is walking toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    ChaseOpponent,
    CollectGold,
    ReachExit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Bounded-vision bot: looks at a 5x5 window every few turns.
    Normal,
    /// Full-vision bot: re-plans over the whole map every turn.
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Normal, Difficulty::Impossible];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Impossible => "Impossible",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The human quit while standing on the exit with enough gold.
    HumanEscaped,
    /// The bot quit while standing on the exit with enough gold.
    BotEscaped,
    /// Both players ended a turn on the same tile.
    Caught,
    /// Someone quit without meeting the escape condition.
    Forfeit,
}

impl RunOutcome {
    pub fn human_won(self) -> bool {
        self == RunOutcome::HumanEscaped
    }
}

/// A parsed human input line. Unknown input still costs the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Hello,
    Gold,
    Pickup,
    Look,
    Quit,
    Move(Direction),
    Unknown,
}

/// One effect executed on behalf of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Pos),
    Pickup,
    Look,
    Quit,
    Wait,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    TurnStarted { side: Side, turn: u64 },
    Moved { side: Side, to: Pos },
    MoveBlocked { side: Side, target: Pos },
    PickedUp { side: Side, gold: u32 },
    PickupFailed { side: Side, gold: u32 },
    Looked { side: Side, view: Vec<String> },
    GoldToWin { gold: u32 },
    GoldOwned { gold: u32 },
    InvalidCommand,
    Waited { side: Side },
    Quit { side: Side },
    ObjectiveChanged { kind: ObjectiveKind, target: Pos, path_len: u32 },
    ObjectiveCleared,
    GoldSpawned { pos: Pos },
    GameOver(RunOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("it is not the {0:?} player's turn")]
    NotYourTurn(Side),
    #[error("the game is already over")]
    GameOver,
    #[error("no free tile to spawn the {0:?} player on")]
    NoSpawnTile(Side),
    #[error("spawn position {pos:?} is not a valid spawn tile for the {side:?} player")]
    InvalidSpawn { side: Side, pos: Pos },
}
