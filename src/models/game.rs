use std::fmt;

use serde::{Deserialize, Serialize};

use super::Letter;

/// Width and height of the board
pub const BOARD_SIZE: usize = 15;
/// Tiles held by a full rack
pub const RACK_SIZE: usize = 7;
/// Flat bonus for playing a full rack in one move
pub const BINGO_BONUS: u32 = 50;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Anchor square every first move has to cover
    pub const CENTER: Position = Position { row: 7, col: 7 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Orthogonal neighbours that lie on the board
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        let offsets: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        offsets.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            let pos = Position { row, col };
            pos.in_bounds().then_some(pos)
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One tile of a candidate move
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

impl Placement {
    pub fn new(row: usize, col: usize, letter: Letter) -> Self {
        Self { row, col, letter }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Seat number of a player, starting at 1
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub(crate) fn from_index(index: usize) -> Self {
        PlayerId(index as u8 + 1)
    }

    /// Zero-based slot, `None` for the invalid id 0
    pub(crate) fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Multiplier {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

/// A player's standing as reported by `get_scores`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreEntry {
    Points(u32),
    Eliminated,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub score: ScoreEntry,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Finished { winner: Option<PlayerId> },
}

/// A word formed by a move together with what it scored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: String,
    pub start: Position,
    pub end: Position,
    pub score: u32,
}
