pub mod game;
pub mod letter;

pub use game::{
    // Board geometry and rules constants
    BINGO_BONUS, BOARD_SIZE, MAX_PLAYERS, MIN_PLAYERS, RACK_SIZE,
    // Move and board types
    Multiplier, Placement, Position,
    // Player-facing results
    GameStatus, PlayerId, PlayerScore, ScoreEntry, ScoredWord,
};
pub use letter::{InvalidLetter, Letter};
