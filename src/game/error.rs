use thiserror::Error;

use crate::models::{PlayerId, Position};

/// Every way a game operation can be refused. None of these leave the game
/// in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("move places no tiles")]
    EmptyMove,

    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("tiles are not all in the player's rack")]
    IllegalRackUse,

    #[error("tiles are not in a single row or column")]
    NonLinearPlacement,

    #[error("tile at {0} is duplicated or the square is already occupied")]
    DuplicateOrOccupiedCell(Position),

    #[error("tiles leave a gap at {0}")]
    DiscontinuousPlacement(Position),

    #[error("move does not cover the center square or touch an existing tile")]
    DisconnectedFromBoard,

    #[error("invalid word: {0}")]
    InvalidWord(String),

    #[error("cannot exchange {requested} tiles with {remaining} left in the bag")]
    InsufficientPoolForExchange { requested: usize, remaining: usize },

    #[error("exchange names no tiles")]
    EmptyExchange,

    #[error("exchange limit of {limit} reached")]
    ExchangeLimitReached { limit: u32 },

    #[error("it is {current}'s turn, not {player}'s")]
    NotPlayersTurn { player: PlayerId, current: PlayerId },

    #[error("unknown {0}")]
    UnknownPlayer(PlayerId),

    #[error("a game needs between 2 and 4 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("the game is over")]
    GameOver,
}
