// Game engine modules

pub mod board;
pub mod error;
pub mod pool;
pub mod premium;
pub mod rack;
pub mod scorer;
pub mod turn;
pub mod validator;

pub use board::Board;
pub use error::GameError;
pub use pool::TilePool;
pub use premium::PremiumSquares;
pub use rack::Rack;
pub use scorer::Scorer;
pub use turn::{ExchangeOutcome, ExchangePolicy, TurnController, TurnOutcome};
pub use validator::{MoveEvaluation, MoveValidator};
