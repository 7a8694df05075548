pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

pub use state::AppState;
