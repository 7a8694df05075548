pub mod game;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", post(game::create_game))
        .route("/games/{id}", get(game::get_game))
        .route("/games/{id}/turns", post(game::submit_turn))
        .route("/games/{id}/preview", post(game::preview_turn))
        .route("/games/{id}/exchange", post(game::exchange_tiles))
        .route("/games/{id}/pass", post(game::pass_turn))
        .route("/games/{id}/players/{player}", delete(game::remove_player))
        .route("/games/{id}/scores", get(game::get_scores))
        .route("/games/{id}/racks/{player}", get(game::get_rack))
        .route("/games/{id}/board/{row}/{col}", get(game::get_cell))
}
