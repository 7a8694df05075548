use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    game::{Board, ExchangeOutcome, GameError, MoveEvaluation, Rack, TurnController, TurnOutcome},
    models::{GameStatus, Letter, Multiplier, Placement, PlayerId, PlayerScore, Position},
    AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    pub players: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub game_id: Uuid,
    pub current_player: PlayerId,
    pub racks: Vec<RackView>,
}

#[derive(Debug, Serialize)]
pub struct RackView {
    pub player: PlayerId,
    pub tiles: Rack,
}

/// Everything a client needs to draw the game
#[derive(Debug, Serialize)]
pub struct GameView {
    pub game_id: Uuid,
    pub board: Board,
    pub current_player: PlayerId,
    pub scores: Vec<PlayerScore>,
    pub racks: Vec<RackView>,
    pub tiles_remaining: usize,
    pub move_count: u32,
    pub status: GameStatus,
}

#[derive(Debug, Serialize)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub letter: Option<Letter>,
    pub premium: Option<Multiplier>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitTurnRequest {
    pub player: PlayerId,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRequest {
    pub player: PlayerId,
    pub letters: Vec<Letter>,
}

#[derive(Debug, Deserialize)]
pub struct PassRequest {
    pub player: PlayerId,
}

#[derive(Debug, Serialize)]
pub struct PassResponse {
    pub next_player: PlayerId,
}

/// Successful action, flattened next to `"accepted": true`
#[derive(Debug, Serialize)]
pub struct Accepted<T> {
    pub accepted: bool,
    #[serde(flatten)]
    pub outcome: T,
}

impl<T> Accepted<T> {
    fn new(outcome: T) -> Json<Self> {
        Json(Self {
            accepted: true,
            outcome,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RejectionResponse {
    pub accepted: bool,
    pub reason: String,
}

#[derive(Debug)]
pub enum ApiError {
    GameNotFound(Uuid),
    Rejected(GameError),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError::Rejected(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = match self {
            ApiError::GameNotFound(id) => (StatusCode::NOT_FOUND, format!("game {} not found", id)),
            ApiError::Rejected(err @ GameError::UnknownPlayer(_)) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Rejected(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        };
        let body = RejectionResponse {
            accepted: false,
            reason,
        };
        (status, Json(body)).into_response()
    }
}

fn rack_views(racks: Vec<(PlayerId, &Rack)>) -> Vec<RackView> {
    racks
        .into_iter()
        .map(|(player, rack)| RackView {
            player,
            tiles: rack.clone(),
        })
        .collect()
}

/// Run `f` against a game, mapping a missing game to 404
fn on_game<T>(
    state: &AppState,
    game_id: Uuid,
    f: impl FnOnce(&mut TurnController) -> Result<T, GameError>,
) -> Result<T, ApiError> {
    state
        .with_game(game_id, f)
        .ok_or(ApiError::GameNotFound(game_id))?
        .map_err(ApiError::from)
}

pub async fn create_game(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<CreateGameResponse>), ApiError> {
    let game_id = state.create_game(payload.players)?;
    let response = on_game(&state, game_id, |game| {
        Ok(CreateGameResponse {
            game_id,
            current_player: game.current_player(),
            racks: rack_views(game.get_racks()),
        })
    })?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameView>, ApiError> {
    let view = on_game(&state, game_id, |game| {
        Ok(GameView {
            game_id,
            board: game.board().clone(),
            current_player: game.current_player(),
            scores: game.get_scores(),
            racks: rack_views(game.get_racks()),
            tiles_remaining: game.tiles_remaining(),
            move_count: game.move_count(),
            status: game.status(),
        })
    })?;
    Ok(Json(view))
}

pub async fn submit_turn(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<SubmitTurnRequest>,
) -> Result<Json<Accepted<TurnOutcome>>, ApiError> {
    tracing::info!(
        "Game {}: {} submitting {} tiles",
        game_id,
        payload.player,
        payload.placements.len()
    );
    let outcome = on_game(&state, game_id, |game| {
        game.submit_turn(payload.player, &payload.placements)
    })?;
    Ok(Accepted::new(outcome))
}

pub async fn preview_turn(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<SubmitTurnRequest>,
) -> Result<Json<Accepted<MoveEvaluation>>, ApiError> {
    let evaluation = on_game(&state, game_id, |game| {
        game.preview_turn(payload.player, &payload.placements)
    })?;
    Ok(Accepted::new(evaluation))
}

pub async fn exchange_tiles(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<ExchangeRequest>,
) -> Result<Json<Accepted<ExchangeOutcome>>, ApiError> {
    let outcome = on_game(&state, game_id, |game| {
        game.exchange_tiles(payload.player, &payload.letters)
    })?;
    Ok(Accepted::new(outcome))
}

pub async fn pass_turn(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
    Json(payload): Json<PassRequest>,
) -> Result<Json<Accepted<PassResponse>>, ApiError> {
    let next_player = on_game(&state, game_id, |game| game.pass_turn(payload.player))?;
    Ok(Accepted::new(PassResponse { next_player }))
}

pub async fn remove_player(
    State(state): State<Arc<AppState>>,
    Path((game_id, player)): Path<(Uuid, u8)>,
) -> Result<StatusCode, ApiError> {
    on_game(&state, game_id, |game| game.remove_player(PlayerId(player)))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_scores(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<Vec<PlayerScore>>, ApiError> {
    let scores = on_game(&state, game_id, |game| Ok(game.get_scores()))?;
    Ok(Json(scores))
}

pub async fn get_rack(
    State(state): State<Arc<AppState>>,
    Path((game_id, player)): Path<(Uuid, u8)>,
) -> Result<Json<RackView>, ApiError> {
    let player = PlayerId(player);
    let tiles = on_game(&state, game_id, |game| game.get_rack(player).cloned())?;
    Ok(Json(RackView { player, tiles }))
}

pub async fn get_cell(
    State(state): State<Arc<AppState>>,
    Path((game_id, row, col)): Path<(Uuid, usize, usize)>,
) -> Result<Json<CellView>, ApiError> {
    let pos = Position::new(row, col);
    let cell = on_game(&state, game_id, |game| {
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(CellView {
            row,
            col,
            letter: game.board().at(pos),
            premium: game.premiums().premium_at(pos),
        })
    })?;
    Ok(Json(cell))
}
