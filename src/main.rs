use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use scrabble_backend::{config::Config, dictionary::Lexicon, routes, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrabble_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scrabble backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Games cannot be judged without a word list, so a missing one is fatal
    let lexicon = Lexicon::load(&config.game.dictionary_path)
        .await
        .with_context(|| {
            format!(
                "failed to load dictionary from {}",
                config.game.dictionary_path
            )
        })?;

    let addr = config.server_addr();
    let state = Arc::new(AppState::new(config, lexicon));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Games API: http://{}/api/games", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
