use std::sync::Arc;

use dashmap::DashMap;
use rand::{rngs::StdRng, SeedableRng};
use uuid::Uuid;

use crate::{
    config::Config,
    dictionary::Lexicon,
    game::{GameError, TurnController},
};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup and shared by every game
    pub lexicon: Arc<Lexicon>,
    /// Games keyed by id. The entry guard is the only lock a game ever sees,
    /// so calls into one game are serialized.
    pub active_games: DashMap<Uuid, TurnController>,
}

impl AppState {
    pub fn new(config: Config, lexicon: Lexicon) -> Self {
        Self {
            config,
            lexicon: Arc::new(lexicon),
            active_games: DashMap::new(),
        }
    }

    /// Start a new game and return its id
    pub fn create_game(&self, players: Option<usize>) -> Result<Uuid, GameError> {
        let players = players.unwrap_or(self.config.game.default_players);
        let game = TurnController::new(
            players,
            self.lexicon.clone(),
            self.config.game.exchange,
            self.game_rng(),
        )?;

        let game_id = Uuid::new_v4();
        self.active_games.insert(game_id, game);
        tracing::info!("Created game {} for {} players", game_id, players);

        Ok(game_id)
    }

    /// Run `f` with exclusive access to one game, `None` if it does not exist
    pub fn with_game<T>(&self, game_id: Uuid, f: impl FnOnce(&mut TurnController) -> T) -> Option<T> {
        self.active_games
            .get_mut(&game_id)
            .map(|mut entry| f(entry.value_mut()))
    }

    fn game_rng(&self) -> StdRng {
        match self.config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
