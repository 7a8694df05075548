use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::ExchangePolicy;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub default_players: usize,
    pub exchange: ExchangePolicy,
    /// Fixed seed for every game's bag, for reproducible games
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            game: GameConfig {
                dictionary_path: "./words.txt".to_string(),
                default_players: 2,
                exchange: ExchangePolicy::default(),
                seed: None,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let exchange = ExchangePolicy {
            ends_turn: env::var("EXCHANGE_ENDS_TURN")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .context("EXCHANGE_ENDS_TURN must be true or false")?,
            max_per_player: env::var("MAX_EXCHANGES_PER_PLAYER")
                .ok()
                .map(|v| v.parse::<u32>())
                .transpose()
                .context("MAX_EXCHANGES_PER_PLAYER must be a number")?,
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./words.txt".to_string()),
            default_players: env::var("DEFAULT_PLAYERS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),
            exchange,
            seed: env::var("GAME_SEED")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("GAME_SEED must be a number")?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.game.default_players, 2);
        assert!(!config.game.exchange.ends_turn);
        assert_eq!(config.game.exchange.max_per_player, None);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }
}
