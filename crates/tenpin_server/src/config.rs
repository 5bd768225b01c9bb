//! Server configuration from the environment.

use std::str::FromStr;
use tracing::info;

/// Runtime configuration for the score service.
///
/// Every field has a sensible default and an environment override; the
/// binary additionally lets `--host`/`--port` flags win over both.
/// Player-count bounds live here rather than in the rules engine - how
/// many people share a lane is a product decision, not a scoring rule.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (`HOST`).
    pub host: String,
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Smallest allowed roster (`MIN_PLAYERS`).
    pub min_players: usize,
    /// Largest allowed roster (`MAX_PLAYERS`).
    pub max_players: usize,
    /// Requests allowed per client per window (`RATE_LIMIT_MAX`).
    pub rate_limit_max: u32,
    /// Rate-limit window length in seconds (`RATE_LIMIT_WINDOW_SECS`).
    pub rate_limit_window_secs: u64,
}

impl ServerConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parse("PORT", 3000),
            min_players: env_parse("MIN_PLAYERS", 2),
            max_players: env_parse("MAX_PLAYERS", 5),
            rate_limit_max: env_parse("RATE_LIMIT_MAX", 1000),
            rate_limit_window_secs: env_parse("RATE_LIMIT_WINDOW_SECS", 2 * 60 * 60),
        };
        info!(?config, "Loaded server configuration");
        config
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            min_players: 2,
            max_players: 5,
            rate_limit_max: 1000,
            rate_limit_window_secs: 2 * 60 * 60,
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
