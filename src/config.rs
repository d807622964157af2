//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::types::TICK_MS;

/// Default store location, relative to the working directory.
pub const DEFAULT_HIGH_SCORE_PATH: &str = "blockfall-highscore.json";

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spawner seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub tick_ms: u32,
    pub high_score_path: PathBuf,
    /// Log file. Logging is off when unset since the terminal is in raw mode.
    pub log_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: TICK_MS,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Create from `BLOCKFALL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup. Unparseable or blank values fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let seed = get("BLOCKFALL_SEED").and_then(|s| s.parse().ok());
        let tick_ms = get("BLOCKFALL_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);
        let high_score_path = get("BLOCKFALL_HIGH_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.high_score_path);
        let log_path = get("BLOCKFALL_LOG_PATH").map(PathBuf::from);
        let log_filter = get("BLOCKFALL_LOG").unwrap_or(defaults.log_filter);

        Self {
            seed,
            tick_ms,
            high_score_path,
            log_path,
            log_filter,
        }
    }
}
