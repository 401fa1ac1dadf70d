//! Terminal client configuration.
use std::env;

use duel_core::Archetype;

/// Client configuration sourced from environment variables.
///
/// Environment variables:
/// - `DUEL_SEED` - Match seed for deterministic replay (default: entropy)
/// - `DUEL_OPPONENT` - Force the opponent archetype, e.g. `rust` or `c++`
///   (default: drawn at random from the roster)
/// - `DUEL_LOG_WINDOW` - Battle log entries shown per refresh (default: 5)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub seed: u64,
    pub opponent: Option<Archetype>,
    pub log_window: usize,
}

impl CliConfig {
    /// Construct client configuration from environment variables.
    pub fn from_env() -> Self {
        let seed = read_env::<u64>("DUEL_SEED").unwrap_or_else(rand::random);
        let opponent = read_env::<Archetype>("DUEL_OPPONENT");
        let log_window = read_env::<usize>("DUEL_LOG_WINDOW")
            .unwrap_or(DEFAULT_LOG_WINDOW)
            .max(1);

        Self {
            seed,
            opponent,
            log_window,
        }
    }
}

/// Log entries shown per refresh when `DUEL_LOG_WINDOW` is unset.
pub const DEFAULT_LOG_WINDOW: usize = 5;

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
