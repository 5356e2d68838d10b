//! Environment configuration, read once at startup.

use std::env;
use std::path::PathBuf;

use crate::battle::Rng;
use crate::history::DEFAULT_HISTORY_PATH;

pub const HISTORY_ENV: &str = "HEROES_VS_HISTORY";
pub const BIND_ENV: &str = "HEROES_VS_BIND";
pub const SEED_ENV: &str = "HEROES_VS_SEED";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub history_path: PathBuf,
    pub bind_addr: String,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let seed = get(SEED_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!(value = %raw, "invalid {SEED_ENV}, using entropy");
                None
            }
        });

        Self {
            history_path: get(HISTORY_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.history_path),
            bind_addr: get(BIND_ENV).unwrap_or(defaults.bind_addr),
            seed,
        }
    }

    pub fn rng(&self) -> Rng {
        self.seed.map(Rng::new).unwrap_or_else(Rng::from_entropy)
    }
}
