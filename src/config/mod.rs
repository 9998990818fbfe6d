use std::path::Path;
use std::time::Duration;

use fs_err as fs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::gemini::DEFAULT_API_BASE;

pub const MODEL_ENV: &str = "SCENARIO_DECK_MODEL";
pub const API_BASE_ENV: &str = "SCENARIO_DECK_API_BASE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("timeout_secs must be at least 1")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            api_base: DEFAULT_API_BASE.into(),
            timeout_secs: 60,
        }
    }
}

impl Config {
    /// Defaults, overlaid by the TOML file if one is given, overlaid by env.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |k| std::env::var(k).ok())
    }

    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut cfg = match path {
            Some(p) => Self::from_toml(&fs::read_to_string(p)?)?,
            None => Self::default(),
        };
        cfg.apply_env(lookup);
        Ok(cfg)
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// A zero deadline would fail every provider call before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(m) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.model = m;
        }
        if let Some(b) = lookup(API_BASE_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_base = b;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
