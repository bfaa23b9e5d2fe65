use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{algo::tabular::q_learner::GAMMA, decay::Schedule, error::ConfigError};

/// Configuration for the [`HeroAgent`](crate::agent::HeroAgent), loadable from TOML
///
/// ```toml
/// gamma = 0.8
/// learn_steps = 50
/// seed = 42
///
/// [exploration]
/// kind = "constant"
/// value = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Discount factor, in `[0, 1]`
    pub gamma: f32,
    /// Synthetic updates run after every real turn
    pub learn_steps: i64,
    /// Probability of trying an unvalued random move, as a function of the turn number
    pub exploration: Schedule,
    /// Fixes every random choice the agent makes
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            gamma: GAMMA,
            learn_steps: 50,
            exploration: Schedule::default(),
            seed: None,
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(ConfigError::Validation(format!(
                "gamma must be in [0, 1], got {}",
                self.gamma
            )));
        }
        self.exploration.validate()
    }
}
