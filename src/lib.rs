/// The per-turn agent loop
pub mod agent;

/// Implemented RL algorithms
pub mod algo;

/// Agent configuration
pub mod config;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// The agent's view of the game: rewards, state encoding, and move projection
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// Board, tiles, directions, and the snapshots sent by the game server
pub mod game;

mod util;

pub use agent::HeroAgent;
pub use config::BotConfig;
pub use error::{Error, Result};
