//! Core engine types: players, RNG, configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GridShape, RoundConfig};
