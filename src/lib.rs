//! # skyjo-engine
//!
//! A round engine for the Skyjo card game.
//!
//! Each player holds a grid of face-down cards (3×4 by default). On their
//! turn a player draws from the deck or the discard pile, then either
//! discards the drawn card and turns over one of theirs, or swaps it into
//! their grid. A column of three face-up cards is cleared to the discard
//! pile. The first player to have every card face-up starts the last turn.
//!
//! ## Design Principles
//!
//! 1. **Pluggable decisions**: every choice comes from a `Strategy`, which
//!    only sees read-only views of the table.
//!
//! 2. **Typed, recoverable errors**: anything a strategy or driver can get
//!    wrong is a `SkyjoError` and leaves the round unchanged. Broken engine
//!    invariants panic.
//!
//! 3. **Explicit randomness**: deck shuffling and random strategies each own
//!    a seedable `GameRng`; there is no global RNG.
//!
//! 4. **The driver owns the loop**: the engine resolves one turn at a time
//!    and never advances the turn cursor or ends the round on its own.
//!
//! ## Modules
//!
//! - `core`: player IDs, RNG, configuration
//! - `cards`: cards and deck generation
//! - `zones`: player grids and card piles
//! - `strategy`: the decision contract and stock strategies
//! - `rules`: players, the round state machine and views
//! - `error`: error type

pub mod core;
pub mod cards;
pub mod zones;
pub mod strategy;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameRng, GridShape, PlayerId, PlayerMap, RoundConfig};

pub use crate::cards::{generate_deck, Card, Face, DECK_SIZE};

pub use crate::zones::{Grid, Pile, Position};

pub use crate::strategy::{
    DrawSource, HumanStrategy, LowestIndexStrategy, PlayAction, RandomStrategy, Strategy,
};

pub use crate::rules::{Discarded, GridView, Player, PlayerView, Round, RoundState, RoundView, Slot};

pub use crate::error::{Result, SkyjoError};
