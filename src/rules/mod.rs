//! The round engine.
//!
//! - `Player`: a grid plus the strategy that plays it
//! - `Round`: deck, discard pile, players and the round state machine
//! - `RoundView` / `PlayerView` / `GridView`: what strategies get to see

mod player;
mod round;
mod view;

pub use player::{Discarded, Player};
pub use round::{Round, RoundState};
pub use view::{GridView, PlayerView, RoundView, Slot};
