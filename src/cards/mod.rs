//! Cards and deck generation.
//!
//! ## Key Types
//!
//! - `Card`: fixed value in -2..=12 plus a flippable face
//! - `Face`: face-up or face-down
//!
//! `generate_deck` builds the 150-card deck, shuffled by an explicitly
//! seeded `GameRng`.

pub mod card;
pub mod deck;

pub use card::{Card, Face};
pub use deck::{generate_deck, shuffled_deck, standard_deck, DECK_COMPOSITION, DECK_SIZE};
