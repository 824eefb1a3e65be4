//! Deck generation.
//!
//! A Skyjo deck holds 150 cards:
//!
//! | value | copies |
//! |-------|--------|
//! | -2    | 5      |
//! | -1    | 10     |
//! | 0     | 15     |
//! | 1..=12| 10 each|
//!
//! Decks are returned as `Vec<Card>` with the top of the deck at the end.

use super::card::Card;
use crate::core::GameRng;

/// Number of copies of each value in a deck.
pub const DECK_COMPOSITION: [(i8, usize); 15] = [
    (-2, 5),
    (-1, 10),
    (0, 15),
    (1, 10),
    (2, 10),
    (3, 10),
    (4, 10),
    (5, 10),
    (6, 10),
    (7, 10),
    (8, 10),
    (9, 10),
    (10, 10),
    (11, 10),
    (12, 10),
];

/// Total number of cards in a deck.
pub const DECK_SIZE: usize = 150;

/// All 150 cards, face-down, sorted by value.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    DECK_COMPOSITION
        .iter()
        .flat_map(|&(value, copies)| {
            std::iter::repeat_with(move || Card::new(value))
                .take(copies)
        })
        .filter_map(Result::ok)
        .collect()
}

/// A standard deck shuffled with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// A shuffled deck. The same seed always yields the same order; `None`
/// seeds from the OS.
#[must_use]
pub fn generate_deck(seed: Option<u64>) -> Vec<Card> {
    shuffled_deck(&mut GameRng::from_seed(seed))
}
