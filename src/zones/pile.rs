//! Ordered card stacks: the draw deck and the discard pile.
//!
//! The top of a pile is the end of its backing `Vec`, so draws and discards
//! are O(1).

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An ordered stack of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Look at the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for Pile {
    /// The last card of the vector becomes the top of the pile.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(value: i8) -> Card {
        Card::new(value).unwrap()
    }

    #[test]
    fn test_stack_order() {
        let mut pile = Pile::from(vec![card(1), card(2)]);
        pile.push(card(3));
        assert_eq!(pile.top().map(Card::value), Some(3));

        assert_eq!(pile.pop().map(|c| c.value()), Some(3));
        assert_eq!(pile.pop().map(|c| c.value()), Some(2));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn test_empty_pile() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert!(pile.top().is_none());
        assert!(pile.pop().is_none());
    }

    #[test]
    fn test_slice_is_bottom_to_top() {
        let mut pile = Pile::from(vec![card(4), card(5)]);
        pile.push(card(6));
        let values: Vec<_> = pile.as_slice().iter().map(Card::value).collect();
        assert_eq!(values, vec![4, 5, 6]);
    }
}
