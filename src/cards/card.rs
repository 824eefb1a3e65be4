//! A single Skyjo card: a fixed value and which side is showing.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkyjoError};

/// Which side of a card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Up,
    Down,
}

impl Face {
    /// The other side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }
}

/// A card. The value never changes; only the face can be flipped.
///
/// Cards are deliberately not `Copy`: they move between the deck, the
/// discard pile and player grids, and the round counts them to check that
/// none are lost or duplicated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: i8,
    face: Face,
}

impl Card {
    /// Lowest printed value.
    pub const MIN_VALUE: i8 = -2;
    /// Highest printed value.
    pub const MAX_VALUE: i8 = 12;

    /// Create a face-down card.
    ///
    /// Fails with `InvalidCardValue` outside `-2..=12`.
    pub fn new(value: i8) -> Result<Self> {
        if !(Self::MIN_VALUE..=Self::MAX_VALUE).contains(&value) {
            return Err(SkyjoError::InvalidCardValue(value));
        }
        Ok(Self {
            value,
            face: Face::Down,
        })
    }

    /// Return this card showing `face`.
    #[must_use]
    pub fn with_face(mut self, face: Face) -> Self {
        self.face = face;
        self
    }

    #[must_use]
    pub fn value(&self) -> i8 {
        self.value
    }

    #[must_use]
    pub fn face(&self) -> Face {
        self.face
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face == Face::Up
    }

    /// Flip the card. `None` turns it over, `Some(face)` sets that face.
    pub fn flip(&mut self, target: Option<Face>) {
        self.face = target.unwrap_or(self.face.flipped());
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.face {
            Face::Up => write!(f, "Card({}, up)", self.value),
            Face::Down => write!(f, "Card({}, down)", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(5).unwrap();
        assert_eq!(card.value(), 5);
        assert_eq!(card.face(), Face::Down);
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_value_bounds() {
        assert!(Card::new(-2).is_ok());
        assert!(Card::new(12).is_ok());
        assert_eq!(Card::new(-3), Err(SkyjoError::InvalidCardValue(-3)));
        assert_eq!(Card::new(13), Err(SkyjoError::InvalidCardValue(13)));
    }

    #[test]
    fn test_flip_toggles() {
        let mut card = Card::new(0).unwrap();
        card.flip(None);
        assert!(card.is_face_up());
        card.flip(None);
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_flip_to_target() {
        let mut card = Card::new(0).unwrap();
        card.flip(Some(Face::Up));
        assert!(card.is_face_up());
        // Setting the current face is a no-op
        card.flip(Some(Face::Up));
        assert!(card.is_face_up());
        card.flip(Some(Face::Down));
        assert!(!card.is_face_up());
    }

    #[test]
    fn test_display() {
        let card = Card::new(-1).unwrap();
        assert_eq!(card.to_string(), "Card(-1, down)");
        assert_eq!(card.with_face(Face::Up).to_string(), "Card(-1, up)");
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(11).unwrap().with_face(Face::Up);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"value":11,"face":"up"}"#);
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
