//! Error types for round operations.
//!
//! Every error here is recoverable by the caller: a strategy may pick a bad
//! position, a driving loop may call operations out of order, or a deck may
//! run dry. Broken engine invariants (two columns completed at once) are not
//! represented here; they panic, see [`Grid::find_completed_column`].
//!
//! [`Grid::find_completed_column`]: crate::zones::Grid::find_completed_column

use thiserror::Error;

use crate::core::{GridShape, PlayerId};
use crate::rules::RoundState;
use crate::zones::Position;

/// Errors that can occur while dealing or playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkyjoError {
    /// Coordinates outside the grid.
    #[error("Position {position} is out of range for a {shape} grid")]
    PositionOutOfRange { position: Position, shape: GridShape },

    /// No card at the given cell.
    #[error("No card at position {0}")]
    EmptyCell(Position),

    /// A card is already present at the given cell.
    #[error("Position {0} is already occupied")]
    CellOccupied(Position),

    /// The card at the given cell is already face-up.
    #[error("Card at position {0} is already face up")]
    AlreadyRevealed(Position),

    /// Column removal only works on 3-row grids.
    #[error("Column operations need a 3-row grid, got {0}")]
    UnsupportedShape(GridShape),

    /// Card count does not match the grid size.
    #[error("Grid of {expected} cells cannot hold {got} cards")]
    ShapeMismatch { expected: usize, got: usize },

    /// The player already holds a grid.
    #[error("Cards have already been dealt to this player")]
    AlreadyDealt,

    /// Some player already holds a grid.
    #[error("Cards have already been distributed to players")]
    AlreadyDistributed,

    /// The player was never dealt a grid.
    #[error("Player has no grid")]
    NoGrid,

    /// Operation not allowed in the current round state.
    #[error("Cannot {operation} when round state is {state}")]
    InvalidState {
        operation: &'static str,
        state: RoundState,
    },

    /// Draw requested from an empty deck.
    #[error("The draw deck is empty")]
    EmptyDeck,

    /// Draw requested from an empty discard pile.
    #[error("The discard pile is empty")]
    EmptyDiscard,

    /// Not enough cards left to deal a round.
    #[error("Dealing needs {needed} cards but the deck holds {available}")]
    NotEnoughCards { needed: usize, available: usize },

    /// Card value outside -2..=12.
    #[error("Invalid card value {0}")]
    InvalidCardValue(i8),

    /// A strategy asked to reveal the same cell twice.
    #[error("Initial reveal positions must be distinct, got {0} twice")]
    DuplicateRevealPosition(Position),

    /// A round needs 1-255 players.
    #[error("Invalid player count {0} (expected 1-255)")]
    InvalidPlayerCount(usize),

    /// Seat not present at this table.
    #[error("{0} is not seated in this round")]
    UnknownPlayer(PlayerId),

    /// A strategy could not produce a decision.
    #[error("Strategy {strategy} failed: {reason}")]
    Strategy { strategy: String, reason: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SkyjoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SkyjoError::EmptyCell(Position::new(1, 2));
        assert_eq!(err.to_string(), "No card at position (1, 2)");

        let err = SkyjoError::InvalidState {
            operation: "play a turn",
            state: RoundState::AwaitingDistribution,
        };
        assert_eq!(
            err.to_string(),
            "Cannot play a turn when round state is awaiting_distribution"
        );

        let err = SkyjoError::PositionOutOfRange {
            position: Position::new(3, 0),
            shape: GridShape::STANDARD,
        };
        assert_eq!(err.to_string(), "Position (3, 0) is out of range for a 3x4 grid");
    }
}
