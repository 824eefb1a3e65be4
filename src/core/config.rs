//! Round configuration types.
//!
//! - `GridShape`: rows × columns of each player's card grid
//! - `RoundConfig`: deck seed and starting seat, built with chained setters

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Dimensions of a player's grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// The standard Skyjo layout: 3 rows of 4 cards.
    pub const STANDARD: GridShape = GridShape::new(3, 4);

    /// Create a new shape.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells in the grid.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Settings for a new round.
///
/// ```
/// use skyjo_engine::core::{PlayerId, RoundConfig};
///
/// let config = RoundConfig::new()
///     .with_seed(7)
///     .with_starting_player(PlayerId::new(2));
///
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.starting_player, PlayerId::new(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Seed for the deck shuffle. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Seat that takes the first turn.
    pub starting_player: PlayerId,
}

impl RoundConfig {
    /// Create a configuration with an entropy-seeded deck, player 0 starting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle the deck deterministically.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the seat that plays first.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let shape = GridShape::default();
        assert_eq!(shape, GridShape::STANDARD);
        assert_eq!(shape.rows, 3);
        assert_eq!(shape.cols, 4);
        assert_eq!(shape.cell_count(), 12);
        assert_eq!(format!("{}", GridShape::new(2, 5)), "2x5");
    }

    #[test]
    fn test_round_config_defaults() {
        let config = RoundConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.starting_player, PlayerId::new(0));
    }

    #[test]
    fn test_round_config_serde() {
        let config = RoundConfig::new().with_seed(99).with_starting_player(PlayerId::new(1));
        let json = serde_json::to_string(&config).unwrap();
        let back: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
