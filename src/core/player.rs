//! Seats at the table.
//!
//! A round seats 1-255 players. `PlayerId` is a seat number and turn order
//! follows it, wrapping around; `PlayerMap` holds one value per seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat number, 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one at a table of `seats`.
    ///
    /// ```
    /// use skyjo_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, seats: usize) -> Self {
        debug_assert!((1..=255).contains(&seats));
        Self(((self.index() + 1) % seats) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// ```
/// use skyjo_engine::core::{PlayerId, PlayerMap};
///
/// let mut hands: PlayerMap<Vec<i8>> = PlayerMap::with_default(3);
/// hands[PlayerId::new(1)].push(12);
/// assert_eq!(hands[PlayerId::new(1)], vec![12]);
/// assert!(hands[PlayerId::new(0)].is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat `i` gets `values[i]`. `None` unless there are 1-255 values.
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        (1..=255)
            .contains(&values.len())
            .then_some(Self { seats: values })
    }

    /// `seats` default values.
    ///
    /// # Panics
    ///
    /// Unless `seats` is in 1-255.
    pub fn with_default(seats: usize) -> Self
    where
        T: Default,
    {
        assert!((1..=255).contains(&seats), "a table seats 1-255 players, not {seats}");
        Self {
            seats: std::iter::repeat_with(T::default).take(seats).collect(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.seats.len()
    }

    /// `(seat, value)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(seat, value)| (PlayerId(seat as u8), value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.seats
            .iter_mut()
            .enumerate()
            .map(|(seat, value)| (PlayerId(seat as u8), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    pub fn into_values(self) -> impl Iterator<Item = T> {
        self.seats.into_iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}
