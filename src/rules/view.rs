//! Read-only views handed to strategies.
//!
//! Views borrow the live round instead of copying it, and expose no way to
//! change it. They also hide what a player at the table could not see: the
//! order of the draw deck and the values of face-down grid cards.

use super::player::Player;
use super::round::{Round, RoundState};
use crate::cards::Card;
use crate::core::{GridShape, PlayerId};
use crate::error::Result;
use crate::zones::{Grid, Position};

/// What a grid cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No card (cleared column).
    Empty,
    /// A face-down card.
    Hidden,
    /// A face-up card and its value.
    Revealed(i8),
}

impl From<Option<&Card>> for Slot {
    fn from(card: Option<&Card>) -> Self {
        match card {
            None => Slot::Empty,
            Some(card) if card.is_face_up() => Slot::Revealed(card.value()),
            Some(_) => Slot::Hidden,
        }
    }
}

/// Public view of one grid.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    grid: &'a Grid,
}

impl<'a> GridView<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Grid dimensions.
    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.grid.shape()
    }

    /// What the cell at `position` shows.
    pub fn slot(&self, position: Position) -> Result<Slot> {
        self.grid.get(position).map(Slot::from)
    }

    /// Every cell, row-major.
    pub fn slots(&self) -> impl Iterator<Item = (Position, Slot)> + 'a {
        let grid: &'a Grid = self.grid;
        grid.iter().map(|(position, card)| (position, Slot::from(card)))
    }

    /// Positions holding a face-down card, row-major.
    #[must_use]
    pub fn face_down_positions(&self) -> Vec<Position> {
        self.grid.face_down_positions()
    }

    /// Positions holding any card, row-major.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.grid.occupied_positions()
    }

    /// True if every card left in the grid is face-up.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.grid.all_revealed()
    }
}

impl std::fmt::Display for GridView<'_> {
    /// One line per row: `[ 5]` face-up, `[ ?]` face-down, `[  ]` empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cols = self.shape().cols;
        for (position, slot) in self.slots() {
            match slot {
                Slot::Empty => write!(f, "[  ]")?,
                Slot::Hidden => write!(f, "[ ?]")?,
                Slot::Revealed(value) => write!(f, "[{value:>2}]")?,
            }
            if position.col + 1 == cols {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

/// Public view of one player.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    player: &'a Player,
}

impl<'a> PlayerView<'a> {
    pub(crate) fn new(player: &'a Player) -> Self {
        Self { player }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.player.name()
    }

    /// The player's grid, once dealt.
    #[must_use]
    pub fn grid(&self) -> Option<GridView<'a>> {
        self.player.grid().map(GridView::new)
    }
}

/// Public view of the whole table.
#[derive(Clone, Copy, Debug)]
pub struct RoundView<'a> {
    round: &'a Round,
}

impl<'a> RoundView<'a> {
    pub(crate) fn new(round: &'a Round) -> Self {
        Self { round }
    }

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> RoundState {
        self.round.state()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.round.current_player()
    }

    /// The seat that took the first turn.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.round.starting_player()
    }

    /// The player whose turn started the last-turn phase.
    #[must_use]
    pub fn last_turn_trigger(&self) -> Option<PlayerId> {
        self.round.last_turn_trigger()
    }

    /// Completed turns so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.round.turn()
    }

    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.round.player_count()
    }

    /// The player at seat `id`, if there is one.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<PlayerView<'a>> {
        self.round.player(id).map(PlayerView::new)
    }

    /// Players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, PlayerView<'a>)> + 'a {
        let round: &'a Round = self.round;
        round
            .players()
            .map(|(id, player)| (id, PlayerView::new(player)))
    }

    /// Cards left in the draw deck. Their order stays hidden.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.round.deck_len()
    }

    /// Discard pile, bottom to top. All of it is face-up.
    #[must_use]
    pub fn discard_pile(&self) -> &'a [Card] {
        self.round.discard_pile()
    }

    /// Top of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<&'a Card> {
        self.round.discard_top()
    }
}
