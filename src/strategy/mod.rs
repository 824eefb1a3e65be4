//! Player strategies: the decision source a round consults on every turn.
//!
//! A strategy only ever sees read-only views of the table ([`RoundView`],
//! [`PlayerView`]) and answers three questions:
//!
//! - where to draw from (`decide_draw`)
//! - what to do with the drawn card (`decide_play`)
//! - which two cards to turn over at the start (`decide_reveal_two`)
//!
//! The round validates every answer against the grid before touching it, so
//! a buggy or adversarial strategy produces a typed error, never a corrupt
//! round.
//!
//! ## Implementations
//!
//! - [`RandomStrategy`]: uniform choices from a seeded `GameRng`
//! - [`LowestIndexStrategy`]: deterministic, always works on the lowest
//!   row-major face-down cell
//! - [`HumanStrategy`]: prompts on a text stream and blocks for an answer

mod human;
mod lowest;
mod random;

pub use human::HumanStrategy;
pub use lowest::LowestIndexStrategy;
pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::Result;
use crate::rules::{PlayerView, RoundView};
use crate::zones::Position;

/// Where the current player draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawSource {
    /// Top of the face-down draw deck.
    Deck,
    /// Top of the face-up discard pile.
    Discard,
}

/// What to do with a drawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayAction {
    /// Discard the drawn card and turn over the face-down card at the target.
    DiscardAndReveal(Position),
    /// Put the drawn card at the target; the card it displaces is discarded.
    Replace(Position),
}

impl PlayAction {
    /// The grid cell this action touches.
    #[must_use]
    pub fn target(&self) -> Position {
        match *self {
            PlayAction::DiscardAndReveal(position) | PlayAction::Replace(position) => position,
        }
    }
}

/// Decision source for one or more players.
///
/// Methods take `&self`: the round shares strategies (`Rc<dyn Strategy>`)
/// and never mutates them. Implementations that keep state between calls,
/// such as an RNG, hold it behind interior mutability.
///
/// Calls are synchronous and may block (e.g. waiting for a human).
pub trait Strategy {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Choose where `player` draws from.
    fn decide_draw(&self, round: &RoundView<'_>, player: PlayerId) -> Result<DrawSource>;

    /// Choose what `player` does with `drawn`.
    fn decide_play(&self, drawn: &Card, round: &RoundView<'_>, player: PlayerId) -> Result<PlayAction>;

    /// Choose two distinct face-down cells to reveal before the first turn.
    fn decide_reveal_two(&self, player: &PlayerView<'_>) -> Result<(Position, Position)>;
}
