//! Uniformly random strategy.

use std::cell::RefCell;

use super::{DrawSource, PlayAction, Strategy};
use crate::cards::Card;
use crate::core::{GameRng, PlayerId};
use crate::error::{Result, SkyjoError};
use crate::rules::{PlayerView, RoundView};
use crate::zones::Position;

/// Makes every choice at random from its own seeded RNG.
///
/// Only legal choices are drawn: it never draws from an empty pile, reveals
/// only face-down cells and replaces only occupied ones.
///
/// ```
/// use skyjo_engine::core::GameRng;
/// use skyjo_engine::strategy::RandomStrategy;
///
/// // One independent stream per player
/// let mut rng = GameRng::new(42);
/// let alice = RandomStrategy::from_rng(rng.fork());
/// let bob = RandomStrategy::from_rng(rng.fork());
/// # let _ = (alice, bob);
/// ```
#[derive(Debug)]
pub struct RandomStrategy {
    rng: RefCell<GameRng>,
}

impl RandomStrategy {
    /// Create a strategy seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a strategy that draws from `rng`.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }

    fn failure(&self, reason: &str) -> SkyjoError {
        SkyjoError::Strategy {
            strategy: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "RandomStrategy"
    }

    fn decide_draw(&self, round: &RoundView<'_>, _player: PlayerId) -> Result<DrawSource> {
        let source = match (round.deck_len() > 0, round.discard_top().is_some()) {
            (true, true) => {
                if self.rng.borrow_mut().gen_bool(0.5) {
                    DrawSource::Deck
                } else {
                    DrawSource::Discard
                }
            }
            (true, false) => DrawSource::Deck,
            (false, true) => DrawSource::Discard,
            (false, false) => return Err(self.failure("nothing to draw from")),
        };
        Ok(source)
    }

    fn decide_play(&self, _drawn: &Card, round: &RoundView<'_>, player: PlayerId) -> Result<PlayAction> {
        let grid = round
            .player(player)
            .ok_or(SkyjoError::UnknownPlayer(player))?
            .grid()
            .ok_or(SkyjoError::NoGrid)?;
        let mut rng = self.rng.borrow_mut();

        let face_down = grid.face_down_positions();
        if !face_down.is_empty() && rng.gen_bool(0.5) {
            if let Some(&position) = rng.choose(&face_down) {
                return Ok(PlayAction::DiscardAndReveal(position));
            }
        }

        rng.choose(&grid.occupied_positions())
            .map(|&position| PlayAction::Replace(position))
            .ok_or_else(|| self.failure("grid has no cards left"))
    }

    fn decide_reveal_two(&self, player: &PlayerView<'_>) -> Result<(Position, Position)> {
        let face_down = player.grid().ok_or(SkyjoError::NoGrid)?.face_down_positions();
        let picked = self
            .rng
            .borrow_mut()
            .sample_distinct(face_down.len(), 2)
            .ok_or_else(|| self.failure("fewer than two face-down cards"))?;
        Ok((face_down[picked[0]], face_down[picked[1]]))
    }
}
