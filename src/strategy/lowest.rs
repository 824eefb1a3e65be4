//! Deterministic strategy that always works on the lowest face-down cell.

use super::{DrawSource, PlayAction, Strategy};
use crate::cards::Card;
use crate::core::PlayerId;
use crate::error::{Result, SkyjoError};
use crate::rules::{GridView, PlayerView, RoundView};
use crate::zones::Position;

/// Fixed, fully predictable play:
///
/// - reveals the two lowest row-major face-down cells at the start
/// - always draws from the deck
/// - discards the drawn card and reveals the lowest face-down cell; once
///   nothing is face-down, replaces the lowest occupied cell instead
///
/// With a 3×4 grid every player is fully revealed after at most 10 turns.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestIndexStrategy;

impl LowestIndexStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn grid_of<'a>(&self, player: &PlayerView<'a>) -> Result<GridView<'a>> {
        player.grid().ok_or(SkyjoError::NoGrid)
    }

    fn failure(&self, reason: &str) -> SkyjoError {
        SkyjoError::Strategy {
            strategy: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Strategy for LowestIndexStrategy {
    fn name(&self) -> &str {
        "LowestIndexStrategy"
    }

    fn decide_draw(&self, _round: &RoundView<'_>, _player: PlayerId) -> Result<DrawSource> {
        Ok(DrawSource::Deck)
    }

    fn decide_play(&self, _drawn: &Card, round: &RoundView<'_>, player: PlayerId) -> Result<PlayAction> {
        let view = round.player(player).ok_or(SkyjoError::UnknownPlayer(player))?;
        let grid = self.grid_of(&view)?;

        if let Some(&position) = grid.face_down_positions().first() {
            return Ok(PlayAction::DiscardAndReveal(position));
        }
        grid.occupied_positions()
            .first()
            .map(|&position| PlayAction::Replace(position))
            .ok_or_else(|| self.failure("grid has no cards left"))
    }

    fn decide_reveal_two(&self, player: &PlayerView<'_>) -> Result<(Position, Position)> {
        let face_down = self.grid_of(player)?.face_down_positions();
        match face_down.as_slice() {
            [first, second, ..] => Ok((*first, *second)),
            _ => Err(self.failure("fewer than two face-down cards")),
        }
    }
}
