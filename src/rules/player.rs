//! A seat at the table: a name, a strategy and, once dealt, a grid.

use std::rc::Rc;

use smallvec::SmallVec;

use super::view::PlayerView;
use crate::cards::Card;
use crate::core::GridShape;
use crate::error::{Result, SkyjoError};
use crate::strategy::{PlayAction, Strategy};
use crate::zones::{Grid, Position};

/// Cards sent to the discard pile by one play, in order: the played-away
/// card, then a cleared column top to bottom if the play completed one.
pub type Discarded = SmallVec<[Card; 4]>;

/// A player in a round.
///
/// The strategy is shared: several players may use the same instance, and
/// cloning a player does not clone its strategy.
#[derive(Clone)]
pub struct Player {
    name: String,
    strategy: Rc<dyn Strategy>,
    grid: Option<Grid>,
}

impl Player {
    /// Create a player with no grid yet.
    pub fn new(name: impl Into<String>, strategy: Rc<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
            grid: None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The strategy that makes this player's decisions.
    #[must_use]
    pub fn strategy(&self) -> &Rc<dyn Strategy> {
        &self.strategy
    }

    /// The grid, once dealt.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// True once `deal` has succeeded.
    #[must_use]
    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Read-only view for strategies.
    #[must_use]
    pub fn view(&self) -> PlayerView<'_> {
        PlayerView::new(self)
    }

    fn dealt_grid(&self) -> Result<&Grid> {
        self.grid.as_ref().ok_or(SkyjoError::NoGrid)
    }

    fn dealt_grid_mut(&mut self) -> Result<&mut Grid> {
        self.grid.as_mut().ok_or(SkyjoError::NoGrid)
    }

    /// Lay `cards` out row-major into a new grid: card `i` goes to
    /// `(i / cols, i % cols)`.
    pub fn deal(&mut self, cards: Vec<Card>, shape: GridShape) -> Result<()> {
        if self.grid.is_some() {
            return Err(SkyjoError::AlreadyDealt);
        }
        if cards.len() != shape.cell_count() {
            return Err(SkyjoError::ShapeMismatch {
                expected: shape.cell_count(),
                got: cards.len(),
            });
        }

        let mut grid = Grid::new(shape);
        for (i, card) in cards.into_iter().enumerate() {
            grid.put(Position::new(i / shape.cols, i % shape.cols), card)?;
        }
        self.grid = Some(grid);
        Ok(())
    }

    /// Turn over the face-down card at `position`.
    pub fn reveal(&mut self, position: Position) -> Result<()> {
        self.dealt_grid_mut()?.reveal(position)
    }

    /// True if every card left in the grid is face-up.
    pub fn all_revealed(&self) -> Result<bool> {
        Ok(self.dealt_grid()?.all_revealed())
    }

    /// Check that `play(drawn, action)` would be accepted, without changing
    /// anything.
    ///
    /// Only 3-row grids can clear a column, so on any other shape a play
    /// that would leave a completed column fails with `UnsupportedShape`.
    pub fn check_play(&self, drawn: &Card, action: &PlayAction) -> Result<()> {
        let grid = self.dealt_grid()?;
        let (target, lands_face_up) = match *action {
            PlayAction::DiscardAndReveal(position) => {
                grid.check_reveal(position)?;
                (position, true)
            }
            PlayAction::Replace(position) => {
                grid.check_replace(position)?;
                (position, drawn.is_face_up())
            }
        };

        if grid.shape().rows != 3 {
            let completes = lands_face_up && grid.completes_column(target)?;
            if completes || !grid.completed_columns().is_empty() {
                return Err(SkyjoError::UnsupportedShape(grid.shape()));
            }
        }
        Ok(())
    }

    /// Play a drawn card and return what goes to the discard pile.
    ///
    /// After the action, a column that became complete is removed and its
    /// three cards follow the played-away card, for four discards in total.
    ///
    /// The action is checked with `check_play` first; a rejected action
    /// leaves the grid unchanged and drops `drawn`.
    ///
    /// # Panics
    ///
    /// If the play leaves two completed columns, which a grid only reaches
    /// when columns were completed outside of `play`.
    pub fn play(&mut self, drawn: Card, action: PlayAction) -> Result<Discarded> {
        self.check_play(&drawn, &action)?;
        let grid = self.dealt_grid_mut()?;
        let mut discarded = Discarded::new();

        match action {
            PlayAction::DiscardAndReveal(position) => {
                grid.reveal(position)?;
                discarded.push(drawn);
            }
            PlayAction::Replace(position) => {
                discarded.push(grid.replace(position, drawn)?);
            }
        }

        if let Some(col) = grid.find_completed_column() {
            discarded.extend(grid.take_column(col)?);
        }

        Ok(discarded)
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .field("grid", &self.grid)
            .finish()
    }
}
