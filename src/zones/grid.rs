//! A player's card grid.
//!
//! Cells live in a flat arena of `Option<Card>` in **row-major** order:
//! `(row, col)` is stored at `row * cols + col`. Every operation goes through
//! the same mapping, and `iter`/`positions` walk cells in that order.
//!
//! A cell is empty only while a card is in flight (between `take` and `put`)
//! or after its column has been cleared.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::cards::{Card, Face};
use crate::core::GridShape;
use crate::error::{Result, SkyjoError};

/// Fixed-shape storage of optionally present cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    shape: GridShape,
    cells: Vec<Option<Card>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![None; shape.cell_count()],
        }
    }

    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    fn index(&self, position: Position) -> Result<usize> {
        if position.row >= self.shape.rows || position.col >= self.shape.cols {
            return Err(SkyjoError::PositionOutOfRange {
                position,
                shape: self.shape,
            });
        }
        Ok(position.row * self.shape.cols + position.col)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.shape.cols, index % self.shape.cols)
    }

    /// The card at `position`, if any.
    pub fn get(&self, position: Position) -> Result<Option<&Card>> {
        let index = self.index(position)?;
        Ok(self.cells[index].as_ref())
    }

    /// Check that `reveal(position)` would succeed, without changing anything.
    pub fn check_reveal(&self, position: Position) -> Result<()> {
        match self.get(position)? {
            None => Err(SkyjoError::EmptyCell(position)),
            Some(card) if card.is_face_up() => Err(SkyjoError::AlreadyRevealed(position)),
            Some(_) => Ok(()),
        }
    }

    /// Check that `replace(position, _)` would succeed, without changing anything.
    pub fn check_replace(&self, position: Position) -> Result<()> {
        match self.get(position)? {
            None => Err(SkyjoError::EmptyCell(position)),
            Some(_) => Ok(()),
        }
    }

    /// Turn the face-down card at `position` face-up.
    pub fn reveal(&mut self, position: Position) -> Result<()> {
        let index = self.index(position)?;
        match self.cells[index].as_mut() {
            None => Err(SkyjoError::EmptyCell(position)),
            Some(card) if card.is_face_up() => Err(SkyjoError::AlreadyRevealed(position)),
            Some(card) => {
                card.flip(Some(Face::Up));
                Ok(())
            }
        }
    }

    /// Remove and return the card at `position`, leaving the cell empty.
    pub fn take(&mut self, position: Position) -> Result<Card> {
        let index = self.index(position)?;
        self.cells[index]
            .take()
            .ok_or(SkyjoError::EmptyCell(position))
    }

    /// Store `card` in the empty cell at `position`.
    pub fn put(&mut self, position: Position, card: Card) -> Result<()> {
        let index = self.index(position)?;
        if self.cells[index].is_some() {
            return Err(SkyjoError::CellOccupied(position));
        }
        self.cells[index] = Some(card);
        Ok(())
    }

    /// Swap `card` into the occupied cell at `position`, returning the old card.
    ///
    /// On error the grid is unchanged and `card` is dropped; use
    /// `check_replace` first when the card must not be lost.
    pub fn replace(&mut self, position: Position, card: Card) -> Result<Card> {
        let index = self.index(position)?;
        match self.cells[index].as_mut() {
            Some(slot) => Ok(std::mem::replace(slot, card)),
            None => Err(SkyjoError::EmptyCell(position)),
        }
    }

    /// Remove a whole column, top to bottom. Only 3-row grids have columns
    /// that can be cleared.
    ///
    /// Fails without removing anything if any cell of the column is empty.
    pub fn take_column(&mut self, col: usize) -> Result<[Card; 3]> {
        if self.shape.rows != 3 {
            return Err(SkyjoError::UnsupportedShape(self.shape));
        }
        for row in 0..3 {
            self.check_replace(Position::new(row, col))?;
        }

        let mut take = |row| self.take(Position::new(row, col));
        Ok([take(0)?, take(1)?, take(2)?])
    }

    /// Columns whose cells are all present and face-up. Values don't matter.
    #[must_use]
    pub fn completed_columns(&self) -> Vec<usize> {
        let GridShape { rows, cols } = self.shape;
        if rows == 0 {
            return Vec::new();
        }

        (0..cols)
            .filter(|&col| {
                (0..rows).all(|row| {
                    matches!(&self.cells[row * cols + col], Some(card) if card.is_face_up())
                })
            })
            .collect()
    }

    /// True if `position` holding a face-up card would leave its column
    /// completed. The cell's current content is ignored.
    pub fn completes_column(&self, position: Position) -> Result<bool> {
        self.index(position)?;
        let cols = self.shape.cols;
        Ok((0..self.shape.rows)
            .filter(|&row| row != position.row)
            .all(|row| matches!(&self.cells[row * cols + position.col], Some(card) if card.is_face_up())))
    }

    /// The completed column, if there is one.
    ///
    /// # Panics
    ///
    /// If more than one column is completed. Each play clears its completed
    /// column before the next one, so two at once means the grid is corrupt.
    #[must_use]
    pub fn find_completed_column(&self) -> Option<usize> {
        let completed = self.completed_columns();
        assert!(
            completed.len() <= 1,
            "multiple completed columns found: {completed:?}"
        );
        completed.first().copied()
    }

    /// True if every present card is face-up. Cleared cells don't count.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.cells.iter().flatten().all(Card::is_face_up)
    }

    /// Number of cards currently in the grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Every position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let GridShape { rows, cols } = self.shape;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&Card>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.position_of(i), cell.as_ref()))
    }

    /// Positions holding a face-down card, row-major.
    #[must_use]
    pub fn face_down_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, card)| matches!(card, Some(c) if !c.is_face_up()))
            .map(|(position, _)| position)
            .collect()
    }

    /// Positions holding any card, row-major.
    #[must_use]
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, card)| card.is_some())
            .map(|(position, _)| position)
            .collect()
    }
}
