//! Where cards live: each player's grid, the draw deck and the discard pile.
//!
//! - `Grid`: fixed-shape, row-major arena of optional cards
//! - `Pile`: ordered stack, top = most recently pushed
//! - `Position`: `(row, col)` grid coordinate

mod grid;
mod pile;
mod position;

pub use grid::Grid;
pub use pile::Pile;
pub use position::Position;
