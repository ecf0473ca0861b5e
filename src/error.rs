//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The grid has no cells.
    #[error("the grid has no cells")]
    EmptyGrid,
    /// The grid has an odd number of cells, so it cannot hold pairs.
    #[error("the grid has an odd number of cells")]
    OddCellCount,
    /// The grid asks for more cards than the deck holds.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
