//! Error types for the engine and its configuration

use derive_more::{Display, Error};

/// Reasons a placement is rejected. None of them mutate the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside `[0, size)`.
    #[display(
        "position ({}, {}) is outside the board (1-{size})",
        row.saturating_add(1),
        col.saturating_add(1)
    )]
    OutOfBounds { row: i64, col: i64, size: usize },

    /// The cell already holds a stone.
    #[display("position ({}, {}) is already occupied", row + 1, col + 1)]
    Occupied { row: usize, col: usize },

    /// A win or draw has already been reached.
    #[display("the game is already over")]
    GameOver,
}

/// Invalid board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("board size {size} is not supported (expected 1-{})", crate::board::MAX_BOARD_SIZE)]
    InvalidSize { size: usize },
}
