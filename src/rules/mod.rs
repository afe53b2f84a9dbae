//! Game rules for Gomoku
//!
//! - Five or more in a row wins (overlines allowed)
//! - A completely filled board without a five is a draw

pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use outcome::{evaluate, Outcome};
pub use win::{
    find_five_line_at_pos, has_five_at_pos, line_length, winning_direction, DIRECTIONS, WIN_LENGTH,
};
