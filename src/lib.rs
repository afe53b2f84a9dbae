//! Two-player Gomoku (Five in a Row)
//!
//! Two players alternate placing stones on a square board (15x15 by
//! default). The first to line up five or more stones horizontally,
//! vertically, or diagonally wins; a full board without a five is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation, configuration and text rendering
//! - [`rules`]: Line-of-five detection and outcome evaluation
//! - [`game`]: Game session enforcing turns and placement rules
//! - [`console`]: Text front end (`row col` input, `quit` to leave)
//! - [`ui`]: Hotseat GUI front end built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{BoardConfig, Game, MoveError, Outcome, Stone};
//!
//! let mut game = Game::new(BoardConfig::default());
//! for i in 0..4 {
//!     game.play(7, i).unwrap(); // Black along row 8
//!     game.play(i, 0).unwrap(); // White down column 1
//! }
//! assert_eq!(game.play(7, 13), Ok(Outcome::Ongoing));
//! assert_eq!(game.play(4, 0), Ok(Outcome::Win(Stone::White)));
//! assert_eq!(game.play(7, 14), Err(MoveError::GameOver));
//! ```

pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardConfig, Cell, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use error::{ConfigError, MoveError};
pub use game::{Game, Phase};
pub use rules::Outcome;
