//! Console front end
//!
//! Moves are typed as `row col` (1-indexed); `quit`, `q` or `exit` leaves.

mod input;
mod session;

pub use input::{parse_input, Input};
pub use session::{ConsoleSession, SessionEnd};
