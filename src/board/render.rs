//! Text rendering of the board with 1-indexed row/column labels
//!
//! ```text
//!     1  2  3
//!  1 .  .  .
//! ```
//! Each column number is right-aligned in two characters; cells are separated
//! by single spaces.

use std::fmt;

use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=self.size() {
            if col > 1 {
                write!(f, " ")?;
            }
            write!(f, "{:2}", col)?;
        }
        writeln!(f)?;

        for (idx, row) in self.rows().enumerate() {
            write!(f, "{:2}", idx + 1)?;
            for cell in row {
                write!(f, " {}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
