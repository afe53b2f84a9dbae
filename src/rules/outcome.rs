//! Outcome of a placement: win, draw, or play on

use crate::board::{Board, Pos, Stone};

use super::win::has_five_at_pos;

/// Result of evaluating the board after a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Win(Stone),
    /// Board completely filled without a line of five
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

/// Evaluate the position right after `mover` placed at `pos`.
///
/// A draw is only declared once every cell is filled.
pub fn evaluate(board: &Board, pos: Pos, mover: Stone, moves_played: usize) -> Outcome {
    if has_five_at_pos(board, pos, mover) {
        Outcome::Win(mover)
    } else if moves_played == board.size() * board.size() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
