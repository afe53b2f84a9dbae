//! Win condition checking: five or more stones in a row
//!
//! Overlines (six or more) also win.

use crate::board::{Board, Pos, Stone};

/// Stones needed in one line to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 directions), in evaluation order
pub const DIRECTIONS: [(i64, i64); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `color` stones from `pos` along `dir`, excluding `pos`
#[inline]
fn count_direction(board: &Board, pos: Pos, color: Stone, dir: (i64, i64)) -> usize {
    (1..)
        .map_while(|step| pos.offset(dir, step, board.size()))
        .take_while(|&p| board.has_stone(p, color))
        .count()
}

/// Length of the line of `color` through `pos` along `dir`, both ways.
///
/// `pos` itself counts as one.
#[inline]
pub fn line_length(board: &Board, pos: Pos, color: Stone, dir: (i64, i64)) -> usize {
    let back = (-dir.0, -dir.1);
    1 + count_direction(board, pos, color, dir) + count_direction(board, pos, color, back)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 directions through the given position.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    winning_direction(board, pos, color).is_some()
}

/// First direction (in `DIRECTIONS` order) with five or more through `pos`
pub fn winning_direction(board: &Board, pos: Pos, color: Stone) -> Option<(i64, i64)> {
    DIRECTIONS
        .into_iter()
        .find(|&dir| line_length(board, pos, color, dir) >= WIN_LENGTH)
}

/// Positions of the winning line through `pos`, ordered from one end to the other
///
/// Returns the whole run, which may be longer than five.
pub fn find_five_line_at_pos(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    let dir = winning_direction(board, pos, color)?;
    let back = (-dir.0, -dir.1);
    let behind = count_direction(board, pos, color, back) as i64;
    let ahead = count_direction(board, pos, color, dir) as i64;

    (-behind..=ahead)
        .map(|step| pos.offset(dir, step, board.size()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(7, 2), Stone::Black));
        assert!(!has_five_at_pos(&board, Pos::new(7, 2), Stone::White));
        assert_eq!(winning_direction(&board, Pos::new(7, 4), Stone::Black), Some((0, 1)));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(0, 9), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(4, 4), Stone::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::default();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(6, 6), Stone::White));
        assert_eq!(winning_direction(&board, Pos::new(6, 6), Stone::White), Some((1, -1)));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::default();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(has_five_at_pos(&board, Pos::new(9, 5), Stone::Black));
        assert_eq!(line_length(&board, Pos::new(9, 0), Stone::Black, (0, 1)), 6);
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::default();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(9, 3), Stone::Black));
    }

    #[test]
    fn test_blocked_four_not_win() {
        let mut board = Board::default();
        // O X X X X O
        board.place_stone(Pos::new(5, 2), Stone::White);
        for i in 3..7 {
            board.place_stone(Pos::new(5, i), Stone::Black);
        }
        board.place_stone(Pos::new(5, 7), Stone::White);
        for i in 3..7 {
            assert!(!has_five_at_pos(&board, Pos::new(5, i), Stone::Black));
        }
    }

    #[test]
    fn test_four_against_edge_not_win() {
        let mut board = Board::default();
        // | X X X X O
        for i in 0..4 {
            board.place_stone(Pos::new(14, i), Stone::Black);
        }
        board.place_stone(Pos::new(14, 4), Stone::White);
        assert!(!has_five_at_pos(&board, Pos::new(14, 0), Stone::Black));
    }

    #[test]
    fn test_gap_breaks_line() {
        let mut board = Board::default();
        // X X _ X X X
        for i in [0, 1, 3, 4, 5] {
            board.place_stone(Pos::new(2, i), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(2, 3), Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(10 + i, 10 + i), Stone::White);
        }
        assert!(has_five_at_pos(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_find_five_line_ordered() {
        let mut board = Board::default();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::Black);
        }
        let line = find_five_line_at_pos(&board, Pos::new(6, 6), Stone::Black).unwrap();
        let expected: Vec<Pos> = (0..5).map(|i| Pos::new(4 + i, 8 - i)).collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn test_find_five_line_none() {
        let board = Board::default();
        assert!(find_five_line_at_pos(&board, Pos::new(0, 0), Stone::Black).is_none());
    }

    #[test]
    fn test_small_board_never_wins() {
        let mut board = Board::new(BoardConfig::new(4).unwrap());
        for i in 0..4 {
            board.place_stone(Pos::new(0, i), Stone::Black);
        }
        assert!(!has_five_at_pos(&board, Pos::new(0, 0), Stone::Black));
    }
}
