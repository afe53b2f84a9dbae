//! Parsing of one line of player input

use std::num::IntErrorKind;

/// What a line of input asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// 0-indexed coordinates, not yet checked against the board
    Move { row: i64, col: i64 },
    Quit,
    Malformed,
}

const QUIT_TOKENS: [&str; 3] = ["quit", "q", "exit"];

/// Parse a line typed by a player.
///
/// Accepts exactly two whitespace-separated integers, 1-indexed.
pub fn parse_input(line: &str) -> Input {
    let line = line.trim().to_lowercase();
    if QUIT_TOKENS.contains(&line.as_str()) {
        return Input::Quit;
    }

    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Input::Malformed;
    };

    match (parse_coordinate(row), parse_coordinate(col)) {
        (Some(row), Some(col)) => Input::Move {
            row: row.saturating_sub(1),
            col: col.saturating_sub(1),
        },
        _ => Input::Malformed,
    }
}

/// Parse an integer, clamping values too large for `i64`
fn parse_coordinate(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
