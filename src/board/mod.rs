//! Board representation for Gomoku

pub mod board;
pub mod config;
pub mod render;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use config::{BoardConfig, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Stone colors, doubling as player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Stone {
    /// Moves first
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Glyph used by the text renderer
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Contents of a single intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Stone),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Stone on this cell, if any
    #[inline]
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(stone) => Some(stone),
        }
    }

    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(stone) => stone.glyph(),
        }
    }
}

/// Position on the board (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    #[inline]
    pub fn is_valid(row: i64, col: i64, size: usize) -> bool {
        let size = size as i64;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Convert signed coordinates into a position, if they fall on the board
    #[inline]
    pub fn checked(row: i64, col: i64, size: usize) -> Option<Pos> {
        if Self::is_valid(row, col, size) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Step `distance` cells along `dir`, staying on the board
    #[inline]
    pub fn offset(self, dir: (i64, i64), distance: i64, size: usize) -> Option<Pos> {
        Self::checked(
            self.row as i64 + dir.0 * distance,
            self.col as i64 + dir.1 * distance,
            size,
        )
    }
}

impl std::fmt::Display for Pos {
    /// 1-indexed, the way players type coordinates
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}
