//! Board structure

use super::{BoardConfig, Cell, Pos, Stone};

/// Square grid of cells, fixed in size for its whole life
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            size: config.size(),
            cells: vec![Cell::Empty; config.total_cells()],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position.
    ///
    /// `pos` must lie on the board; use `Board::pos` to check signed input.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        self.cells[pos.to_index(self.size)]
    }

    /// Check if position holds `stone`
    #[inline]
    pub fn has_stone(&self, pos: Pos, stone: Stone) -> bool {
        self.get(pos) == Cell::Occupied(stone)
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Position for signed coordinates, if on the board
    #[inline]
    pub fn pos(&self, row: i64, col: i64) -> Option<Pos> {
        Pos::checked(row, col, self.size)
    }

    /// Place a stone without any rule checks.
    /// Use `Game::place_stone` for game moves
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = Cell::Occupied(stone);
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Iterate over every occupied position
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.stone().map(|stone| (Pos::from_index(idx, self.size), stone))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
