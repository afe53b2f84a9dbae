//! Board configuration supplied once at game construction

use crate::error::ConfigError;

/// Standard Gomoku board (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Largest size whose row/column labels fit in two digits
pub const MAX_BOARD_SIZE: usize = 99;

/// Validated board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    size: usize,
}

impl BoardConfig {
    /// Create a configuration for a `size` x `size` board
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
        }
    }
}
