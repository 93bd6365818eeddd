use serde::{Deserialize, Serialize};

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Smallest map width accepted by [`crate::settings::Settings`].
pub const MIN_MAP_WIDTH: u16 = 10;

/// Largest map width accepted by [`crate::settings::Settings`].
pub const MAX_MAP_WIDTH: u16 = 50;

pub const MIN_MAP_HEIGHT: u16 = 10;

pub const MAX_MAP_HEIGHT: u16 = 50;

pub const DEFAULT_MAP_WIDTH: u16 = 20;

pub const DEFAULT_MAP_HEIGHT: u16 = 20;

/// Minimum delay between two ticks in milliseconds.
pub const MIN_TICK_DELAY_MS: u64 = 50;

/// Maximum delay between two ticks in milliseconds.
pub const MAX_TICK_DELAY_MS: u64 = 300;

/// Base tick delay in milliseconds.
pub const DEFAULT_TICK_DELAY_MS: u64 = 150;

/// Snakes stop at the walls unless configured otherwise.
pub const DEFAULT_WRAPS_AROUND_EDGES: bool = false;
