//! Validated grid dimensions and position arithmetic.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Smallest playable grid edge.
pub const MIN_GRID_SIZE: usize = 2;

/// Error returned when a grid edge is below the playable minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("grid size must be at least {MIN_GRID_SIZE}, got {size}")]
pub struct GridSizeError {
    /// The rejected edge length.
    pub size: usize,
}

/// Edge length of the square puzzle grid.
///
/// Construction validates the lower bound, so any `GridSize` held by a
/// session is playable. Positions are row-major indices in `0..tile_count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize(usize);

impl GridSize {
    /// Creates a validated grid size.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if `size` is below [`MIN_GRID_SIZE`].
    pub fn new(size: usize) -> Result<Self, GridSizeError> {
        if size < MIN_GRID_SIZE {
            return Err(GridSizeError { size });
        }
        Ok(Self(size))
    }

    /// Returns the edge length.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Returns the total number of tiles on the grid.
    pub fn tile_count(&self) -> usize {
        self.0 * self.0
    }

    /// Checks whether a position indexes a tile on this grid.
    pub fn contains(&self, position: usize) -> bool {
        position < self.tile_count()
    }

    /// Returns the row of a position.
    pub fn row(&self, position: usize) -> usize {
        position / self.0
    }

    /// Returns the column of a position.
    pub fn col(&self, position: usize) -> usize {
        position % self.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}
