//! Tile identity and source-image geometry.

use crate::GridSize;
use serde::{Deserialize, Serialize};

/// Sub-rectangle of the square source image displayed by one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRegion {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Side length in pixels.
    pub edge: u32,
}

/// One image fragment and its permutation bookkeeping.
///
/// `identity` names the tile by its home position and never changes after
/// creation; `current_index` is where the tile sits now and is mutated only
/// by swaps. A tile's image geometry derives from `identity` alone, so the
/// picture fragment travels with the tile as it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    identity: usize,
    current_index: usize,
}

impl Tile {
    pub(crate) fn new(identity: usize, current_index: usize) -> Self {
        Self {
            identity,
            current_index,
        }
    }

    /// Returns the tile's stable identity.
    pub fn identity(&self) -> usize {
        self.identity
    }

    /// Returns the position this tile belongs at.
    pub fn correct_index(&self) -> usize {
        self.identity
    }

    /// Returns the position this tile currently occupies.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Checks whether the tile sits at its home position.
    pub fn is_home(&self) -> bool {
        self.current_index == self.identity
    }

    pub(crate) fn set_current_index(&mut self, position: usize) {
        self.current_index = position;
    }

    /// Maps the tile's home position to the square of the source image it
    /// displays, for a source image `image_edge` pixels on a side.
    ///
    /// Row-major: the tile at home position `p` shows the fragment at row
    /// `p / n`, column `p % n`, each fragment `image_edge / n` pixels wide.
    pub fn source_region(&self, grid: GridSize, image_edge: u32) -> SourceRegion {
        let edge = image_edge / grid.get() as u32;
        let row = grid.row(self.correct_index()) as u32;
        let col = grid.col(self.correct_index()) as u32;
        SourceRegion {
            x: col * edge,
            y: row * edge,
            edge,
        }
    }
}
