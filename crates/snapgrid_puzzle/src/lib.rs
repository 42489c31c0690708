//! SnapGrid puzzle engine - pure tile-permutation game logic
//!
//! A photo is split into an N x N grid of tiles, the tiles are scrambled,
//! and the player restores the original arrangement by swapping any two
//! tiles. This crate owns the full game state machine and nothing else:
//! no I/O, no async, no rendering.
//!
//! # Architecture
//!
//! - **Grid**: validated grid dimensions and position arithmetic
//! - **Tile**: one image fragment's permutation bookkeeping
//! - **Shuffle**: unbiased scrambling that never lands on a solved board
//! - **Session**: the live puzzle - selection protocol, swaps, move and
//!   time counters, win detection
//!
//! # Example
//!
//! ```
//! use snapgrid_puzzle::{GridSize, PuzzleSession, SelectOutcome};
//!
//! # fn example() -> Result<(), snapgrid_puzzle::GridSizeError> {
//! let grid = GridSize::new(3)?;
//! let mut session = PuzzleSession::new(grid);
//!
//! match session.select_tile(0) {
//!     SelectOutcome::Selected(pos) => assert_eq!(pos, 0),
//!     other => panic!("first click selects: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod grid;
mod session;
mod shuffle;
mod tile;

// Crate-level exports - Grid dimensions
pub use grid::{GridSize, GridSizeError, MIN_GRID_SIZE};

// Crate-level exports - Session state machine
pub use session::{PuzzleSession, SelectOutcome};

// Crate-level exports - Shuffling
pub use shuffle::{is_permutation, scrambled_permutation};

// Crate-level exports - Tile geometry
pub use tile::{SourceRegion, Tile};
