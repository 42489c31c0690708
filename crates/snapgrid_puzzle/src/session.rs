//! Live puzzle session: selection protocol, swaps, counters, win detection.

use crate::shuffle::scrambled_permutation;
use crate::{GridSize, Tile};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of a tile click - explicit protocol outcome.
///
/// Clicks never fail; anything meaningless is absorbed as [`Ignored`].
///
/// [`Ignored`]: SelectOutcome::Ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The click had no effect: position out of range, or session already won.
    Ignored,
    /// First click of a pair; the position is now pending.
    Selected(usize),
    /// Clicking the pending position again cleared it.
    Deselected,
    /// Second click completed a swap; the puzzle is not yet solved.
    Swapped {
        /// Position clicked first.
        from: usize,
        /// Position clicked second.
        to: usize,
    },
    /// The swap put every tile home.
    Won {
        /// Final move count.
        moves: u32,
        /// Final elapsed play time in seconds.
        elapsed_seconds: u32,
    },
}

/// A live puzzle: N x N scrambled tiles plus protocol and progress state.
///
/// Mutated only through [`select_tile`](Self::select_tile) and
/// [`tick`](Self::tick); restart replaces the session wholesale. Once won,
/// the session is inert until replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleSession {
    grid: GridSize,
    tiles: Vec<Tile>,
    move_count: u32,
    elapsed_seconds: u32,
    selection: Option<usize>,
    last_swap: Option<(usize, usize)>,
    won: bool,
}

// ─────────────────────────────────────────────────────────────
//  Construction - always starts scrambled, never solved
// ─────────────────────────────────────────────────────────────

impl PuzzleSession {
    /// Creates a freshly scrambled session.
    #[instrument(skip(grid), fields(grid = %grid))]
    pub fn new(grid: GridSize) -> Self {
        Self::with_rng(grid, &mut rand::thread_rng())
    }

    /// Creates a session scrambled by the given generator.
    ///
    /// Seeded generators give deterministic layouts for tests and replays.
    pub fn with_rng<R: Rng>(grid: GridSize, rng: &mut R) -> Self {
        let positions = scrambled_permutation(rng, grid.tile_count());
        let tiles = positions
            .iter()
            .enumerate()
            .map(|(identity, &position)| Tile::new(identity, position))
            .collect();

        Self {
            grid,
            tiles,
            move_count: 0,
            elapsed_seconds: 0,
            selection: None,
            last_swap: None,
            won: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  The two mutating operations
// ─────────────────────────────────────────────────────────────

impl PuzzleSession {
    /// Handles a click on a grid position.
    ///
    /// Two-phase protocol: the first click marks a position pending, the
    /// second click on a different position swaps the two tiles and counts
    /// one move. Clicking the pending position clears it without counting.
    /// Out-of-range clicks and clicks after the win are absorbed as
    /// [`SelectOutcome::Ignored`].
    #[instrument(skip(self), fields(selection = ?self.selection, moves = self.move_count))]
    pub fn select_tile(&mut self, position: usize) -> SelectOutcome {
        if self.won || !self.grid.contains(position) {
            return SelectOutcome::Ignored;
        }

        let Some(pending) = self.selection else {
            self.selection = Some(position);
            debug!(position, "Tile selected");
            return SelectOutcome::Selected(position);
        };

        if pending == position {
            self.selection = None;
            debug!(position, "Selection cleared");
            return SelectOutcome::Deselected;
        }

        self.swap(pending, position);
        self.selection = None;
        self.move_count += 1;
        self.last_swap = Some((pending, position));

        if self.tiles.iter().all(Tile::is_home) {
            self.won = true;
            debug!(
                moves = self.move_count,
                elapsed = self.elapsed_seconds,
                "Puzzle solved"
            );
            return SelectOutcome::Won {
                moves: self.move_count,
                elapsed_seconds: self.elapsed_seconds,
            };
        }

        debug!(from = pending, to = position, "Tiles swapped");
        SelectOutcome::Swapped {
            from: pending,
            to: position,
        }
    }

    /// Advances the play clock by one second. No-op once won.
    pub fn tick(&mut self) {
        if !self.won {
            self.elapsed_seconds += 1;
        }
    }

    /// Exchanges the tiles at two positions.
    ///
    /// Each tile is visited once, so a tile moved to `b` cannot be matched
    /// again in the same pass.
    fn swap(&mut self, a: usize, b: usize) {
        for tile in &mut self.tiles {
            if tile.current_index() == a {
                tile.set_current_index(b);
            } else if tile.current_index() == b {
                tile.set_current_index(a);
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Read access
// ─────────────────────────────────────────────────────────────

impl PuzzleSession {
    /// Returns the grid dimensions.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns all tiles, indexed by identity.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile currently occupying a position.
    pub fn tile_at(&self, position: usize) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.current_index() == position)
    }

    /// Returns the number of completed swaps.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the elapsed play time in whole seconds.
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Returns the pending first click, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Returns the positions exchanged by the most recent swap.
    pub fn last_swap(&self) -> Option<(usize, usize)> {
        self.last_swap
    }

    /// Checks whether the puzzle has been solved.
    pub fn won(&self) -> bool {
        self.won
    }
}
