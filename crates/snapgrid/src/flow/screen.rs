//! Screen trait and transition type for the game flow state machine.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::Frame;

use crate::client::LeaderboardClient;
use snapgrid_puzzle::GridSize;

/// Shared collaborators handed to every screen.
#[derive(Debug, Getters)]
pub struct FlowContext {
    client: LeaderboardClient,
    player_name: Option<String>,
}

impl FlowContext {
    /// Bundles the collaborators the screens draw on.
    pub fn new(client: LeaderboardClient, player_name: Option<String>) -> Self {
        Self {
            client,
            player_name,
        }
    }
}

/// Numbers carried off a finished run.
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    /// Grid the run was played on.
    pub grid: GridSize,
    /// Swaps used to solve it.
    pub moves: u32,
    /// Seconds on the clock at the winning swap.
    pub elapsed_seconds: u32,
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`FlowController`](crate::FlowController) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen - no state change.
    Stay,
    /// Navigate to the home screen.
    GoToHome,
    /// Navigate to the capture preview and grid-size selector.
    GoToCapture,
    /// Start a puzzle run on the chosen grid.
    GoToPuzzle {
        /// Grid dimensions for the new session.
        grid: GridSize,
    },
    /// Present a completed run on the win screen.
    GoToWin {
        /// The finished run's numbers.
        result: RunResult,
    },
    /// Navigate to the fetched leaderboard table.
    GoToLeaderboard,
    /// Exit the game cleanly.
    Quit,
}

/// Trait implemented by each screen in the game flow.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &FlowContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &FlowContext) -> ScreenTransition;
}
