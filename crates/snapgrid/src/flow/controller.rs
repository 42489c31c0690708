//! Flow controller - the state machine driving the game's screens.

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::capture::CapturedImage;
use crate::client::LeaderboardClient;
use crate::flow::screen::{FlowContext, ScreenTransition};
use crate::flow::screens::{
    CaptureScreen, HomeScreen, LeaderboardScreen, PuzzleScreen, WinScreen,
};

/// Active screen in the flow state machine.
#[derive(Debug)]
enum ActiveScreen {
    Home(HomeScreen),
    Capture(CaptureScreen),
    Puzzle(PuzzleScreen),
    Win(WinScreen),
    Leaderboard(LeaderboardScreen),
}

/// Controller that drives the game flow.
///
/// Owns the captured photo and the shared context; each screen borrows
/// what it needs. Call [`FlowController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct FlowController {
    image: CapturedImage,
    initial_grid_edge: usize,
    context: FlowContext,
}

impl FlowController {
    /// Creates a flow controller over a captured photo.
    #[instrument(skip(image, client), fields(edge = image.edge()))]
    pub fn new(
        image: CapturedImage,
        initial_grid_edge: usize,
        client: LeaderboardClient,
        player_name: Option<String>,
    ) -> Self {
        info!("Creating FlowController");
        Self {
            image,
            initial_grid_edge,
            context: FlowContext::new(client, player_name),
        }
    }

    /// Runs the game flow event loop until the user quits.
    ///
    /// Renders the active screen, drives transitions, and folds queued
    /// clock ticks into the puzzle once per frame.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game flow event loop");

        let mut screen = ActiveScreen::Home(HomeScreen::new());

        loop {
            // The puzzle clock queues ticks between frames; fold them in
            // before drawing so the timer reads current.
            if let ActiveScreen::Puzzle(s) = &mut screen {
                s.drain_ticks();
            }

            terminal.draw(|f| {
                use crate::flow::screen::Screen;
                match &screen {
                    ActiveScreen::Home(s) => s.render(f, &self.context),
                    ActiveScreen::Capture(s) => s.render(f, &self.context),
                    ActiveScreen::Puzzle(s) => s.render(f, &self.context),
                    ActiveScreen::Win(s) => s.render(f, &self.context),
                    ActiveScreen::Leaderboard(s) => s.render(f, &self.context),
                }
            })?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                use crate::flow::screen::Screen;
                let transition = match &mut screen {
                    ActiveScreen::Home(s) => s.handle_key(key, &self.context),
                    ActiveScreen::Capture(s) => s.handle_key(key, &self.context),
                    ActiveScreen::Puzzle(s) => s.handle_key(key, &self.context),
                    ActiveScreen::Win(s) => s.handle_key(key, &self.context),
                    ActiveScreen::Leaderboard(s) => s.handle_key(key, &self.context),
                };

                screen = match self.apply_transition(transition, screen).await {
                    Some(next) => next,
                    None => {
                        info!("Quitting game flow");
                        return Ok(());
                    }
                };
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    async fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToHome => {
                info!("Navigating to Home");
                Some(ActiveScreen::Home(HomeScreen::new()))
            }

            ScreenTransition::GoToCapture => {
                info!("Navigating to Capture");
                Some(ActiveScreen::Capture(CaptureScreen::new(
                    &self.image,
                    self.initial_grid_edge,
                )))
            }

            ScreenTransition::GoToPuzzle { grid } => {
                info!(grid = %grid, "Navigating to Puzzle");
                Some(ActiveScreen::Puzzle(PuzzleScreen::new(grid, &self.image)))
            }

            ScreenTransition::GoToWin { result } => {
                info!(
                    moves = result.moves,
                    elapsed = result.elapsed_seconds,
                    "Navigating to Win"
                );
                Some(ActiveScreen::Win(WinScreen::new(
                    result,
                    self.context.player_name().clone(),
                )))
            }

            ScreenTransition::GoToLeaderboard => {
                info!("Navigating to Leaderboard");
                Some(ActiveScreen::Leaderboard(
                    LeaderboardScreen::load(self.context.client()).await,
                ))
            }

            ScreenTransition::Quit => None,
        }
    }
}
