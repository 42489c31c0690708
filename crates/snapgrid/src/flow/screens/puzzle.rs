//! Puzzle screen - the live session, its clock, and the tile grid.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tracing::{debug, info, instrument};

use crate::capture::CapturedImage;
use crate::flow::screen::{FlowContext, RunResult, Screen, ScreenTransition};
use crate::format::format_mmss;
use crate::ticker::TickSource;
use snapgrid_puzzle::{GridSize, PuzzleSession, SelectOutcome};

const CELL_WIDTH: usize = 6;
const CELL_HEIGHT: usize = 3;

/// How long the two halves of a swap stay highlighted.
const SWAP_FLASH_DURATION: Duration = Duration::from_millis(400);

/// Most recent swap plus the moment this screen first saw it.
#[derive(Debug, Clone, Copy)]
struct SwapFlash {
    positions: (usize, usize),
    seen: Instant,
}

/// State for the puzzle screen.
///
/// Owns the live [`PuzzleSession`], the per-tile photo colors, and the
/// background clock. The clock's ticks queue in a channel that the
/// controller drains once per frame, so a tick never lands mid-mutation.
#[derive(Debug, Getters)]
pub struct PuzzleScreen {
    grid: GridSize,
    session: PuzzleSession,
    tile_colors: Vec<(u8, u8, u8)>,
    cursor: usize,
    #[getter(skip)]
    ticker: TickSource,
    #[getter(skip)]
    tick_rx: UnboundedReceiver<()>,
    #[getter(skip)]
    swap_flash: Option<SwapFlash>,
}

impl PuzzleScreen {
    /// Starts a scrambled session on `grid` over the captured photo.
    #[instrument(skip(image), fields(grid = %grid))]
    pub fn new(grid: GridSize, image: &CapturedImage) -> Self {
        info!("Starting puzzle session");
        let session = PuzzleSession::new(grid);
        let tile_colors = session
            .tiles()
            .iter()
            .map(|tile| image.region_color(&tile.source_region(grid, image.edge())))
            .collect();

        let (tick_tx, tick_rx) = unbounded_channel();
        let ticker = TickSource::start(tick_tx);

        Self {
            grid,
            session,
            tile_colors,
            cursor: 0,
            ticker,
            tick_rx,
            swap_flash: None,
        }
    }

    /// Applies every tick the clock has queued since the last frame.
    pub fn drain_ticks(&mut self) {
        while self.tick_rx.try_recv().is_ok() {
            self.session.tick();
        }
    }

    /// Builds the colored tile grid with cursor, selection, and flash marks.
    fn grid_text(&self) -> Text<'static> {
        let n = self.grid.get();
        let flash = self
            .swap_flash
            .filter(|f| f.seen.elapsed() < SWAP_FLASH_DURATION);

        let mut lines = Vec::with_capacity(n * CELL_HEIGHT + 1);
        lines.push(Line::default());
        for row in 0..n {
            for cell_line in 0..CELL_HEIGHT {
                let spans = (0..n)
                    .map(|col| self.cell_span(row * n + col, cell_line, flash))
                    .collect::<Vec<_>>();
                lines.push(Line::from(spans));
            }
        }
        Text::from(lines)
    }

    fn cell_span(&self, position: usize, cell_line: usize, flash: Option<SwapFlash>) -> Span<'static> {
        let Some(tile) = self.session.tile_at(position) else {
            return Span::raw(" ".repeat(CELL_WIDTH));
        };

        let (r, g, b) = self
            .tile_colors
            .get(tile.identity())
            .copied()
            .unwrap_or((0, 0, 0));
        let mut style = Style::default().bg(Color::Rgb(r, g, b)).fg(Color::White);
        if self.session.selection() == Some(position) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if flash.is_some_and(|f| f.positions.0 == position || f.positions.1 == position) {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }

        let text = if cell_line == CELL_HEIGHT / 2 {
            let number = tile.identity() + 1;
            if position == self.cursor {
                format!(">{:^width$}<", number, width = CELL_WIDTH - 2)
            } else {
                format!("{:^width$}", number, width = CELL_WIDTH)
            }
        } else {
            " ".repeat(CELL_WIDTH)
        };
        Span::styled(text, style)
    }
}

impl Screen for PuzzleScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &FlowContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(CELL_HEIGHT as u16 * 2 + 2),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("SnapGrid")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let status_text = format!(
            "Grid: {}   Moves: {}   Time: {}",
            self.session.grid(),
            self.session.move_count(),
            format_mmss(self.session.elapsed_seconds()),
        );
        let status = Paragraph::new(status_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);

        let grid = Paragraph::new(self.grid_text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Puzzle"));
        frame.render_widget(grid, chunks[2]);

        let help = Paragraph::new(
            "↑↓←→: Move | Enter/Space: Select | r: Reshuffle | Esc: Home | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &FlowContext) -> ScreenTransition {
        let n = self.grid.get();
        match key.code {
            KeyCode::Up => {
                if self.cursor >= n {
                    self.cursor -= n;
                }
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                if self.cursor + n < self.grid.tile_count() {
                    self.cursor += n;
                }
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                if self.grid.col(self.cursor) > 0 {
                    self.cursor -= 1;
                }
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                if self.grid.col(self.cursor) + 1 < n {
                    self.cursor += 1;
                }
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.session.select_tile(self.cursor) {
                SelectOutcome::Won {
                    moves,
                    elapsed_seconds,
                } => {
                    info!(moves, elapsed_seconds, "Puzzle solved");
                    self.ticker.cancel();
                    ScreenTransition::GoToWin {
                        result: RunResult {
                            grid: self.grid,
                            moves,
                            elapsed_seconds,
                        },
                    }
                }
                SelectOutcome::Swapped { .. } => {
                    if let Some(positions) = self.session.last_swap() {
                        self.swap_flash = Some(SwapFlash {
                            positions,
                            seen: Instant::now(),
                        });
                    }
                    ScreenTransition::Stay
                }
                SelectOutcome::Selected(_)
                | SelectOutcome::Deselected
                | SelectOutcome::Ignored => ScreenTransition::Stay,
            },
            KeyCode::Char('r') | KeyCode::Char('R') => {
                info!("Reshuffling puzzle");
                self.session = PuzzleSession::new(self.grid);
                self.swap_flash = None;
                ScreenTransition::Stay
            }
            KeyCode::Esc => {
                debug!("Abandoning puzzle");
                ScreenTransition::GoToHome
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
