//! Capture screen - photo preview and grid-size selection.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::capture::CapturedImage;
use crate::flow::screen::{FlowContext, Screen, ScreenTransition};
use crate::format::Level;
use snapgrid_puzzle::{GridSize, SourceRegion};

const PREVIEW_CELL_WIDTH: usize = 4;
const PREVIEW_CELL_HEIGHT: usize = 2;

/// State for the capture screen.
///
/// Shows a color mosaic of the captured photo at the selected grid size and
/// a list of difficulty levels to pick from.
#[derive(Debug, Getters)]
pub struct CaptureScreen {
    levels: Vec<Level>,
    previews: Vec<Vec<(u8, u8, u8)>>,
    list_state: ListState,
}

impl CaptureScreen {
    /// Creates the capture screen over an already captured photo.
    ///
    /// `initial_edge` preselects the matching level; unknown edges land on
    /// [`Level::Medium`].
    #[instrument(skip(image), fields(edge = image.edge()))]
    pub fn new(image: &CapturedImage, initial_edge: usize) -> Self {
        debug!("Initializing CaptureScreen");
        let levels: Vec<Level> = Level::iter().collect();
        let previews = levels
            .iter()
            .map(|level| mosaic(image, level.grid_edge()))
            .collect();

        let initial = Level::for_grid_edge(initial_edge).unwrap_or(Level::Medium);
        let selected = levels.iter().position(|l| *l == initial).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));

        info!(level = %initial, "CaptureScreen initialized");
        Self {
            levels,
            previews,
            list_state,
        }
    }

    /// Returns the currently highlighted level.
    fn selected_level(&self) -> Option<Level> {
        self.list_state
            .selected()
            .and_then(|i| self.levels.get(i))
            .copied()
    }

    /// Moves the level selection up by one.
    fn select_previous(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.levels.len() - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves the level selection down by one.
    fn select_next(&mut self) {
        if self.levels.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.levels.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Builds the mosaic preview for the highlighted level.
    fn preview_text(&self) -> Text<'static> {
        let Some(index) = self.list_state.selected() else {
            return Text::default();
        };
        let (Some(level), Some(colors)) = (self.levels.get(index), self.previews.get(index))
        else {
            return Text::default();
        };

        let n = level.grid_edge();
        let blank = " ".repeat(PREVIEW_CELL_WIDTH);
        let mut lines = Vec::with_capacity(n * PREVIEW_CELL_HEIGHT + 1);
        lines.push(Line::default());
        for row in 0..n {
            for _ in 0..PREVIEW_CELL_HEIGHT {
                let spans = (0..n)
                    .map(|col| {
                        let (r, g, b) = colors
                            .get(row * n + col)
                            .copied()
                            .unwrap_or((0, 0, 0));
                        Span::styled(blank.clone(), Style::default().bg(Color::Rgb(r, g, b)))
                    })
                    .collect::<Vec<_>>();
                lines.push(Line::from(spans));
            }
        }
        Text::from(lines)
    }
}

impl Screen for CaptureScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &FlowContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Choose Your Grid")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        let preview = Paragraph::new(self.preview_text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Preview"));
        frame.render_widget(preview, body[0]);

        let items: Vec<ListItem> = self
            .levels
            .iter()
            .map(|level| {
                ListItem::new(format!(
                    "{} ({}x{})",
                    level,
                    level.grid_edge(),
                    level.grid_edge()
                ))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Difficulty"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, body[1], &mut list_state);

        let help = Paragraph::new("↑↓: Difficulty | Enter: Start | Esc: Home | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &FlowContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let Some(level) = self.selected_level() else {
                    return ScreenTransition::Stay;
                };
                match GridSize::new(level.grid_edge()) {
                    Ok(grid) => {
                        info!(level = %level, grid = %grid, "Starting puzzle");
                        ScreenTransition::GoToPuzzle { grid }
                    }
                    Err(e) => {
                        warn!(error = %e, "Rejected grid size");
                        ScreenTransition::Stay
                    }
                }
            }
            KeyCode::Esc => ScreenTransition::GoToHome,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

/// Average tile colors for an n-by-n split of the captured photo.
fn mosaic(image: &CapturedImage, edge: usize) -> Vec<(u8, u8, u8)> {
    let tile_edge = image.edge() / edge as u32;
    (0..edge * edge)
        .map(|position| {
            let region = SourceRegion {
                x: (position % edge) as u32 * tile_edge,
                y: (position / edge) as u32 * tile_edge,
                edge: tile_edge,
            };
            image.region_color(&region)
        })
        .collect()
}
