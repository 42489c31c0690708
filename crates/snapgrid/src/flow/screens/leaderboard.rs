//! Leaderboard screen - the fetched ranking table.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{info, instrument, warn};

use crate::client::LeaderboardClient;
use crate::flow::screen::{FlowContext, Screen, ScreenTransition};
use crate::format::{Level, format_mmss};
use snapgrid_server::{DEFAULT_LIMIT, LeaderboardRow};

/// State for the leaderboard screen.
///
/// Rows are fetched once, before the screen is shown; a fetch failure is
/// remembered and rendered instead of the table.
#[derive(Debug, Getters)]
pub struct LeaderboardScreen {
    rows: Vec<LeaderboardRow>,
    error_message: Option<String>,
}

impl LeaderboardScreen {
    /// Fetches the current top of the board.
    #[instrument(skip(client))]
    pub async fn load(client: &LeaderboardClient) -> Self {
        match client.fetch_top(DEFAULT_LIMIT).await {
            Ok(rows) => {
                info!(count = rows.len(), "Leaderboard loaded");
                Self {
                    rows,
                    error_message: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to load leaderboard");
                Self {
                    rows: Vec::new(),
                    error_message: Some("Could not reach the leaderboard service".to_string()),
                }
            }
        }
    }
}

impl Screen for LeaderboardScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &FlowContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Leaderboard")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        if let Some(error) = &self.error_message {
            let message = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
        } else if self.rows.is_empty() {
            let message = Paragraph::new("No scores yet. Be the first!")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
        } else {
            let header = Row::new(vec![
                Cell::from("Rank").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from("Level").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from("Moves").style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from("Time").style(Style::default().add_modifier(Modifier::BOLD)),
            ])
            .style(Style::default().fg(Color::Yellow));

            let rows: Vec<Row> = self
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| {
                    let style = if index == 0 {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default()
                    };
                    Row::new(vec![
                        Cell::from((index + 1).to_string()),
                        Cell::from(row.name.as_str()),
                        Cell::from(Level::label_for(row.level)),
                        Cell::from(row.moves.to_string()),
                        Cell::from(format_mmss(row.time_seconds.max(0) as u32)),
                    ])
                    .style(style)
                })
                .collect();

            let widths = [
                Constraint::Percentage(10),
                Constraint::Percentage(35),
                Constraint::Percentage(20),
                Constraint::Percentage(15),
                Constraint::Percentage(20),
            ];
            let table = Table::new(rows, widths).header(header).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Top Scores (fewest moves first)"),
            );
            frame.render_widget(table, chunks[1]);
        }

        let help = Paragraph::new("Esc / h: Home | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &FlowContext) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                info!("Returning home from leaderboard");
                ScreenTransition::GoToHome
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
