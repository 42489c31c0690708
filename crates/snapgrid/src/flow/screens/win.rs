//! Win screen - run stats and score submission.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::flow::screen::{FlowContext, RunResult, Screen, ScreenTransition};
use crate::format::{Level, format_mmss};
use snapgrid_server::SubmitRequest;

/// State for the win screen.
///
/// Shows the finished run and takes a name for the leaderboard. Submission
/// is fired in the background so the flow moves on immediately.
#[derive(Debug, Getters)]
pub struct WinScreen {
    result: RunResult,
    name_input: String,
    error_message: Option<String>,
}

impl WinScreen {
    /// Creates the win screen for a finished run.
    ///
    /// `prefill` seeds the name field, typically from the `--name` flag.
    #[instrument(skip(result), fields(moves = result.moves, elapsed = result.elapsed_seconds))]
    pub fn new(result: RunResult, prefill: Option<String>) -> Self {
        debug!("Initializing WinScreen");
        Self {
            result,
            name_input: prefill.unwrap_or_default(),
            error_message: None,
        }
    }
}

impl Screen for WinScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &FlowContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(area);

        let title = Paragraph::new("Puzzle Solved!")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let stats_text = format!(
            "Level: {}   Moves: {}   Time: {}",
            Level::label_for(self.result.grid.get() as i32),
            self.result.moves,
            format_mmss(self.result.elapsed_seconds),
        );
        let stats = Paragraph::new(stats_text)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Your Run"));
        frame.render_widget(stats, chunks[1]);

        let input = Paragraph::new(self.name_input.as_str())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Your Name (Enter to submit)"),
            );
        frame.render_widget(input, chunks[2]);

        let error_text = self.error_message.as_deref().unwrap_or("");
        let error = Paragraph::new(error_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, chunks[3]);

        let help = Paragraph::new("Type name | Enter: Submit score | Esc: Skip")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &FlowContext) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                self.name_input.push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.name_input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let name = self.name_input.trim().to_string();
                if name.is_empty() {
                    self.error_message = Some("Name cannot be empty".to_string());
                    ScreenTransition::Stay
                } else {
                    info!(name = %name, "Submitting winning run");
                    ctx.client().submit_in_background(SubmitRequest {
                        name,
                        level: self.result.grid.get() as i64,
                        moves: i64::from(self.result.moves),
                        time_seconds: i64::from(self.result.elapsed_seconds),
                    });
                    ScreenTransition::GoToLeaderboard
                }
            }
            KeyCode::Esc => {
                info!("Skipping score submission");
                ScreenTransition::GoToLeaderboard
            }
            _ => ScreenTransition::Stay,
        }
    }
}
