//! Home screen - title, rules, and entry points.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{info, instrument};

use crate::flow::screen::{FlowContext, Screen, ScreenTransition};

/// State for the home screen. Static - it owns no data.
#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    /// Creates the home screen.
    pub fn new() -> Self {
        Self
    }
}

impl Screen for HomeScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &FlowContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
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

        let rules = Paragraph::new(
            "Your photo, scrambled into tiles.\n\n\
             Pick a tile, then pick its partner - the two trade places.\n\
             Repeat until the photo is whole.\n\n\
             Fewer moves and faster times climb the leaderboard.",
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("How to Play"));
        frame.render_widget(rules, chunks[1]);

        let help = Paragraph::new("Enter: Play | l: Leaderboard | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &FlowContext) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => {
                info!("Starting a new game");
                ScreenTransition::GoToCapture
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                info!("Viewing leaderboard from home");
                ScreenTransition::GoToLeaderboard
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
