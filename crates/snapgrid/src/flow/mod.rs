//! Game flow - the multi-screen TUI from home to leaderboard.

mod controller;
mod screen;
mod screens;

pub use controller::FlowController;
pub use screen::{FlowContext, RunResult, Screen, ScreenTransition};
