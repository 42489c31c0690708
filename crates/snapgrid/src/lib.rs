//! SnapGrid - a photo puzzle game with a shared leaderboard
//!
//! This library wires the puzzle engine and leaderboard service into a
//! terminal game: capture a photo, scramble it into tiles, and swap
//! tiles until the picture is whole.
//!
//! # Architecture
//!
//! - **Capture**: Photo loading with center-crop and downscale
//! - **Flow**: Multi-screen TUI from home to leaderboard
//! - **Client**: HTTP client for the leaderboard service
//! - **Ticker**: One-second clock feeding the puzzle timer
//!
//! # Example
//!
//! ```no_run
//! use snapgrid::{CaptureSource, FileCapture, LeaderboardClient};
//!
//! # fn example() -> anyhow::Result<()> {
//! // Load a photo from disk
//! let capture = FileCapture::new("photo.png");
//! let image = capture.capture()?;
//!
//! // Point the client at a running leaderboard service
//! let client = LeaderboardClient::new("http://127.0.0.1:3000".to_string());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod capture;
mod cli;
mod client;
mod flow;
mod format;
mod ticker;

// Crate-level exports - Photo capture
pub use capture::{CaptureError, CaptureSource, CapturedImage, FileCapture, MAX_CAPTURE_EDGE};

// Crate-level exports - Command line interface
pub use cli::{Cli, Command};

// Crate-level exports - Leaderboard client
pub use client::LeaderboardClient;

// Crate-level exports - Game flow
pub use flow::{FlowContext, FlowController, RunResult, Screen, ScreenTransition};

// Crate-level exports - Difficulty and display formatting
pub use format::{Level, format_mmss};

// Crate-level exports - Puzzle clock
pub use ticker::TickSource;
