//! Command-line interface for snapgrid.

use clap::{Parser, Subcommand};

/// SnapGrid - photo puzzle with a shared leaderboard
#[derive(Parser, Debug)]
#[command(name = "snapgrid")]
#[command(about = "Photo puzzle game with a shared leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the leaderboard HTTP service
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path to the database file (created if it doesn't exist)
        #[arg(long, default_value = "snapgrid.db")]
        db_path: String,
    },

    /// Play a photo as a puzzle in the terminal
    Play {
        /// Path to the photo to scramble
        #[arg(short, long)]
        image: std::path::PathBuf,

        /// Starting grid size (2-5)
        #[arg(long, default_value = "4")]
        grid_size: usize,

        /// Player name prefilled on the win screen
        #[arg(long)]
        name: Option<String>,

        /// Leaderboard service URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server_url: String,
    },

    /// Print the leaderboard to stdout
    Leaderboard {
        /// Leaderboard service URL
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server_url: String,

        /// Number of entries to fetch
        #[arg(short, long, default_value = "15")]
        limit: i64,
    },
}
