//! SnapGrid - Unified CLI
//!
//! Photo puzzle game with serve, play, and leaderboard modes.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use snapgrid::{
    CaptureSource, Cli, Command, FileCapture, FlowController, LeaderboardClient, Level,
    format_mmss,
};
use snapgrid_server::{LeaderboardRepository, LeaderboardService, router};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            host,
            port,
            db_path,
        } => run_serve(host, port, db_path).await,
        Command::Play {
            image,
            grid_size,
            name,
            server_url,
        } => run_play(image, grid_size, name, server_url).await,
        Command::Leaderboard { server_url, limit } => run_leaderboard(server_url, limit).await,
    }
}

/// Run the leaderboard HTTP service
async fn run_serve(host: String, port: u16, db_path: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting SnapGrid leaderboard service");

    let repository = LeaderboardRepository::new(db_path)?;
    repository.run_migrations()?;
    let service = LeaderboardService::new(repository);
    let app = router(service);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(host = %host, port, "Leaderboard service listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the TUI game client
async fn run_play(
    image: std::path::PathBuf,
    grid_size: usize,
    name: Option<String>,
    server_url: String,
) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("snapgrid_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting SnapGrid TUI");

    // Load the photo before touching the terminal so failures print cleanly.
    let photo = FileCapture::new(image).capture()?;
    let client = LeaderboardClient::new(server_url);
    let mut controller = FlowController::new(photo, grid_size, client, name);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game flow error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Print the top scores to stdout
async fn run_leaderboard(server_url: String, limit: i64) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = LeaderboardClient::new(server_url);
    let rows = client.fetch_top(limit).await?;

    if rows.is_empty() {
        println!("No scores yet.");
        return Ok(());
    }

    println!(
        "{:<5} {:<24} {:<14} {:>6} {:>7}",
        "Rank", "Name", "Level", "Moves", "Time"
    );
    for (index, row) in rows.iter().enumerate() {
        println!(
            "{:<5} {:<24} {:<14} {:>6} {:>7}",
            index + 1,
            row.name,
            Level::label_for(row.level),
            row.moves,
            format_mmss(row.time_seconds.max(0) as u32),
        );
    }

    Ok(())
}
