//! SnapGrid leaderboard service - validated, ordered score persistence
//!
//! Completed puzzle runs are submitted as scores, validated field by field,
//! and stored append-only in SQLite. Queries return the board ranked by
//! fewest moves, then fastest time, then earliest submission.
//!
//! # Architecture
//!
//! - **Db**: diesel repository over the append-only `leaderboard` table
//! - **Validate**: field-ordered submission checks and name normalization
//! - **Service**: timestamping, ranking rules, and limit clamping
//! - **Routes**: the axum REST surface (`GET`/`POST /api/leaderboard`)
//! - **Api**: camelCase wire types shared with the game client
//!
//! # Example
//!
//! ```no_run
//! use snapgrid_server::{LeaderboardRepository, LeaderboardService, router};
//!
//! # fn example() -> Result<(), snapgrid_server::DbError> {
//! let repository = LeaderboardRepository::new("snapgrid.db".to_string())?;
//! repository.run_migrations()?;
//! let app = router(LeaderboardService::new(repository));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod db;
mod routes;
mod service;
mod validate;

// Crate-level exports - Wire types
pub use api::{ErrorBody, LeaderboardPage, LeaderboardRow, SubmitRequest, SubmittedEntry};

// Crate-level exports - Persistence
pub use db::{DbError, LeaderboardEntry, LeaderboardRepository, NewLeaderboardEntry};

// Crate-level exports - HTTP surface
pub use routes::router;

// Crate-level exports - Service and ranking rules
pub use service::{DEFAULT_LIMIT, LeaderboardService, MAX_LIMIT, SubmitError, clamp_limit};

// Crate-level exports - Validation
pub use validate::{
    MAX_NAME_LEN, SUPPORTED_LEVELS, ValidSubmission, ValidationError, validate_submission,
};
