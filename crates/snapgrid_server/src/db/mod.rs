//! Database persistence layer for leaderboard entries.

// Private module declarations
mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

// Crate-level exports via pub use
pub use error::DbError;
pub use models::{LeaderboardEntry, NewLeaderboardEntry};
pub use repository::LeaderboardRepository;
