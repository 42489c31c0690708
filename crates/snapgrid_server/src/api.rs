//! Wire types for the leaderboard REST API.
//!
//! Shared by the server routes and the game client so both sides agree on
//! the JSON shape. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::db::LeaderboardEntry;

/// Body of `POST /api/leaderboard`.
///
/// Counters arrive as `i64` so any JSON integer deserializes; range checks
/// happen in validation, not at the schema boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Player display name.
    pub name: String,
    /// Grid size played.
    pub level: i64,
    /// Completed swap count.
    pub moves: i64,
    /// Completion time in whole seconds.
    pub time_seconds: i64,
}

/// One row of `GET /api/leaderboard`. Row ids stay server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    /// Player display name.
    pub name: String,
    /// Grid size played.
    pub level: i32,
    /// Completed swap count.
    pub moves: i32,
    /// Completion time in whole seconds.
    pub time_seconds: i32,
    /// Submission instant, ISO-8601 UTC.
    pub created_at: String,
}

/// Response of `GET /api/leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    /// Ranked rows, best first.
    pub entries: Vec<LeaderboardRow>,
}

/// Response of a successful `POST /api/leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedEntry {
    /// Store-assigned row id.
    pub id: i32,
    /// Stored (normalized) player name.
    pub name: String,
    /// Grid size played.
    pub level: i32,
    /// Completed swap count.
    pub moves: i32,
    /// Completion time in whole seconds.
    pub time_seconds: i32,
    /// Store-assigned submission instant, ISO-8601 UTC.
    pub created_at: String,
}

/// Error payload shared by all failure responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable description of the rejection.
    pub error: String,
}

impl From<&LeaderboardEntry> for LeaderboardRow {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            name: entry.name().clone(),
            level: *entry.level(),
            moves: *entry.moves(),
            time_seconds: *entry.time_seconds(),
            created_at: entry.created_at().clone(),
        }
    }
}

impl From<&LeaderboardEntry> for SubmittedEntry {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            id: *entry.id(),
            name: entry.name().clone(),
            level: *entry.level(),
            moves: *entry.moves(),
            time_seconds: *entry.time_seconds(),
            created_at: entry.created_at().clone(),
        }
    }
}
