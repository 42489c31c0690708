//! Database models for leaderboard entries.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// Stored leaderboard entry.
///
/// Rows are append-only: once written they are never updated or deleted,
/// and `id` grows monotonically with submission order.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::leaderboard)]
pub struct LeaderboardEntry {
    id: i32,
    name: String,
    level: i32,
    moves: i32,
    time_seconds: i32,
    created_at: String,
}

/// Insertable model for a validated submission.
///
/// `created_at` carries an ISO-8601 UTC instant with millisecond precision,
/// stamped by the service so lexicographic order matches submission order.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::leaderboard)]
pub struct NewLeaderboardEntry {
    name: String,
    level: i32,
    moves: i32,
    time_seconds: i32,
    created_at: String,
}
