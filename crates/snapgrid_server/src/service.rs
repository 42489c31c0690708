//! Leaderboard service: validation, timestamping, persistence, ranked reads.

use chrono::{SecondsFormat, Utc};
use derive_more::{Display, Error, From};
use tracing::{info, instrument};

use crate::api::SubmitRequest;
use crate::db::{DbError, LeaderboardEntry, LeaderboardRepository, NewLeaderboardEntry};
use crate::validate::{ValidationError, validate_submission};

/// Page size when the caller does not ask for one.
pub const DEFAULT_LIMIT: i64 = 15;

/// Largest page size a caller can get.
pub const MAX_LIMIT: i64 = 50;

/// Error from a submission attempt.
#[derive(Debug, Display, Error, From)]
pub enum SubmitError {
    /// The submission failed validation; nothing was stored.
    #[display("validation failed: {_0}")]
    Validation(ValidationError),
    /// The store rejected the write.
    #[display("database failure: {_0}")]
    Db(DbError),
}

/// Service wrapping the repository with validation and ranking rules.
#[derive(Debug, Clone)]
pub struct LeaderboardService {
    repository: LeaderboardRepository,
}

impl LeaderboardService {
    /// Creates a service over the given repository.
    pub fn new(repository: LeaderboardRepository) -> Self {
        Self { repository }
    }

    /// Validates a submission, stamps the submission instant, and appends
    /// it to the board, returning the canonical stored row.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] for a rejected submission (the
    /// store is untouched) or [`SubmitError::Db`] if the write fails.
    #[instrument(skip(self, req), fields(name = %req.name, level = req.level))]
    pub fn submit(&self, req: SubmitRequest) -> Result<LeaderboardEntry, SubmitError> {
        let valid = validate_submission(req)?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let entry = NewLeaderboardEntry::new(
            valid.name().clone(),
            *valid.level(),
            *valid.moves(),
            *valid.time_seconds(),
            created_at,
        );
        let stored = self.repository.insert_entry(entry)?;

        info!(id = stored.id(), name = %stored.name(), "Score submitted");
        Ok(stored)
    }

    /// Returns the ranked top of the board: fewest moves first, ties broken
    /// by time, then by submission instant.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the read fails.
    #[instrument(skip(self))]
    pub fn top(&self, limit: Option<i64>) -> Result<Vec<LeaderboardEntry>, DbError> {
        self.repository.top_entries(clamp_limit(limit))
    }

    /// Counts all stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the read fails.
    #[instrument(skip(self))]
    pub fn count(&self) -> Result<i64, DbError> {
        self.repository.count_entries()
    }
}

/// Clamps a requested page size to `[1, MAX_LIMIT]`; an absent request
/// means [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_limit_uses_the_default() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
    }

    #[test]
    fn limits_clamp_to_the_allowed_window() {
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(1)), 1);
        assert_eq!(clamp_limit(Some(37)), 37);
        assert_eq!(clamp_limit(Some(50)), 50);
        assert_eq!(clamp_limit(Some(1000)), 50);
    }
}
