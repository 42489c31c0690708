//! Submission validation.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::instrument;

use crate::api::SubmitRequest;

/// Grid sizes the leaderboard accepts.
pub const SUPPORTED_LEVELS: std::ops::RangeInclusive<i64> = 2..=10;

/// Longest stored player name, in characters.
pub const MAX_NAME_LEN: usize = 24;

/// Reason a submission was rejected.
///
/// One variant per checked field, in the order the fields are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    /// Name missing or blank after trimming.
    #[display("name must not be empty")]
    EmptyName,
    /// Level outside the supported grid sizes.
    #[display("level must be an integer between 2 and 10")]
    UnsupportedLevel,
    /// Negative or out-of-range move count.
    #[display("moves must be a non-negative integer")]
    InvalidMoves,
    /// Negative or out-of-range completion time.
    #[display("timeSeconds must be a non-negative integer")]
    InvalidTime,
}

impl ValidationError {
    /// Names the rejected field, for structured logs.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::UnsupportedLevel => "level",
            Self::InvalidMoves => "moves",
            Self::InvalidTime => "timeSeconds",
        }
    }
}

/// A submission that passed validation, with the name already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ValidSubmission {
    name: String,
    level: i32,
    moves: i32,
    time_seconds: i32,
}

/// Checks a submission field by field: name, then level, then moves, then
/// time. The first failing field wins and nothing else is inspected.
///
/// The name is trimmed and silently truncated to [`MAX_NAME_LEN`]
/// characters; over-long names are normalized, never rejected.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first field that fails.
#[instrument(skip(req), fields(level = req.level, moves = req.moves))]
pub fn validate_submission(req: SubmitRequest) -> Result<ValidSubmission, ValidationError> {
    let trimmed = req.name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let name: String = trimmed.chars().take(MAX_NAME_LEN).collect();

    if !SUPPORTED_LEVELS.contains(&req.level) {
        return Err(ValidationError::UnsupportedLevel);
    }
    let level = req.level as i32;

    let moves = i32::try_from(req.moves)
        .ok()
        .filter(|m| *m >= 0)
        .ok_or(ValidationError::InvalidMoves)?;

    let time_seconds = i32::try_from(req.time_seconds)
        .ok()
        .filter(|t| *t >= 0)
        .ok_or(ValidationError::InvalidTime)?;

    Ok(ValidSubmission {
        name,
        level,
        moves,
        time_seconds,
    })
}
