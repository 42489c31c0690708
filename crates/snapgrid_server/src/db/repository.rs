//! Database repository for leaderboard entries.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, LeaderboardEntry, NewLeaderboardEntry, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Repository for the append-only leaderboard table.
///
/// Opens one connection per operation; SQLite serializes writers, and every
/// operation here is a single statement, so no explicit transactions.
#[derive(Debug, Clone)]
pub struct LeaderboardRepository {
    db_path: String,
}

impl LeaderboardRepository {
    /// Creates a new repository for the database at the given path.
    ///
    /// The path must be file-backed: connections are opened per operation,
    /// so an in-memory database would not survive between calls.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the path is invalid.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Creating LeaderboardRepository");
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration error: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Appends a validated entry, returning the stored row with its id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, entry), fields(name = %entry.name(), level = entry.level(), moves = entry.moves()))]
    pub fn insert_entry(&self, entry: NewLeaderboardEntry) -> Result<LeaderboardEntry, DbError> {
        debug!("Inserting leaderboard entry");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::leaderboard::table)
            .values(&entry)
            .returning(LeaderboardEntry::as_returning())
            .get_result(&mut conn)?;

        info!(id = stored.id(), name = %stored.name(), "Leaderboard entry stored");
        Ok(stored)
    }

    /// Loads the best entries: fewest moves, then fastest time, then
    /// earliest submission.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn top_entries(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, DbError> {
        debug!(limit, "Loading top entries");
        let mut conn = self.connection()?;

        let entries = schema::leaderboard::table
            .order((
                schema::leaderboard::moves.asc(),
                schema::leaderboard::time_seconds.asc(),
                schema::leaderboard::created_at.asc(),
            ))
            .limit(limit)
            .load::<LeaderboardEntry>(&mut conn)?;

        info!(count = entries.len(), "Top entries loaded");
        Ok(entries)
    }

    /// Counts all stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn count_entries(&self) -> Result<i64, DbError> {
        let mut conn = self.connection()?;
        let count = schema::leaderboard::table.count().get_result(&mut conn)?;
        debug!(count, "Entries counted");
        Ok(count)
    }
}
