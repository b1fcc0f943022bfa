//! Error types for neo-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., a watch row with no asteroid id).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors from watchlist mutations.
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// The shared collection is full. Checked before any store call.
    #[error("Maximum watch limit reached ({count} of {cap} records)")]
    CapacityExceeded { count: usize, cap: usize },

    /// The store rejected a create or delete.
    #[error("Watchlist persistence failed: {0}")]
    Persistence(#[from] DatabaseError),

    /// Watch operations require a signed-in user.
    #[error("No user is signed in")]
    NotSignedIn,

    /// The user already has an active entry for this asteroid.
    #[error("Already watching asteroid {asteroid_id}")]
    AlreadyWatching { asteroid_id: String },

    /// A toggle for the same asteroid has not been reflected in a snapshot yet.
    #[error("A watch change for asteroid {asteroid_id} is still pending")]
    OperationPending { asteroid_id: String },
}

/// Errors from profile registration and sign-in.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Account already exists for {email}")]
    AlreadyRegistered { email: String },

    #[error("No account found for {email}")]
    NotRegistered { email: String },

    #[error("Profile persistence failed: {0}")]
    Persistence(#[from] DatabaseError),
}
