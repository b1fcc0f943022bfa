//! Cross-cutting error types for neowatch.
//!
//! Scoring, aggregation and detection never fail, so this enum is small.
//! Feed, store and watchlist errors live in their own crates and converge
//! on `anyhow` in `neo-cli`.

use thiserror::Error;

/// Errors that can be raised by any neowatch crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
