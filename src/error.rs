//! Crate-wide error type for registry operations.

use thiserror::Error;

/// Errors produced by the registry and its storage backends.
///
/// Every variant is recoverable; callers surface them as user-facing
/// messages rather than aborting. Batch creation collects these per
/// submission instead of failing the whole batch (see
/// [`crate::application::services::BatchOutcome`]).
#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL is not a well-formed absolute URL.
    #[error("invalid URL format: {url:?}")]
    InvalidUrl { url: String },

    /// A custom short code violates the 3-20 alphanumeric format.
    #[error("invalid short code format (3-20 alphanumeric characters): {code:?}")]
    InvalidCodeFormat { code: String },

    /// The requested short code is already in use, including by links
    /// that have expired but not yet been cleaned up.
    #[error("short code {code:?} is already taken")]
    CodeTaken { code: String },

    /// `validity_minutes` is outside the accepted `[1, 525600]` range.
    #[error("validity must be between 1 and 525600 minutes, got {minutes}")]
    InvalidValidity { minutes: i64 },

    /// No link exists for the given short code.
    #[error("short URL not found: {code:?}")]
    NotFound { code: String },

    /// The link exists but its validity window has passed.
    #[error("short URL has expired: {code:?}")]
    Expired { code: String },

    /// Random code generation kept colliding with existing codes.
    #[error("failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    /// The storage backend failed to read or write the collection.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Wraps a backend failure in [`AppError::Storage`].
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}
