//! Storage trait for the persisted link collection.

use crate::domain::entities::ShortLink;
use crate::error::AppError;

/// Storage abstraction over the full link collection.
///
/// The collection is the unit of persistence: every mutation in the
/// registry reads the entire collection, mutates it in memory, and writes
/// it back in one call. Keeping the trait at read-all/write-all granularity
/// makes that transaction boundary explicit and keeps the registry testable
/// against an in-memory fake.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedbLinkStore`] - durable embedded store
/// - [`crate::infrastructure::persistence::InMemoryLinkStore`] - test/ephemeral fake
#[cfg_attr(test, mockall::automock)]
pub trait LinkStore: Send + Sync {
    /// Reads the entire persisted collection in stored (insertion) order.
    ///
    /// A missing or unparseable collection is not an error: implementations
    /// recover it as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] only on backend I/O failures.
    fn load_all(&self) -> Result<Vec<ShortLink>, AppError>;

    /// Replaces the entire persisted collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend I/O failures.
    fn save_all(&self, links: &[ShortLink]) -> Result<(), AppError>;
}
