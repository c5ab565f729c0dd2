//! Concrete [`crate::domain::repositories::LinkStore`] implementations.

pub mod memory_store;
pub mod redb_store;

pub use memory_store::InMemoryLinkStore;
pub use redb_store::RedbLinkStore;
