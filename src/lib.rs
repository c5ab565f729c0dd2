//! # URL Registry
//!
//! A local-first URL shortener: batch link creation with custom or generated
//! short codes, expiring validity windows, click tracking with simulated
//! locations, and on-demand statistics. Everything persists to an embedded
//! store; there is no server and no network protocol.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture layering:
//!
//! - **Domain Layer** ([`domain`]) - Entities and the storage/location trait seams
//! - **Application Layer** ([`application`]) - The [`application::services::UrlRegistry`] service
//! - **Infrastructure Layer** ([`infrastructure`]) - redb persistence and simulated locations
//!
//! The registry is the sole owner of persisted state: every mutation reads
//! the whole collection, mutates in memory, and writes it back in one call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use url_registry::prelude::*;
//!
//! # fn main() -> Result<(), AppError> {
//! let store = Arc::new(RedbLinkStore::open("links.redb")?);
//! let registry = UrlRegistry::new(store, Arc::new(SimulatedLocationResolver::new()));
//!
//! let outcome = registry.create_batch(&[Submission {
//!     original_url: "https://example.com".to_string(),
//!     validity_minutes: 30,
//!     custom_short_code: None,
//! }])?;
//!
//! let target = registry.record_click(&outcome.created[0].short_code, None, None)?;
//! assert_eq!(target, "https://example.com");
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! The CLI binary loads [`config::Config`] from environment variables; see
//! that module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{BatchOutcome, RegistryStats, UrlRegistry};
    pub use crate::domain::entities::{ClickRecord, ShortLink, Submission};
    pub use crate::domain::repositories::{LinkStore, LocationResolver};
    pub use crate::error::AppError;
    pub use crate::infrastructure::location::SimulatedLocationResolver;
    pub use crate::infrastructure::persistence::{InMemoryLinkStore, RedbLinkStore};
}
