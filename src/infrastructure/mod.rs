//! Infrastructure layer: storage backends and location resolution.
//!
//! Implements the trait seams declared in [`crate::domain::repositories`]:
//!
//! - [`persistence`] - durable (redb) and in-memory link stores
//! - [`location`] - simulated location resolvers

pub mod location;
pub mod persistence;
