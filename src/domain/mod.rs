//! Domain layer containing business entities and trait seams.
//!
//! The domain layer has no dependencies on infrastructure: it defines the
//! entities ([`entities`]) and the storage/location traits
//! ([`repositories`]) that the infrastructure layer implements. Business
//! logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
