//! Core domain entities representing the business data model.
//!
//! Entities are plain serde-serializable data structures without business
//! logic beyond derived-field helpers.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A shortened URL mapping with validity window and clicks
//! - [`ClickRecord`] - One resolution of a short link
//! - [`Submission`] - Batch-creation input

pub mod click;
pub mod link;

pub use click::{ClickRecord, DIRECT_SOURCE};
pub use link::{ShortLink, Submission};
