//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating storage calls,
//! validation, and business rules behind a small API for front-end
//! collaborators (the CLI, or any other presentation layer).

pub mod services;
