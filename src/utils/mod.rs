//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation and format validation
//! - [`url_validator`] - Absolute-URL format checks

pub mod code_generator;
pub mod url_validator;
