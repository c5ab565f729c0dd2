//! Environment-driven configuration.

use std::env;

/// Runtime configuration, loaded from environment variables.
///
/// | Variable            | Default                 | Purpose                      |
/// |---------------------|-------------------------|------------------------------|
/// | `URLREG_DB_PATH`    | `links.redb`            | Embedded database file path  |
/// | `URLREG_BASE_URL`   | `http://localhost:8080` | Origin for short URL display |
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub base_url: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("URLREG_DB_PATH").unwrap_or_else(|_| "links.redb".to_string()),
            base_url: env::var("URLREG_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
        }
    }
}
