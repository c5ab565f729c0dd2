//! ClickRecord entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Referrer sentinel used when the caller supplies none.
pub const DIRECT_SOURCE: &str = "Direct";

/// A click recorded when a short link is resolved.
///
/// Owned exclusively by one [`super::ShortLink`]; appended on successful
/// resolution and never mutated or removed individually. Location data is
/// simulated, not derived from any real network information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
    pub user_agent: Option<String>,
}

impl ClickRecord {
    /// Creates a click stamped with the current time.
    ///
    /// A missing referrer becomes the [`DIRECT_SOURCE`] sentinel.
    pub fn new(referrer: Option<&str>, location: String, user_agent: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            source: referrer
                .filter(|s| !s.is_empty())
                .unwrap_or(DIRECT_SOURCE)
                .to_string(),
            location,
            user_agent: user_agent.map(str::to_string),
        }
    }
}
