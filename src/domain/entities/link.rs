//! ShortLink entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::ClickRecord;

/// A shortened URL mapping with a validity window and click history.
///
/// Links are created only through batch submission, mutated only by
/// appending clicks, and destroyed only by expiry cleanup. All fields
/// except `clicks` are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLink {
    pub id: Uuid,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_minutes: i64,
    pub is_custom_code: bool,
    pub clicks: Vec<ClickRecord>,
}

impl ShortLink {
    /// Creates a new link whose validity window starts now.
    ///
    /// `expires_at` is derived once here and never recomputed.
    pub fn new(
        original_url: String,
        short_code: String,
        validity_minutes: i64,
        is_custom_code: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            original_url,
            short_code,
            created_at: now,
            expires_at: now + Duration::minutes(validity_minutes),
            validity_minutes,
            is_custom_code,
            clicks: Vec::new(),
        }
    }

    /// Returns true if the link has passed its expiry time.
    ///
    /// The comparison is strict: a link is still resolvable at exactly
    /// `expires_at`.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an arbitrary instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Builds the public short URL form: `<origin>/s/<code>`.
    pub fn short_url(&self, origin: &str) -> String {
        format!("{}/s/{}", origin.trim_end_matches('/'), self.short_code)
    }
}

/// One submission in a batch-creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub original_url: String,
    pub validity_minutes: i64,
    pub custom_short_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = ShortLink::new(
            "https://example.com".to_string(),
            "abc123".to_string(),
            30,
            false,
        );

        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.validity_minutes, 30);
        assert!(!link.is_custom_code);
        assert!(link.clicks.is_empty());
        assert_eq!(link.expires_at, link.created_at + Duration::minutes(30));
        assert!(!link.is_expired());
    }

    #[test]
    fn test_expiry_is_strict() {
        let link = ShortLink::new(
            "https://example.com".to_string(),
            "abc".to_string(),
            1,
            true,
        );

        assert!(!link.is_expired_at(link.expires_at));
        assert!(link.is_expired_at(link.expires_at + Duration::seconds(1)));
    }

    #[test]
    fn test_expiry_boundary_one_minute() {
        let link = ShortLink::new(
            "https://example.com".to_string(),
            "abc".to_string(),
            1,
            false,
        );

        let t = link.created_at;
        assert!(!link.is_expired_at(t + Duration::seconds(59)));
        assert!(link.is_expired_at(t + Duration::seconds(61)));
    }

    #[test]
    fn test_short_url_form() {
        let link = ShortLink::new(
            "https://example.com".to_string(),
            "promo".to_string(),
            10,
            true,
        );

        assert_eq!(
            link.short_url("http://localhost:8080/"),
            "http://localhost:8080/s/promo"
        );
        assert_eq!(
            link.short_url("https://sho.rt"),
            "https://sho.rt/s/promo"
        );
    }

    #[test]
    fn test_serde_round_trip_preserves_timestamps() {
        let link = ShortLink::new(
            "https://example.com".to_string(),
            "roundtrip".to_string(),
            5,
            false,
        );

        let json = serde_json::to_string(&link).unwrap();
        let back: ShortLink = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, link.id);
        assert_eq!(back.created_at, link.created_at);
        assert_eq!(back.expires_at, link.expires_at);
        assert_eq!(back.short_code, link.short_code);
    }
}
