//! URL registry service: creation, resolution, analytics, cleanup.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::domain::entities::{ClickRecord, ShortLink, Submission};
use crate::domain::repositories::{LinkStore, LocationResolver};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_short_code};
use crate::utils::url_validator::is_valid_url;

/// Collision retry cap for generated codes.
///
/// The 62^8 keyspace makes collisions negligible in practice; the cap only
/// guards against a pathologically full store blocking the caller.
const MAX_GENERATION_ATTEMPTS: u32 = 32;

/// Accepted validity range in minutes (1 minute to one year).
const MIN_VALIDITY_MINUTES: i64 = 1;
const MAX_VALIDITY_MINUTES: i64 = 525_600;

/// One failed submission within a batch, labeled by its position.
#[derive(Debug)]
pub struct BatchError {
    /// Zero-based index of the submission within the batch.
    pub index: usize,
    pub error: AppError,
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "URL {}: {}", self.index + 1, self.error)
    }
}

/// Result of a batch-creation call.
///
/// One submission's failure never aborts the others: `created` holds every
/// link that was persisted and `errors` the per-submission failures in
/// submission order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub created: Vec<ShortLink>,
    pub errors: Vec<BatchError>,
}

/// Aggregate statistics over the whole collection.
///
/// Recomputed on demand from the persisted set, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total_count: usize,
    pub total_clicks: usize,
    pub active_count: usize,
    pub expired_count: usize,
}

/// Sole owner of the persisted [`ShortLink`] collection.
///
/// All reads and writes to durable storage pass through this service. Every
/// mutation reads the full collection, mutates it in memory, and writes it
/// back in one [`LinkStore::save_all`] call, so callers never observe a
/// partially-written collection.
pub struct UrlRegistry<S: LinkStore, L: LocationResolver> {
    store: Arc<S>,
    locations: Arc<L>,
}

impl<S: LinkStore, L: LocationResolver> UrlRegistry<S, L> {
    /// Creates a registry bound to a storage backend and location resolver.
    pub fn new(store: Arc<S>, locations: Arc<L>) -> Self {
        Self { store, locations }
    }

    /// Returns true iff `candidate` is a well-formed absolute URL.
    pub fn is_valid_url(&self, candidate: &str) -> bool {
        is_valid_url(candidate)
    }

    /// Returns true iff `code` matches the 3-20 alphanumeric format.
    pub fn is_valid_short_code(&self, code: &str) -> bool {
        is_valid_short_code(code)
    }

    /// Returns true iff any persisted link uses `code`.
    ///
    /// Expired-but-not-yet-cleaned links still block reuse of their code;
    /// cleanup is explicit, so releasing codes early would invite silent
    /// remapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the collection cannot be read.
    pub fn is_code_taken(&self, code: &str) -> Result<bool, AppError> {
        let links = self.store.load_all()?;
        Ok(links.iter().any(|l| l.short_code == code))
    }

    /// Creates short links for a batch of submissions.
    ///
    /// Each submission is validated independently; a failure is recorded in
    /// the outcome and the remaining submissions still proceed. Custom codes
    /// are checked against persisted codes and against codes already
    /// assigned earlier in the same batch. Submissions without a custom code
    /// get a generated 8-character code, retried on collision up to a hard
    /// cap.
    ///
    /// The full working set (pre-existing plus newly created) is persisted
    /// in a single write after all submissions are processed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the collection cannot be read or
    /// written. Per-submission validation failures land in
    /// [`BatchOutcome::errors`], not in the returned `Result`.
    pub fn create_batch(&self, submissions: &[Submission]) -> Result<BatchOutcome, AppError> {
        let mut links = self.store.load_all()?;
        let mut taken: HashSet<String> =
            links.iter().map(|l| l.short_code.clone()).collect();

        let mut outcome = BatchOutcome::default();

        for (index, submission) in submissions.iter().enumerate() {
            match self.build_link(submission, &taken) {
                Ok(link) => {
                    taken.insert(link.short_code.clone());
                    links.push(link.clone());
                    outcome.created.push(link);
                }
                Err(error) => outcome.errors.push(BatchError { index, error }),
            }
        }

        self.store.save_all(&links)?;

        tracing::debug!(
            created = outcome.created.len(),
            failed = outcome.errors.len(),
            "processed batch submission"
        );

        Ok(outcome)
    }

    /// Resolves a short code, records the click, and returns the target URL.
    ///
    /// No click is recorded on any failure path. The expiry comparison is
    /// strict: a resolution at exactly `expires_at` still succeeds.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no link has that code
    /// - [`AppError::Expired`] if the validity window has passed
    /// - [`AppError::Storage`] on backend failures
    pub fn record_click(
        &self,
        code: &str,
        referrer: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<String, AppError> {
        let mut links = self.store.load_all()?;

        let link = links
            .iter_mut()
            .find(|l| l.short_code == code)
            .ok_or_else(|| AppError::NotFound {
                code: code.to_string(),
            })?;

        if link.is_expired() {
            return Err(AppError::Expired {
                code: code.to_string(),
            });
        }

        let click = ClickRecord::new(referrer, self.locations.resolve(), user_agent);
        link.clicks.push(click);

        let target = link.original_url.clone();
        self.store.save_all(&links)?;

        tracing::debug!(code, "recorded click");

        Ok(target)
    }

    /// Returns every persisted link in stored (insertion) order.
    ///
    /// Callers sort as needed for display.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the collection cannot be read.
    pub fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        self.store.load_all()
    }

    /// Computes aggregate statistics over the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the collection cannot be read.
    pub fn compute_statistics(&self) -> Result<RegistryStats, AppError> {
        let links = self.store.load_all()?;
        let now = Utc::now();

        let active_count = links.iter().filter(|l| l.expires_at > now).count();
        let total_clicks = links.iter().map(|l| l.clicks.len()).sum();

        Ok(RegistryStats {
            total_count: links.len(),
            total_clicks,
            active_count,
            expired_count: links.len() - active_count,
        })
    }

    /// Removes every link whose validity window has passed.
    ///
    /// Idempotent: a second call with no new expirations removes nothing
    /// and performs no write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on backend failures.
    pub fn clean_expired(&self) -> Result<usize, AppError> {
        let links = self.store.load_all()?;
        let now = Utc::now();

        let remaining: Vec<ShortLink> = links
            .iter()
            .filter(|l| l.expires_at > now)
            .cloned()
            .collect();
        let removed = links.len() - remaining.len();

        if removed > 0 {
            self.store.save_all(&remaining)?;
            tracing::info!(removed, "cleaned expired links");
        }

        Ok(removed)
    }

    /// Validates one submission and builds its link.
    fn build_link(
        &self,
        submission: &Submission,
        taken: &HashSet<String>,
    ) -> Result<ShortLink, AppError> {
        if !is_valid_url(&submission.original_url) {
            return Err(AppError::InvalidUrl {
                url: submission.original_url.clone(),
            });
        }

        if let Some(custom) = &submission.custom_short_code {
            if !is_valid_short_code(custom) {
                return Err(AppError::InvalidCodeFormat {
                    code: custom.clone(),
                });
            }
            if taken.contains(custom) {
                return Err(AppError::CodeTaken {
                    code: custom.clone(),
                });
            }
        }

        if !(MIN_VALIDITY_MINUTES..=MAX_VALIDITY_MINUTES).contains(&submission.validity_minutes) {
            return Err(AppError::InvalidValidity {
                minutes: submission.validity_minutes,
            });
        }

        let (code, is_custom) = match &submission.custom_short_code {
            Some(custom) => (custom.clone(), true),
            None => (self.generate_unique_code(taken)?, false),
        };

        Ok(ShortLink::new(
            submission.original_url.clone(),
            code,
            submission.validity_minutes,
            is_custom,
        ))
    }

    /// Generates a code not present in `taken`, with a bounded retry.
    fn generate_unique_code(&self, taken: &HashSet<String>) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();
            if !taken.contains(&code) {
                return Ok(code);
            }
        }

        Err(AppError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
