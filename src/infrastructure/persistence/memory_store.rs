//! In-memory link storage for tests and ephemeral runs.

use std::sync::Mutex;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// [`LinkStore`] fake holding the collection in process memory.
///
/// Follows the same read-all/write-all contract as the durable store, so
/// registry behavior is identical against either backend.
#[derive(Default)]
pub struct InMemoryLinkStore {
    links: Mutex<Vec<ShortLink>>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a pre-existing collection.
    pub fn with_links(links: Vec<ShortLink>) -> Self {
        Self {
            links: Mutex::new(links),
        }
    }
}

impl LinkStore for InMemoryLinkStore {
    fn load_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.lock().map_err(|_| {
            AppError::storage("in-memory store mutex poisoned")
        })?;
        Ok(links.clone())
    }

    fn save_all(&self, links: &[ShortLink]) -> Result<(), AppError> {
        let mut guard = self.links.lock().map_err(|_| {
            AppError::storage("in-memory store mutex poisoned")
        })?;
        *guard = links.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store = InMemoryLinkStore::new();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_collection() {
        let store = InMemoryLinkStore::new();
        let link = ShortLink::new(
            "https://example.com".to_string(),
            "abc".to_string(),
            10,
            true,
        );

        store.save_all(std::slice::from_ref(&link)).unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);

        store.save_all(&[]).unwrap();
        assert!(store.load_all().unwrap().is_empty());
    }
}
