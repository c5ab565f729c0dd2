//! Durable link storage backed by an embedded redb database.

use std::path::Path;

use redb::{Database, ReadableDatabase, TableDefinition};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Table holding the serialized link collection.
///
/// Key: the well-known collection key.
/// Value: JSON-serialized `Vec<ShortLink>` with RFC 3339 timestamps.
const TABLE_LINKS: TableDefinition<&str, &str> = TableDefinition::new("links_v1");

/// Well-known key under which the whole collection is stored.
const COLLECTION_KEY: &str = "shortened-urls";

/// [`LinkStore`] implementation over an embedded redb database.
///
/// The entire collection lives under one key, so each `save_all` replaces
/// it atomically within a single write transaction. A value that fails to
/// deserialize is treated as an empty collection rather than a fatal error,
/// matching the recovery behavior for corrupt local storage.
pub struct RedbLinkStore {
    db: Database,
}

impl RedbLinkStore {
    /// Creates or opens the database file at `path` and ensures the links
    /// table exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the file cannot be created or the
    /// table cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let db = Database::create(path).map_err(AppError::storage)?;

        let write_txn = db.begin_write().map_err(AppError::storage)?;
        {
            write_txn
                .open_table(TABLE_LINKS)
                .map_err(AppError::storage)?;
        }
        write_txn.commit().map_err(AppError::storage)?;

        Ok(Self { db })
    }
}

impl LinkStore for RedbLinkStore {
    fn load_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let read_txn = self.db.begin_read().map_err(AppError::storage)?;
        let table = read_txn
            .open_table(TABLE_LINKS)
            .map_err(AppError::storage)?;

        let Some(value) = table.get(COLLECTION_KEY).map_err(AppError::storage)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(value.value()) {
            Ok(links) => Ok(links),
            Err(err) => {
                tracing::warn!(%err, "stored link collection is unreadable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, links: &[ShortLink]) -> Result<(), AppError> {
        let json = serde_json::to_string(links).map_err(AppError::storage)?;

        let write_txn = self.db.begin_write().map_err(AppError::storage)?;
        {
            let mut table = write_txn
                .open_table(TABLE_LINKS)
                .map_err(AppError::storage)?;
            table
                .insert(COLLECTION_KEY, json.as_str())
                .map_err(AppError::storage)?;
        }
        write_txn.commit().map_err(AppError::storage)?;

        Ok(())
    }
}
