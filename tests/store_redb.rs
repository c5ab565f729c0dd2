//! Durable store behavior: persistence round-trips and corrupt-data recovery.

use std::sync::Arc;

use tempfile::NamedTempFile;
use url_registry::infrastructure::location::FixedLocationResolver;
use url_registry::prelude::*;

fn temp_store() -> (RedbLinkStore, NamedTempFile) {
    let file = NamedTempFile::new().expect("failed to create temp file");
    let store = RedbLinkStore::open(file.path()).expect("failed to open store");
    (store, file)
}

#[test]
fn empty_database_loads_empty_collection() {
    let (store, _file) = temp_store();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn collection_survives_reopen_with_temporal_fidelity() {
    let file = NamedTempFile::new().unwrap();

    let saved = {
        let store = RedbLinkStore::open(file.path()).unwrap();
        let registry = UrlRegistry::new(
            Arc::new(store),
            Arc::new(FixedLocationResolver("Testville".to_string())),
        );

        let outcome = registry
            .create_batch(&[Submission {
                original_url: "https://example.com".to_string(),
                validity_minutes: 120,
                custom_short_code: Some("persist".to_string()),
            }])
            .unwrap();
        registry.record_click("persist", None, None).unwrap();

        outcome.created.into_iter().next().unwrap()
    };

    // Reopen the same file and read everything back.
    let store = RedbLinkStore::open(file.path()).unwrap();
    let links = store.load_all().unwrap();

    assert_eq!(links.len(), 1);
    let link = &links[0];
    assert_eq!(link.id, saved.id);
    assert_eq!(link.short_code, "persist");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.validity_minutes, 120);
    assert_eq!(link.created_at, saved.created_at);
    assert_eq!(link.expires_at, saved.expires_at);
    assert_eq!(link.clicks.len(), 1);
    assert_eq!(link.clicks[0].location, "Testville");
}

#[test]
fn save_all_replaces_previous_collection() {
    let (store, _file) = temp_store();

    let first = ShortLink::new(
        "https://a.example.com".to_string(),
        "aaa".to_string(),
        10,
        true,
    );
    let second = ShortLink::new(
        "https://b.example.com".to_string(),
        "bbb".to_string(),
        10,
        true,
    );

    store.save_all(&[first.clone(), second.clone()]).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 2);

    store.save_all(std::slice::from_ref(&second)).unwrap();
    let links = store.load_all().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].short_code, "bbb");
}

#[test]
fn unreadable_collection_recovers_as_empty() {
    let file = NamedTempFile::new().unwrap();

    // Write garbage under the collection key through a raw redb handle.
    {
        const TABLE: redb::TableDefinition<&str, &str> = redb::TableDefinition::new("links_v1");
        let db = redb::Database::create(file.path()).unwrap();
        let txn = db.begin_write().unwrap();
        {
            let mut table = txn.open_table(TABLE).unwrap();
            table.insert("shortened-urls", "{not json at all").unwrap();
        }
        txn.commit().unwrap();
    }

    let store = RedbLinkStore::open(file.path()).unwrap();
    assert!(store.load_all().unwrap().is_empty());

    // The store remains writable after recovery.
    let link = ShortLink::new(
        "https://example.com".to_string(),
        "fresh".to_string(),
        10,
        true,
    );
    store.save_all(std::slice::from_ref(&link)).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn registry_operations_work_against_durable_store() {
    let (store, _file) = temp_store();
    let registry = UrlRegistry::new(
        Arc::new(store),
        Arc::new(FixedLocationResolver("Testville".to_string())),
    );

    let outcome = registry
        .create_batch(&[Submission {
            original_url: "https://example.com".to_string(),
            validity_minutes: 30,
            custom_short_code: None,
        }])
        .unwrap();
    assert_eq!(outcome.created.len(), 1);

    let code = outcome.created[0].short_code.clone();
    let target = registry.record_click(&code, None, None).unwrap();
    assert_eq!(target, "https://example.com");

    let stats = registry.compute_statistics().unwrap();
    assert_eq!(stats.total_count, 1);
    assert_eq!(stats.total_clicks, 1);
    assert_eq!(stats.active_count, 1);
}
