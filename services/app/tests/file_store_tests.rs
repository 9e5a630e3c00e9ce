//! Integration tests for the flat-file storage adapter.

use std::sync::Arc;

use app_lib::adapters::credentials::StaticCredentialVerifier;
use app_lib::adapters::file_store::FileStore;
use app_lib::adapters::host::HostIdentityAdapter;
use app_lib::seed;
use app_lib::store::{keys, AppStore};
use bookbites_core::ports::StorageService;

#[tokio::test]
async fn save_load_remove_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.ensure_root().await.unwrap();

    assert_eq!(store.load_raw("cart").await.unwrap(), None);

    store.save_raw("cart", r#"[{"book_id":"b1","quantity":2}]"#).await.unwrap();
    let raw = store.load_raw("cart").await.unwrap();
    assert_eq!(raw.as_deref(), Some(r#"[{"book_id":"b1","quantity":2}]"#));

    store.remove("cart").await.unwrap();
    assert_eq!(store.load_raw("cart").await.unwrap(), None);

    // Removing an absent key is not an error.
    store.remove("cart").await.unwrap();
}

#[tokio::test]
async fn records_live_in_one_file_per_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    store.ensure_root().await.unwrap();

    store.save_raw("books", "[]").await.unwrap();
    store.save_raw("messages", "[]").await.unwrap();

    assert!(dir.path().join("books.json").exists());
    assert!(dir.path().join("messages.json").exists());
}

#[tokio::test]
async fn app_store_falls_back_on_a_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_store = FileStore::new(dir.path());
    file_store.ensure_root().await.unwrap();
    file_store.save_raw(keys::BOOKS, "** not json **").await.unwrap();

    let store = AppStore::load(
        Arc::new(file_store),
        Arc::new(HostIdentityAdapter::absent()),
        Arc::new(StaticCredentialVerifier::new("admin", "secret")),
    )
    .await;

    assert_eq!(store.books.len(), seed::seed_books().len());
}

#[tokio::test]
async fn mutations_are_durable_across_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let file_store = FileStore::new(dir.path());
        file_store.ensure_root().await.unwrap();
        let mut store = AppStore::load(
            Arc::new(file_store),
            Arc::new(HostIdentityAdapter::absent()),
            Arc::new(StaticCredentialVerifier::new("admin", "secret")),
        )
        .await;
        store.init_session().await;
        store.add_to_cart("store-deep-work").await;
    }

    let reloaded = AppStore::load(
        Arc::new(FileStore::new(dir.path())),
        Arc::new(HostIdentityAdapter::absent()),
        Arc::new(StaticCredentialVerifier::new("admin", "secret")),
    )
    .await;

    assert_eq!(reloaded.cart.len(), 1);
    assert_eq!(reloaded.cart[0].book_id, "store-deep-work");
}
