//! ShortenerService tests
//!
//! Normalization, validation and id generation of the shortening operation.

use std::sync::Arc;
use std::sync::Mutex;

use localshort::config::ShortenerConfig;
use localshort::errors::LocalShortError;
use localshort::services::{IdSource, MAX_ID_ATTEMPTS, NoDelay, ShortenerService};
use localshort::storage::MemoryKvStore;
use localshort::store::RecordStore;
use localshort::utils::is_valid_short_id;

// =============================================================================
// Test Setup
// =============================================================================

const ORIGIN: &str = "http://localhost:3000";

fn config() -> ShortenerConfig {
    ShortenerConfig {
        origin: ORIGIN.to_string(),
        ..ShortenerConfig::default()
    }
}

fn service() -> ShortenerService {
    ShortenerService::new(&config()).with_delay(NoDelay)
}

fn loaded_store() -> (RecordStore, Arc<MemoryKvStore>) {
    let backend = Arc::new(MemoryKvStore::new());
    let mut store = RecordStore::new(backend.clone(), "shortened-urls");
    store.load();
    (store, backend)
}

/// Hands out ids from a fixed script
struct ScriptedIds(Mutex<Vec<&'static str>>);

impl ScriptedIds {
    fn new(ids: &[&'static str]) -> Self {
        let mut ids = ids.to_vec();
        ids.reverse();
        Self(Mutex::new(ids))
    }
}

impl IdSource for ScriptedIds {
    fn next_id(&self, _length: usize) -> String {
        self.0
            .lock()
            .unwrap()
            .pop()
            .unwrap_or("zzzzzz")
            .to_string()
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_shorten_bare_domain() {
    let (mut store, _) = loaded_store();

    let record = service()
        .shorten(&mut store, "example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.original_url, "https://example.com");
    assert!(is_valid_short_id(&record.id, 6));
    assert_eq!(record.short_url, format!("{}/{}", ORIGIN, record.id));
    assert_eq!(store.urls(), std::slice::from_ref(&record));
}

#[tokio::test]
async fn test_shorten_keeps_remainder_after_scheme() {
    let (mut store, _) = loaded_store();
    let svc = service();

    for input in ["example.com/a/b?c=d", "  sub.example.org:8443/x  ", "localhost"] {
        let record = svc.shorten(&mut store, input).await.unwrap().unwrap();
        assert_eq!(record.original_url, format!("https://{}", input.trim()));
    }
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_shorten_existing_scheme_untouched() {
    let (mut store, _) = loaded_store();
    let record = service()
        .shorten(&mut store, "http://example.com/path")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.original_url, "http://example.com/path");
}

#[tokio::test]
async fn test_shorten_whitespace_only() {
    let (mut store, backend) = loaded_store();

    let result = service().shorten(&mut store, "   ").await.unwrap();

    assert!(result.is_none());
    assert!(store.is_empty());
    assert_eq!(backend.write_count(), 0);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (mut store, backend) = loaded_store();
    let svc = service();
    svc.shorten(&mut store, "example.com").await.unwrap();
    let before = store.urls().to_vec();

    for input in ["not a url", "https://", "http://exa mple.com"] {
        let err = svc.shorten(&mut store, input).await.unwrap_err();
        assert_eq!(err, LocalShortError::Validation("Please enter a valid URL".to_string()));
        assert!(err.is_user_facing());
    }

    assert_eq!(store.urls(), before.as_slice());
    assert_eq!(backend.write_count(), 1);
}

#[tokio::test]
async fn test_shorten_prepends() {
    let (mut store, _) = loaded_store();
    let svc = service().with_id_source(ScriptedIds::new(&["first1", "second"]));

    svc.shorten(&mut store, "a.com").await.unwrap();
    svc.shorten(&mut store, "b.com").await.unwrap();

    let ids: Vec<&str> = store.urls().iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["second", "first1"]);
    assert_eq!(store.urls()[1].original_url, "https://a.com");
}

#[tokio::test]
async fn test_origin_trailing_slash() {
    let (mut store, _) = loaded_store();
    let svc = ShortenerService::new(&ShortenerConfig {
        origin: "https://sho.rt/".to_string(),
        ..ShortenerConfig::default()
    })
    .with_delay(NoDelay)
    .with_id_source(ScriptedIds::new(&["abc123"]));

    let record = svc.shorten(&mut store, "example.com").await.unwrap().unwrap();
    assert_eq!(record.short_url, "https://sho.rt/abc123");
}

// =============================================================================
// Id collisions
// =============================================================================

#[tokio::test]
async fn test_collision_is_retried() {
    let (mut store, _) = loaded_store();
    let svc = service().with_id_source(ScriptedIds::new(&["aaaaaa", "aaaaaa", "bbbbbb"]));

    svc.shorten(&mut store, "one.com").await.unwrap();
    let second = svc.shorten(&mut store, "two.com").await.unwrap().unwrap();

    assert_eq!(second.id, "bbbbbb");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_collision_allowed_when_uniqueness_disabled() {
    let (mut store, _) = loaded_store();
    let svc = ShortenerService::new(&ShortenerConfig {
        ensure_unique_ids: false,
        ..config()
    })
    .with_delay(NoDelay)
    .with_id_source(ScriptedIds::new(&["aaaaaa", "aaaaaa"]));

    svc.shorten(&mut store, "one.com").await.unwrap();
    svc.shorten(&mut store, "two.com").await.unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.urls().iter().all(|u| u.id == "aaaaaa"));
}

#[tokio::test]
async fn test_collision_budget_exhausted() {
    let (mut store, _) = loaded_store();
    let always_same = vec!["zzzzzz"; MAX_ID_ATTEMPTS + 1];
    let svc = service().with_id_source(ScriptedIds::new(&always_same));

    svc.shorten(&mut store, "one.com").await.unwrap();
    let err = svc.shorten(&mut store, "two.com").await.unwrap_err();

    assert!(matches!(err, LocalShortError::IdExhausted(_)));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_custom_id_length() {
    let (mut store, _) = loaded_store();
    let svc = ShortenerService::new(&ShortenerConfig {
        id_length: 10,
        ..config()
    })
    .with_delay(NoDelay);

    let record = svc.shorten(&mut store, "example.com").await.unwrap().unwrap();
    assert!(is_valid_short_id(&record.id, 10));
}

#[tokio::test]
async fn test_zero_id_length_still_yields_an_id() {
    let (mut store, _) = loaded_store();
    let svc = ShortenerService::new(&ShortenerConfig {
        id_length: 0,
        ..config()
    })
    .with_delay(NoDelay);

    let record = svc.shorten(&mut store, "example.com").await.unwrap().unwrap();
    assert!(is_valid_short_id(&record.id, 1));
    assert_eq!(record.short_url, format!("{}/{}", ORIGIN, record.id));
}
