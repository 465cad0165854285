use super::*;
use crate::util::persistence::{MemoryStore, StorageError};

fn store_with_backend() -> (IdentityStore, Arc<MemoryStore>) {
    let backend = Arc::new(MemoryStore::default());
    (IdentityStore::new(backend.clone()), backend)
}

/// Backend whose every operation fails, for storage-failure recovery tests.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn empty_backend_reads_as_signed_out() {
    let (store, _) = store_with_backend();
    assert_eq!(store.get(), Identity::signed_out());
    assert!(!store.get().has_session());
}

#[test]
fn set_then_get_round_trips_identity() {
    let (store, _) = store_with_backend();
    store.set(7, "a@b.com");
    let identity = store.get();
    assert_eq!(identity, Identity::signed_in(7, "a@b.com"));
    assert!(identity.has_session());
}

#[test]
fn clear_resets_to_signed_out() {
    let (store, backend) = store_with_backend();
    store.set(7, "a@b.com");
    store.clear();
    assert_eq!(store.get(), Identity::signed_out());
    assert_eq!(backend.get(SESSION_KEY).unwrap(), None);
}

#[test]
fn broken_backend_reads_as_signed_out_without_panic() {
    let store = IdentityStore::new(Arc::new(BrokenStore));
    assert_eq!(store.get(), Identity::signed_out());
    store.set(7, "a@b.com");
    assert_eq!(store.get(), Identity::signed_out());
    store.clear();
}

#[test]
fn subscribers_observe_set_and_clear() {
    let (store, _) = store_with_backend();
    let seen: Arc<Mutex<Vec<Identity>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |identity| sink.lock().unwrap().push(identity.clone()));

    store.set(7, "a@b.com");
    store.clear();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], Identity::signed_in(7, "a@b.com"));
    assert_eq!(seen[1], Identity::signed_out());
}

#[test]
fn authenticated_record_without_user_normalizes_to_signed_out() {
    let (_, backend) = store_with_backend();
    backend
        .set(SESSION_KEY, r#"{"user":null,"isAuthenticated":true}"#)
        .unwrap();
    let store = IdentityStore::new(backend);
    assert_eq!(store.get(), Identity::signed_out());
}

#[test]
fn remembered_user_without_auth_flag_is_not_a_session() {
    let (_, backend) = store_with_backend();
    backend
        .set(SESSION_KEY, r#"{"user":{"id":7,"email":"a@b.com"},"isAuthenticated":false}"#)
        .unwrap();
    let store = IdentityStore::new(backend);
    let identity = store.get();
    assert_eq!(identity.user_id, Some(7));
    assert!(!identity.is_authenticated);
    assert!(!identity.has_session());
}

#[test]
fn coherent_legacy_keys_migrate_to_canonical_record() {
    let backend = Arc::new(MemoryStore::default());
    backend.set("userId", "42").unwrap();
    backend.set("userEmail", "legacy@b.com").unwrap();
    backend.set("isAuthenticated", "true").unwrap();

    let store = IdentityStore::new(backend.clone());
    assert_eq!(store.get(), Identity::signed_in(42, "legacy@b.com"));
    assert_eq!(backend.get("userId").unwrap(), None);
    assert_eq!(backend.get("userEmail").unwrap(), None);
    assert_eq!(backend.get("isAuthenticated").unwrap(), None);
    assert!(backend.get(SESSION_KEY).unwrap().is_some());
}

#[test]
fn incoherent_legacy_keys_are_purged_not_guessed() {
    let backend = Arc::new(MemoryStore::default());
    backend.set("userId", "not-a-number").unwrap();
    backend.set("isAuthenticated", "true").unwrap();

    let store = IdentityStore::new(backend.clone());
    assert_eq!(store.get(), Identity::signed_out());
    assert_eq!(backend.get("userId").unwrap(), None);
    assert_eq!(backend.get("isAuthenticated").unwrap(), None);
    assert_eq!(backend.get(SESSION_KEY).unwrap(), None);
}

#[test]
fn signed_out_legacy_keys_are_purged_without_migration() {
    let backend = Arc::new(MemoryStore::default());
    backend.set("userId", "42").unwrap();
    backend.set("isAuthenticated", "false").unwrap();

    let store = IdentityStore::new(backend.clone());
    assert_eq!(store.get(), Identity::signed_out());
    assert_eq!(backend.get(SESSION_KEY).unwrap(), None);
}

#[test]
fn canonical_record_wins_over_legacy_keys() {
    let backend = Arc::new(MemoryStore::default());
    backend
        .set(SESSION_KEY, r#"{"user":{"id":7,"email":"a@b.com"},"isAuthenticated":true}"#)
        .unwrap();
    backend.set("userId", "999").unwrap();
    backend.set("isAuthenticated", "true").unwrap();

    let store = IdentityStore::new(backend.clone());
    assert_eq!(store.get(), Identity::signed_in(7, "a@b.com"));
    assert_eq!(backend.get("userId").unwrap(), None);
}
