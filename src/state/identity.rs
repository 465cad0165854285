//! Persisted session identity and its change broadcast.
//!
//! SYSTEM CONTEXT
//! ==============
//! `IdentityStore` is the single writer/reader of the session record. It is
//! injected (never ambient) into the route gate, the subscription lookup, and
//! login/registration flows; dependents observe changes through `subscribe`
//! rather than polling.
//!
//! PERSISTED SHAPE
//! ===============
//! One JSON record under `clearspace_session`:
//! `{"user":{"id":7,"email":"a@b.com"},"isAuthenticated":true}`.
//! Earlier releases wrote flat `userId`/`userEmail`/`isAuthenticated` keys;
//! those migrate once at startup and the nested record is authoritative.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::util::persistence::{KeyValueStore, load_json, save_json};

/// Storage key for the canonical session record.
pub const SESSION_KEY: &str = "clearspace_session";

const LEGACY_USER_ID_KEY: &str = "userId";
const LEGACY_EMAIL_KEY: &str = "userEmail";
const LEGACY_FLAG_KEY: &str = "isAuthenticated";

/// The locally persisted assertion of who the current user is.
///
/// `is_authenticated == true` implies `user_id` is present; the reverse is
/// not enforced, so a signed-out snapshot may still carry a remembered id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub is_authenticated: bool,
}

impl Identity {
    /// The all-absent, signed-out snapshot.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user_id: i64, email: &str) -> Self {
        Self {
            user_id: Some(user_id),
            email: Some(email.to_owned()),
            is_authenticated: true,
        }
    }

    /// Whether this snapshot asserts a usable session.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.is_authenticated && self.user_id.is_some()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    user: Option<PersistedUser>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedUser {
    id: i64,
    email: String,
}

type Listener = Box<dyn Fn(&Identity) + Send + Sync>;

/// Injectable session-identity service over a [`KeyValueStore`] backend.
///
/// Reads never fail: any storage trouble reads as the signed-out snapshot.
/// `set`/`clear` broadcast the resulting snapshot to every subscriber.
#[derive(Clone)]
pub struct IdentityStore {
    backend: Arc<dyn KeyValueStore>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl IdentityStore {
    /// Build a store over `backend` and run the one-time legacy-key migration.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        let store = Self {
            backend,
            listeners: Arc::new(Mutex::new(Vec::new())),
        };
        store.migrate_legacy_keys();
        store
    }

    /// Current identity snapshot. Never fails.
    #[must_use]
    pub fn get(&self) -> Identity {
        let Some(record) = load_json::<PersistedSession>(self.backend.as_ref(), SESSION_KEY) else {
            return Identity::signed_out();
        };
        match record.user {
            Some(user) => Identity {
                user_id: Some(user.id),
                email: Some(user.email),
                is_authenticated: record.is_authenticated,
            },
            None if record.is_authenticated => {
                // Authenticated-without-id violates the store invariant; read
                // it as signed out rather than letting the gate loop on it.
                log::warn!("session record authenticated without user id; treating as signed out");
                Identity::signed_out()
            }
            None => Identity::signed_out(),
        }
    }

    /// Persist `user_id`/`email` as the authenticated session and notify
    /// subscribers with the resulting snapshot.
    pub fn set(&self, user_id: i64, email: &str) {
        let record = PersistedSession {
            user: Some(PersistedUser { id: user_id, email: email.to_owned() }),
            is_authenticated: true,
        };
        save_json(self.backend.as_ref(), SESSION_KEY, &record);
        let current = self.get();
        self.notify(&current);
    }

    /// Remove the persisted session and notify subscribers.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(SESSION_KEY) {
            log::warn!("could not clear session record: {e}");
        }
        self.remove_legacy_keys();
        let current = self.get();
        self.notify(&current);
    }

    /// Register `listener` for every subsequent identity change.
    pub fn subscribe(&self, listener: impl Fn(&Identity) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(Box::new(listener));
        }
    }

    fn notify(&self, identity: &Identity) {
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(identity);
            }
        }
    }

    /// Fold the legacy flat keys into the canonical record.
    ///
    /// Migrates only a self-consistent flat session (flag set and id
    /// parseable); anything incoherent is purged and reads as signed out.
    /// When the canonical record already exists it stays authoritative and
    /// the flat keys are dropped without inspection.
    fn migrate_legacy_keys(&self) {
        let backend = self.backend.as_ref();
        let has_canonical = matches!(backend.get(SESSION_KEY), Ok(Some(_)));
        let flag = backend.get(LEGACY_FLAG_KEY).ok().flatten();
        let user_id = backend.get(LEGACY_USER_ID_KEY).ok().flatten();
        let email = backend.get(LEGACY_EMAIL_KEY).ok().flatten();

        if flag.is_none() && user_id.is_none() && email.is_none() {
            return;
        }

        if !has_canonical && flag.as_deref() == Some("true") {
            if let Some(id) = user_id.as_deref().and_then(|raw| raw.parse::<i64>().ok()) {
                let record = PersistedSession {
                    user: Some(PersistedUser {
                        id,
                        email: email.clone().unwrap_or_default(),
                    }),
                    is_authenticated: true,
                };
                save_json(backend, SESSION_KEY, &record);
                log::info!("migrated legacy session keys to canonical record");
            } else {
                log::warn!("legacy session keys incoherent; discarding");
            }
        }
        self.remove_legacy_keys();
    }

    fn remove_legacy_keys(&self) {
        for key in [LEGACY_USER_ID_KEY, LEGACY_EMAIL_KEY, LEGACY_FLAG_KEY] {
            let _ = self.backend.remove(key);
        }
    }
}
