//! Session Store
//!
//! Current user plus access/refresh tokens, mirrored into local storage.
//! No expiry timer: tokens are trusted until the backend rejects them.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::StorageKeys;
use crate::models::User;
use crate::storage::KeyValueStore;

/// What startup found in local storage
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedSession {
    Restored(User),
    /// Token or user missing
    Absent,
    /// User entry present but not valid JSON for a user
    Corrupt,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    user: Arc<Mutex<Option<User>>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            user: Arc::new(Mutex::new(None)),
        }
    }

    /// Persist user and both tokens; later requests use `access_token`
    pub fn set_session(&self, user: User, access_token: &str, refresh_token: &str) {
        self.storage.set(&self.keys.access_token, access_token);
        self.storage.set(&self.keys.refresh_token, refresh_token);
        match serde_json::to_string(&user) {
            Ok(json) => self.storage.set(&self.keys.user, &json),
            Err(e) => tracing::error!("could not persist user: {}", e),
        }
        *self.lock_user() = Some(user);
    }

    /// Drop user and tokens from memory and storage. Idempotent.
    pub fn clear_session(&self) {
        *self.lock_user() = None;
        self.storage.remove(&self.keys.user);
        self.storage.remove(&self.keys.access_token);
        self.storage.remove(&self.keys.refresh_token);
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock_user().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage
            .get(&self.keys.access_token)
            .filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage
            .get(&self.keys.refresh_token)
            .filter(|t| !t.is_empty())
    }

    /// Load a persisted session into memory, if both token and user are stored
    pub fn restore(&self) -> PersistedSession {
        let (Some(_), Some(raw_user)) = (self.access_token(), self.storage.get(&self.keys.user)) else {
            return PersistedSession::Absent;
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                *self.lock_user() = Some(user.clone());
                PersistedSession::Restored(user)
            }
            Err(e) => {
                tracing::warn!("stored user is unreadable: {}", e);
                PersistedSession::Corrupt
            }
        }
    }

    fn lock_user(&self) -> std::sync::MutexGuard<'_, Option<User>> {
        self.user.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
