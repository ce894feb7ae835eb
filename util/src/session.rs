//! Key-value session persistence.
//!
//! The dashboard keeps its session in client-side storage under two fixed
//! keys and reads them back on start. This store reproduces that contract on
//! the server side: opaque string values under stable keys, cleared on
//! logout or when a stored value turns out to be unreadable.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage key for the serialized session user object.
pub const USER_KEY: &str = "user";

/// Storage key for the raw access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Thread-safe string key-value store for session data.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under the given key, replacing any previous value.
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(key.to_string(), value.into());
    }

    /// Returns a clone of the value stored under the key, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(key)
            .cloned()
    }

    /// Removes the value stored under the key.
    pub fn remove(&self, key: &str) {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(key);
    }

    /// Removes both session keys.
    pub fn clear_session(&self) {
        let mut guard = self.inner.write().expect("session store lock poisoned");
        guard.remove(USER_KEY);
        guard.remove(ACCESS_TOKEN_KEY);
    }
}
