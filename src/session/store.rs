//! Durable token + user storage.
//!
//! Layout: `token` holds the raw bearer token, `user` holds the
//! JSON-serialized user record. A malformed user record is treated as
//! absent and clears both keys, so half a session never survives a read.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use crate::net::types::{LoginResult, User};
use crate::session::storage::{BrowserStorage, KeyValueStorage, MemoryStorage};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Reads and writes the session token and cached user record.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    /// Store backed by process memory, for native builds and tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Persist a successful login: token and serialized user together.
    pub fn save(&self, result: &LoginResult) {
        let Ok(user_json) = serde_json::to_string(&result.user) else {
            return;
        };
        self.storage.write(TOKEN_KEY, &result.token);
        self.storage.write(USER_KEY, &user_json);
    }

    /// Remove both entries.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// The stored bearer token, if any. Empty strings read as absent.
    pub fn read_token(&self) -> Option<String> {
        self.storage.read(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The cached user record, if present and well-formed. A record that
    /// fails to deserialize clears the whole session and reads as absent.
    pub fn read_user(&self) -> Option<User> {
        let raw = self.storage.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(_) => {
                self.clear();
                None
            }
        }
    }
}
