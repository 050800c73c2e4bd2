//! Reactive session state: who is logged in right now.
//!
//! `Session` pairs the durable [`TokenStore`] with an `RwSignal` holding the
//! current user. The signal is the observable surface — pages and guards
//! read it reactively, and every mutation notifies subscribers synchronously.
//! Construction rehydrates from storage and never fails: anything partial
//! or malformed collapses to "not authenticated" and wipes the store.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use leptos::prelude::*;

use crate::net::types::{LoginResult, User};
use crate::session::store::TokenStore;

/// Observable authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
}

/// The current session, shared via context from the application root.
#[derive(Clone)]
pub struct Session {
    store: TokenStore,
    state: RwSignal<AuthState>,
}

impl Session {
    /// Build a session from a token store, rehydrating any persisted login.
    ///
    /// A token without a user (or vice versa) is half a session and is
    /// discarded; a malformed user record was already cleared by the store.
    pub fn new(store: TokenStore) -> Self {
        let user = match (store.read_token(), store.read_user()) {
            (Some(_), Some(user)) => Some(user),
            (None, None) => None,
            _ => {
                store.clear();
                None
            }
        };
        Self {
            store,
            state: RwSignal::new(AuthState { user }),
        }
    }

    /// Session backed by browser localStorage.
    pub fn browser() -> Self {
        Self::new(TokenStore::browser())
    }

    /// The observable state signal, for reactive views.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// The current user, if logged in. Reactive when read inside a
    /// tracking context.
    pub fn current_user(&self) -> Option<User> {
        self.state.get().user
    }

    /// The bearer token, read live from storage.
    pub fn token(&self) -> Option<String> {
        self.store.read_token()
    }

    /// True iff both token and user are present.
    pub fn is_authenticated(&self) -> bool {
        self.state.get().user.is_some() && self.token().is_some()
    }

    /// Commit a successful login: storage first, then the signal, so the
    /// two are consistent before any caller observes completion.
    pub fn apply_login(&self, result: &LoginResult) {
        self.store.save(result);
        self.state.update(|s| s.user = Some(result.user.clone()));
    }

    /// Clear the session unconditionally. Never fails.
    pub fn logout(&self) {
        self.store.clear();
        self.state.update(|s| s.user = None);
    }
}
