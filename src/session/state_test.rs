use super::*;
use crate::net::types::{LoginResult, User};
use crate::session::storage::{KeyValueStorage, MemoryStorage};
use crate::session::store::{TOKEN_KEY, USER_KEY};
use std::sync::Arc;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        created_at: "2026-08-01T09:30:00.000Z".to_owned(),
    }
}

fn login_result() -> LoginResult {
    LoginResult {
        token: "tok1".to_owned(),
        user: user(),
    }
}

// =============================================================
// rehydration
// =============================================================

#[test]
fn fresh_store_yields_unauthenticated_session() {
    let session = Session::new(TokenStore::in_memory());
    assert!(!session.is_authenticated());
    assert_eq!(session.current_user(), None);
    assert_eq!(session.token(), None);
}

#[test]
fn rehydrates_persisted_login() {
    let store = TokenStore::in_memory();
    store.save(&login_result());

    let session = Session::new(store);
    assert!(session.is_authenticated());
    assert_eq!(session.current_user(), Some(user()));
    assert_eq!(session.token(), Some("tok1".to_owned()));
}

#[test]
fn token_without_user_is_discarded() {
    let storage = Arc::new(MemoryStorage::new());
    storage.write(TOKEN_KEY, "tok1");

    let session = Session::new(TokenStore::new(storage.clone()));
    assert!(!session.is_authenticated());
    assert_eq!(storage.read(TOKEN_KEY), None);
}

#[test]
fn user_without_token_is_discarded() {
    let storage = Arc::new(MemoryStorage::new());
    storage.write(
        USER_KEY,
        &serde_json::to_string(&user()).expect("user json"),
    );

    let session = Session::new(TokenStore::new(storage.clone()));
    assert!(!session.is_authenticated());
    assert_eq!(storage.read(USER_KEY), None);
}

#[test]
fn malformed_user_record_yields_unauthenticated_and_clears_storage() {
    let storage = Arc::new(MemoryStorage::new());
    storage.write(TOKEN_KEY, "tok1");
    storage.write(USER_KEY, "{not-json");

    let session = Session::new(TokenStore::new(storage.clone()));
    assert!(!session.is_authenticated());
    assert_eq!(storage.read(TOKEN_KEY), None);
    assert_eq!(storage.read(USER_KEY), None);

    // Idempotent: a second construction over the same storage is identical.
    let again = Session::new(TokenStore::new(storage));
    assert!(!again.is_authenticated());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn apply_login_sets_token_and_user() {
    let session = Session::new(TokenStore::in_memory());
    session.apply_login(&login_result());

    assert_eq!(session.token(), Some("tok1".to_owned()));
    assert_eq!(
        session.current_user().map(|u| u.email),
        Some("a@b.com".to_owned())
    );
    assert!(session.is_authenticated());
}

#[test]
fn logout_clears_everything() {
    let session = Session::new(TokenStore::in_memory());
    session.apply_login(&login_result());
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(session.current_user(), None);
    assert_eq!(session.token(), None);
}

#[test]
fn logout_on_fresh_session_is_a_no_op() {
    let session = Session::new(TokenStore::in_memory());
    session.logout();
    assert!(!session.is_authenticated());
}

#[test]
fn authenticated_only_with_both_token_and_user() {
    // User in the signal but token gone from storage: not authenticated.
    let storage = Arc::new(MemoryStorage::new());
    let session = Session::new(TokenStore::new(storage.clone()));
    session.apply_login(&login_result());

    storage.remove(TOKEN_KEY);
    assert!(!session.is_authenticated());
}
