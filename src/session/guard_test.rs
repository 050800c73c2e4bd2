use super::*;
use crate::net::types::{LoginResult, User};
use crate::session::store::TokenStore;

fn authenticated_session() -> Session {
    let session = Session::new(TokenStore::in_memory());
    session.apply_login(&LoginResult {
        token: "tok1".to_owned(),
        user: User {
            id: "u1".to_owned(),
            email: "a@b.com".to_owned(),
            created_at: "2026-08-01T09:30:00.000Z".to_owned(),
        },
    });
    session
}

#[test]
fn protected_allows_authenticated_user() {
    assert_eq!(
        check_protected(&authenticated_session()),
        GuardDecision::Allow
    );
}

#[test]
fn protected_redirects_guest_to_login() {
    let session = Session::new(TokenStore::in_memory());
    assert_eq!(
        check_protected(&session),
        GuardDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn guest_allows_unauthenticated_user() {
    let session = Session::new(TokenStore::in_memory());
    assert_eq!(check_guest(&session), GuardDecision::Allow);
}

#[test]
fn guest_redirects_authenticated_user_to_tasks() {
    assert_eq!(
        check_guest(&authenticated_session()),
        GuardDecision::Redirect(TASKS_PATH)
    );
}
