//! Navigation guards over the session state.
//!
//! Guards are pure predicates: they decide, the pages navigate. Each page
//! evaluates its guard in a mount effect and redirects on denial.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::state::Session;

/// Public login entry point.
pub const LOGIN_PATH: &str = "/login";
/// The main authenticated view.
pub const TASKS_PATH: &str = "/tasks";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Protected routes: only authenticated users, others go to login.
pub fn check_protected(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Guest-only routes: authenticated users are sent to the task view.
pub fn check_guest(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Redirect(TASKS_PATH)
    } else {
        GuardDecision::Allow
    }
}

/// Hard browser redirect to the login entry point, for use outside the
/// router (the 401 handler). No-op on native builds.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}
