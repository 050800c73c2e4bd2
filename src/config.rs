//! API endpoint configuration.
//!
//! The backend deployment varies: some environments serve the API from the
//! same origin under `/api`, others wrap login payloads in a
//! `{ success, message, data }` envelope. Both knobs live here so the rest
//! of the client stays deployment-agnostic.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// How the login endpoint wraps its response payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvelopeMode {
    /// Prefer a `data` object when the body has one, otherwise read the
    /// body itself. Handles both deployed variants without configuration.
    #[default]
    Auto,
    /// Bare `{ token, user }` body.
    Bare,
    /// `{ success, message, data: { token, expiresIn, user } }` body.
    Wrapped,
}

/// Base URL and payload conventions for the remote API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub envelope: EnvelopeMode,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_owned(),
            envelope: EnvelopeMode::Auto,
        }
    }
}

impl ApiConfig {
    /// Join the base URL with an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
