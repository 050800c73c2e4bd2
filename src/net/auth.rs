//! Login against the auth endpoint.
//!
//! The server signals "no such user" two different ways depending on the
//! deployment: a plain 404, or a 2xx body that simply lacks a token. Both
//! are mapped to [`LoginOutcome::UnknownUser`] so the UI can offer account
//! creation, but the reason is kept distinct — the token-less 2xx variant
//! looks like a data-contract bug on the server side and is logged when it
//! occurs rather than silently normalized.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::config::EnvelopeMode;
use crate::net::error::{ApiError, error_message};
use crate::net::http::{ApiClient, Method};
use crate::net::types::{LoginRequest, LoginResult, User};

/// Result of a login attempt that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token and user committed to the session.
    Success(LoginResult),
    /// The account does not exist; the caller may retry with
    /// `create = true` after confirmation.
    UnknownUser(UnknownUserReason),
}

/// How the server signalled the unknown account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnknownUserReason {
    /// HTTP 404.
    NotFound,
    /// HTTP 2xx whose payload carried no token.
    MissingToken,
}

/// `POST /auth/login`. On success the session is updated before this
/// returns, so token and user are already consistent when the caller
/// observes the outcome. The token store is untouched on every other path.
pub async fn login(
    client: &ApiClient,
    request: &LoginRequest,
) -> Result<LoginOutcome, ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let raw = client.send(Method::Post, "/auth/login", Some(&body)).await?;

    if raw.status == 404 {
        return Ok(LoginOutcome::UnknownUser(UnknownUserReason::NotFound));
    }
    if !(200..300).contains(&raw.status) {
        return Err(ApiError::Status {
            status: raw.status,
            message: error_message(&raw.body, "login failed"),
        });
    }

    let outcome = parse_login_body(&raw.body, client.config().envelope)?;
    match &outcome {
        LoginOutcome::Success(result) => client.session().apply_login(result),
        LoginOutcome::UnknownUser(UnknownUserReason::MissingToken) => {
            leptos::logging::warn!(
                "login returned {} without a token; treating as unknown user",
                raw.status
            );
        }
        LoginOutcome::UnknownUser(UnknownUserReason::NotFound) => {}
    }
    Ok(outcome)
}

/// Parse a 2xx login body according to the configured envelope.
pub fn parse_login_body(body: &Value, mode: EnvelopeMode) -> Result<LoginOutcome, ApiError> {
    let payload = match mode {
        EnvelopeMode::Bare => body,
        EnvelopeMode::Wrapped => body
            .get("data")
            .filter(|d| d.is_object())
            .ok_or_else(|| ApiError::Decode("missing data envelope".to_owned()))?,
        EnvelopeMode::Auto => body.get("data").filter(|d| d.is_object()).unwrap_or(body),
    };

    let token = payload
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty());

    let Some(token) = token else {
        return Ok(LoginOutcome::UnknownUser(UnknownUserReason::MissingToken));
    };

    let user_value = payload
        .get("user")
        .cloned()
        .ok_or_else(|| ApiError::Decode("login payload has a token but no user".to_owned()))?;
    let user: User =
        serde_json::from_value(user_value).map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(LoginOutcome::Success(LoginResult {
        token: token.to_owned(),
        user,
    }))
}
