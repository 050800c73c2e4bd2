//! Authorized HTTP client — the single path for every outgoing API call.
//!
//! When a token is present it is attached as a bearer credential; otherwise
//! the request goes out unmodified. A 401 response clears the session and
//! fires the unauthorized hook (a redirect to login by default), then the
//! error is re-raised to the caller unchanged so local UI can also react.
//!
//! Real fetches require the browser (`hydrate`); native builds get
//! [`ApiError::Unavailable`], which keeps the status handling and payload
//! helpers testable on the host.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde_json::Value;

use crate::config::ApiConfig;
use crate::net::error::{ApiError, error_message};
use crate::session::guard::redirect_to_login;
use crate::session::state::Session;

/// HTTP methods used by the task API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Status and parsed JSON body of a completed call. Bodies that are empty
/// or not JSON read as `Value::Null`.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// API client holding the endpoint config, the session, and the hook run
/// when a call comes back 401.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: Session,
    on_unauthorized: Arc<dyn Fn() + Send + Sync>,
}

impl ApiClient {
    /// Client with the default unauthorized hook: a browser redirect to
    /// the login entry point.
    pub fn new(config: ApiConfig, session: Session) -> Self {
        Self {
            config,
            session,
            on_unauthorized: Arc::new(redirect_to_login),
        }
    }

    /// Replace the unauthorized hook. Used by tests to observe the
    /// redirect side effect.
    pub fn with_unauthorized_hook(mut self, hook: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.on_unauthorized = hook;
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send a request and return the raw response for any status except
    /// 401, which clears the session, fires the hook, and errors.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.config.endpoint(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };

            if let Some(token) = self.session.token() {
                builder = builder.header("Authorization", &bearer_value(&token));
            }

            let request = match body {
                Some(json) => builder
                    .json(json)
                    .map_err(|e| ApiError::Network(e.to_string()))?,
                None => builder
                    .build()
                    .map_err(|e| ApiError::Network(e.to_string()))?,
            };

            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let body = response.json::<Value>().await.unwrap_or(Value::Null);

            self.handle_status(status)?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// Central 401 handling: clear the session, fire the hook once, and
    /// surface the failure. Everything else passes through.
    fn handle_status(&self, status: u16) -> Result<(), ApiError> {
        if status == 401 {
            leptos::logging::warn!("request rejected with 401, clearing session");
            self.session.logout();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

/// The bearer credential header value.
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-2xx response to [`ApiError::Status`], passing 2xx bodies
/// through.
pub fn expect_success(raw: RawResponse) -> Result<Value, ApiError> {
    if (200..300).contains(&raw.status) {
        Ok(raw.body)
    } else {
        Err(ApiError::Status {
            status: raw.status,
            message: error_message(&raw.body, "request failed"),
        })
    }
}
