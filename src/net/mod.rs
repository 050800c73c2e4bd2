//! Network layer: wire types, the authorized HTTP client, and the
//! auth/task endpoint helpers built on top of it.
//!
//! Real HTTP happens only in the browser (`hydrate` feature) via `gloo-net`;
//! on native builds the client returns [`error::ApiError::Unavailable`] so
//! the parsing and authorization logic stays testable on the host.

pub mod auth;
pub mod error;
pub mod http;
pub mod tasks;
pub mod types;
