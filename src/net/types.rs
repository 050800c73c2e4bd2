//! Wire types shared with the task API.
//!
//! Field names are camelCase on the wire. Timestamps are ISO-8601 strings
//! and are carried opaquely; the client never does date arithmetic on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user. Replaced wholesale on login, cleared on logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

/// Login request body. `create` is only sent when the caller explicitly
/// asks the server to provision a missing account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<bool>,
}

impl LoginRequest {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_owned(),
            create: None,
        }
    }

    /// Same email, but asking the server to create the account.
    pub fn creating(email: &str) -> Self {
        Self {
            email: email.to_owned(),
            create: Some(true),
        }
    }
}

/// The atomic unit written to storage on a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub user: User,
}

/// A task owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub user_id: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body for `POST /tasks`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

/// Body for `PUT /tasks/{id}`. Unset fields are omitted so the server
/// leaves them unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
