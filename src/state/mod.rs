//! Shared client-side state modules.
//!
//! Session/auth state lives in `crate::session`; this module holds the
//! task-list model consumed by the task view.

pub mod tasks;
