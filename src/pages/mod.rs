//! Page components, one per routable view.

pub mod login;
pub mod tasks;
