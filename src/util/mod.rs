//! Small view-layer helpers.

pub mod date;
pub mod email;
