//! Session layer: durable token storage, the reactive current-user state,
//! and the navigation guards that read it.
//!
//! DESIGN
//! ======
//! The session is the only durable mutable state in the client. It is
//! constructed once by the application root and handed down via context;
//! there are no ambient singletons. Writes to the token store and to the
//! reactive state always happen together, so token presence and user
//! presence stay consistent — either both set or both absent.

pub mod guard;
pub mod state;
pub mod storage;
pub mod store;

pub use guard::{GuardDecision, LOGIN_PATH, TASKS_PATH};
pub use state::{AuthState, Session};
pub use store::TokenStore;
