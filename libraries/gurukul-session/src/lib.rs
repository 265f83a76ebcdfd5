//! Session state for the Gurukul partner portal.
//!
//! Resolves who is signed in through the portal client, caches the answer
//! with a staleness window, and evaluates the route guard on navigation.

mod cache;
mod error;
mod manager;

// Public exports
pub use cache::{StaleCell, SESSION_STALE_AFTER};
pub use error::{Result, SessionError};
pub use manager::SessionManager;
