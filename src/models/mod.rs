//! Data models for celengan commands and services
//!
//! Wire-facing shapes (transactions, snapshots) live next to the API client
//! in `api::ledger::models`; this module holds the client-side domain types.

pub mod notification;
pub mod session;
pub mod view;

// Re-export commonly used types for convenience
pub use notification::{NotificationItem, PushNote};
pub use session::Session;
pub use view::View;
