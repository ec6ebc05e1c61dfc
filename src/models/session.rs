//! Session model

use serde::{Deserialize, Serialize};

/// An authenticated session: the opaque API token plus the display name the
/// server returned at login. Persisted across restarts; absence of a stored
/// session means logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_name: String,
}
