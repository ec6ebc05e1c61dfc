//! Notification models

use chrono::{DateTime, Utc};

use crate::api::ledger::TransactionKind;

/// One entry of the derived activity list. Recomputed wholesale from the
/// newest transactions on every sync; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: String,
    pub sender: String,
    pub amount: i64,
    pub kind: TransactionKind,
    pub occurred_at: DateTime<Utc>,
}

/// A native notification handed to the platform sink, fire-and-forget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushNote {
    pub title: String,
    pub body: String,
    /// When the host should deliver it; `None` means immediately
    pub deliver_at: Option<DateTime<Utc>>,
}

impl PushNote {
    pub fn now(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            deliver_at: None,
        }
    }
}
