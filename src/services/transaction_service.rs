use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::ledger::models::{ApiError, NewTransaction, TransactionKind};
use crate::app::App;
use crate::models::PushNote;
use crate::services::{auth_service, notification_service};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Amount must not be empty")]
    EmptyAmount,
    #[error("Amount must be a positive whole number, got '{0}'")]
    InvalidAmount(String),
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Gagal transaksi: {0}")]
    Api(#[from] ApiError),
}

/// Parse the user's amount input. Empty input and anything that is not a
/// positive integer are rejected locally, before any network call.
pub fn parse_amount(amount_text: &str) -> Result<i64, SubmitError> {
    let trimmed = amount_text.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::EmptyAmount);
    }

    trimmed
        .parse::<i64>()
        .ok()
        .filter(|&amount| amount > 0)
        .ok_or_else(|| SubmitError::InvalidAmount(trimmed.to_string()))
}

/// Submit one transaction: validate locally, POST it with a fresh
/// idempotency key, push the self-notification, and force a re-sync so the
/// dashboard reflects the new balance. On failure nothing is cleared; the
/// user retries the same command.
pub async fn submit(
    app: &App,
    kind: TransactionKind,
    amount_text: &str,
    note: Option<&str>,
) -> Result<i64, SubmitError> {
    let amount = parse_amount(amount_text)?;

    let (token, user) = app
        .with_state(|state| {
            state
                .session
                .as_ref()
                .map(|s| (s.token.clone(), s.user_name.clone()))
        })
        .ok_or(SubmitError::NotLoggedIn)?;

    let note_text = note
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| kind.default_note().to_string());

    let tx = NewTransaction {
        kind,
        amount,
        note: note_text,
        author: user.clone(),
    };
    let request_id = Uuid::new_v4().to_string();

    match app.api.add_transaction(&token, &request_id, &tx).await {
        Ok(()) => {
            info!(amount, request_id = %request_id, "Transaction submitted");

            // Self-notification fires at submission time, not from the poll
            let body = notification_service::transaction_message(&user, &user, kind, amount);
            app.notifier
                .push(&PushNote::now(notification_service::SUBMITTED_TITLE, body));

            app.request_sync();
            Ok(amount)
        }
        Err(e) if e.is_unauthorized() => {
            warn!("Session expired during submission: {}", e);
            app.stop_sync();
            auth_service::expire_session(app);
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
