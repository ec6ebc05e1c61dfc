use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::ledger::models::{ApiError, LoginRequest, RegisterRequest};
use crate::app::App;
use crate::models::Session;
use crate::store::StoreError;

/// Fallback shown when the server rejects a login/registration without a
/// usable message; kept verbatim from the product copy
const AUTH_FALLBACK_MSG: &str = "Gagal masuk";

#[derive(Debug, Error)]
pub enum AuthError {
    /// The server said no; the message is user-visible as-is
    #[error("{0}")]
    Rejected(String),
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

/// The user-visible message for a failed auth call: the server's `msg`
/// when one came through, the fallback otherwise
fn rejection(e: ApiError) -> AuthError {
    let msg = match e {
        ApiError::BadRequest(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg)
            if !msg.is_empty() =>
        {
            msg
        }
        other => {
            warn!("Auth call failed: {}", other);
            AUTH_FALLBACK_MSG.to_string()
        }
    };
    AuthError::Rejected(msg)
}

/// Log in, persist the session, and start the sync loop. The ready flag is
/// reset so the splash sequence restarts, and all prior ledger state is
/// dropped so the next initial sync primes notification diffing afresh.
pub async fn login(app: &Arc<App>, email: &str, password: &str) -> Result<String, AuthError> {
    let req = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let res = app.api.login(&req).await.map_err(rejection)?;

    let session = Session {
        token: res.token,
        user_name: res.user.name,
    };
    app.store.save(&session)?;

    let user_name = session.user_name.clone();
    app.install_session(session);
    crate::services::sync_service::start(app);
    info!("Logged in as {}", user_name);

    Ok(user_name)
}

/// Register a new user. No auto-login: the caller is told to log in next.
pub async fn register(
    app: &Arc<App>,
    email: &str,
    password: &str,
    name: &str,
) -> Result<String, AuthError> {
    let req = RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    };

    let res = app.api.register(&req).await.map_err(rejection)?;
    Ok(res.msg.unwrap_or_else(|| "Berhasil Daftar!".to_string()))
}

/// Log out: the sync loop stops first (no further poll may fire), then the
/// persisted session and all in-memory state go together.
pub fn logout(app: &App) -> Result<(), AuthError> {
    app.stop_sync();
    app.store.clear()?;
    app.reset_state();
    info!("Logged out");
    Ok(())
}

/// The server rejected our token (401): clear everything as a logout
/// would, but leave the loop task alone. The sync loop calls this and then
/// exits by itself; a task must not abort itself mid-cleanup.
pub fn expire_session(app: &App) {
    if let Err(e) = app.store.clear() {
        error!("Failed to clear session store on expiry: {}", e);
    }
    app.reset_state();
    warn!("Session expired; please log in again");
}
