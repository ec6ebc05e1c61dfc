use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::app::{App, SyncHandle};
use crate::services::{auth_service, notification_service};

/// Capacity of the forced-sync channel; a burst of requests beyond this
/// coalesces into one pending sync
const FORCE_QUEUE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// Snapshot fetched and applied
    Synced,
    /// Fetch failed; local state stays stale until the next tick
    Failed,
    /// The token was rejected (or gone); the session is over
    Expired,
}

/// One fetch cycle: GET the ledger snapshot and replace all local ledger
/// state with it. Non-auth failures are logged and swallowed; a 401 expires
/// the session.
pub async fn sync(app: &App, initial: bool) -> SyncStatus {
    let token = match app.token() {
        Some(token) => token,
        None => return SyncStatus::Expired,
    };

    match app.api.fetch_data(&token).await {
        Ok(snapshot) => {
            debug!(
                balance = snapshot.balance,
                transactions = snapshot.transactions.len(),
                initial,
                "Ledger synced"
            );
            if let Some(note) = apply_snapshot(app, snapshot, initial) {
                app.notifier.push(&note);
            }
            SyncStatus::Synced
        }
        Err(e) if e.is_unauthorized() => {
            warn!("Session expired during sync: {}", e);
            auth_service::expire_session(app);
            SyncStatus::Expired
        }
        Err(e) => {
            warn!("Sync failed: {}", e);
            SyncStatus::Failed
        }
    }
}

/// Replace balance, history, activity and the last-seen id in one critical
/// section, and decide whether this snapshot warrants a push. The push
/// itself happens after the lock is released.
fn apply_snapshot(
    app: &App,
    snapshot: crate::api::ledger::LedgerSnapshot,
    initial: bool,
) -> Option<crate::models::PushNote> {
    app.with_state(|state| {
        // Logged out while the fetch was in flight; drop the response
        let current_user = state.session.as_ref()?.user_name.clone();

        state.activity = notification_service::derive_notifications(&snapshot);

        let note = snapshot.transactions.first().map(|head| {
            let alert = notification_service::head_change_alert(
                state.last_seen.as_deref(),
                head,
                &current_user,
                initial,
            );
            // Recorded regardless of whether an alert fires
            state.last_seen = Some(head.id.clone());
            alert
        });

        state.snapshot = Some(snapshot);
        note.flatten()
    })
}

/// Start the sync loop for the current session: one immediate sync, the
/// warm-up sleep that holds the splash view, then a fixed-period ticker
/// interleaved with forced-sync requests. Everything runs on one task, so
/// syncs never overlap and aborting the task cancels every timer.
pub fn start(app: &Arc<App>) {
    let (force_tx, force_rx) = mpsc::channel(FORCE_QUEUE);
    let task = tokio::spawn(run_loop(Arc::clone(app), force_rx));
    app.install_sync_handle(SyncHandle { task, force_tx });
}

async fn run_loop(app: Arc<App>, mut force_rx: mpsc::Receiver<()>) {
    if sync(&app, true).await == SyncStatus::Expired {
        return;
    }

    sleep(app.config.ready_delay).await;
    app.mark_ready();
    info!("Warm-up elapsed; dashboard ready");

    let period = app.config.poll_interval;
    let mut ticker = interval_at(Instant::now() + period, period);
    // A slow fetch delays the next tick instead of stacking ticks behind it
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            request = force_rx.recv() => {
                if request.is_none() {
                    return;
                }
                debug!("Forced sync requested");
            }
        }

        if sync(&app, false).await == SyncStatus::Expired {
            return;
        }
    }
}
