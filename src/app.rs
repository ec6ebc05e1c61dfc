use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::ledger::{LedgerApi, LedgerSnapshot};
use crate::config::Config;
use crate::models::{NotificationItem, Session, View};
use crate::notify::Notifier;
use crate::store::SessionStore;

/// Handle to the running sync loop task. Dropping the handle does not stop
/// the loop; cancellation is explicit via [`App::stop_sync`].
pub struct SyncHandle {
    pub(crate) task: JoinHandle<()>,
    pub(crate) force_tx: mpsc::Sender<()>,
}

/// Everything the sync and submit completion paths mutate, behind one lock.
/// The balance/transactions pair is only ever replaced as a whole inside a
/// single critical section.
pub struct AppState {
    pub session: Option<Session>,
    pub ready: bool,
    pub snapshot: Option<LedgerSnapshot>,
    pub activity: Vec<NotificationItem>,
    pub last_seen: Option<String>,
}

impl AppState {
    fn logged_out() -> Self {
        AppState {
            session: None,
            ready: false,
            snapshot: None,
            activity: Vec::new(),
            last_seen: None,
        }
    }
}

/// The explicit application context: configuration, the API port, the
/// notification sink, the session store, and the shared state, all passed
/// to handlers instead of living in ambient globals.
pub struct App {
    pub config: Config,
    pub api: Arc<dyn LedgerApi>,
    pub notifier: Arc<dyn Notifier>,
    pub store: SessionStore,
    state: Mutex<AppState>,
    sync: Mutex<Option<SyncHandle>>,
}

impl App {
    pub fn new(
        config: Config,
        api: Arc<dyn LedgerApi>,
        notifier: Arc<dyn Notifier>,
        store: SessionStore,
    ) -> Self {
        App {
            config,
            api,
            notifier,
            store,
            state: Mutex::new(AppState::logged_out()),
            sync: Mutex::new(None),
        }
    }

    /// Run a closure against the shared state. The lock is plain (not
    /// async); callers must not await while inside.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.state.lock().expect("app state poisoned");
        f(&mut state)
    }

    pub fn view(&self) -> View {
        self.with_state(|state| View::select(state.session.is_some(), state.ready))
    }

    pub fn current_user(&self) -> Option<String> {
        self.with_state(|state| state.session.as_ref().map(|s| s.user_name.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.with_state(|state| state.session.as_ref().map(|s| s.token.clone()))
    }

    /// Install a fresh session: readiness resets so the splash sequence
    /// restarts, and all ledger state is dropped so the next initial sync
    /// primes notification diffing from scratch.
    pub fn install_session(&self, session: Session) {
        self.with_state(|state| {
            *state = AppState::logged_out();
            state.session = Some(session);
        });
    }

    /// Drop the in-memory session and everything derived from it
    pub fn reset_state(&self) {
        self.with_state(|state| *state = AppState::logged_out());
    }

    /// Warm-up elapsed; the dashboard may show
    pub fn mark_ready(&self) {
        self.with_state(|state| state.ready = true);
    }

    /// Install the handle of a freshly spawned sync loop, replacing (and
    /// aborting) any loop that was still running.
    pub fn install_sync_handle(&self, handle: SyncHandle) {
        let old = self.sync.lock().expect("sync handle poisoned").replace(handle);
        if let Some(old) = old {
            debug!("Replacing a live sync loop");
            old.task.abort();
        }
    }

    /// Stop the sync loop. After this returns no further poll may fire;
    /// both the warm-up sleep and the ticker live on the aborted task.
    pub fn stop_sync(&self) {
        if let Some(handle) = self.sync.lock().expect("sync handle poisoned").take() {
            handle.task.abort();
        }
    }

    /// Ask the loop for an immediate out-of-band sync. Requests are
    /// coalesced: a burst beyond the channel capacity is dropped.
    pub fn request_sync(&self) {
        if let Some(handle) = self.sync.lock().expect("sync handle poisoned").as_ref() {
            let _ = handle.force_tx.try_send(());
        }
    }
}
