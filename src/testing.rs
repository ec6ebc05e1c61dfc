//! Test support: an in-memory ledger standing in for the HTTP API, a
//! recording notification sink, and app builders with millisecond timers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::ledger::client::LedgerApi;
use crate::api::ledger::models::{
    ApiError, LedgerSnapshot, LoginRequest, LoginResponse, LoginUser, NewTransaction,
    RegisterRequest, RegisterResponse, Transaction, TransactionKind,
};
use crate::app::App;
use crate::config::Config;
use crate::models::{PushNote, Session};
use crate::notify::Notifier;
use crate::store::SessionStore;

pub fn tx(id: &str, author: &str, kind: TransactionKind, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount,
        note: kind.default_note().to_string(),
        author: author.to_string(),
        date: Utc::now(),
    }
}

pub fn snapshot_of(balance: i64, transactions: Vec<Transaction>) -> LedgerSnapshot {
    LedgerSnapshot {
        balance,
        transactions,
    }
}

struct FakeState {
    snapshot: LedgerSnapshot,
    added: Vec<NewTransaction>,
    request_ids: Vec<String>,
    reject_token: bool,
    fail_requests: bool,
    reject_login_msg: Option<String>,
    next_id: u64,
}

impl Default for FakeState {
    fn default() -> Self {
        FakeState {
            snapshot: snapshot_of(0, Vec::new()),
            added: Vec::new(),
            request_ids: Vec::new(),
            reject_token: false,
            fail_requests: false,
            reject_login_msg: None,
            next_id: 0,
        }
    }
}

/// Scripted stand-in for the remote ledger: serves a settable snapshot and
/// applies submissions server-side so forced re-syncs observe them.
#[derive(Default)]
pub struct FakeLedger {
    state: Mutex<FakeState>,
    fetches: AtomicUsize,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_snapshot(&self, snapshot: LedgerSnapshot) {
        self.state.lock().unwrap().snapshot = snapshot;
    }

    /// Authenticated calls answer 401 from now on
    pub fn reject_token(&self, reject: bool) {
        self.state.lock().unwrap().reject_token = reject;
    }

    /// Every call fails at the network layer from now on
    pub fn fail_fetches(&self, fail: bool) {
        self.state.lock().unwrap().fail_requests = fail;
    }

    /// The next logins are rejected with this server message
    pub fn reject_login(&self, msg: &str) {
        self.state.lock().unwrap().reject_login_msg = Some(msg.to_string());
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn added(&self) -> Vec<NewTransaction> {
        self.state.lock().unwrap().added.clone()
    }

    pub fn request_ids(&self) -> Vec<String> {
        self.state.lock().unwrap().request_ids.clone()
    }

    fn gate(state: &FakeState) -> Result<(), ApiError> {
        if state.fail_requests {
            return Err(ApiError::RequestError("connection refused".to_string()));
        }
        if state.reject_token {
            return Err(ApiError::Unauthorized("Token tidak valid".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerApi for FakeLedger {
    async fn register(&self, _req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let state = self.state.lock().unwrap();
        if state.fail_requests {
            return Err(ApiError::RequestError("connection refused".to_string()));
        }
        Ok(RegisterResponse {
            msg: Some("Pendaftaran berhasil".to_string()),
        })
    }

    async fn login(&self, _req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let state = self.state.lock().unwrap();
        if state.fail_requests {
            return Err(ApiError::RequestError("connection refused".to_string()));
        }
        if let Some(msg) = &state.reject_login_msg {
            return Err(ApiError::BadRequest(msg.clone()));
        }
        Ok(LoginResponse {
            token: "tok-1".to_string(),
            user: LoginUser {
                name: "Alice".to_string(),
            },
        })
    }

    async fn fetch_data(&self, _token: &str) -> Result<LedgerSnapshot, ApiError> {
        let state = self.state.lock().unwrap();
        Self::gate(&state)?;
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(state.snapshot.clone())
    }

    async fn add_transaction(
        &self,
        _token: &str,
        request_id: &str,
        tx: &NewTransaction,
    ) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        Self::gate(&state)?;

        state.added.push(tx.clone());
        state.request_ids.push(request_id.to_string());

        // Apply the submission the way the server would
        state.next_id += 1;
        let id = format!("srv-{}", state.next_id);
        match tx.kind {
            TransactionKind::Plus => state.snapshot.balance += tx.amount,
            TransactionKind::Minus => state.snapshot.balance -= tx.amount,
        }
        let entry = Transaction {
            id,
            kind: tx.kind,
            amount: tx.amount,
            note: tx.note.clone(),
            author: tx.author.clone(),
            date: Utc::now(),
        };
        state.snapshot.transactions.insert(0, entry);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notes: Mutex<Vec<PushNote>>,
}

impl RecordingNotifier {
    pub fn pushed(&self) -> Vec<PushNote> {
        self.notes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn push(&self, note: &PushNote) {
        self.notes.lock().unwrap().push(note.clone());
    }
}

fn test_config() -> Config {
    Config {
        api_url: "http://ledger.invalid/api".to_string(),
        poll_interval: Duration::from_millis(25),
        ready_delay: Duration::from_millis(10),
        session_file: std::env::temp_dir()
            .join("celengan-tests")
            .join(format!("session-{}.json", uuid::Uuid::new_v4())),
        session_key: None,
    }
}

/// A wired but logged-out app over the fake ledger, with millisecond-scale
/// warm-up and poll timers
pub fn test_app() -> (Arc<App>, Arc<FakeLedger>, Arc<RecordingNotifier>) {
    let fake = Arc::new(FakeLedger::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let config = test_config();
    let store = SessionStore::new(config.session_file.clone(), None);

    let app = Arc::new(App::new(
        config,
        Arc::clone(&fake) as Arc<dyn LedgerApi>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        store,
    ));
    (app, fake, notifier)
}

/// Same as [`test_app`], but with a session already persisted and installed
pub fn logged_in_app(user_name: &str) -> (Arc<App>, Arc<FakeLedger>, Arc<RecordingNotifier>) {
    let (app, fake, notifier) = test_app();
    let session = Session {
        token: "tok-1".to_string(),
        user_name: user_name.to_string(),
    };
    app.store.save(&session).expect("session save failed");
    app.install_session(session);
    (app, fake, notifier)
}
