use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::Session;
use crate::utils::encryption::{self, CryptoError, SecretKey};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Session crypto error: {0}")]
    Crypto(#[from] CryptoError),
    #[error("Session token is sealed but no CELENGAN_SESSION_KEY is configured")]
    SealedWithoutKey,
}

/// On-disk form of a session. The token and the display name are one unit:
/// written together, removed together.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    user_name: String,
    token: String,
    sealed: bool,
}

/// Durable session storage: one JSON file, optionally sealing the token at
/// rest with AES-256-GCM when a key is configured.
pub struct SessionStore {
    path: PathBuf,
    key: Option<SecretKey>,
}

impl SessionStore {
    pub fn new(path: PathBuf, key: Option<SecretKey>) -> Self {
        if key.is_none() {
            warn!("No session key configured; the token will be stored in plain text");
        }
        Self { path, key }
    }

    /// Load the persisted session, if any. A missing file means logged out;
    /// a sealed token without a configured key is a typed failure, not a
    /// silent logout.
    pub fn load(&self) -> Result<Option<Session>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored: StoredSession = serde_json::from_str(&raw)?;

        let token = if stored.sealed {
            let key = self.key.as_ref().ok_or(StoreError::SealedWithoutKey)?;
            encryption::open(&stored.token, key)?
        } else {
            stored.token
        };

        Ok(Some(Session {
            token,
            user_name: stored.user_name,
        }))
    }

    /// Persist a session, replacing any previous one. The write goes through
    /// a temp file and a rename so a crash never leaves a half-written file.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let (token, sealed) = match &self.key {
            Some(key) => (encryption::seal(&session.token, key)?, true),
            None => (session.token.clone(), false),
        };

        let stored = StoredSession {
            user_name: session.user_name.clone(),
            token,
            sealed,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, serde_json::to_vec_pretty(&stored)?)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Remove the persisted session. Idempotent.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join("celengan-tests")
            .join(format!("session-{}.json", uuid::Uuid::new_v4()))
    }

    fn session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user_name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_missing_file_means_logged_out() {
        let store = SessionStore::new(scratch_path(), None);
        assert_eq!(store.load().expect("load failed"), None);
    }

    #[test]
    fn test_save_load_clear_plain() {
        let path = scratch_path();
        let store = SessionStore::new(path.clone(), None);

        store.save(&session()).expect("save failed");
        assert_eq!(store.load().expect("load failed"), Some(session()));

        store.clear().expect("clear failed");
        assert_eq!(store.load().expect("load failed"), None);
        assert!(!path.exists());

        // Clearing again is fine
        store.clear().expect("second clear failed");
    }

    #[test]
    fn test_sealed_round_trip() {
        let key = SecretKey::from_hex(
            "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
        )
        .expect("key parse failed");

        let path = scratch_path();
        let store = SessionStore::new(path.clone(), Some(key));

        store.save(&session()).expect("save failed");

        // The raw token must not appear on disk
        let raw = std::fs::read_to_string(&path).expect("read failed");
        assert!(!raw.contains("tok-123"));

        assert_eq!(store.load().expect("load failed"), Some(session()));
        store.clear().expect("clear failed");
    }

    #[test]
    fn test_sealed_file_without_key_fails_typed() {
        let key = SecretKey::from_hex(
            "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
        )
        .expect("key parse failed");

        let path = scratch_path();
        SessionStore::new(path.clone(), Some(key))
            .save(&session())
            .expect("save failed");

        let keyless = SessionStore::new(path.clone(), None);
        assert!(matches!(keyless.load(), Err(StoreError::SealedWithoutKey)));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_corrupt_file_fails_typed() {
        let path = scratch_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path.clone(), None);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));

        std::fs::remove_file(path).ok();
    }
}
