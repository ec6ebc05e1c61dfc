use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::utils::encryption::{CryptoError, SecretKey};

/// Default seconds between scheduled polls, override with CELENGAN_POLL_SECS
const DEFAULT_POLL_SECS: u64 = 15;
/// Default warm-up before the dashboard replaces the splash view. Purely
/// cosmetic; correctness does not depend on it.
const DEFAULT_READY_DELAY_MS: u64 = 2500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CELENGAN_API_URL not set")]
    MissingApiUrl,
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("Invalid CELENGAN_SESSION_KEY: {0}")]
    InvalidKey(#[from] CryptoError),
    #[error("Cannot resolve a session file path (set CELENGAN_SESSION_FILE or HOME)")]
    NoSessionPath,
}

/// Process configuration, parsed once at startup from the environment
pub struct Config {
    /// Base URL of the remote ledger API, e.g. `https://ledger.example/api`
    pub api_url: String,
    /// Period of the recurring sync
    pub poll_interval: Duration,
    /// Warm-up delay holding the splash view after login
    pub ready_delay: Duration,
    /// Where the session file lives
    pub session_file: PathBuf,
    /// Key sealing the token at rest; `None` stores it plain
    pub session_key: Option<SecretKey>,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("CELENGAN_API_URL").ok_or(ConfigError::MissingApiUrl)?;

        let poll_secs = match lookup("CELENGAN_POLL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or(ConfigError::InvalidValue("CELENGAN_POLL_SECS", raw))?,
            None => DEFAULT_POLL_SECS,
        };

        let ready_delay_ms = match lookup("CELENGAN_READY_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue("CELENGAN_READY_DELAY_MS", raw))?,
            None => DEFAULT_READY_DELAY_MS,
        };

        let session_file = match lookup("CELENGAN_SESSION_FILE") {
            Some(path) => PathBuf::from(path),
            None => {
                let home = lookup("HOME").ok_or(ConfigError::NoSessionPath)?;
                PathBuf::from(home).join(".celengan").join("session.json")
            }
        };

        let session_key = lookup("CELENGAN_SESSION_KEY")
            .map(|hex_key| SecretKey::from_hex(&hex_key))
            .transpose()?;

        Ok(Config {
            api_url,
            poll_interval: Duration::from_secs(poll_secs),
            ready_delay: Duration::from_millis(ready_delay_ms),
            session_file,
            session_key,
        })
    }
}
