use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;
use thiserror::Error;

type Nonce = [u8; 12];

/// Container format version: `[version_byte][nonce(12)][ciphertext]`
const VERSION: u8 = 0x01;

/// Cryptographic errors
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Encryption failed: {0}")]
    Encryption(String),
    #[error("Decryption failed: {0}")]
    Decryption(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Hex decode error: {0}")]
    HexDecode(String),
    #[error("Base64 decode error: {0}")]
    Base64Decode(String),
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(String),
}

/// A parsed 256-bit sealing key. Parsing once up front keeps key errors at
/// startup instead of at every save/load.
#[derive(Clone)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Parse a key from its 64-character hex form.
    pub fn from_hex(key_hex: &str) -> Result<Self, CryptoError> {
        let key_bytes = hex::decode(key_hex)
            .map_err(|e| CryptoError::HexDecode(e.to_string()))?;

        let key: [u8; 32] = key_bytes.try_into().map_err(|_| {
            CryptoError::InvalidKey("Sealing key must be 32 bytes (256 bits)".to_string())
        })?;

        Ok(SecretKey(key))
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(&self.0.into())
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        f.write_str("SecretKey(..)")
    }
}

/// Seal a secret using AES256-GCM with versioning.
/// Returns base64-encoded data: `[version_byte][nonce(12)][ciphertext]`
pub fn seal(plaintext: &str, key: &SecretKey) -> Result<String, CryptoError> {
    let cipher = key.cipher();

    // Random nonce (12 bytes for GCM) from a cryptographically secure RNG
    let mut nonce_bytes: Nonce = [0u8; 12];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);

    let ciphertext = cipher
        .encrypt((&nonce_bytes).into(), plaintext.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut sealed = Vec::with_capacity(1 + 12 + ciphertext.len());
    sealed.push(VERSION);
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(sealed))
}

/// Open a sealed secret produced by [`seal`].
pub fn open(sealed_b64: &str, key: &SecretKey) -> Result<String, CryptoError> {
    let sealed = BASE64
        .decode(sealed_b64)
        .map_err(|e| CryptoError::Base64Decode(e.to_string()))?;

    if sealed.len() < 13 {
        return Err(CryptoError::InvalidData(
            "Sealed data too short (need at least 1 + 12 bytes for version + nonce)"
                .to_string(),
        ));
    }

    let version = sealed[0];
    if version != VERSION {
        return Err(CryptoError::InvalidData(format!(
            "Unsupported sealing version: {}",
            version
        )));
    }

    let nonce: Nonce = sealed[1..13]
        .try_into()
        .map_err(|_| CryptoError::InvalidData("Failed to extract nonce".to_string()))?;
    let ciphertext = &sealed[13..];

    let plaintext = key
        .cipher()
        .decrypt((&nonce).into(), ciphertext)
        .map_err(|e| CryptoError::Decryption(e.to_string()))?;

    String::from_utf8(plaintext).map_err(|e| CryptoError::Utf8Error(e.to_string()))
}
