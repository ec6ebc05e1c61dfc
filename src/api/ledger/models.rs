use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for POST /auth/register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Response from POST /auth/register; only the message is used
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub msg: Option<String>,
}

/// Request body for POST /auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from POST /auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub name: String,
}

/// Direction of a ledger transaction, `"plus"`/`"minus"` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Plus,
    Minus,
}

impl TransactionKind {
    /// Default note used when the user supplies none
    pub fn default_note(&self) -> &'static str {
        match self {
            TransactionKind::Plus => "Deposit",
            TransactionKind::Minus => "Withdrawal",
        }
    }
}

/// One immutable ledger entry as the server returns it, newest first.
/// The wire names (`_id`, `type`, `user`) are mapped to explicit fields so
/// a malformed response fails decoding instead of propagating missing data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub note: String,
    #[serde(rename = "user")]
    pub author: String,
    pub date: DateTime<Utc>,
}

/// Response from GET /ledger/data: the balance and the full history,
/// always replaced together as one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub balance: i64,
    pub transactions: Vec<Transaction>,
}

/// Request body for POST /ledger/add
#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub note: String,
    #[serde(rename = "user")]
    pub author: String,
}

/// Error body the ledger API returns on failures
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub msg: Option<String>,
}

/// Comprehensive error type for ledger API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized; the session token is no longer valid
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Response did not match the expected schema
    #[error("Decode Error: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the failure means the session has expired and the client
    /// must force a logout
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_decodes_wire_names() {
        let body = r#"{
            "balance": 1250000,
            "transactions": [
                {
                    "_id": "65f1c0ffee",
                    "type": "plus",
                    "amount": 500000,
                    "note": "Deposit",
                    "user": "Alice",
                    "date": "2024-05-03T02:07:00.000Z"
                }
            ]
        }"#;

        let snapshot: LedgerSnapshot = serde_json::from_str(body).expect("decode failed");
        assert_eq!(snapshot.balance, 1250000);
        assert_eq!(snapshot.transactions.len(), 1);

        let tx = &snapshot.transactions[0];
        assert_eq!(tx.id, "65f1c0ffee");
        assert_eq!(tx.kind, TransactionKind::Plus);
        assert_eq!(tx.author, "Alice");
    }

    #[test]
    fn test_missing_field_is_a_decode_failure() {
        // No `user` field: the duck-typed shape is rejected, not defaulted
        let body = r#"{
            "balance": 100,
            "transactions": [
                {"_id": "a", "type": "minus", "amount": 5, "note": "x", "date": "2024-05-03T02:07:00Z"}
            ]
        }"#;

        assert!(serde_json::from_str::<LedgerSnapshot>(body).is_err());
    }

    #[test]
    fn test_new_transaction_serializes_wire_names() {
        let tx = NewTransaction {
            kind: TransactionKind::Minus,
            amount: 25000,
            note: "Withdrawal".to_string(),
            author: "Bob".to_string(),
        };

        let json = serde_json::to_value(&tx).expect("serialize failed");
        assert_eq!(json["type"], "minus");
        assert_eq!(json["user"], "Bob");
        assert_eq!(json["amount"], 25000);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(serde_json::from_str::<TransactionKind>("\"sideways\"").is_err());
    }
}
