pub mod client;
pub mod models;

pub use client::{LedgerApi, LedgerClient};
pub use models::{LedgerSnapshot, Transaction, TransactionKind};
