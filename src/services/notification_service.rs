use crate::api::ledger::{LedgerSnapshot, Transaction, TransactionKind};
use crate::models::{NotificationItem, PushNote};
use crate::utils::format;

/// How many of the newest transactions feed the activity list
const ACTIVITY_LIMIT: usize = 5;

/// Title of the push raised when someone else's transaction arrives
pub const NEW_TRANSACTION_TITLE: &str = "Transaksi Baru";
/// Title of the push raised right after the user's own submission succeeds
pub const SUBMITTED_TITLE: &str = "Transaksi Berhasil";

/// Map the newest transactions of a snapshot to the activity list, order
/// preserved. Pure; recomputed wholesale on every sync.
pub fn derive_notifications(snapshot: &LedgerSnapshot) -> Vec<NotificationItem> {
    snapshot
        .transactions
        .iter()
        .take(ACTIVITY_LIMIT)
        .map(|tx| NotificationItem {
            id: tx.id.clone(),
            sender: tx.author.clone(),
            amount: tx.amount,
            kind: tx.kind,
            occurred_at: tx.date,
        })
        .collect()
}

/// The one message template of the whole system:
/// "Anda telah menambahkan Rp 500.000" when the sender is the current user,
/// "{sender} telah menarik Rp 25.000" otherwise.
pub fn transaction_message(
    sender: &str,
    current_user: &str,
    kind: TransactionKind,
    amount: i64,
) -> String {
    let action = match kind {
        TransactionKind::Plus => "menambahkan",
        TransactionKind::Minus => "menarik",
    };
    let amount_str = format::format_rupiah(amount);

    if sender == current_user {
        format!("Anda telah {} {}", action, amount_str)
    } else {
        format!("{} telah {} {}", sender, action, amount_str)
    }
}

/// Decide whether a newly observed head transaction warrants a native
/// notification. `last_seen` is the id recorded by the previous sync;
/// an initial sync only primes the id and never notifies, and the user's
/// own transactions never notify from the poll path.
pub fn head_change_alert(
    last_seen: Option<&str>,
    head: &Transaction,
    current_user: &str,
    initial: bool,
) -> Option<PushNote> {
    let changed = last_seen != Some(head.id.as_str());
    if initial || !changed || head.author == current_user {
        return None;
    }

    Some(PushNote::now(
        NEW_TRANSACTION_TITLE,
        transaction_message(&head.author, current_user, head.kind, head.amount),
    ))
}
