use std::sync::Arc;

use crate::api::ledger::TransactionKind;
use crate::app::App;
use crate::services::transaction_service;
use crate::utils::format;

pub async fn execute(app: &Arc<App>, args: &[&str]) -> Result<(), String> {
    super::require_dashboard(app)?;

    let amount_text = args.first().copied().unwrap_or("");
    let note = if args.len() > 1 {
        Some(args[1..].join(" "))
    } else {
        None
    };

    let amount =
        transaction_service::submit(app, TransactionKind::Minus, amount_text, note.as_deref())
            .await
            .map_err(|e| e.to_string())?;

    println!(
        "✅ Withdrew {} from the shared ledger.",
        format::format_rupiah(amount)
    );
    Ok(())
}
