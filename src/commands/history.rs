use std::sync::Arc;

use chrono::Local;

use crate::api::ledger::TransactionKind;
use crate::app::App;
use crate::utils::{format, table::Table};

const DEFAULT_LIMIT: usize = 10;

pub fn execute(app: &Arc<App>, args: &[&str]) -> Result<(), String> {
    super::require_dashboard(app)?;

    let limit = match args.first() {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("Usage: history [n], got '{}'", raw))?,
        None => DEFAULT_LIMIT,
    };

    let transactions = app.with_state(|state| {
        state
            .snapshot
            .as_ref()
            .map(|s| s.transactions.iter().take(limit).cloned().collect::<Vec<_>>())
    });

    let transactions = match transactions {
        Some(transactions) => transactions,
        None => {
            println!("History not loaded yet; the first sync has not landed.");
            return Ok(());
        }
    };

    if transactions.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }

    let mut table = Table::new(vec!["When", "Who", "", "Amount", "Note"]).right_align(3);
    for tx in &transactions {
        let when = tx.date.with_timezone(&Local).format("%d/%m %H.%M").to_string();
        let sign = match tx.kind {
            TransactionKind::Plus => "+",
            TransactionKind::Minus => "-",
        };
        let amount = format::group_thousands(tx.amount);
        table.add_row(vec![&when, &tx.author, sign, &amount, &tx.note]);
    }

    print!("{}", table.render());
    Ok(())
}
