use std::sync::Arc;

use crate::app::App;
use crate::utils::format;

pub fn execute(app: &Arc<App>) -> Result<(), String> {
    super::require_dashboard(app)?;

    let balance = app.with_state(|state| state.snapshot.as_ref().map(|s| s.balance));
    match balance {
        Some(balance) => println!("💰 Saldo bersama: {}", format::format_rupiah(balance)),
        None => println!("Balance not loaded yet; the first sync has not landed."),
    }
    Ok(())
}
