use std::sync::Arc;

use chrono::Local;

use crate::app::App;
use crate::services::notification_service;
use crate::utils::format;

pub fn execute(app: &Arc<App>) -> Result<(), String> {
    super::require_dashboard(app)?;

    let (current_user, activity) = app.with_state(|state| {
        let user = state
            .session
            .as_ref()
            .map(|s| s.user_name.clone())
            .unwrap_or_default();
        (user, state.activity.clone())
    });

    if activity.is_empty() {
        println!("No activity yet.");
        return Ok(());
    }

    println!("🔔 Aktivitas terbaru:");
    for item in &activity {
        let time = format::clock(&item.occurred_at.with_timezone(&Local));
        let message = notification_service::transaction_message(
            &item.sender,
            &current_user,
            item.kind,
            item.amount,
        );
        println!("  [{}] {}", time, message);
    }
    Ok(())
}
