use std::sync::Arc;

use crate::app::App;
use crate::services::auth_service;

pub async fn execute(app: &Arc<App>, args: &[&str]) -> Result<(), String> {
    if args.len() < 3 {
        return Err("Usage: register <email> <password> <name>".to_string());
    }

    let email = args[0];
    let password = args[1];
    let name = args[2..].join(" ");

    let msg = auth_service::register(app, email, password, &name)
        .await
        .map_err(|e| e.to_string())?;

    println!("✅ {}", msg);
    println!("Now log in: login {} <password>", email);
    Ok(())
}
