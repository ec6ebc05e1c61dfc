use std::sync::Arc;

use crate::app::App;
use crate::services::auth_service;

pub async fn execute(app: &Arc<App>, args: &[&str]) -> Result<(), String> {
    if args.len() != 2 {
        return Err("Usage: login <email> <password>".to_string());
    }

    let name = auth_service::login(app, args[0], args[1])
        .await
        .map_err(|e| e.to_string())?;

    println!("✅ Selamat datang, {}!", name);
    println!("Preparing your dashboard...");
    Ok(())
}
