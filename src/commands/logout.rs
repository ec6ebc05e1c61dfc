use std::sync::Arc;

use crate::app::App;
use crate::models::View;
use crate::services::auth_service;

pub fn execute(app: &Arc<App>) -> Result<(), String> {
    if app.view() == View::Auth {
        return Err("Not logged in.".to_string());
    }

    auth_service::logout(app).map_err(|e| e.to_string())?;
    println!("👋 Logged out.");
    Ok(())
}
