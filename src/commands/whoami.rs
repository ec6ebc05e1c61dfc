use std::sync::Arc;

use crate::app::App;

pub fn execute(app: &Arc<App>) -> Result<(), String> {
    let (user, view) = (app.current_user(), app.view());
    match user {
        Some(user) => println!("👤 {} (view: {})", user, view),
        None => println!("👤 Not logged in (view: {})", view),
    }
    Ok(())
}
