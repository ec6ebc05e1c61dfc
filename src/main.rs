use std::io::Write as _;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod commands;
mod config;
mod models;
mod notify;
mod services;
mod store;
#[cfg(test)]
mod testing;
mod utils;

use api::ledger::{LedgerApi, LedgerClient};
use app::App;
use config::Config;
use notify::{Notifier, TermNotifier};
use store::SessionStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so they do not fight the prompt on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("celengan=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!("🐷 Starting celengan v{}...", env!("CARGO_PKG_VERSION"));
    info!("   Terminal client for a shared savings ledger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };
    info!("Ledger API: {}", config.api_url);

    let api: Arc<dyn LedgerApi> = Arc::new(LedgerClient::new(config.api_url.clone()));
    let notifier: Arc<dyn Notifier> = Arc::new(TermNotifier);
    let store = SessionStore::new(config.session_file.clone(), config.session_key.clone());

    let app = Arc::new(App::new(config, api, notifier, store));

    // Pick up where the last run left off
    match app.store.load() {
        Ok(Some(session)) => {
            info!("Session restored for {}", session.user_name);
            app.install_session(session);
            services::sync_service::start(&app);
        }
        Ok(None) => info!("No saved session; log in to begin"),
        Err(e) => error!("Could not restore session: {}", e),
    }

    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("celengan> ");
        let _ = std::io::stdout().flush();

        match lines.next_line().await {
            Ok(Some(line)) => {
                if commands::handle_line(&app, &line).await == commands::LineOutcome::Quit {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    // Quit keeps the session file; only logout forgets it
    app.stop_sync();
    info!("Bye");
}
