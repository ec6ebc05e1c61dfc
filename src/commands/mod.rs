pub mod activity;
pub mod balance;
pub mod deposit;
pub mod help;
pub mod history;
pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;
pub mod withdraw;

use std::sync::Arc;

use crate::app::App;
use crate::models::View;

#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Parse one REPL line and run the matching command. Errors render
/// uniformly here; commands only describe what went wrong.
pub async fn handle_line(app: &Arc<App>, line: &str) -> LineOutcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return LineOutcome::Continue;
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let result = match command.as_str() {
        "help" | "?" => help::execute(),
        "register" | "daftar" => register::execute(app, args).await,
        "login" | "masuk" => login::execute(app, args).await,
        "logout" | "keluar" => logout::execute(app),
        "balance" | "saldo" | "bal" => balance::execute(app),
        "history" | "riwayat" | "tx" => history::execute(app, args),
        "activity" | "aktivitas" => activity::execute(app),
        "deposit" | "nabung" => deposit::execute(app, args).await,
        "withdraw" | "tarik" => withdraw::execute(app, args).await,
        "whoami" | "profile" => whoami::execute(app),
        "quit" | "exit" => return LineOutcome::Quit,
        other => Err(format!(
            "Unknown command '{}'. Type `help` for the command list.",
            other
        )),
    };

    if let Err(e) = result {
        println!("❌ {}", e);
    }

    LineOutcome::Continue
}

/// Dashboard-only commands answer with a hint in the other views instead
/// of touching ledger state
pub(crate) fn require_dashboard(app: &App) -> Result<(), String> {
    match app.view() {
        View::Auth => Err("Not logged in. Use `login <email> <password>` first.".to_string()),
        View::Splash => Err("Still preparing your data, try again in a moment.".to_string()),
        View::Dashboard => Ok(()),
    }
}
