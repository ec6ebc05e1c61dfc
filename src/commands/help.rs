pub fn execute() -> Result<(), String> {
    println!("📖 celengan - shared savings ledger");
    println!();
    println!("🔑 Account");
    println!("  register <email> <password> <name>   Create an account (alias: daftar)");
    println!("  login <email> <password>             Log in (alias: masuk)");
    println!("  logout                               Log out and forget the session (alias: keluar)");
    println!();
    println!("💰 Ledger");
    println!("  balance                              Show the shared balance (aliases: saldo, bal)");
    println!("  history [n]                          Show the newest transactions (aliases: riwayat, tx)");
    println!("  activity                             Show the derived activity list (alias: aktivitas)");
    println!("  deposit <amount> [note]              Add funds (alias: nabung)");
    println!("  withdraw <amount> [note]             Withdraw funds (alias: tarik)");
    println!();
    println!("🧭 Misc");
    println!("  whoami                               Show the current user and view (alias: profile)");
    println!("  help                                 Show this message (alias: ?)");
    println!("  quit                                 Exit; the session stays saved (alias: exit)");
    Ok(())
}
