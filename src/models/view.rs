//! View selection

/// The one screen the client shows, selected from the session/readiness
/// flag pair. Login moves `Auth` to `Splash`, the warm-up elapsing moves
/// `Splash` to `Dashboard`, and only logout leaves `Dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Not authenticated; readiness is irrelevant here
    Auth,
    /// Authenticated but still inside the warm-up delay
    Splash,
    /// Authenticated and ready
    Dashboard,
}

impl View {
    pub fn select(authenticated: bool, ready: bool) -> Self {
        match (authenticated, ready) {
            (false, _) => View::Auth,
            (true, false) => View::Splash,
            (true, true) => View::Dashboard,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            View::Auth => "auth",
            View::Splash => "splash",
            View::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}
