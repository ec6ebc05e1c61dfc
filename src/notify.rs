use tracing::debug;

use crate::models::PushNote;

/// The platform's native notification channel, fire-and-forget. No delivery
/// confirmation is expected or tracked.
pub trait Notifier: Send + Sync {
    fn push(&self, note: &PushNote);
}

/// Terminal stand-in for the native channel: a BEL plus one line on stderr,
/// so notes land outside the prompt's stdout stream.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn push(&self, note: &PushNote) {
        debug!("Pushing notification: {}", note.title);
        match note.deliver_at {
            // No real scheduler here; a future delivery time just shows up
            // on the line
            Some(at) => eprintln!("\x07🔔 {} ({}): {}", note.title, at, note.body),
            None => eprintln!("\x07🔔 {}: {}", note.title, note.body),
        }
    }
}
