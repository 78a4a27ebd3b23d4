use async_trait::async_trait;
use tracing::warn;

use super::{Confirmation, Notice, Notifier};
use crate::terminal::Console;

/// Prints notices to the console and reads confirmations from it.
pub struct TerminalNotifier {
    console: Console,
}

impl TerminalNotifier {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, notice: Notice) {
        let line = format!("[{}] {} {}", notice.level, notice.title, notice.text);
        if let Err(e) = self.console.print(line.trim_end()) {
            warn!(error = %e, "failed to print notice");
        }
    }

    async fn confirm(&self, confirmation: &Confirmation) -> bool {
        let prompt = format!(
            "{} {} (y = {}, n = {}) ",
            confirmation.title,
            confirmation.text,
            confirmation.confirm_label,
            confirmation.cancel_label
        );
        match self.console.read_line(&prompt).await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
