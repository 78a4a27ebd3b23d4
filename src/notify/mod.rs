//! User-facing notices and confirmation prompts.
//!
//! The panel depends only on [`Notifier`]; how a notice is shown is up to the
//! implementation.

pub mod terminal;

use async_trait::async_trait;
use strum_macros::Display;

pub use terminal::TerminalNotifier;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error!".to_owned(),
            text: text.into(),
        }
    }
}

/// A blocking yes/no question with explicit labels for both answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Confirmation {
    pub fn delete_record() -> Self {
        Self {
            title: "Delete this record?".to_owned(),
            text: "Do you really want to delete this record?".to_owned(),
            confirm_label: "Yes, delete!".to_owned(),
            cancel_label: "No, cancel".to_owned(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: Notice);

    /// Resolves to `true` only on an explicit affirmative answer.
    async fn confirm(&self, confirmation: &Confirmation) -> bool;
}
