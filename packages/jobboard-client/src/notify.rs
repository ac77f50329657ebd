//! Transient user notifications, the terminal stand-in for toasts.

use console::style;
use std::sync::Mutex;

use crate::error::ClientError;

pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Coloured one-liners on stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        eprintln!("{} {}", style("✔").green().bold(), style(message).green());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", style("✘").red().bold(), style(message).red());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Keeps every notification; lets callers assert on what the user saw
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(&self, notification: Notification) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Notification::Error(message.to_string()));
    }
}

/// Report the outcome of one user action.
///
/// Failures are logged and shown, never propagated: the result comes back as
/// `None`.
pub fn report<T>(
    notifier: &dyn Notifier,
    result: Result<T, ClientError>,
    success: &str,
) -> Option<T> {
    match result {
        Ok(value) => {
            notifier.success(success);
            Some(value)
        }
        Err(err) => {
            tracing::error!(error = %err, "Request failed");
            notifier.error(&err.to_string());
            None
        }
    }
}
