//! Toast notifications
//!
//! The pipeline and guards hand back messages as values; a [`ToastSink`]
//! is where the embedding host actually shows them. The tracing sink is
//! the default for headless use; the recording sink exists for tests and
//! for hosts that drain toasts into their own UI.

use std::sync::Mutex;

use tracing::{error, info, warn};

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// Receiver for user-facing notification messages
pub trait ToastSink: Send + Sync {
    fn show(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.show(ToastLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.show(ToastLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.show(ToastLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.show(ToastLevel::Error, message);
    }
}

/// Sink that forwards toasts to the tracing subscriber
#[derive(Debug, Default)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn show(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Success | ToastLevel::Info => info!(toast = true, "{}", message),
            ToastLevel::Warning => warn!(toast = true, "{}", message),
            ToastLevel::Error => error!(toast = true, "{}", message),
        }
    }
}

/// Sink that records every toast for later inspection
#[derive(Debug, Default)]
pub struct RecordingToasts {
    entries: Mutex<Vec<(ToastLevel, String)>>,
}

impl RecordingToasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, in order
    pub fn entries(&self) -> Vec<(ToastLevel, String)> {
        lock(&self.entries).clone()
    }

    /// Drop recorded entries
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }
}

impl ToastSink for RecordingToasts {
    fn show(&self, level: ToastLevel, message: &str) {
        lock(&self.entries).push((level, message.to_string()));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
