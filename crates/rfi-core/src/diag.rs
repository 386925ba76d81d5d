//! User-visible diagnostics channel.
//!
//! Resolution failures never abort a test-plan load; they are downgraded to
//! a logged warning plus a message through this sink, so whoever is driving
//! the plan (panel, CLI, CI harness) sees that an include came back empty.

use std::sync::Mutex;

/// Receives user-visible error messages. Best-effort, fire-and-forget:
/// implementations must not fail or block resolution.
pub trait DiagnosticSink: Send + Sync {
    fn report_error(&self, message: &str);
}

/// Default sink: forwards to the tracing log at error level.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Captures reported messages for later inspection (tests, status surfaces).
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages reported so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
