//! Test sinks.
use super::{LogLevel, Logger, Message};
use std::sync::{Arc, Mutex, PoisonError};

/// Entries written by one or more [`RecordingLogger`]s, tagged with the name
/// of the recorder that received them, in delivery order.
pub type Journal = Arc<Mutex<Vec<(&'static str, LogLevel, String)>>>;

/// Renders and records every entry. Panics on `Fatal` after recording it, the
/// same way [`NilLogger`](super::NilLogger) terminates.
pub struct RecordingLogger {
    name: &'static str,
    journal: Journal,
}

impl Default for RecordingLogger {
    fn default() -> Self {
        Self::on(&Journal::default(), "recorder")
    }
}

impl RecordingLogger {
    /// Creates a recorder sharing `journal` with other recorders.
    pub fn on(journal: &Journal, name: &'static str) -> Self {
        Self {
            name,
            journal: journal.clone(),
        }
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.journal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(name, _, _)| *name == self.name)
            .map(|(_, level, text)| (*level, text.clone()))
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, text)| text).collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, message: Message) {
        let text = message.to_string();
        self.journal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((self.name, level, text.clone()));

        if level == LogLevel::Fatal {
            panic!("{text}");
        }
    }
}
