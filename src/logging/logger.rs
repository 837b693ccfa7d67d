//! The capability every sink implements.
use super::{LogLevel, Message};
use std::sync::Arc;

/// A sink accepting messages at each severity.
///
/// Logging is fire-and-forget: nothing is returned and rendering failures are
/// the sink's own concern. Terminal sinks must end the process on
/// [`LogLevel::Fatal`] once the message has been delivered.
pub trait Logger: Send + Sync {
    /// Delivers `message` at `level`.
    fn log(&self, level: LogLevel, message: Message);

    /// Whether this sink drops everything it receives.
    ///
    /// Decorators use this to avoid wrapping a sink that does no work.
    fn is_discarding(&self) -> bool {
        false
    }

    fn trace(&self, message: Message) {
        self.log(LogLevel::Trace, message);
    }

    fn debug(&self, message: Message) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: Message) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: Message) {
        self.log(LogLevel::Warn, message);
    }

    fn error(&self, message: Message) {
        self.log(LogLevel::Error, message);
    }

    fn fatal(&self, message: Message) {
        self.log(LogLevel::Fatal, message);
    }
}

/// The form in which loggers are handed to collaborators.
pub type SharedLogger = Arc<dyn Logger>;
