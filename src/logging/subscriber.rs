//! A sink that hands entries to the `tracing` subscriber.
use super::{LogLevel, Logger, Message};
use tracing::{debug, error, info, trace, warn};

/// Forwards entries to the globally installed `tracing` subscriber.
///
/// `Fatal` has no `tracing` counterpart; it is emitted as an error event with
/// `fatal = true` and the process exits with status 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: Message) {
        match level {
            LogLevel::Trace => trace!("{message}"),
            LogLevel::Debug => debug!("{message}"),
            LogLevel::Info => info!("{message}"),
            LogLevel::Warn => warn!("{message}"),
            LogLevel::Error => error!("{message}"),
            LogLevel::Fatal => {
                error!(fatal = true, "{message}");
                std::process::exit(1);
            }
        }
    }
}
