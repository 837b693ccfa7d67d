use super::{LogLevel, Logger, Message};

/// Ignores every entry except [`LogLevel::Fatal`], which panics with the
/// rendered message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilLogger;

impl Logger for NilLogger {
    fn log(&self, level: LogLevel, message: Message) {
        if level == LogLevel::Fatal {
            panic!("{message}");
        }
    }

    fn is_discarding(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::msg;

    #[test]
    fn drops_non_fatal_entries() {
        let logger = NilLogger;
        logger.trace(msg!("{}", 1));
        logger.info("info".into());
        logger.error("error".into());
        assert!(logger.is_discarding());
    }

    #[test]
    #[should_panic(expected = "shutdown failed: timeout")]
    fn fatal_panics_with_message() {
        NilLogger.fatal(msg!("shutdown failed: {}", "timeout"));
    }
}
