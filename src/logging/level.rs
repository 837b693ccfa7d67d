//! Severity levels shared by every logger in the crate.
use clap::ValueEnum;
use std::fmt;

/// The severity of a log entry.
///
/// Levels are totally ordered by rank, `Trace` being the quietest and `Fatal`
/// the loudest. Thresholds are always compared with `<=` / `>=` on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// All levels, quietest first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// The fixed-width tag the text sink prints in front of each message.
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[trace      ]",
            LogLevel::Debug => "[debug      ]",
            LogLevel::Info => "[INFO      i]",
            LogLevel::Warn => "[WARNING   i]",
            LogLevel::Error => "[ERROR     E]",
            LogLevel::Fatal => "[FATAL     E]",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_rank() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert_eq!(LogLevel::ALL.iter().max(), Some(&LogLevel::Fatal));
    }

    #[test]
    fn tags_share_one_width() {
        let width = LogLevel::Trace.tag().len();
        assert!(LogLevel::ALL.iter().all(|level| level.tag().len() == width));
    }
}
