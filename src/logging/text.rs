//! A sink that renders entries as tagged lines of text.
use super::{LogLevel, Logger, Message};
use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

const RENDER_FAILED: &str = "<message failed to render>";

/// Writes `"<timestamp> <tag> <message>"` lines to an output stream.
///
/// A [`LogLevel::Fatal`] entry is written and flushed, then the process exits
/// with status 1.
pub struct TextLogger<W: Write + Send> {
    out: Mutex<W>,
    color: bool,
}

impl TextLogger<io::Stderr> {
    /// Creates a logger writing to standard error.
    pub fn stderr(color: bool) -> Self {
        Self::new(io::stderr(), color)
    }
}

impl<W: Write + Send> TextLogger<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    fn tag(&self, level: LogLevel) -> String {
        if !self.color {
            return level.tag().to_string();
        }
        match level {
            LogLevel::Trace | LogLevel::Debug => level.tag().dimmed().to_string(),
            LogLevel::Info => level.tag().green().to_string(),
            LogLevel::Warn => level.tag().yellow().to_string(),
            LogLevel::Error | LogLevel::Fatal => level.tag().red().bold().to_string(),
        }
    }

    /// Formats one line without the trailing newline. A message that fails to
    /// render is replaced by a marker instead of aborting the write.
    fn render(&self, level: LogLevel, message: &Message) -> String {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut line = format!("{timestamp} {} ", self.tag(level));
        let rendered = line.len();
        if write!(line, "{message}").is_err() {
            line.truncate(rendered);
            line.push_str(RENDER_FAILED);
        }
        line
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // Nowhere to report a failing log stream.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

impl<W: Write + Send> Logger for TextLogger<W> {
    fn log(&self, level: LogLevel, message: Message) {
        let line = self.render(level, &message);
        self.write_line(&line);

        if level == LogLevel::Fatal {
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::msg;
    use std::sync::Arc;

    /// A cloneable in-memory writer so the test can read what was logged.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn writes_one_tagged_line_per_entry() {
        let buf = SharedBuf::default();
        let logger = TextLogger::new(buf.clone(), false);

        logger.debug(msg!("loaded {} users", 2));
        logger.warn("disk almost full".into());

        let lines = buf.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[debug      ] loaded 2 users"), "{}", lines[0]);
        assert!(lines[1].ends_with("[WARNING   i] disk almost full"), "{}", lines[1]);
    }

    #[test]
    fn render_failure_is_written_as_a_marker() {
        let buf = SharedBuf::default();
        let logger = TextLogger::new(buf.clone(), false);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.info(Message::from_fn(|f| {
                f.write_str("half")?;
                Err(std::fmt::Error)
            }));
        }));
        logger.info("next".into());

        assert!(outcome.is_ok());
        let lines = buf.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&format!("[INFO      i] {RENDER_FAILED}")), "{}", lines[0]);
        assert!(lines[1].ends_with("[INFO      i] next"), "{}", lines[1]);
    }

    #[test]
    fn lines_start_with_a_timestamp() {
        let buf = SharedBuf::default();
        let logger = TextLogger::new(buf.clone(), false);

        logger.info("started".into());

        let line = &buf.lines()[0];
        let (timestamp, _) = line.split_once(' ').unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(), "{line}");
    }
}
