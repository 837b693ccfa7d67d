//! A decorator that labels every message before forwarding it.
use super::{LogLevel, Logger, Message, NilLogger, SharedLogger};
use std::sync::Arc;

/// Prepends `"<prefix> "` to every message and forwards it to the inner
/// logger at the same level.
pub struct PrefixedLogger {
    inner: SharedLogger,
    prefix: String,
}

/// Wraps `inner` so that all of its messages start with `prefix`.
///
/// A missing or discarding `inner` yields a [`NilLogger`], since prefixing
/// messages that are dropped anyway is wasted work.
pub fn prefixed(inner: Option<SharedLogger>, prefix: impl Into<String>) -> SharedLogger {
    match inner {
        Some(inner) if !inner.is_discarding() => Arc::new(PrefixedLogger {
            inner,
            prefix: prefix.into(),
        }),
        _ => Arc::new(NilLogger),
    }
}

impl Logger for PrefixedLogger {
    fn log(&self, level: LogLevel, message: Message) {
        self.inner
            .log(level, Message::prefixed(self.prefix.clone(), message));
    }
}
