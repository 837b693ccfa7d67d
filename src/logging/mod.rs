//! This module contains the logging infrastructure for the application.
//!
//! Every component receives a [`SharedLogger`] instead of reaching for a
//! process-wide default. Request handlers wrap it in a [`Tape`] so that debug
//! breadcrumbs are only printed when the request ends in an error.
pub mod level;
pub mod logger;
pub mod message;
pub mod nil;
pub mod prefixed;
pub mod subscriber;
pub mod tape;
pub mod text;

#[cfg(test)]
pub mod testing;

pub use level::LogLevel;
pub use logger::{Logger, SharedLogger};
pub(crate) use message::msg;
pub use message::Message;
pub use nil::NilLogger;
pub use prefixed::prefixed;
pub use subscriber::TracingLogger;
pub use tape::Tape;
pub use text::TextLogger;
