use crate::logging::LogLevel;
use clap::{Parser, ValueEnum};

/// Where the service writes its log entries.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Tagged text lines on stderr.
    Text,
    /// Events for the `tracing` subscriber.
    Tracing,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "user-registry")]
#[command(about = "A small REST API for uploading and searching users")]
pub struct AppArgs {
    #[arg(long, default_value = "0.0.0.0", help = "Address to bind to")]
    pub bind: String,

    #[arg(long, default_value_t = 8000, help = "Port to listen on")]
    pub port: u16,

    #[arg(long, value_enum, default_value_t = LogSink::Text, help = "Log output")]
    pub log_sink: LogSink,

    #[arg(long, help = "Disable colored level tags in text output")]
    pub no_color: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Highest level a request holds back until it fails"
    )]
    pub suppress_level: LogLevel,

    #[arg(
        long,
        value_enum,
        default_value_t = LogLevel::Error,
        help = "Lowest level that prints a request's held back entries"
    )]
    pub dump_level: LogLevel,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
