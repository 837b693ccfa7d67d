//! This module handles the initial setup of the application.
use super::args::{AppArgs, LogSink};
use crate::logging::{msg, SharedLogger, TextLogger, TracingLogger};
use crate::storage::InMemoryUserStore;
use crate::web::{AppState, TapeLevels};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Contains all the necessary components for the server to run.
pub struct PreparedApp {
    /// The bound listener for the HTTP API.
    pub listener: TcpListener,
    /// Shared state handed to every request.
    pub state: AppState,
    /// The process-level logger.
    pub logger: SharedLogger,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Configures the `tracing` subscriber.
/// 2. Builds the root logger selected on the command line.
/// 3. Creates the user store.
/// 4. Binds the HTTP listener.
///
/// # Errors
///
/// This function will return an error if the listener cannot be bound.
pub async fn prepare(args: AppArgs) -> Result<PreparedApp> {
    configure_tracing();

    let logger = root_logger(&args);
    let levels = TapeLevels {
        suppress: args.suppress_level,
        dump: args.dump_level,
    };
    if levels.suppress >= levels.dump {
        let TapeLevels { suppress, dump } = levels;
        logger.warn(msg!(
            "Suppress level {suppress} is not below dump level {dump}; {dump} entries will be held back"
        ));
    }

    let state = AppState {
        store: Arc::new(InMemoryUserStore::new()),
        logger: logger.clone(),
        levels,
    };

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr()?;
    logger.info(msg!("Listening on http://{local}"));

    Ok(PreparedApp {
        listener,
        state,
        logger,
    })
}

/// Installs the `tracing` subscriber. `RUST_LOG` overrides the default filter.
fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,user_registry=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Builds the logger every other component logs through.
fn root_logger(args: &AppArgs) -> SharedLogger {
    match args.log_sink {
        LogSink::Text => Arc::new(TextLogger::stderr(!args.no_color)),
        LogSink::Tracing => Arc::new(TracingLogger),
    }
}
