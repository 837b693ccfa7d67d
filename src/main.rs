//! The main entry point for the user-registry service.
mod app;
mod logging;
mod storage;
mod types;
mod web;

use anyhow::Result;

/// The main function of the application.
///
/// Parses the command line, then serves the user API until the process is
/// asked to stop.
///
/// # Errors
///
/// Returns an error if the server cannot be set up.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
