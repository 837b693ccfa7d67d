pub mod args;
mod setup;

pub use args::AppArgs;

use crate::logging::{msg, SharedLogger};
use anyhow::Result;

pub async fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli()).await
}

pub async fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp {
        listener,
        state,
        logger,
    } = setup::prepare(args).await?;

    logger.info("Server started".into());
    let served = crate::web::serve(listener, state, shutdown_signal(logger.clone())).await;
    match served {
        Ok(()) => {
            logger.info("HTTP handler stopped".into());
            logger.info("Server gracefully shut down".into());
        }
        Err(e) => logger.fatal(msg!("Error during shutdown: {e:#}")),
    }

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal(logger: SharedLogger) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            logger.error(msg!("Failed to listen for Ctrl-C: {e}"));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    logger.info("Shutting down the server".into());
}
