mod api;
mod response;
pub mod upload;

pub use api::{AppState, TapeLevels};

use anyhow::Result;
use axum::{
    routing::{get, put},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Builds the router serving the user endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", put(api::create_users).post(api::create_users))
        .route("/users/search", get(api::search_users))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves, then waits for
/// in-flight requests to finish.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
