//! HTTP boundary of the chat backend.
//!
//! - `GET /`     → liveness payload
//! - `POST /chat` → grounded answer from the [`contextor::ChatPipeline`]

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

pub mod core;
pub mod error_handler;
pub mod middleware_layer;
mod routes;

pub use crate::core::app_state::{AppConfig, AppState, ConfigError};
use crate::{
    error_handler::AppError,
    middleware_layer::request_id::request_id,
    routes::{chat::chat_route::chat_route, root_route::root_route},
};

/// Build the application router. Used by [`start`] and by tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_route))
        .route("/chat", post(chat_route))
        .layer(middleware::from_fn(request_id))
        .with_state(Arc::new(state))
}

/// Bind to `state.config.api_address` and serve until Ctrl+C.
pub async fn start(state: AppState) -> Result<(), AppError> {
    let addr = state.config.api_address.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
