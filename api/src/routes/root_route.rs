//! GET / — liveness probe.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Handler: GET /
///
/// # Example
/// ```bash
/// curl http://127.0.0.1:8000/
/// # {"message":"SuccessAI Backend is running!"}
/// ```
pub async fn root_route(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{} is running!", state.config.service_name),
    })
}
