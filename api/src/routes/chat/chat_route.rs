//! POST /chat — answers a query grounded on ticket or knowledge-base context.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::{chat_request::ChatRequest, chat_response::ChatResponse},
};

/// Handler: POST /chat
///
/// Malformed bodies and blank queries are rejected here, before any
/// collaborator is called.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/chat \
///   -H 'content-type: application/json' \
///   -d '{"query":"There is an incident with the printer"}'
/// ```
#[instrument(name = "chat_route", skip_all)]
pub async fn chat_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload?;
    if body.query.trim().is_empty() {
        return Err(AppError::unprocessable("query must not be empty"));
    }

    let answer = state.pipeline.handle(&body.query).await?;
    debug!(context_source = %answer.context_source, "chat_route: success");

    Ok(Json(answer.into()))
}
