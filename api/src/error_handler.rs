use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contextor::ChatError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::core::app_state::ConfigError;

/// Message returned for every internal failure. Details stay in the logs.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    /// Request body rejected before reaching the pipeline.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// The chat pipeline failed; the caller only ever sees a generic message.
    #[error(transparent)]
    Chat(#[from] ChatError),
}

impl AppError {
    /// Validation failure on a well-formed body (e.g. blank query).
    pub fn unprocessable(message: impl Into<String>) -> Self {
        AppError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Rejected { status, .. } => *status,
            AppError::Config(_) | AppError::Bind { .. } | AppError::Server(_) | AppError::Chat(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn client_detail(&self) -> String {
        match self {
            AppError::Rejected { message, .. } => message.clone(),
            _ => INTERNAL_ERROR_DETAIL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let AppError::Chat(err) = &self {
            error!(
                collaborator = %err.collaborator(),
                error = %err,
                "chat request failed"
            );
        } else if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            detail: self.client_detail(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Keep axum's status for JSON rejections (400 syntax, 415 content type,
/// 422 wrong shape) and pass its text through as the detail.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::Rejected {
            status: err.status(),
            message: err.body_text(),
        }
    }
}
