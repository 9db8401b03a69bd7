use crate::upstream::UpstreamError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::ValidationError;

/// Central error type for the gateway
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No valid price data found")]
    NoValidData,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Upstream request failed: {0}")]
    UpstreamFailure(#[from] UpstreamError),

    #[error("Response time exceeded {budget_ms} ms (took {elapsed_ms} ms)")]
    SlowResponse { elapsed_ms: u128, budget_ms: u128 },

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::NoValidData => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamFailure(_)
            | AppError::SlowResponse { .. }
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(err) => err.code(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NoValidData => "NO_VALID_DATA",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::UpstreamFailure(_) => "UPSTREAM_FAILURE",
            AppError::SlowResponse { .. } => "SLOW_RESPONSE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        // Internal details stay in the logs
        let message = match &self {
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
