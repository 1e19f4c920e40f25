//! API Error Handling
//!
//! Maps engine and transport failures to HTTP responses. Pipeline failure
//! detail stays in the server logs; callers only see a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use slipway_engine::DeployError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    DeployFailed(DeployError),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DeployFailed(err) => {
                tracing::error!("Deploy failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<DeployError> for ApiError {
    fn from(err: DeployError) -> Self {
        ApiError::DeployFailed(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
