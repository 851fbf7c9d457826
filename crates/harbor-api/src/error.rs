use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use harbor_assessment::error::AnswerError;
use harbor_media::error::{AvatarError, ValidationError};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
    Unprocessable(String),
    BadGateway(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadGateway(msg) => {
                tracing::error!("storage error: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<AvatarError> for ApiError {
    fn from(e: AvatarError) -> Self {
        match e {
            AvatarError::Validation(v @ ValidationError::TooLarge { .. }) => {
                ApiError::PayloadTooLarge(v.to_string())
            }
            AvatarError::Validation(v) => ApiError::BadRequest(v.to_string()),
            AvatarError::InvalidUser(inner) => ApiError::BadRequest(inner.to_string()),
            e @ (AvatarError::ImageLoad(_) | AvatarError::Compression(_)) => {
                ApiError::Unprocessable(e.to_string())
            }
            e @ (AvatarError::Upload(_) | AvatarError::Deletion(_)) => {
                ApiError::BadGateway(e.to_string())
            }
        }
    }
}

impl From<AnswerError> for ApiError {
    fn from(e: AnswerError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
