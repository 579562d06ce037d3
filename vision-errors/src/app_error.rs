use crate::ValidationError;
use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "This field is required. Please provide your answer.";
pub const FALLBACK_MESSAGE: &str = "Sorry - Something went wrong. Please try again!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to reach Gemini: {0}")]
    GeminiError(String),

    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),

    #[error("Failed to persist theme: {0}")]
    Storage(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// The text shown to the end user. Upstream failures of every kind
    /// collapse into one fallback message.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(_) => REQUIRED_MESSAGE,
            Self::GeminiError(_)
            | Self::MalformedResponse(_)
            | Self::Storage(_)
            | Self::InvalidRequest(_) => FALLBACK_MESSAGE,
        }
    }

    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::GeminiError(_) | Self::MalformedResponse(_))
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::GeminiError(_) | AppError::MalformedResponse(_) => {
                    StatusCode::BAD_GATEWAY
                }
                AppError::Validation(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message().to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
