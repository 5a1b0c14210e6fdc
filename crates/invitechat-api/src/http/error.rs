//! Application error type mapping to HTTP status codes and `{error}` bodies.
//!
//! Internal failures are logged with full detail but only a fixed,
//! user-facing string reaches the browser widget.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use invitechat_types::chat::ErrorBody;
use invitechat_types::error::{ChatError, StoreError};

/// Shown by the widget in place of a bot reply when the upstream call fails.
pub const COMPLETION_FAILED_MESSAGE: &str = "Có lỗi xảy ra khi xử lý yêu cầu";
pub const VALIDATION_MESSAGE: &str = "Invalid request data";
pub const MISCONFIGURED_MESSAGE: &str = "API key not configured";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A chat turn failure exit.
    Chat(ChatError),
    /// History lookup failure.
    Store(StoreError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Store(e)
    }
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Chat(ChatError::ValidationFailed(_)) => {
                (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE)
            }
            AppError::Chat(ChatError::Misconfigured) => {
                (StatusCode::INTERNAL_SERVER_ERROR, MISCONFIGURED_MESSAGE)
            }
            AppError::Chat(ChatError::CompletionFailed(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, COMPLETION_FAILED_MESSAGE)
            }
            AppError::Chat(ChatError::StoreFailed(_)) | AppError::Store(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        // Turn failures are already logged with session context by ChatService.
        if let AppError::Store(e) = &self {
            tracing::error!(error = %e, "history lookup failed");
        }

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::Chat(ChatError::ValidationFailed("message is required".into())),
                StatusCode::BAD_REQUEST,
                VALIDATION_MESSAGE,
            ),
            (
                AppError::Chat(ChatError::Misconfigured),
                StatusCode::INTERNAL_SERVER_ERROR,
                MISCONFIGURED_MESSAGE,
            ),
            (
                AppError::Chat(ChatError::CompletionFailed("HTTP 503".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
                COMPLETION_FAILED_MESSAGE,
            ),
            (
                AppError::Store(StoreError::Unavailable("locked".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE,
            ),
        ];

        for (err, status, message) in cases {
            assert_eq!(err.status_and_message(), (status, message));
        }
    }
}
