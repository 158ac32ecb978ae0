use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracksearch_core::error::CoreError;
use tracksearch_db::DbError;

/// Application-level error type for HTTP handlers.
///
/// Every variant is logged server-side and answered with a bare status
/// code. Only successful searches carry a body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing query parameters.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog could not be reached or the query failed.
    #[error(transparent)]
    Database(#[from] DbError),

    /// The endpoint only answers `GET`.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Database(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        status.into_response()
    }
}
