use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use skilledit_core::error::CoreError;
use skilledit_core::store::EditError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and sqlx errors for storage
/// failures. Implements [`IntoResponse`] to produce the
/// `{ "error": { "code", "message" } }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `skilledit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<EditError<sqlx::Error>> for AppError {
    fn from(err: EditError<sqlx::Error>) -> Self {
        match err {
            EditError::Rejected(core) => AppError::Core(core),
            EditError::Storage(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::InvalidInput(msg)) => {
                tracing::info!(reason = %msg, "Edit rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            // Unknown name and non-PvP account are deliberately indistinguishable.
            AppError::Core(CoreError::CharacterNotFound) => {
                (StatusCode::FORBIDDEN, "Forbidden".to_string())
            }
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                internal()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
        };

        let body = json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}
