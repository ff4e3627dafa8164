use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cardex_core::error::CoreError;
use cardex_db::store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent `{ "error", "code" }`
/// JSON bodies. Store faults never reach the caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cardex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store fault that was not handled by the endpoint.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A fault already logged by the handler, reported with a fixed
    /// caller-safe message.
    #[error("{0}")]
    Failed(&'static str),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} not found"),
            ),
            AppError::Core(CoreError::NoMatches { entity, .. }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("No {entity} found"),
            ),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Unhandled store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Failed(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                (*message).to_string(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
