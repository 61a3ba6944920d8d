use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::json;

use cordel_core::error::{CoreError, FieldViolation};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain failures and adds the store failure
/// variant. Implements [`IntoResponse`] as the single translation point
/// from typed failures to HTTP status + JSON envelope; the service layer
/// only ever produces `AppError` values, never HTTP concepts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cordel-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, violations) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = *entity, id = *id, "Resource not found");
                    (
                        StatusCode::NOT_FOUND,
                        "Recurso não encontrado".to_string(),
                        None,
                    )
                }
                CoreError::Validation(violations) => (
                    StatusCode::BAD_REQUEST,
                    "Erro de validação".to_string(),
                    Some(violations.clone()),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Erro interno do servidor".to_string(),
                        None,
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let mut body = json!({
            "timestamp": Utc::now().to_rfc3339(),
            "status": status.as_u16(),
            "message": message,
        });
        if let Some(violations) = violations {
            body["errors"] = json!(violations);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, message, and violation list.
///
/// `RowNotFound` maps to 404; everything else is a store failure and maps
/// to 500 with a sanitized message. The underlying error is logged, never
/// sent to the client.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Option<Vec<FieldViolation>>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Recurso não encontrado".to_string(),
            None,
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro interno do servidor".to_string(),
                None,
            )
        }
    }
}
