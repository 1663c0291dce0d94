use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::envelope::Envelope;
use crate::gingr::GingrError;

/// Message returned for failures no route anticipated.
pub const GENERIC_FAILURE: &str = "Something went wrong!";

#[derive(Debug)]
pub enum AppError {
    /// A Gingr call failed; `context` is the route's user-facing message.
    Upstream {
        context: &'static str,
        source: GingrError,
    },
    NotFound(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Upstream { context, source } => write!(f, "{context}: {source}"),
            AppError::NotFound(path) => write!(f, "not found: {path}"),
            AppError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Upstream { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            AppError::Upstream { context, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure(context, source.to_string()),
            ),
            AppError::NotFound(path) => {
                (StatusCode::NOT_FOUND, Envelope::failure("Not found", path))
            }
            AppError::Internal(msg) => {
                tracing::error!("{msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::failure(GENERIC_FAILURE, msg),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

/// Attach a route's failure message to an upstream result.
pub trait UpstreamContext<T> {
    fn context(self, message: &'static str) -> Result<T, AppError>;
}

impl<T> UpstreamContext<T> for Result<T, GingrError> {
    fn context(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Upstream {
            context: message,
            source,
        })
    }
}
