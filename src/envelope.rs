use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Uniform response body of every dashboard endpoint. Either `data` or
/// `error` + `details` is set, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }
}

impl Envelope {
    pub fn failure(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            details: Some(details.into()),
        }
    }
}

/// Handler return type: a JSON envelope on success, [`crate::error::AppError`] otherwise.
pub type ApiResult<T = Value> = Result<Json<Envelope<T>>, crate::error::AppError>;
