//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use driftwood_core::DriftwoodError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (code, body).into_response()
    }
}

impl From<DriftwoodError> for ApiError {
    fn from(e: DriftwoodError) -> Self {
        match e {
            DriftwoodError::InvalidIdentifier(message) | DriftwoodError::Validation(message) => {
                ApiError::BadRequest(message)
            }
            DriftwoodError::NotFound { entity_type, .. } => {
                ApiError::NotFound(format!("{} not found", capitalize(entity_type)))
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                ApiError::Internal(other.to_string())
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_status() {
        let err: ApiError = DriftwoodError::InvalidIdentifier("Invalid run ID format".into()).into();
        assert!(matches!(&err, ApiError::BadRequest(m) if m == "Invalid run ID format"));

        let err: ApiError = DriftwoodError::not_found("run", "abc").into();
        assert!(matches!(&err, ApiError::NotFound(m) if m == "Run not found"));

        let err: ApiError = DriftwoodError::data_access("disk full").into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
