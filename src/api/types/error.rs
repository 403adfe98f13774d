//! HTTP error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Error categories reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidInputError,
    NotFoundError,
    ConflictError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInputError => write!(f, "invalid_input_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    /// Request path that produced the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    path: None,
                },
            },
        }
    }

    /// Attach the request path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.response.error.path = Some(path.into());
        self
    }

    /// Semantically invalid request
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::InvalidInputError,
            message,
        )
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::InvalidInput { message } => Self::unprocessable(message),
            DomainError::Conflict { message } => Self::conflict(message),
            other => {
                error!(error = %other, "Request failed");
                Self::internal("Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_unprocessable() {
        let api_err: ApiError = DomainError::invalid_input("Invalid nationalteamId: 0").into();

        assert_eq!(api_err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::InvalidInputError);
        assert_eq!(api_err.response.error.message, "Invalid nationalteamId: 0");
        assert!(api_err.response.error.path.is_none());
    }

    #[test]
    fn test_not_found_conversion() {
        let api_err: ApiError = DomainError::not_found("No national team found").into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::NotFoundError);
        assert!(api_err.response.error.path.is_none());
    }

    #[test]
    fn test_infrastructure_errors_are_server_errors() {
        for err in [
            DomainError::storage("connection refused"),
            DomainError::configuration("bad url"),
            DomainError::internal("boom"),
        ] {
            let api_err: ApiError = err.into();
            assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_err.response.error.error_type, ApiErrorType::ServerError);
        }
    }

    #[test]
    fn test_server_errors_hide_backend_detail() {
        let api_err: ApiError =
            DomainError::storage("Failed to read document: pool timed out while waiting").into();

        assert_eq!(api_err.response.error.message, "Internal server error");
        assert!(!api_err.to_string().contains("pool timed out"));
    }

    #[test]
    fn test_conflict_conversion() {
        let api_err: ApiError = DomainError::conflict("key taken").into();
        assert_eq!(api_err.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::not_found("No national team found for nationalteamId: 2");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"not_found_error\""));
        assert!(json.contains("nationalteamId: 2"));
        assert!(!json.contains("path"));
    }

    #[test]
    fn test_path_serialization() {
        let err = ApiError::unprocessable("Invalid nationalteamId: 0").with_path("/national-team/0");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["error"]["path"], "/national-team/0");
    }

    #[test]
    fn test_display() {
        let err = ApiError::unprocessable("Invalid nationalteamId: -1");
        assert_eq!(err.to_string(), "invalid_input_error: Invalid nationalteamId: -1");
    }
}
