use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The provider credential is missing or was rejected.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Transport failure or non-success status from a top-level provider call.
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Stable machine-readable name used in error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "invalid_input",
            ApiError::ConfigurationError(_) => "configuration",
            ApiError::NetworkError(_) => "network",
            ApiError::NotFound(_) => "not_found",
            ApiError::InternalError(_) => "internal",
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ApiError::ConfigurationError(_))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    kind: &'static str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ConfigurationError(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NetworkError(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = ErrorResponse {
            error: self.to_string(),
            kind: self.kind(),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::NetworkError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<::config::ConfigError> for ApiError {
    fn from(err: ::config::ConfigError) -> Self {
        ApiError::ConfigurationError(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
