//! Error handling for the guard
//!
//! This module defines all error types used throughout the crate.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the guard
pub type Result<T> = std::result::Result<T, GuardError>;

/// Warning text returned with every denied request
pub const UNAUTHORIZED_WARNING: &str = "You're Unauthorized";

/// Main error type for the guard
#[derive(Error, Debug)]
pub enum GuardError {
    /// The actor holds none of the required roles
    #[error("Unauthorized: actor holds none of the required roles")]
    AuthorizationDenied,

    /// The authentication context could not produce an actor
    #[error("Actor resolution error: {0}")]
    ActorResolution(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of the fixed denial response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnauthorizedBody {
    #[serde(rename = "Warning")]
    pub warning: &'static str,
}

impl Default for UnauthorizedBody {
    fn default() -> Self {
        Self {
            warning: UNAUTHORIZED_WARNING,
        }
    }
}

/// Standard error response format
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// The 401 response sent when a guard denies a request
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(UnauthorizedBody::default())
}

impl ResponseError for GuardError {
    fn status_code(&self) -> StatusCode {
        match self {
            GuardError::AuthorizationDenied => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            GuardError::AuthorizationDenied => return unauthorized_response(),
            GuardError::ActorResolution(_) => (
                "ACTOR_RESOLUTION_ERROR",
                "Caller identity could not be determined".to_string(),
            ),
            GuardError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            GuardError::Yaml(_) => ("CONFIG_ERROR", "Configuration could not be parsed".to_string()),
            GuardError::Io(_) => ("IO_ERROR", "I/O operation failed".to_string()),
            GuardError::Internal(_) => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Helper functions for creating specific errors
impl GuardError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn actor_resolution<S: Into<String>>(message: S) -> Self {
        Self::ActorResolution(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this is an authorization denial
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::AuthorizationDenied)
    }
}
