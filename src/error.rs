//! Error types and handling for the `SkyBrief` service

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::metar::DecodeError;

/// Main error type for the `SkyBrief` service
#[derive(Error, Debug)]
pub enum SkyBriefError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream weather feed communication errors
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Requested data does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// A raw METAR report could not be decoded
    #[error("Failed to decode METAR report: {message}")]
    Decode { message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl SkyBriefError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to at the API surface
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            SkyBriefError::NotFound { .. } | SkyBriefError::Decode { .. } => {
                StatusCode::NOT_FOUND
            }
            SkyBriefError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            SkyBriefError::Config { .. } | SkyBriefError::General { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DecodeError> for SkyBriefError {
    fn from(err: DecodeError) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for SkyBriefError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {self}");
        }
        // The `detail` field matches what the briefing frontend expects.
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
