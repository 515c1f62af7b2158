//! Typed error handling for query-parameter translation
//!
//! Three of the four variants describe bad client input and map to HTTP 400;
//! the fourth marks a defect in a filter declaration (a parser that failed
//! with anything other than [`TranslatorError::InvalidValue`]) and maps to
//! HTTP 500 without exposing the declaration detail to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! match translator.parse(&params) {
//!     Ok(result) => println!("{} predicates", result.predicates.len()),
//!     Err(TranslatorError::UnknownParams(names)) => {
//!         println!("unknown parameters: {:?}", names);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type for translation failures
#[derive(Debug, Clone, PartialEq)]
pub enum TranslatorError {
    /// One or more parameter names have no matching filter (batched)
    UnknownParams(Vec<String>),

    /// A filter's parser rejected its input (raised on first occurrence)
    InvalidValue(String),

    /// One or more required parameters were never resolved (batched)
    MissingRequired(Vec<String>),

    /// A filter's parser failed with an unsanctioned error kind.
    /// Indicates a defect in a filter declaration, not bad client input.
    Internal(String),
}

impl fmt::Display for TranslatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslatorError::UnknownParams(names) => {
                write!(f, "Invalid query params: {}", names.join(", "))
            }
            TranslatorError::InvalidValue(msg) => write!(f, "{}", msg),
            TranslatorError::MissingRequired(names) => {
                write!(f, "Required query params: {}", names.join(", "))
            }
            TranslatorError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for TranslatorError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl TranslatorError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TranslatorError::UnknownParams(_) => StatusCode::BAD_REQUEST,
            TranslatorError::InvalidValue(_) => StatusCode::BAD_REQUEST,
            TranslatorError::MissingRequired(_) => StatusCode::BAD_REQUEST,
            TranslatorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TranslatorError::UnknownParams(_) => "INVALID_QUERY_PARAMS",
            TranslatorError::InvalidValue(_) => "INVALID_FILTER_VALUE",
            TranslatorError::MissingRequired(_) => "REQUIRED_QUERY_PARAMS",
            TranslatorError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error is the client's fault (HTTP 4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Convert to an error response.
    ///
    /// Internal errors are masked behind a generic message; the full detail
    /// belongs in server logs, not in the response body.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            TranslatorError::Internal(_) => "Internal error".to_string(),
            _ => self.to_string(),
        };
        ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            TranslatorError::UnknownParams(names) => Some(serde_json::json!({ "params": names })),
            TranslatorError::MissingRequired(names) => Some(serde_json::json!({ "params": names })),
            _ => None,
        }
    }
}

impl IntoResponse for TranslatorError {
    fn into_response(self) -> Response {
        if let TranslatorError::Internal(detail) = &self {
            tracing::error!(detail = %detail, "filter parser contract violation");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
