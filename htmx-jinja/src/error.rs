//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for template dispatch
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// The template source was never registered via `htmx_init`
    #[error("template source is not initialized; call htmx_init() before serving decorated routes")]
    TemplatesNotInitialized,

    /// The registered template source does not match the route's template identifier
    #[error("invalid template source: {0}")]
    InvalidTemplateSource(String),

    /// A full-page request hit a route with no full-page template configured
    #[error("Resource cannot be accessed directly.")]
    MissingFullPageTemplate,

    /// Template loading or rendering failed
    #[error("Template error: {0}")]
    Template(Box<minijinja::Error>),

    /// A handler or constructor produced a context that is not a key-value mapping
    #[error("Invalid template context: {0}")]
    InvalidContext(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Template(Box::new(err))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            status: status.as_u16(),
        }
    }

    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Error::Config(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_code(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    e.to_string(),
                ),
            ),

            Error::TemplatesNotInitialized => {
                tracing::error!(
                    "template source is not initialized; call htmx_init() before serving routes"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "TEMPLATES_NOT_INITIALIZED",
                        "Template source is not initialized",
                    ),
                )
            }

            Error::InvalidTemplateSource(msg) => {
                tracing::error!("invalid template source: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INVALID_TEMPLATE_SOURCE",
                        msg,
                    ),
                )
            }

            Error::MissingFullPageTemplate => {
                tracing::debug!(
                    "route is not configured to be queried directly; \
                     specify a full-page template and context for that"
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_code(
                        StatusCode::BAD_REQUEST,
                        "DIRECT_ACCESS",
                        "Resource cannot be accessed directly.",
                    ),
                )
            }

            Error::Template(e) => {
                tracing::error!("template rendering error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "TEMPLATE_ERROR",
                        "Template rendering failed",
                    ),
                )
            }

            Error::InvalidContext(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_code(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_CONTEXT",
                    msg,
                ),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}
