//! Error types shared by all Watson service facades.
//!
//! Every operation returns [`WatsonResult`]. Errors fall into three groups:
//! argument validation (raised before any network I/O), transport and HTTP
//! status failures, and response deserialization failures. Nothing is
//! retried; every error propagates to the caller with the failing call.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type WatsonResult<T> = Result<T, WatsonError>;

/// Errors surfaced by Watson service operations.
#[derive(Debug, Error)]
pub enum WatsonError {
    /// A required argument was missing, empty, or malformed. Raised before
    /// any request is attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IAM token exchange failed, or the service rejected the credentials.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("service error ({status}): {body}")]
    Service { status: u16, body: String },

    /// The response body did not match the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Deserialization(String),

    /// Client-side invariant violation (URL construction and the like).
    #[error("internal error: {0}")]
    Internal(String),
}

impl WatsonError {
    /// Classify a non-success HTTP response.
    ///
    /// Mirrors the status handling of the upstream Watson endpoints: 400 is
    /// an argument problem, 401/403 are credential problems, everything else
    /// is surfaced with status and body attached.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 => WatsonError::InvalidArgument(body),
            401 => WatsonError::AuthenticationFailed(format!(
                "credentials rejected - check API key: {body}"
            )),
            403 => WatsonError::AuthenticationFailed(format!(
                "access forbidden - check service permissions: {body}"
            )),
            _ => WatsonError::Service {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// True when the error was produced before any request left the client.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, WatsonError::InvalidArgument(_))
    }
}
