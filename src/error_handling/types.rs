//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised by a remote lookup.
///
/// Transport faults (`Timeout`, `Transport`, `Decode`) are what the domain
/// collector propagates from its DNS stage and captures inline during its
/// WHOIS stage.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The DNS lookup / WHOIS services need an API key and none was configured.
    #[error("No API key configured (use --api-key or set IDSPY_API_KEY)")]
    MissingApiKey,

    /// A request URL could not be built from the configured endpoint.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request did not complete within the configured timeout.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Connection, request or body failure.
    #[error("Request failed: {0}")]
    Transport(#[source] ReqwestError),

    /// The service answered with a non-success HTTP status.
    #[error("{code} {reason}")]
    Status {
        /// Numeric HTTP status
        code: u16,
        /// Canonical reason phrase (may be empty)
        reason: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported a failure in an otherwise valid response.
    #[error("Lookup failed: {0}")]
    Service(String),
}

impl LookupError {
    /// Returns true for network, timeout and parse failures.
    pub fn is_transport_fault(&self) -> bool {
        matches!(
            self,
            LookupError::Timeout(_) | LookupError::Transport(_) | LookupError::Decode(_)
        )
    }

    /// Builds a `Status` error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        LookupError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

impl From<ReqwestError> for LookupError {
    fn from(error: ReqwestError) -> Self {
        if error.is_timeout() {
            let target = error
                .url()
                .map(|u| u.as_str().to_string())
                .unwrap_or_else(|| "remote service".to_string());
            LookupError::Timeout(target)
        } else if let Some(status) = error.status() {
            LookupError::from_status(status)
        } else {
            LookupError::Transport(error)
        }
    }
}
