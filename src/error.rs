//! Error types for the freshkit client.
//!
//! This module defines `FreshError`, the unified error type returned by every
//! client operation, and `ResultError`, the structured error decoded from a
//! non-success API response.
//!
//! # Security
//!
//! Credentials must never end up in logs. Use `sanitize_message()` on any
//! message built from external input before logging it.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all freshkit operations.
///
/// Callers receive either a structured [`ResultError`] (via
/// [`FreshError::Api`]) that can be inspected for status and field details,
/// or one of the lower-level transport, encoding or cancellation failures.
#[derive(Error, Debug)]
pub enum FreshError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request never produced a response (connect, DNS, timeout, reset).
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ResultError),

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// An attachment referenced by path could not be read.
    #[error("failed to read attachment {}: {source}", path.display())]
    Attachment {
        /// Path of the attachment on disk.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Writing a downloaded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Connection test failed.
    #[error("connection test failed: {0}")]
    ConnectionTest(String),

    /// A transient failure paired with the wait recommended before retrying.
    ///
    /// Only the retry loop sees this variant; it is unwrapped before an error
    /// reaches the caller.
    #[error("{source} (retry after {after:?})")]
    Retryable {
        /// The failure that may succeed on retry.
        #[source]
        source: Box<FreshError>,
        /// How long to wait. Zero means "use the configured default".
        after: Duration,
    },
}

impl FreshError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        FreshError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        FreshError::Validation(message.into())
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        FreshError::ConnectionTest(message.into())
    }

    /// Wraps an error as retryable after the given wait.
    pub fn retryable(source: FreshError, after: Duration) -> Self {
        FreshError::Retryable {
            source: Box::new(source),
            after,
        }
    }

    /// Returns true if this is a cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        match self {
            FreshError::Cancelled => true,
            FreshError::Retryable { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }

    /// Returns the HTTP status of a structured API error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FreshError::Api(e) => Some(e.status),
            FreshError::Retryable { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Returns true if the API reported 404 Not Found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns the wait recommended before retrying, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            FreshError::Retryable { after, .. } => Some(*after),
            FreshError::Api(e) => e.retry_after,
            _ => None,
        }
    }

    /// Strips the retry wrapper, returning the original failure.
    #[must_use]
    pub fn into_inner(self) -> Self {
        match self {
            FreshError::Retryable { source, .. } => source.into_inner(),
            other => other,
        }
    }

    /// Sanitizes a message to remove any occurrence of a secret.
    ///
    /// # Returns
    ///
    /// The message with any occurrence of `secret` replaced with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}

/// A field-level validation error reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending field.
    #[serde(default)]
    pub field: String,

    /// Machine-readable reason, e.g. `missing_field` or `invalid_value`.
    #[serde(default)]
    pub code: String,

    /// Human-readable detail.
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.code)
    }
}

/// Structured error built from a non-success API response.
///
/// `description` and `errors` are recovered from the JSON error body when
/// one was parsed; a 404 never has them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultError {
    /// HTTP status of the response.
    pub status: StatusCode,

    /// Top-level error description.
    pub description: String,

    /// Per-field validation errors.
    pub errors: Vec<FieldError>,

    /// Suggested wait before retrying, set when the failure is transient.
    pub retry_after: Option<Duration>,
}

impl ResultError {
    /// Creates an error carrying only the status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            description: String::new(),
            errors: Vec::new(),
            retry_after: None,
        }
    }

    /// Returns true if the status is 429 Too Many Requests.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
    }
}

impl fmt::Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        for (i, fe) in self.errors.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            fe.fmt(f)?;
        }
        Ok(())
    }
}

impl std::error::Error for ResultError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = FreshError::missing_env("FRESH_DOMAIN");
        assert!(err.to_string().contains("FRESH_DOMAIN"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_error() {
        let err = FreshError::validation("domain is required");
        assert_eq!(err.to_string(), "validation error: domain is required");
    }

    #[test]
    fn test_result_error_display() {
        let err = ResultError {
            status: StatusCode::BAD_REQUEST,
            description: "Validation failed".to_string(),
            errors: vec![
                FieldError {
                    field: "email".to_string(),
                    code: "invalid_value".to_string(),
                    message: "It should be a valid email".to_string(),
                },
                FieldError {
                    field: "name".to_string(),
                    code: "missing_field".to_string(),
                    message: "Mandatory".to_string(),
                },
            ],
            retry_after: None,
        };
        assert_eq!(
            err.to_string(),
            "HTTP 400 Bad Request - Validation failed: email: It should be a valid email (invalid_value); name: Mandatory (missing_field)"
        );
    }

    #[test]
    fn test_result_error_display_status_only() {
        let err = ResultError::new(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn test_retryable_unwraps_to_original() {
        let api = FreshError::Api(ResultError::new(StatusCode::BAD_GATEWAY));
        let wrapped = FreshError::retryable(api, Duration::from_secs(2));
        assert_eq!(wrapped.retry_after(), Some(Duration::from_secs(2)));
        assert_eq!(wrapped.status(), Some(StatusCode::BAD_GATEWAY));

        let inner = wrapped.into_inner();
        assert!(matches!(inner, FreshError::Api(ref e) if e.status == StatusCode::BAD_GATEWAY));
        assert_eq!(inner.retry_after(), None);
    }

    #[test]
    fn test_api_error_retry_after() {
        let mut re = ResultError::new(StatusCode::TOO_MANY_REQUESTS);
        re.retry_after = Some(Duration::from_secs(5));
        let err = FreshError::from(re);
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_is_cancelled_through_wrapper() {
        let err = FreshError::retryable(FreshError::Cancelled, Duration::ZERO);
        assert!(err.is_cancelled());
        assert!(!FreshError::validation("x").is_cancelled());
    }

    #[test]
    fn test_sanitize_message_removes_secret() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        assert_eq!(FreshError::sanitize_message(message, ""), message);
    }
}
