//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, and request validation failures.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from Resource Manager
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(e) if e.was_not_found() => println!("gone"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is rendered from the Resource Manager error envelope
/// (`{"error": {"code": ..., "message": ...}}`) when one is present.
///
/// # Example
///
/// ```rust
/// use azurerm_mssql::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"Status=404 Code="ResourceNotFound""#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.was_not_found());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Rendered error message.
    pub message: String,
    /// Reference ID for error reporting (from the `x-ms-request-id` header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Returns `true` when the service answered 404.
    #[must_use]
    pub const fn was_not_found(&self) -> bool {
        self.code == 404
    }
}

/// Error returned when maximum retry attempts have been exhausted.
///
/// Raised when a request keeps failing with 429 or 5xx responses after all
/// configured attempts.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Rendered error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from the `x-ms-request-id` header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request body could not be serialized.
    #[error("Invalid request body: {reason}")]
    InvalidBody {
        /// Why serialization failed.
        reason: String,
    },

    /// The request path is not an absolute resource path.
    #[error("Invalid request path '{path}'. Resource Manager paths must start with '/'.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error, including elapsed request timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` when the service reported the resource as missing.
    #[must_use]
    pub fn was_not_found(&self) -> bool {
        matches!(self, Self::Response(e) if e.was_not_found())
    }

    /// Returns `true` when the request was aborted by its timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
