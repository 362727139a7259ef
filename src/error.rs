//! Error types for client configuration.
//!
//! This module contains the error type returned while building
//! [`ClientOptions`](crate::ClientOptions) and its validated newtypes.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::{ConfigError, SubscriptionId};
//!
//! let result = SubscriptionId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySubscriptionId)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the service clients.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Subscription ID cannot be empty.
    #[error("Subscription ID cannot be empty. Please provide the ID of the Azure subscription to manage.")]
    EmptySubscriptionId,

    /// Subscription ID is not a single path segment.
    #[error("Invalid subscription ID '{id}'. The ID must not contain '/'.")]
    InvalidSubscriptionId {
        /// The rejected ID.
        id: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a bearer token for the Resource Manager endpoint.")]
    EmptyAccessToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://management.azure.com').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the client options.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
