//! Configuration types shared by every service client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientOptions`]: The settings every service client is built from
//! - [`ClientOptionsBuilder`]: A builder for constructing [`ClientOptions`] instances
//! - [`SubscriptionId`]: A validated Azure subscription ID
//! - [`AccessToken`]: A bearer token with masked debug output
//! - [`EndpointUrl`]: A validated service endpoint URL
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::{AccessToken, ClientOptions, SubscriptionId};
//!
//! let options = ClientOptions::builder()
//!     .subscription_id(SubscriptionId::new("12345678-1234-9876-4563-123456789012").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.resource_manager_endpoint().as_ref(), "https://management.azure.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, EndpointUrl, SubscriptionId};

use crate::error::ConfigError;

/// Options used to build the service clients.
///
/// The options carry the already-acquired credentials; acquiring and
/// refreshing tokens is the host's responsibility.
///
/// # Thread Safety
///
/// `ClientOptions` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ClientOptions {
    subscription_id: SubscriptionId,
    access_token: AccessToken,
    resource_manager_endpoint: EndpointUrl,
    user_agent_prefix: Option<String>,
    tries: u32,
}

impl ClientOptions {
    /// Creates a new builder for constructing `ClientOptions`.
    #[must_use]
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::new()
    }

    /// Returns the subscription ID.
    #[must_use]
    pub const fn subscription_id(&self) -> &SubscriptionId {
        &self.subscription_id
    }

    /// Returns the bearer token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the Resource Manager endpoint.
    #[must_use]
    pub const fn resource_manager_endpoint(&self) -> &EndpointUrl {
        &self.resource_manager_endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how many times a throttled or failed request is attempted.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }
}

// Verify ClientOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientOptions>();
};

/// Builder for constructing [`ClientOptions`] instances.
///
/// Required fields are `subscription_id` and `access_token`.
///
/// # Defaults
///
/// - `resource_manager_endpoint`: `https://management.azure.com`
/// - `user_agent_prefix`: `None`
/// - `tries`: `1` (no retries)
#[derive(Debug, Default)]
pub struct ClientOptionsBuilder {
    subscription_id: Option<SubscriptionId>,
    access_token: Option<AccessToken>,
    resource_manager_endpoint: Option<EndpointUrl>,
    user_agent_prefix: Option<String>,
    tries: Option<u32>,
}

impl ClientOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the subscription ID (required).
    #[must_use]
    pub fn subscription_id(mut self, id: SubscriptionId) -> Self {
        self.subscription_id = Some(id);
        self
    }

    /// Sets the bearer token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the Resource Manager endpoint, e.g. for sovereign clouds.
    #[must_use]
    pub fn resource_manager_endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.resource_manager_endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how many times a request answered with 429 or 5xx is attempted.
    ///
    /// Values below 1 are treated as 1.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Builds the [`ClientOptions`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `subscription_id` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<ClientOptions, ConfigError> {
        let subscription_id = self
            .subscription_id
            .ok_or(ConfigError::MissingRequiredField {
                field: "subscription_id",
            })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ClientOptions {
            subscription_id,
            access_token,
            resource_manager_endpoint: self
                .resource_manager_endpoint
                .unwrap_or_else(EndpointUrl::public_cloud),
            user_agent_prefix: self.user_agent_prefix,
            tries: self.tries.unwrap_or(1).max(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription() -> SubscriptionId {
        SubscriptionId::new("12345678-1234-9876-4563-123456789012").unwrap()
    }

    #[test]
    fn test_builder_requires_subscription_id() {
        let result = ClientOptionsBuilder::new()
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "subscription_id"
            })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ClientOptionsBuilder::new()
            .subscription_id(subscription())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let options = ClientOptions::builder()
            .subscription_id(subscription())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(
            options.resource_manager_endpoint().as_ref(),
            "https://management.azure.com"
        );
        assert!(options.user_agent_prefix().is_none());
        assert_eq!(options.tries(), 1);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let endpoint = EndpointUrl::new("https://management.chinacloudapi.cn").unwrap();

        let options = ClientOptions::builder()
            .subscription_id(subscription())
            .access_token(AccessToken::new("token").unwrap())
            .resource_manager_endpoint(endpoint.clone())
            .user_agent_prefix("terraform/1.5.0")
            .tries(3)
            .build()
            .unwrap();

        assert_eq!(options.resource_manager_endpoint(), &endpoint);
        assert_eq!(options.user_agent_prefix(), Some("terraform/1.5.0"));
        assert_eq!(options.tries(), 3);
    }

    #[test]
    fn test_zero_tries_is_clamped() {
        let options = ClientOptions::builder()
            .subscription_id(subscription())
            .access_token(AccessToken::new("token").unwrap())
            .tries(0)
            .build()
            .unwrap();

        assert_eq!(options.tries(), 1);
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let options = ClientOptions::builder()
            .subscription_id(subscription())
            .access_token(AccessToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", options);
        assert!(debug_str.contains("ClientOptions"));
        assert!(!debug_str.contains("very-secret"));
    }
}
