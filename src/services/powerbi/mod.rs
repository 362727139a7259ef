//! Power BI Embedded service clients.

mod client;

pub use client::{CapacitiesClient, API_VERSION};

use crate::config::ClientOptions;

/// The Power BI service clients.
#[derive(Debug)]
pub struct Client {
    /// Client for Power BI Embedded capacities.
    pub capacities_client: CapacitiesClient,
}

impl Client {
    /// Builds every Power BI client from the shared options.
    ///
    /// # Example
    ///
    /// ```rust
    /// use azurerm_mssql::services::powerbi;
    /// use azurerm_mssql::{AccessToken, ClientOptions, SubscriptionId};
    ///
    /// let options = ClientOptions::builder()
    ///     .subscription_id(SubscriptionId::new("sub").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = powerbi::Client::build(&options);
    /// assert_eq!(client.capacities_client.api_version(), "2017-10-01");
    /// assert_eq!(client.capacities_client.subscription_id(), "sub");
    /// ```
    #[must_use]
    pub fn build(options: &ClientOptions) -> Self {
        Self {
            capacities_client: CapacitiesClient::new(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, EndpointUrl, SubscriptionId};

    #[test]
    fn test_build_configures_capacities_client() {
        let options = ClientOptions::builder()
            .subscription_id(SubscriptionId::new("sub-1").unwrap())
            .access_token(AccessToken::new("secret-token").unwrap())
            .resource_manager_endpoint(EndpointUrl::new("https://management.usgovcloudapi.net/").unwrap())
            .build()
            .unwrap();

        let client = Client::build(&options);
        let capacities = &client.capacities_client;
        assert_eq!(capacities.endpoint(), "https://management.usgovcloudapi.net");
        assert_eq!(capacities.subscription_id(), "sub-1");
        assert_eq!(capacities.api_version(), API_VERSION);
        assert!(!format!("{client:?}").contains("secret-token"));
    }
}
