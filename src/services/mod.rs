//! Service clients and resources, one module per Azure service.

pub mod mssql;
pub mod powerbi;

use crate::config::ClientOptions;

/// Every service client, built once and passed to each handler.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; handlers only read from it.
///
/// # Example
///
/// ```rust
/// use azurerm_mssql::{AccessToken, Client, ClientOptions, SubscriptionId};
///
/// let options = ClientOptions::builder()
///     .subscription_id(SubscriptionId::new("sub").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = Client::build(&options);
/// assert_eq!(client.mssql.job_target_groups_client.subscription_id(), "sub");
/// ```
#[derive(Debug)]
pub struct Client {
    /// The SQL clients.
    pub mssql: mssql::Client,
    /// The Power BI clients.
    pub powerbi: powerbi::Client,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Builds every service client from the shared options.
    #[must_use]
    pub fn build(options: &ClientOptions) -> Self {
        tracing::debug!(
            endpoint = %options.resource_manager_endpoint(),
            "building service clients"
        );
        Self {
            mssql: mssql::Client::build(options),
            powerbi: powerbi::Client::build(options),
        }
    }
}
