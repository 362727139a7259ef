use crate::clients::HttpClient;
use crate::config::ClientOptions;

/// The API version Power BI Embedded capacities are called with.
pub const API_VERSION: &str = "2017-10-01";

/// Client for Power BI Embedded capacities.
///
/// Only construction is provided; no capacity operations are exposed.
#[derive(Debug)]
pub struct CapacitiesClient {
    http_client: HttpClient,
    subscription_id: String,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CapacitiesClient>();
};

impl CapacitiesClient {
    /// Creates a client for the subscription and endpoint in `options`.
    #[must_use]
    pub fn new(options: &ClientOptions) -> Self {
        Self {
            http_client: HttpClient::new(options),
            subscription_id: options.subscription_id().as_ref().to_string(),
        }
    }

    /// Returns the resource manager endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Returns the subscription this client operates in.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}
