//! Client for the `Microsoft.Sql` job target groups API.

use std::time::Duration;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError,
};
use crate::config::ClientOptions;
use crate::services::mssql::models::JobTargetGroup;

/// The API version the job target group endpoints are called with.
pub const API_VERSION: &str = "2017-03-01-preview";

/// Client for reading, writing and deleting job target groups.
///
/// Every operation addresses one target group through its resource group,
/// server, job agent and group name. Path segments are percent-encoded.
///
/// # Thread Safety
///
/// `JobTargetGroupsClient` is `Send + Sync`.
#[derive(Debug)]
pub struct JobTargetGroupsClient {
    http_client: HttpClient,
    subscription_id: String,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JobTargetGroupsClient>();
};

impl JobTargetGroupsClient {
    /// Creates a client for the subscription and endpoint in `options`.
    #[must_use]
    pub fn new(options: &ClientOptions) -> Self {
        Self {
            http_client: HttpClient::new(options),
            subscription_id: options.subscription_id().as_ref().to_string(),
        }
    }

    /// Returns the API version sent with every request.
    #[must_use]
    pub const fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Returns the subscription this client operates in.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Fetches a target group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx response, or a
    /// success body that is not a target group. A missing group is reported
    /// as an error for which [`HttpError::was_not_found`] is true.
    pub async fn get(
        &self,
        resource_group: &str,
        server_name: &str,
        job_agent_name: &str,
        target_group_name: &str,
        timeout: Option<Duration>,
    ) -> Result<JobTargetGroup, HttpError> {
        let path =
            self.target_group_path(resource_group, server_name, job_agent_name, target_group_name);
        let request = Self::build_request(HttpMethod::Get, path, None, timeout)?;

        let response = self.http_client.request(request).await?;
        Self::decode(response)
    }

    /// Creates or fully replaces a target group.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a non-2xx response, or a
    /// success body that is not a target group.
    pub async fn create_or_update(
        &self,
        resource_group: &str,
        server_name: &str,
        job_agent_name: &str,
        target_group_name: &str,
        parameters: &JobTargetGroup,
        timeout: Option<Duration>,
    ) -> Result<JobTargetGroup, HttpError> {
        let path =
            self.target_group_path(resource_group, server_name, job_agent_name, target_group_name);
        let body = serde_json::to_value(parameters).map_err(|e| {
            InvalidHttpRequestError::InvalidBody {
                reason: e.to_string(),
            }
        })?;
        let request = Self::build_request(HttpMethod::Put, path, Some(body), timeout)?;

        let response = self.http_client.request(request).await?;
        Self::decode(response)
    }

    /// Deletes a target group. The remote answers 200 or 204 on success.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure or a non-2xx response,
    /// including 404 when the group does not exist.
    pub async fn delete(
        &self,
        resource_group: &str,
        server_name: &str,
        job_agent_name: &str,
        target_group_name: &str,
        timeout: Option<Duration>,
    ) -> Result<(), HttpError> {
        let path =
            self.target_group_path(resource_group, server_name, job_agent_name, target_group_name);
        let request = Self::build_request(HttpMethod::Delete, path, None, timeout)?;

        self.http_client.request(request).await?;
        Ok(())
    }

    fn build_request(
        method: HttpMethod,
        path: String,
        body: Option<serde_json::Value>,
        timeout: Option<Duration>,
    ) -> Result<HttpRequest, HttpError> {
        tracing::debug!(%method, %path, "calling job target groups API");

        let mut builder =
            HttpRequest::builder(method, path).query_param("api-version", API_VERSION);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    fn target_group_path(
        &self,
        resource_group: &str,
        server_name: &str,
        job_agent_name: &str,
        target_group_name: &str,
    ) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Sql/servers/{}/jobAgents/{}/targetGroups/{}",
            urlencoding::encode(&self.subscription_id),
            urlencoding::encode(resource_group),
            urlencoding::encode(server_name),
            urlencoding::encode(job_agent_name),
            urlencoding::encode(target_group_name),
        )
    }

    // An empty success body decodes to an empty group.
    fn decode(response: HttpResponse) -> Result<JobTargetGroup, HttpError> {
        let code = response.code;
        let error_reference = response.request_id().map(ToString::to_string);
        let failed = |message: String| {
            HttpError::Response(HttpResponseError {
                code,
                message,
                error_reference: error_reference.clone(),
            })
        };

        if let Some(raw) = response.body.get("raw_body").and_then(|v| v.as_str()) {
            return Err(failed(format!("Response body is not JSON: {raw}")));
        }

        serde_json::from_value(response.body)
            .map_err(|e| failed(format!("Failed to deserialize target group: {e}")))
    }
}
