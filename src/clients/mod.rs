//! HTTP client types for Resource Manager communication.
//!
//! This module provides the transport layer the service clients are built
//! on. It handles bearer authentication, request timeouts, retries and the
//! Resource Manager error envelope.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, PUT, DELETE)
//! - [`HttpError`]: Transport errors, including non-2xx responses
//!
//! # Example
//!
//! ```rust,ignore
//! use azurerm_mssql::{AccessToken, ClientOptions, HttpClient, HttpMethod, HttpRequest, SubscriptionId};
//!
//! let options = ClientOptions::builder()
//!     .subscription_id(SubscriptionId::new("sub").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&options);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/subscriptions/sub/resourceGroups/rg")
//!     .query_param("api-version", "2021-04-01")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! - **429 (Throttled)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`ClientOptionsBuilder::tries`](crate::ClientOptionsBuilder::tries) or
//! per request with [`HttpRequestBuilder::tries`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ArmErrorDetail, HttpResponse};
