//! # azurerm-mssql
//!
//! Resource handlers for managing Azure SQL elastic job target groups from a
//! declarative provisioning plugin, plus a client constructor for Power BI
//! Embedded capacities.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe client options via [`ClientOptions`] and [`ClientOptionsBuilder`]
//! - Validated newtypes for the subscription, token and endpoint
//! - An async HTTP client for Resource Manager with opt-in retries
//! - Resource ID parsing via [`resourceid`] and typed IDs such as
//!   [`JobTargetGroupId`](services::mssql::parse::JobTargetGroupId)
//! - Create, read, update, delete and import handlers for job target groups
//!   via [`JobTargetGroupResource`](services::mssql::JobTargetGroupResource)
//!
//! Acquiring tokens, persisting state and speaking the plugin protocol are
//! the host's job. The crate receives a bearer token and decoded
//! configuration, and hands back a resource handle and normalized state.
//!
//! ## Quick Start
//!
//! ```rust
//! use azurerm_mssql::{AccessToken, Client, ClientOptions, SubscriptionId};
//!
//! let options = ClientOptions::builder()
//!     .subscription_id(SubscriptionId::new("12345678-1234-9876-4563-123456789012").unwrap())
//!     .access_token(AccessToken::new("bearer-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::build(&options);
//! ```
//!
//! ## Managing a Job Target Group
//!
//! ```rust,ignore
//! use azurerm_mssql::resource::ResourceData;
//! use azurerm_mssql::services::mssql::{JobTargetGroupModel, JobTargetGroupResource};
//! use serde_json::json;
//!
//! let resource = JobTargetGroupResource::new();
//! let model = JobTargetGroupModel::from_value(json!({
//!     "name": "nightly",
//!     "job_agent_id": "/subscriptions/.../servers/srv/jobAgents/agent",
//!     "target": [{"type": "Server", "server_name": "srv", "refresh_credential_name": "cred"}]
//! }))?;
//!
//! let mut data = ResourceData::new(model);
//! resource.create_update(&client, &mut data).await?;
//!
//! // Later, against the stored handle
//! let mut data = ResourceData::from_existing(handle, JobTargetGroupModel::default());
//! resource.read(&client, &mut data).await?;
//! if data.id().is_none() {
//!     // The group was deleted outside of this tool
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Clients are built from options and passed explicitly
//! - **Fail-fast validation**: Newtypes and configuration decode validate up front
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: Handlers never retry; transport retries are opt-in

pub mod clients;
pub mod config;
pub mod error;
pub mod resource;
pub mod resourceid;
pub mod services;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ClientOptions, ClientOptionsBuilder, EndpointUrl, SubscriptionId};
pub use error::ConfigError;
pub use services::Client;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};

// Re-export resource types
pub use resource::{ResourceData, ResourceError, ResourceTimeouts};
pub use resourceid::{ResourceIdError, ResourceIdFormatter};
