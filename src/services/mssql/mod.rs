//! Microsoft SQL elastic job resources.
//!
//! - [`parse`]: typed resource IDs
//! - [`validate`]: configuration field validators
//! - [`models`]: remote wire models
//! - [`targets`]: conversion between configured and remote targets
//! - [`JobTargetGroupsClient`]: the remote API client
//! - [`JobTargetGroupResource`]: the lifecycle handlers

mod job_target_group_resource;
mod job_target_groups;
pub mod models;
pub mod parse;
pub mod targets;
pub mod validate;

pub use job_target_group_resource::{
    JobTargetGroupModel, JobTargetGroupResource, RESOURCE_TYPE as JOB_TARGET_GROUP_RESOURCE_TYPE,
};
pub use job_target_groups::{JobTargetGroupsClient, API_VERSION};

use crate::config::ClientOptions;

/// The SQL service clients.
#[derive(Debug)]
pub struct Client {
    /// Client for job target groups.
    pub job_target_groups_client: JobTargetGroupsClient,
}

impl Client {
    /// Builds every SQL client from the shared options.
    #[must_use]
    pub fn build(options: &ClientOptions) -> Self {
        Self {
            job_target_groups_client: JobTargetGroupsClient::new(options),
        }
    }
}
