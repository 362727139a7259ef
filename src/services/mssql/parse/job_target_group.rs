use std::fmt;
use std::str::FromStr;

use super::JobAgentId;
use crate::resourceid::{ResourceId, ResourceIdError, ResourceIdFormatter};

/// ID of an elastic job target group.
///
/// # Example
///
/// ```rust
/// use azurerm_mssql::resourceid::ResourceIdFormatter;
/// use azurerm_mssql::services::mssql::parse::JobTargetGroupId;
///
/// let id = JobTargetGroupId::new("sub", "rg", "server1", "agent1", "tg1");
/// let parsed = JobTargetGroupId::parse(&id.id()).unwrap();
/// assert_eq!(parsed, id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobTargetGroupId {
    /// The subscription ID.
    pub subscription_id: String,
    /// The resource group name.
    pub resource_group: String,
    /// The SQL server hosting the job agent.
    pub server_name: String,
    /// The owning job agent.
    pub job_agent_name: String,
    /// The target group name.
    pub target_group_name: String,
}

impl JobTargetGroupId {
    /// Creates a target group ID from its segments.
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        server_name: impl Into<String>,
        job_agent_name: impl Into<String>,
        target_group_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            server_name: server_name.into(),
            job_agent_name: job_agent_name.into(),
            target_group_name: target_group_name.into(),
        }
    }

    /// Creates the ID of the target group `name` owned by `agent`.
    #[must_use]
    pub fn from_job_agent(agent: &JobAgentId, name: impl Into<String>) -> Self {
        Self::new(
            agent.subscription_id.clone(),
            agent.resource_group.clone(),
            agent.server_name.clone(),
            agent.name.clone(),
            name,
        )
    }

    /// Returns the ID of the owning job agent.
    #[must_use]
    pub fn job_agent_id(&self) -> JobAgentId {
        JobAgentId::new(
            self.subscription_id.clone(),
            self.resource_group.clone(),
            self.server_name.clone(),
            self.job_agent_name.clone(),
        )
    }

    /// Parses a target group ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError`] if the input is not a well-formed target
    /// group ID. Segment keys are case-sensitive.
    pub fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let mut id = ResourceId::parse(input)?;

        if id.resource_group.is_empty() {
            return Err(ResourceIdError::MissingResourceGroup);
        }

        let server_name = id.pop_segment("servers")?;
        let job_agent_name = id.pop_segment("jobAgents")?;
        let target_group_name = id.pop_segment("targetGroups")?;

        id.validate_no_empty_segments(input)?;

        Ok(Self {
            subscription_id: id.subscription_id,
            resource_group: id.resource_group,
            server_name,
            job_agent_name,
            target_group_name,
        })
    }
}

impl ResourceIdFormatter for JobTargetGroupId {
    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Sql/servers/{}/jobAgents/{}/targetGroups/{}",
            self.subscription_id,
            self.resource_group,
            self.server_name,
            self.job_agent_name,
            self.target_group_name
        )
    }
}

impl fmt::Display for JobTargetGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job Target Group: (Target Group Name {:?} / Job Agent Name {:?} / Server Name {:?} / Resource Group {:?})",
            self.target_group_name, self.job_agent_name, self.server_name, self.resource_group
        )
    }
}

impl FromStr for JobTargetGroupId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
