use std::fmt;
use std::str::FromStr;

use crate::resourceid::{ResourceId, ResourceIdError, ResourceIdFormatter};

/// ID of an elastic job agent, the parent of target groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobAgentId {
    /// The subscription ID.
    pub subscription_id: String,
    /// The resource group name.
    pub resource_group: String,
    /// The SQL server hosting the agent.
    pub server_name: String,
    /// The job agent name.
    pub name: String,
}

impl JobAgentId {
    /// Creates a job agent ID from its segments.
    #[must_use]
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        server_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            server_name: server_name.into(),
            name: name.into(),
        }
    }

    /// Parses a job agent ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError`] if the input is not a well-formed job agent ID.
    pub fn parse(input: &str) -> Result<Self, ResourceIdError> {
        let mut id = ResourceId::parse(input)?;

        if id.resource_group.is_empty() {
            return Err(ResourceIdError::MissingResourceGroup);
        }

        let server_name = id.pop_segment("servers")?;
        let name = id.pop_segment("jobAgents")?;

        id.validate_no_empty_segments(input)?;

        Ok(Self {
            subscription_id: id.subscription_id,
            resource_group: id.resource_group,
            server_name,
            name,
        })
    }
}

impl ResourceIdFormatter for JobAgentId {
    fn id(&self) -> String {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Sql/servers/{}/jobAgents/{}",
            self.subscription_id, self.resource_group, self.server_name, self.name
        )
    }
}

impl fmt::Display for JobAgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Job Agent: (Name {:?} / Server Name {:?} / Resource Group {:?})",
            self.name, self.server_name, self.resource_group
        )
    }
}

impl FromStr for JobAgentId {
    type Err = ResourceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Sql/servers/server1/jobAgents/jobagent1";

    #[test]
    fn test_formatter() {
        let actual = JobAgentId::new(
            "12345678-1234-9876-4563-123456789012",
            "group1",
            "server1",
            "jobagent1",
        )
        .id();
        assert_eq!(actual, VALID);
    }

    #[test]
    fn test_parse() {
        let cases: &[(&str, bool)] = &[
            ("", true),
            ("/", true),
            ("/subscriptions/", true),
            ("/subscriptions/12345678-1234-9876-4563-123456789012/", true),
            (
                "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/",
                true,
            ),
            (
                "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Sql/",
                true,
            ),
            (
                "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Sql/servers/server1/",
                true,
            ),
            (
                "/subscriptions/12345678-1234-9876-4563-123456789012/resourceGroups/group1/providers/Microsoft.Sql/servers/server1/jobAgents/",
                true,
            ),
            (VALID, false),
            (
                "/SUBSCRIPTIONS/12345678-1234-9876-4563-123456789012/RESOURCEGROUPS/GROUP1/PROVIDERS/MICROSOFT.SQL/SERVERS/SERVER1/JOBAGENTS/JOBAGENT1",
                true,
            ),
        ];

        for (input, expect_error) in cases {
            let result = JobAgentId::parse(input);
            assert_eq!(result.is_err(), *expect_error, "input: {input:?}");
        }

        let id = JobAgentId::parse(VALID).unwrap();
        assert_eq!(id.subscription_id, "12345678-1234-9876-4563-123456789012");
        assert_eq!(id.resource_group, "group1");
        assert_eq!(id.server_name, "server1");
        assert_eq!(id.name, "jobagent1");
    }

    #[test]
    fn test_rejects_child_resource_ids() {
        let child = format!("{VALID}/targetGroups/tg1");
        assert!(matches!(
            JobAgentId::parse(&child),
            Err(ResourceIdError::UnexpectedSegments { .. })
        ));
    }

    #[test]
    fn test_display() {
        let id = JobAgentId::new("sub", "rg", "srv", "agent");
        assert_eq!(
            id.to_string(),
            r#"Job Agent: (Name "agent" / Server Name "srv" / Resource Group "rg")"#
        );
    }
}
