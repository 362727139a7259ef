//! Wire models for the job target groups API.
//!
//! Field names follow the Resource Manager JSON (camelCase). Absent optional
//! fields are omitted when serializing.

use serde::{Deserialize, Serialize};

/// Whether a target is included in or excluded from its group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTargetGroupMembershipType {
    /// The target is part of the group.
    #[default]
    Include,
    /// The target is removed from the group.
    Exclude,
}

/// The kind of a job target as the remote API names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobTargetType {
    /// Another target group.
    TargetGroup,
    /// A single database.
    SqlDatabase,
    /// Every database in an elastic pool.
    SqlElasticPool,
    /// Every database in a shard map.
    SqlShardMap,
    /// Every database on a server.
    SqlServer,
}

/// A single member of a target group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTarget {
    /// Inclusion or exclusion.
    #[serde(default)]
    pub membership_type: JobTargetGroupMembershipType,
    /// The target kind, absent when the remote omits it.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<JobTargetType>,
    /// The target server name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// The target database name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// The target elastic pool name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_pool_name: Option<String>,
    /// The target shard map name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_map_name: Option<String>,
    /// The credential used to refresh the membership of server, pool and
    /// shard map targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_credential: Option<String>,
}

/// Properties of a target group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTargetGroupProperties {
    /// The group members. `None` when the remote omits the list.
    #[serde(default)]
    pub members: Option<Vec<JobTarget>>,
}

/// A target group as stored by the remote API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTargetGroup {
    /// The resource ID, set by the remote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The target group name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The resource type, set by the remote.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// The group properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<JobTargetGroupProperties>,
}

impl JobTargetGroup {
    /// Returns the members, if the remote sent a list.
    #[must_use]
    pub fn members(&self) -> Option<&[JobTarget]> {
        self.properties.as_ref()?.members.as_deref()
    }
}
