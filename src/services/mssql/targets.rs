//! Conversion between configured target blocks and remote job targets.
//!
//! Configuration names target kinds `Server`, `Database`, `ElasticPool` and
//! `ShardMap`; the remote API calls them `SqlServer`, `SqlDatabase`,
//! `SqlElasticPool` and `SqlShardMap`. Inclusion is a boolean `exclude` flag
//! on one side and a membership type on the other.
//!
//! Targets form a set: blocks equal on every field collapse into the first
//! one seen.
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::services::mssql::targets::{expand_targets, flatten_targets, TargetBlock, TargetType};
//!
//! let configured = vec![TargetBlock {
//!     target_type: Some(TargetType::Database),
//!     server_name: Some("server1".to_string()),
//!     database_name: Some("db1".to_string()),
//!     exclude: true,
//!     ..TargetBlock::default()
//! }];
//!
//! let remote = expand_targets(&configured);
//! assert_eq!(flatten_targets(Some(&remote)), configured);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::mssql::models::{JobTarget, JobTargetGroupMembershipType, JobTargetType};

/// The kind of a configured target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// Every database on a server.
    Server,
    /// A single database.
    Database,
    /// Every database in an elastic pool.
    ElasticPool,
    /// Every database in a shard map.
    ShardMap,
}

impl TargetType {
    /// The accepted configuration values.
    pub const VALUES: &'static [&'static str] = &["Server", "Database", "ElasticPool", "ShardMap"];

    /// Returns the configuration value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::Database => "Database",
            Self::ElasticPool => "ElasticPool",
            Self::ShardMap => "ShardMap",
        }
    }

    /// Returns the remote target type.
    #[must_use]
    pub const fn to_remote(self) -> JobTargetType {
        match self {
            Self::Server => JobTargetType::SqlServer,
            Self::Database => JobTargetType::SqlDatabase,
            Self::ElasticPool => JobTargetType::SqlElasticPool,
            Self::ShardMap => JobTargetType::SqlShardMap,
        }
    }

    /// Returns the configuration type for a remote one, or `None` for
    /// `TargetGroup`, which cannot be configured.
    #[must_use]
    pub const fn from_remote(remote: JobTargetType) -> Option<Self> {
        match remote {
            JobTargetType::SqlServer => Some(Self::Server),
            JobTargetType::SqlDatabase => Some(Self::Database),
            JobTargetType::SqlElasticPool => Some(Self::ElasticPool),
            JobTargetType::SqlShardMap => Some(Self::ShardMap),
            JobTargetType::TargetGroup => None,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a [`TargetType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected type to be one of {:?}, got {value:?}", TargetType::VALUES)]
pub struct InvalidTargetTypeError {
    /// The rejected value.
    pub value: String,
}

impl FromStr for TargetType {
    type Err = InvalidTargetTypeError;

    // Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Server" => Ok(Self::Server),
            "Database" => Ok(Self::Database),
            "ElasticPool" => Ok(Self::ElasticPool),
            "ShardMap" => Ok(Self::ShardMap),
            _ => Err(InvalidTargetTypeError {
                value: s.to_string(),
            }),
        }
    }
}

/// A configured target of a job target group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetBlock {
    /// The target kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    /// The target server. Required in configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// The target database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// The target elastic pool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_pool_name: Option<String>,
    /// The target shard map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_map_name: Option<String>,
    /// The name of the credential used to refresh membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_credential_name: Option<String>,
    /// Whether the target is excluded from the group.
    #[serde(default)]
    pub exclude: bool,
}

/// Removes blocks equal to an earlier one, keeping first-appearance order.
#[must_use]
pub fn dedup_targets(targets: impl IntoIterator<Item = TargetBlock>) -> Vec<TargetBlock> {
    let mut seen = HashSet::new();
    targets
        .into_iter()
        .filter(|target| seen.insert(target.clone()))
        .collect()
}

/// Converts configured targets into the remote representation.
///
/// Optional names are copied only when present and non-empty.
#[must_use]
pub fn expand_targets(targets: &[TargetBlock]) -> Vec<JobTarget> {
    targets
        .iter()
        .map(|target| JobTarget {
            membership_type: if target.exclude {
                JobTargetGroupMembershipType::Exclude
            } else {
                JobTargetGroupMembershipType::Include
            },
            target_type: target.target_type.map(TargetType::to_remote),
            server_name: non_empty(target.server_name.as_deref()),
            database_name: non_empty(target.database_name.as_deref()),
            elastic_pool_name: non_empty(target.elastic_pool_name.as_deref()),
            shard_map_name: non_empty(target.shard_map_name.as_deref()),
            refresh_credential: non_empty(target.refresh_credential_name.as_deref()),
        })
        .collect()
}

/// Converts remote targets back into configured blocks.
///
/// `None` flattens to an empty list. Remote duplicates collapse.
#[must_use]
pub fn flatten_targets(targets: Option<&[JobTarget]>) -> Vec<TargetBlock> {
    let Some(targets) = targets else {
        return Vec::new();
    };

    dedup_targets(targets.iter().map(|target| TargetBlock {
        target_type: target.target_type.and_then(TargetType::from_remote),
        server_name: target.server_name.clone(),
        database_name: target.database_name.clone(),
        elastic_pool_name: target.elastic_pool_name.clone(),
        shard_map_name: target.shard_map_name.clone(),
        refresh_credential_name: target.refresh_credential.clone(),
        exclude: target.membership_type == JobTargetGroupMembershipType::Exclude,
    }))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToString::to_string)
}
