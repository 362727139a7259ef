//! The `azurerm_mssql_job_target_group` resource.
//!
//! A job target group is a named set of SQL targets owned by an elastic job
//! agent. The handlers translate between the configuration model and the
//! remote API:
//!
//! - [`JobTargetGroupResource::create_update`] creates or fully replaces a group
//! - [`JobTargetGroupResource::read`] refreshes the model from the remote
//! - [`JobTargetGroupResource::delete`] removes a group
//! - [`JobTargetGroupResource::import`] adopts an existing group by ID
//!
//! # Example
//!
//! ```rust,ignore
//! use azurerm_mssql::resource::ResourceData;
//! use azurerm_mssql::services::mssql::{JobTargetGroupModel, JobTargetGroupResource};
//! use azurerm_mssql::Client;
//!
//! let client = Client::build(&options);
//! let resource = JobTargetGroupResource::new();
//!
//! let model = JobTargetGroupModel::from_value(config)?;
//! let mut data = ResourceData::new(model);
//! resource.create_update(&client, &mut data).await?;
//! println!("created {}", data.id().unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::resource::{
    Attribute, AttributeType, ResourceData, ResourceError, ResourceSchema, ResourceTimeouts,
    ValidationRule,
};
use crate::resourceid::ResourceIdFormatter;
use crate::services::mssql::models::{JobTargetGroup, JobTargetGroupProperties};
use crate::services::mssql::parse::{JobAgentId, JobTargetGroupId};
use crate::services::mssql::targets::{
    dedup_targets, expand_targets, flatten_targets, TargetBlock, TargetType,
};
use crate::services::mssql::validate;
use crate::services::Client;

/// The resource type name the host registers.
pub const RESOURCE_TYPE: &str = "azurerm_mssql_job_target_group";

const TARGET_ATTRIBUTES: &[Attribute] = &[
    Attribute::new("type", AttributeType::String)
        .validation(ValidationRule::OneOf(TargetType::VALUES)),
    Attribute::new("server_name", AttributeType::String)
        .required()
        .validation(ValidationRule::ServerName),
    Attribute::new("database_name", AttributeType::String)
        .validation(ValidationRule::DatabaseName),
    Attribute::new("elastic_pool_name", AttributeType::String)
        .validation(ValidationRule::ElasticPoolName),
    Attribute::new("shard_map_name", AttributeType::String),
    Attribute::new("refresh_credential_name", AttributeType::String),
    Attribute::new("exclude", AttributeType::Bool).default_bool(false),
];

const ATTRIBUTES: &[Attribute] = &[
    Attribute::new("name", AttributeType::String)
        .required()
        .force_new(),
    Attribute::new("job_agent_id", AttributeType::String)
        .required()
        .force_new()
        .validation(ValidationRule::JobAgentId),
    Attribute::new("target", AttributeType::Set).nested(TARGET_ATTRIBUTES),
];

/// The configuration model of a job target group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobTargetGroupModel {
    /// The target group name.
    pub name: String,
    /// The ID of the owning job agent.
    pub job_agent_id: String,
    /// The targets, deduplicated in first-appearance order.
    pub target: Vec<TargetBlock>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModel {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    job_agent_id: Option<String>,
    #[serde(default)]
    target: Vec<RawTarget>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTarget {
    #[serde(rename = "type", default)]
    target_type: Option<String>,
    #[serde(default)]
    server_name: Option<String>,
    #[serde(default)]
    database_name: Option<String>,
    #[serde(default)]
    elastic_pool_name: Option<String>,
    #[serde(default)]
    shard_map_name: Option<String>,
    #[serde(default)]
    refresh_credential_name: Option<String>,
    #[serde(default)]
    exclude: bool,
}

impl JobTargetGroupModel {
    /// Decodes and validates a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the document has the wrong
    /// shape, and [`ResourceError::Validation`] if a field is missing or
    /// rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use azurerm_mssql::services::mssql::JobTargetGroupModel;
    /// use serde_json::json;
    ///
    /// let model = JobTargetGroupModel::from_value(json!({
    ///     "name": "tg1",
    ///     "job_agent_id": "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Sql/servers/srv/jobAgents/agent",
    ///     "target": [{"type": "Server", "server_name": "srv"}]
    /// })).unwrap();
    /// assert_eq!(model.target.len(), 1);
    /// ```
    pub fn from_value(value: serde_json::Value) -> Result<Self, ResourceError> {
        let raw: RawModel = serde_json::from_value(value)?;

        let name = required(raw.name, "name")?;
        let job_agent_id = required(raw.job_agent_id, "job_agent_id")?;
        validate::job_agent_id(&job_agent_id, "job_agent_id")?;

        let mut targets = Vec::with_capacity(raw.target.len());
        for (index, target) in raw.target.into_iter().enumerate() {
            targets.push(decode_target(index, target)?);
        }

        Ok(Self {
            name,
            job_agent_id,
            target: dedup_targets(targets),
        })
    }

    /// Renders the model as a state document.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the model cannot be
    /// rendered.
    pub fn to_value(&self) -> Result<serde_json::Value, ResourceError> {
        Ok(serde_json::to_value(self)?)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ResourceError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ResourceError::validation(field, "required field is not set"))
}

fn decode_target(index: usize, raw: RawTarget) -> Result<TargetBlock, ResourceError> {
    let field = |name: &str| format!("target.{index}.{name}");

    let target_type = raw
        .target_type
        .map(|t| t.parse::<TargetType>())
        .transpose()
        .map_err(|e| ResourceError::validation(field("type"), e.to_string()))?;

    let server_name = required(raw.server_name, &field("server_name"))?;
    validate::server_name(&server_name, &field("server_name"))?;

    if let Some(database_name) = &raw.database_name {
        validate::database_name(database_name, &field("database_name"))?;
    }
    if let Some(elastic_pool_name) = &raw.elastic_pool_name {
        validate::elastic_pool_name(elastic_pool_name, &field("elastic_pool_name"))?;
    }

    Ok(TargetBlock {
        target_type,
        server_name: Some(server_name),
        database_name: raw.database_name,
        elastic_pool_name: raw.elastic_pool_name,
        shard_map_name: raw.shard_map_name,
        refresh_credential_name: raw.refresh_credential_name,
        exclude: raw.exclude,
    })
}

/// Lifecycle handlers for job target groups.
///
/// # Thread Safety
///
/// `JobTargetGroupResource` is `Copy`, `Send`, and `Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobTargetGroupResource {
    timeouts: ResourceTimeouts,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<JobTargetGroupResource>();
};

impl JobTargetGroupResource {
    /// Creates the handlers with the default timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the handlers with custom timeouts.
    #[must_use]
    pub const fn with_timeouts(timeouts: ResourceTimeouts) -> Self {
        Self { timeouts }
    }

    /// Returns the timeouts in effect.
    #[must_use]
    pub const fn timeouts(&self) -> &ResourceTimeouts {
        &self.timeouts
    }

    /// Returns the schema descriptor the host registers.
    #[must_use]
    pub const fn schema(&self) -> ResourceSchema {
        ResourceSchema {
            type_name: RESOURCE_TYPE,
            version: 0,
            attributes: ATTRIBUTES,
            timeouts: self.timeouts,
            importable: true,
        }
    }

    /// Creates or fully replaces a target group, then reads it back.
    ///
    /// For a new resource the group is probed first, and an existing group
    /// must be imported instead.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MalformedIdentifier`] if `job_agent_id` does not parse
    /// - [`ResourceError::AlreadyExists`] if a new resource's group already exists
    /// - [`ResourceError::Remote`] if a remote call fails
    pub async fn create_update(
        &self,
        client: &Client,
        data: &mut ResourceData<JobTargetGroupModel>,
    ) -> Result<(), ResourceError> {
        let groups = &client.mssql.job_target_groups_client;
        let is_new = data.is_new_resource();
        let timeout = self.timeouts.for_create_update(is_new);

        tracing::info!("preparing arguments for Job Target Group creation");

        let agent_id = JobAgentId::parse(&data.job_agent_id)?;
        let id = JobTargetGroupId::from_job_agent(&agent_id, data.name.clone());

        if is_new {
            match groups
                .get(
                    &id.resource_group,
                    &id.server_name,
                    &id.job_agent_name,
                    &id.target_group_name,
                    Some(timeout),
                )
                .await
            {
                Ok(existing) => {
                    if let Some(existing_id) = existing.id.filter(|i| !i.is_empty()) {
                        return Err(ResourceError::AlreadyExists {
                            resource_type: RESOURCE_TYPE,
                            id: existing_id,
                        });
                    }
                }
                Err(e) if e.was_not_found() => {}
                Err(e) => {
                    return Err(ResourceError::remote(
                        "checking for presence of existing MsSql",
                        &id,
                        e,
                    ));
                }
            }
        }

        let parameters = JobTargetGroup {
            name: Some(data.name.clone()),
            properties: Some(JobTargetGroupProperties {
                members: Some(expand_targets(&data.target)),
            }),
            ..JobTargetGroup::default()
        };

        groups
            .create_or_update(
                &id.resource_group,
                &id.server_name,
                &id.job_agent_name,
                &id.target_group_name,
                &parameters,
                Some(timeout),
            )
            .await
            .map_err(|e| {
                ResourceError::remote(if is_new { "creating" } else { "updating" }, &id, e)
            })?;

        data.set_id(id.id());

        self.read(client, data).await
    }

    /// Refreshes the model from the remote group.
    ///
    /// A group that no longer exists clears the handle instead of failing.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MalformedIdentifier`] if the handle does not parse
    /// - [`ResourceError::Remote`] if the remote call fails for another reason
    pub async fn read(
        &self,
        client: &Client,
        data: &mut ResourceData<JobTargetGroupModel>,
    ) -> Result<(), ResourceError> {
        let groups = &client.mssql.job_target_groups_client;
        let id = JobTargetGroupId::parse(data.id().unwrap_or_default())?;

        let group = match groups
            .get(
                &id.resource_group,
                &id.server_name,
                &id.job_agent_name,
                &id.target_group_name,
                Some(self.timeouts.read),
            )
            .await
        {
            Ok(group) => group,
            Err(e) if e.was_not_found() => {
                tracing::warn!(%id, "target group was not found, removing from state");
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(ResourceError::remote("reading", &id, e)),
        };

        data.target = flatten_targets(group.members());
        data.name = group.name.unwrap_or_else(|| id.target_group_name.clone());
        data.job_agent_id = id.job_agent_id().id();

        Ok(())
    }

    /// Deletes the group. A group that is already gone counts as deleted.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MalformedIdentifier`] if the handle does not parse
    /// - [`ResourceError::Remote`] carrying the ID if the remote call fails
    pub async fn delete(
        &self,
        client: &Client,
        data: &mut ResourceData<JobTargetGroupModel>,
    ) -> Result<(), ResourceError> {
        let groups = &client.mssql.job_target_groups_client;
        let id = JobTargetGroupId::parse(data.id().unwrap_or_default())?;

        match groups
            .delete(
                &id.resource_group,
                &id.server_name,
                &id.job_agent_name,
                &id.target_group_name,
                Some(self.timeouts.delete),
            )
            .await
        {
            Ok(()) => {}
            Err(e) if e.was_not_found() => {
                tracing::debug!(%id, "target group already deleted");
            }
            Err(e) => return Err(ResourceError::remote("deleting", &id, e)),
        }

        data.clear_id();
        Ok(())
    }

    /// Adopts an existing group by ID.
    ///
    /// The ID is validated before any remote call.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::MalformedIdentifier`] if `id` does not parse
    /// - [`ResourceError::NotFound`] if the group does not exist
    /// - [`ResourceError::Remote`] if the remote call fails
    pub async fn import(
        &self,
        client: &Client,
        id: &str,
    ) -> Result<ResourceData<JobTargetGroupModel>, ResourceError> {
        JobTargetGroupId::parse(id)?;

        let mut data = ResourceData::from_existing(id, JobTargetGroupModel::default());
        self.read(client, &mut data).await?;

        if data.id().is_none() {
            return Err(ResourceError::NotFound {
                resource_type: RESOURCE_TYPE,
                id: id.to_string(),
            });
        }
        Ok(data)
    }
}
