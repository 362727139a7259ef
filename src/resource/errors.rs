//! Error types for resource lifecycle operations.
//!
//! Handlers report every failure through [`ResourceError`]. Transport errors
//! are wrapped with the action that failed and the resource they concern:
//!
//! - **Not found on read**: not an error; the handler clears the handle
//! - **Not found on delete**: not an error; the group is already gone
//! - **Found on create**: [`ResourceError::AlreadyExists`]
//! - **Anything else**: [`ResourceError::Remote`]
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::resource::ResourceError;
//!
//! let error = ResourceError::AlreadyExists {
//!     resource_type: "azurerm_mssql_job_target_group",
//!     id: "/subscriptions/sub/resourceGroups/rg".to_string(),
//! };
//! assert!(error.to_string().contains("needs to be imported"));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::resourceid::ResourceIdError;

/// Error type for resource lifecycle operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource does not exist remotely.
    #[error("{resource_type} with ID {id:?} was not found")]
    NotFound {
        /// The resource type name.
        resource_type: &'static str,
        /// The ID that was looked up.
        id: String,
    },

    /// Creation found a resource that is not yet managed.
    #[error(
        "A resource with the ID {id:?} already exists - to be managed this resource needs to be imported into the State. Please see the resource documentation for {resource_type:?} for more information."
    )]
    AlreadyExists {
        /// The resource type name.
        resource_type: &'static str,
        /// The ID of the existing resource.
        id: String,
    },

    /// A remote call failed.
    #[error("{action} {id}: {source}")]
    Remote {
        /// What was being done, e.g. `"deleting"`.
        action: &'static str,
        /// The resource the call concerned.
        id: String,
        /// The transport error.
        #[source]
        source: HttpError,
    },

    /// A resource ID could not be parsed.
    #[error(transparent)]
    MalformedIdentifier(#[from] ResourceIdError),

    /// A configuration field failed validation.
    #[error("{field}: {reason}")]
    Validation {
        /// Path of the offending field, e.g. `target.0.server_name`.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A configuration or state document could not be converted.
    #[error("converting resource document: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Wraps a transport error with the action and resource it concerns.
    #[must_use]
    pub fn remote(action: &'static str, id: impl ToString, source: HttpError) -> Self {
        Self::Remote {
            action,
            id: id.to_string(),
            source,
        }
    }

    /// Creates a validation error for `field`.
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the request ID of the failed remote call, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Remote {
                source: HttpError::Response(e),
                ..
            } => e.error_reference.as_deref(),
            Self::Remote {
                source: HttpError::MaxRetries(e),
                ..
            } => e.error_reference.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if a remote call was aborted by its timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Remote { source, .. } if source.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_remote_error_embeds_action_and_id() {
        let error = ResourceError::remote(
            "deleting",
            "tg1",
            HttpError::Response(HttpResponseError {
                code: 500,
                message: r#"Status=500 Code="InternalServerError""#.to_string(),
                error_reference: Some("req-1".to_string()),
            }),
        );

        let message = error.to_string();
        assert!(message.starts_with("deleting tg1: "));
        assert!(message.contains("InternalServerError"));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_already_exists_names_resource_type() {
        let error = ResourceError::AlreadyExists {
            resource_type: "azurerm_mssql_job_target_group",
            id: "/subscriptions/sub".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("azurerm_mssql_job_target_group"));
        assert!(message.contains("/subscriptions/sub"));
    }

    #[test]
    fn test_malformed_identifier_is_transparent() {
        let error: ResourceError = ResourceIdError::MissingResourceGroup.into();
        assert_eq!(
            error.to_string(),
            ResourceIdError::MissingResourceGroup.to_string()
        );
    }

    #[test]
    fn test_validation_message() {
        let error = ResourceError::validation("target.0.type", "unknown type");
        assert_eq!(error.to_string(), "target.0.type: unknown type");
        assert!(error.request_id().is_none());
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_resource_error_implements_std_error() {
        let error: &dyn std::error::Error = &ResourceError::NotFound {
            resource_type: "azurerm_mssql_job_target_group",
            id: "x".to_string(),
        };
        assert!(error.source().is_none());
    }
}
