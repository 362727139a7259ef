//! Generic Resource Manager ID parsing.
//!
//! A Resource Manager ID is an absolute path of alternating keys and values:
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}/...
//! ```
//!
//! [`ResourceId::parse`] splits such a path into the subscription, resource
//! group, provider namespace and the remaining key/value segments. Typed IDs
//! (see [`crate::services::mssql::parse`]) then consume the segments they
//! expect with [`ResourceId::pop_segment`] and reject leftovers with
//! [`ResourceId::validate_no_empty_segments`].
//!
//! Keys are matched case-sensitively.
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::resourceid::ResourceId;
//!
//! let mut id = ResourceId::parse(
//!     "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Sql/servers/server1",
//! ).unwrap();
//! assert_eq!(id.subscription_id, "sub1");
//! assert_eq!(id.resource_group, "group1");
//! assert_eq!(id.pop_segment("servers").unwrap(), "server1");
//! assert!(id.validate_no_empty_segments("...").is_ok());
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced while parsing a Resource Manager ID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResourceIdError {
    /// The input is empty or not an absolute path.
    #[error("Cannot parse Azure ID {input:?}: expected an absolute path")]
    NotAnAbsolutePath {
        /// The rejected input.
        input: String,
    },

    /// Keys and values do not pair up.
    #[error("The number of path segments is not divisible by 2 in {path:?}")]
    OddSegmentCount {
        /// The trimmed path.
        path: String,
    },

    /// A key or value is an empty string.
    #[error("Key/Value cannot be empty strings. Key: '{key}', Value: '{value}'")]
    EmptySegment {
        /// The key of the offending pair.
        key: String,
        /// The value of the offending pair.
        value: String,
    },

    /// The `subscriptions` segment is absent.
    #[error("ID was missing the 'subscriptions' element")]
    MissingSubscription,

    /// The `resourceGroups` segment is absent.
    #[error("ID was missing the 'resourceGroups' element")]
    MissingResourceGroup,

    /// A segment required by the typed ID is absent.
    #[error("ID was missing the `{name}` element")]
    MissingSegment {
        /// The expected key.
        name: String,
    },

    /// Segments remain after the typed ID consumed what it expects.
    #[error("ID contained more segments than required: {input:?}, {remaining:?}")]
    UnexpectedSegments {
        /// The original input.
        input: String,
        /// The leftover key/value pairs.
        remaining: BTreeMap<String, String>,
    },
}

/// Produces the canonical Resource Manager ID string of a typed ID.
pub trait ResourceIdFormatter {
    /// Returns the canonical ID, e.g. `/subscriptions/.../targetGroups/tg1`.
    fn id(&self) -> String;
}

/// A Resource Manager ID split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceId {
    /// The subscription ID.
    pub subscription_id: String,
    /// The resource group name, empty when the ID is subscription-scoped.
    pub resource_group: String,
    /// The provider namespace (e.g. `Microsoft.Sql`), empty when absent.
    pub provider: String,
    /// The remaining key/value segments.
    pub path: BTreeMap<String, String>,
}

impl ResourceId {
    /// Parses a Resource Manager ID.
    ///
    /// The first `subscriptions` and the first `providers` segments are kept
    /// aside; later occurrences land in [`path`](Self::path).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError`] when the input is not an absolute path,
    /// keys and values do not pair up, a key or value is empty, or the
    /// subscription is absent.
    pub fn parse(input: &str) -> Result<Self, ResourceIdError> {
        if !input.starts_with('/') {
            return Err(ResourceIdError::NotAnAbsolutePath {
                input: input.to_string(),
            });
        }

        // Query strings and fragments are not part of the ID.
        let raw_path = input.split(['?', '#']).next().unwrap_or_default();
        let path = raw_path.trim_start_matches('/').trim_end_matches('/');
        let components: Vec<&str> = path.split('/').collect();

        if components.len() % 2 != 0 {
            return Err(ResourceIdError::OddSegmentCount {
                path: path.to_string(),
            });
        }

        let mut subscription_id = String::new();
        let mut provider = String::new();
        let mut segments = BTreeMap::new();

        for pair in components.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(ResourceIdError::EmptySegment {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }

            match key {
                "subscriptions" if subscription_id.is_empty() => {
                    subscription_id = value.to_string();
                }
                "providers" if provider.is_empty() => provider = value.to_string(),
                _ => {
                    segments.insert(key.to_string(), value.to_string());
                }
            }
        }

        if subscription_id.is_empty() {
            return Err(ResourceIdError::MissingSubscription);
        }

        let resource_group = segments.remove("resourceGroups").unwrap_or_default();

        Ok(Self {
            subscription_id,
            resource_group,
            provider,
            path: segments,
        })
    }

    /// Removes and returns the value of the segment keyed `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::MissingSegment`] if no such key exists.
    pub fn pop_segment(&mut self, name: &str) -> Result<String, ResourceIdError> {
        self.path
            .remove(name)
            .ok_or_else(|| ResourceIdError::MissingSegment {
                name: name.to_string(),
            })
    }

    /// Checks that every segment has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIdError::UnexpectedSegments`] listing the leftovers.
    pub fn validate_no_empty_segments(&self, input: &str) -> Result<(), ResourceIdError> {
        if self.path.is_empty() {
            return Ok(());
        }
        Err(ResourceIdError::UnexpectedSegments {
            input: input.to_string(),
            remaining: self.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_known_parts() {
        let id = ResourceId::parse(
            "/subscriptions/sub1/resourceGroups/group1/providers/Microsoft.Sql/servers/server1/jobAgents/agent1",
        )
        .unwrap();

        assert_eq!(id.subscription_id, "sub1");
        assert_eq!(id.resource_group, "group1");
        assert_eq!(id.provider, "Microsoft.Sql");
        assert_eq!(id.path.len(), 2);
        assert_eq!(id.path.get("servers"), Some(&"server1".to_string()));
        assert_eq!(id.path.get("jobAgents"), Some(&"agent1".to_string()));
    }

    #[test]
    fn test_parse_tolerates_trailing_slash() {
        let id = ResourceId::parse("/subscriptions/sub1/resourceGroups/group1/").unwrap();
        assert_eq!(id.resource_group, "group1");
        assert!(id.path.is_empty());
    }

    #[test]
    fn test_parse_rejects_empty_and_relative_input() {
        assert!(matches!(
            ResourceId::parse(""),
            Err(ResourceIdError::NotAnAbsolutePath { .. })
        ));
        assert!(matches!(
            ResourceId::parse("subscriptions/sub1"),
            Err(ResourceIdError::NotAnAbsolutePath { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_odd_segment_counts() {
        assert!(matches!(
            ResourceId::parse("/"),
            Err(ResourceIdError::OddSegmentCount { .. })
        ));
        assert!(matches!(
            ResourceId::parse("/subscriptions/"),
            Err(ResourceIdError::OddSegmentCount { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_values() {
        assert!(matches!(
            ResourceId::parse("/subscriptions/sub1/resourceGroups//providers/Microsoft.Sql"),
            Err(ResourceIdError::EmptySegment { .. })
        ));
    }

    #[test]
    fn test_parse_requires_subscription() {
        assert!(matches!(
            ResourceId::parse("/resourceGroups/group1"),
            Err(ResourceIdError::MissingSubscription)
        ));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = ResourceId::parse("/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/group1");
        assert!(matches!(result, Err(ResourceIdError::MissingSubscription)));

        let id = ResourceId::parse("/subscriptions/sub1/resourcegroups/group1").unwrap();
        assert!(id.resource_group.is_empty());
        assert_eq!(id.path.get("resourcegroups"), Some(&"group1".to_string()));
    }

    #[test]
    fn test_first_subscription_and_provider_win() {
        let id = ResourceId::parse(
            "/subscriptions/sub1/resourceGroups/rg/providers/Microsoft.ServiceBus/namespaces/ns/topics/t/subscriptions/s2",
        )
        .unwrap();
        assert_eq!(id.subscription_id, "sub1");
        assert_eq!(id.path.get("subscriptions"), Some(&"s2".to_string()));
    }

    #[test]
    fn test_pop_segment_and_leftovers() {
        let input = "/subscriptions/sub1/resourceGroups/rg/providers/Microsoft.Sql/servers/s1/databases/db1";
        let mut id = ResourceId::parse(input).unwrap();

        assert_eq!(id.pop_segment("servers").unwrap(), "s1");
        assert!(matches!(
            id.pop_segment("jobAgents"),
            Err(ResourceIdError::MissingSegment { name }) if name == "jobAgents"
        ));

        let err = id.validate_no_empty_segments(input).unwrap_err();
        assert!(err.to_string().contains("databases"));

        assert_eq!(id.pop_segment("databases").unwrap(), "db1");
        assert!(id.validate_no_empty_segments(input).is_ok());
    }

    #[test]
    fn test_query_string_is_ignored() {
        let id = ResourceId::parse("/subscriptions/sub1/resourceGroups/rg?api-version=2020").unwrap();
        assert_eq!(id.resource_group, "rg");
    }
}
