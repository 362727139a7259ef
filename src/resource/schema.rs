//! Static schema descriptors for resources.
//!
//! A [`ResourceSchema`] describes the attributes of a resource type so the
//! host can register it. Descriptors are built from `&'static` data and can
//! be serialized with `serde` for the host.
//!
//! # Example
//!
//! ```rust
//! use azurerm_mssql::resource::{Attribute, AttributeType};
//!
//! const NAME: Attribute = Attribute::new("name", AttributeType::String)
//!     .required()
//!     .force_new();
//!
//! assert!(NAME.required);
//! assert!(NAME.force_new);
//! ```

use serde::Serialize;

use crate::resource::ResourceTimeouts;

/// The value type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A string.
    String,
    /// A boolean.
    Bool,
    /// An unordered collection of nested blocks, deduplicated on every field.
    Set,
}

/// The validation applied to an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "values")]
pub enum ValidationRule {
    /// The value must be one of the listed strings (case-sensitive).
    OneOf(&'static [&'static str]),
    /// The value must be a valid SQL server name.
    ServerName,
    /// The value must be a valid SQL database name.
    DatabaseName,
    /// The value must be a valid SQL elastic pool name.
    ElasticPoolName,
    /// The value must be a job agent ID.
    JobAgentId,
}

/// A single attribute of a resource or nested block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// The attribute name.
    pub name: &'static str,
    /// The value type.
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Whether the attribute must be set.
    pub required: bool,
    /// Whether a change forces the resource to be replaced.
    pub force_new: bool,
    /// The default for booleans, if any.
    pub default_bool: Option<bool>,
    /// The validation applied to the value, if any.
    pub validation: Option<ValidationRule>,
    /// The attributes of a nested block.
    pub nested: &'static [Attribute],
}

impl Attribute {
    /// Creates an optional attribute without validation.
    #[must_use]
    pub const fn new(name: &'static str, attribute_type: AttributeType) -> Self {
        Self {
            name,
            attribute_type,
            required: false,
            force_new: false,
            default_bool: None,
            validation: None,
            nested: &[],
        }
    }

    /// Marks the attribute as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the attribute as forcing replacement on change.
    #[must_use]
    pub const fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    /// Sets a boolean default.
    #[must_use]
    pub const fn default_bool(mut self, value: bool) -> Self {
        self.default_bool = Some(value);
        self
    }

    /// Sets the validation rule.
    #[must_use]
    pub const fn validation(mut self, rule: ValidationRule) -> Self {
        self.validation = Some(rule);
        self
    }

    /// Sets the attributes of a nested block.
    #[must_use]
    pub const fn nested(mut self, attributes: &'static [Self]) -> Self {
        self.nested = attributes;
        self
    }
}

/// The description of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceSchema {
    /// The resource type name, e.g. `azurerm_mssql_job_target_group`.
    pub type_name: &'static str,
    /// The schema version.
    pub version: u32,
    /// The top-level attributes.
    pub attributes: &'static [Attribute],
    /// The default operation timeouts.
    pub timeouts: ResourceTimeouts,
    /// Whether existing resources can be imported by ID.
    pub importable: bool,
}

impl ResourceSchema {
    /// Looks up a top-level attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &[Attribute] = &[
        Attribute::new("flag", AttributeType::Bool).default_bool(false),
        Attribute::new("kind", AttributeType::String).validation(ValidationRule::OneOf(&["A", "B"])),
    ];

    const ATTRIBUTES: &[Attribute] = &[
        Attribute::new("name", AttributeType::String).required().force_new(),
        Attribute::new("block", AttributeType::Set).nested(NESTED),
    ];

    fn schema() -> ResourceSchema {
        ResourceSchema {
            type_name: "test_resource",
            version: 0,
            attributes: ATTRIBUTES,
            timeouts: ResourceTimeouts::default(),
            importable: true,
        }
    }

    #[test]
    fn test_attribute_lookup() {
        let schema = schema();
        let name = schema.attribute("name").unwrap();
        assert!(name.required && name.force_new);
        assert!(schema.attribute("missing").is_none());
    }

    #[test]
    fn test_nested_attributes() {
        let block = schema().attribute("block").copied().unwrap();
        assert_eq!(block.attribute_type, AttributeType::Set);
        assert_eq!(block.nested.len(), 2);
        assert_eq!(block.nested[0].default_bool, Some(false));
    }

    #[test]
    fn test_schema_serializes_for_the_host() {
        let value = serde_json::to_value(schema()).unwrap();
        assert_eq!(value["type_name"], "test_resource");
        assert_eq!(value["attributes"][0]["type"], "string");
        assert_eq!(value["attributes"][1]["nested"][1]["validation"]["rule"], "one_of");
    }
}
