//! Metadata component type definitions
//!
//! The Tooling API reports component types as plain strings, and new types
//! appear as the platform evolves, so this is an open set wrapping the raw
//! value rather than a closed enum. The types the graph builder treats
//! specially are exposed as constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a metadata component (CustomField, ApexClass, Flow, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentType(String);

/// Component types whose display name is ambiguous without the owning
/// object; these get a parent qualifier prefix in the graph.
pub const COMPONENTS_WITH_PARENTS: [&str; 3] = [
    ComponentType::CUSTOM_FIELD,
    ComponentType::VALIDATION_RULE,
    ComponentType::QUICK_ACTION,
];

impl ComponentType {
    pub const CUSTOM_FIELD: &'static str = "CustomField";
    pub const VALIDATION_RULE: &'static str = "ValidationRule";
    pub const QUICK_ACTION: &'static str = "QuickAction";
    pub const CUSTOM_OBJECT: &'static str = "CustomObject";
    pub const AURA_DEFINITION: &'static str = "AuraDefinition";
    pub const AURA_DEFINITION_BUNDLE: &'static str = "AuraDefinitionBundle";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this type needs a parent qualifier to disambiguate its name.
    pub fn has_parent(&self) -> bool {
        COMPONENTS_WITH_PARENTS.contains(&self.0.as_str())
    }

    pub fn is_custom_object(&self) -> bool {
        self.0 == Self::CUSTOM_OBJECT
    }

    pub fn is_aura_definition(&self) -> bool {
        self.0 == Self::AURA_DEFINITION
    }

    pub fn is_aura_bundle(&self) -> bool {
        self.0 == Self::AURA_DEFINITION_BUNDLE
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
