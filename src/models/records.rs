//! Wire records returned by the Tooling API
//!
//! Field renames match the Tooling API column names exactly so query results
//! deserialize without an intermediate step.

use crate::models::ComponentType;
use serde::Deserialize;

/// One row of the MetadataComponentDependency feed: the source component
/// depends on the referenced component.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyRecord {
    #[serde(rename = "MetadataComponentId")]
    pub component_id: String,
    #[serde(rename = "MetadataComponentName")]
    pub component_name: String,
    #[serde(rename = "MetadataComponentType")]
    pub component_type: ComponentType,
    #[serde(rename = "RefMetadataComponentId")]
    pub ref_component_id: String,
    #[serde(rename = "RefMetadataComponentName")]
    pub ref_component_name: String,
    #[serde(rename = "RefMetadataComponentType")]
    pub ref_component_type: ComponentType,
}

/// Id projection of a dependency row, used during id discovery.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentIdPair {
    #[serde(rename = "MetadataComponentId")]
    pub component_id: String,
    #[serde(rename = "RefMetadataComponentId")]
    pub ref_component_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldRecord {
    #[serde(rename = "Id")]
    pub id: String,
    /// Owning entity: either an sObject API name or a raw object id.
    #[serde(rename = "TableEnumOrId")]
    pub table_enum_or_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRuleRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "EntityDefinitionId")]
    pub entity_definition_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuickActionRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "SobjectType")]
    pub sobject_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomObjectRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "DeveloperName")]
    pub developer_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinitionRecord {
    #[serde(rename = "EntityDefinitionId")]
    pub entity_definition_id: String,
    /// Declared data type, e.g. `Text(80)` or `Lookup(Account)`.
    #[serde(rename = "DataType")]
    pub data_type: String,
    #[serde(rename = "DurableId")]
    pub durable_id: String,
}
