//! SOQL query construction for the Tooling API

const DEPENDENCY_FIELDS: &str = "MetadataComponentId, MetadataComponentName, \
     MetadataComponentType, RefMetadataComponentId, RefMetadataComponentName, \
     RefMetadataComponentType";

/// The full dependency feed.
pub fn all_dependency_records() -> String {
    format!("SELECT {DEPENDENCY_FIELDS} FROM MetadataComponentDependency")
}

/// Id pairs of dependency rows touching a parent-qualified component type
/// on either side.
pub fn parented_component_ids() -> String {
    "SELECT MetadataComponentId, RefMetadataComponentId FROM MetadataComponentDependency \
     WHERE (MetadataComponentType = 'CustomField' OR RefMetadataComponentType = 'CustomField') \
     OR (MetadataComponentType = 'ValidationRule' OR RefMetadataComponentType = 'ValidationRule') \
     OR (MetadataComponentType = 'QuickAction' OR RefMetadataComponentType = 'QuickAction')"
        .to_string()
}

pub fn custom_fields(ids: &[String]) -> String {
    format!(
        "SELECT Id, TableEnumOrId FROM CustomField c WHERE c.Id IN {}",
        in_id_list(ids)
    )
}

pub fn validation_rules(ids: &[String]) -> String {
    format!(
        "SELECT Id, EntityDefinitionId FROM ValidationRule c WHERE c.Id IN {}",
        in_id_list(ids)
    )
}

pub fn quick_actions(ids: &[String]) -> String {
    format!(
        "SELECT Id, SobjectType FROM QuickActionDefinition c WHERE c.Id IN {}",
        in_id_list(ids)
    )
}

pub fn custom_objects(ids: &[String]) -> String {
    format!(
        "SELECT Id, DeveloperName FROM CustomObject c WHERE c.Id IN {}",
        in_id_list(ids)
    )
}

pub fn field_definitions(entity_ids: &[String]) -> String {
    format!(
        "SELECT EntityDefinitionId, DataType, DurableId FROM FieldDefinition c \
         WHERE c.EntityDefinitionId IN {}",
        in_id_list(entity_ids)
    )
}

/// Render an id batch as a quoted SOQL IN list: `('a','b','c')`.
///
/// Ids are platform-assigned alphanumerics; quotes are stripped rather than
/// escaped since they can never legitimately appear.
fn in_id_list(ids: &[String]) -> String {
    let quoted: Vec<String> = ids
        .iter()
        .map(|id| format!("'{}'", id.replace('\'', "")))
        .collect();
    format!("({})", quoted.join(","))
}
