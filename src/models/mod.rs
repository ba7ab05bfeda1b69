//! Data model for Tooling API records and component categories

mod component_type;
mod records;

pub use component_type::{COMPONENTS_WITH_PARENTS, ComponentType};
pub use records::{
    ComponentIdPair, CustomFieldRecord, CustomObjectRecord, DependencyRecord,
    FieldDefinitionRecord, QuickActionRecord, ValidationRuleRecord,
};

/// Ids beginning with this character are raw object references rather than
/// resolvable component ids.
pub const OBJECT_ID_PREFIX: char = '0';
