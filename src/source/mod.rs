//! Record source abstraction for the Tooling API
//!
//! The graph builder only ever talks to a [`RecordSource`]; the concrete
//! [`ToolingApiSource`] speaks the REST Tooling API, and tests substitute
//! in-memory implementations.

pub mod soql;
mod tooling;

pub use tooling::ToolingApiSource;

use crate::models::{
    ComponentIdPair, CustomFieldRecord, CustomObjectRecord, DependencyRecord,
    FieldDefinitionRecord, QuickActionRecord, ValidationRuleRecord,
};
use anyhow::Result;
use async_trait::async_trait;

/// Record source errors
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("query rejected by the Tooling API (HTTP {status}): {body}")]
    Query { status: u16, body: String },

    #[error("access token environment variable {0} is not set")]
    MissingToken(String),

    #[error("invalid instance URL: {0}")]
    InvalidUrl(String),
}

/// Supplier of raw dependency rows and the auxiliary lookup tables the
/// graph builder hydrates during initialization.
///
/// Id-batch methods must tolerate org-scale batches (hundreds to low
/// thousands of ids); chunking is the implementation's concern.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Every dependency row in the org.
    async fn dependency_records(&self) -> Result<Vec<DependencyRecord>>;

    /// Id pairs from dependency rows whose source or target type is one of
    /// the parent-qualified categories.
    async fn parented_component_ids(&self) -> Result<Vec<ComponentIdPair>>;

    async fn custom_fields(&self, ids: &[String]) -> Result<Vec<CustomFieldRecord>>;

    async fn validation_rules(&self, ids: &[String]) -> Result<Vec<ValidationRuleRecord>>;

    async fn quick_actions(&self, ids: &[String]) -> Result<Vec<QuickActionRecord>>;

    async fn custom_objects(&self, ids: &[String]) -> Result<Vec<CustomObjectRecord>>;

    async fn field_definitions(
        &self,
        entity_ids: &[String],
    ) -> Result<Vec<FieldDefinitionRecord>>;
}
