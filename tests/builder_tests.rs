//! Graph builder tests
//!
//! End-to-end construction from canned record batches: qualifier resolution,
//! placeholder skipping, the Aura bundle reverse edge and field relationship
//! inference.

use anyhow::Result;
use async_trait::async_trait;
use orggraph::models::{
    ComponentIdPair, ComponentType, CustomFieldRecord, CustomObjectRecord, DependencyRecord,
    FieldDefinitionRecord, QuickActionRecord, ValidationRuleRecord,
};
use orggraph::{DependencyGraph, GraphBuilder, RecordSource};

/// In-memory record source serving canned tables.
#[derive(Default)]
struct StubSource {
    id_pairs: Vec<ComponentIdPair>,
    custom_fields: Vec<CustomFieldRecord>,
    validation_rules: Vec<ValidationRuleRecord>,
    quick_actions: Vec<QuickActionRecord>,
    custom_objects: Vec<CustomObjectRecord>,
    field_definitions: Vec<FieldDefinitionRecord>,
}

#[async_trait]
impl RecordSource for StubSource {
    async fn dependency_records(&self) -> Result<Vec<DependencyRecord>> {
        Ok(Vec::new())
    }

    async fn parented_component_ids(&self) -> Result<Vec<ComponentIdPair>> {
        Ok(self.id_pairs.clone())
    }

    async fn custom_fields(&self, _ids: &[String]) -> Result<Vec<CustomFieldRecord>> {
        Ok(self.custom_fields.clone())
    }

    async fn validation_rules(&self, _ids: &[String]) -> Result<Vec<ValidationRuleRecord>> {
        Ok(self.validation_rules.clone())
    }

    async fn quick_actions(&self, _ids: &[String]) -> Result<Vec<QuickActionRecord>> {
        Ok(self.quick_actions.clone())
    }

    async fn custom_objects(&self, _ids: &[String]) -> Result<Vec<CustomObjectRecord>> {
        Ok(self.custom_objects.clone())
    }

    async fn field_definitions(&self, _ids: &[String]) -> Result<Vec<FieldDefinitionRecord>> {
        Ok(self.field_definitions.clone())
    }
}

fn dep(
    src_id: &str,
    src_name: &str,
    src_type: &str,
    dst_id: &str,
    dst_name: &str,
    dst_type: &str,
) -> DependencyRecord {
    DependencyRecord {
        component_id: src_id.to_string(),
        component_name: src_name.to_string(),
        component_type: ComponentType::new(src_type),
        ref_component_id: dst_id.to_string(),
        ref_component_name: dst_name.to_string(),
        ref_component_type: ComponentType::new(dst_type),
    }
}

fn has_edge(graph: &DependencyGraph, from: &str, to: &str) -> bool {
    graph
        .edges()
        .iter()
        .any(|edge| edge.from == from && edge.to == to)
}

#[tokio::test]
async fn test_qualifier_resolved_through_object_table() {
    let source = StubSource {
        custom_fields: vec![CustomFieldRecord {
            id: "00N1".to_string(),
            table_enum_or_id: "0DH000000000001".to_string(),
        }],
        custom_objects: vec![CustomObjectRecord {
            id: "0DH000000000001AAA".to_string(),
            developer_name: "Project".to_string(),
        }],
        ..Default::default()
    };
    let builder = GraphBuilder::init(&source).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "00N1",
        "Due_Date__c",
        "CustomField",
        "01p1",
        "Helper",
        "ApexClass",
    )]);

    let field = graph.node_by_id("00N1").unwrap();
    assert_eq!(field.parent, "Project__c.");
    // The target has no parent-qualified type, so no qualifier
    assert_eq!(graph.node_by_id("01p1").unwrap().parent, "");
}

#[tokio::test]
async fn test_qualifier_from_plain_owner_name() {
    let source = StubSource {
        validation_rules: vec![ValidationRuleRecord {
            id: "03d1".to_string(),
            entity_definition_id: "Account".to_string(),
        }],
        ..Default::default()
    };
    let builder = GraphBuilder::init(&source).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "03d1",
        "Require_Phone",
        "ValidationRule",
        "00N9",
        "Phone__c",
        "CustomField",
    )]);

    assert_eq!(graph.node_by_id("03d1").unwrap().parent, "Account.");
}

#[tokio::test]
async fn test_quick_action_qualifier() {
    let source = StubSource {
        quick_actions: vec![QuickActionRecord {
            id: "09D1".to_string(),
            sobject_type: "Case".to_string(),
        }],
        ..Default::default()
    };
    let builder = GraphBuilder::init(&source).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "09D1",
        "LogCall",
        "QuickAction",
        "01p1",
        "Helper",
        "ApexClass",
    )]);

    assert_eq!(graph.node_by_id("09D1").unwrap().parent, "Case.");
}

#[tokio::test]
async fn test_unmapped_parent_leaves_qualifier_empty() {
    let builder = GraphBuilder::init(&StubSource::default()).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "00N1",
        "Orphan__c",
        "CustomField",
        "01p1",
        "Helper",
        "ApexClass",
    )]);

    assert_eq!(graph.node_by_id("00N1").unwrap().parent, "");
}

#[tokio::test]
async fn test_unresolvable_object_owner_leaves_qualifier_empty() {
    // Owner id has no matching custom object record
    let source = StubSource {
        custom_fields: vec![CustomFieldRecord {
            id: "00N1".to_string(),
            table_enum_or_id: "0DH000000000009".to_string(),
        }],
        ..Default::default()
    };
    let builder = GraphBuilder::init(&source).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "00N1",
        "Due_Date__c",
        "CustomField",
        "01p1",
        "Helper",
        "ApexClass",
    )]);

    assert_eq!(graph.node_by_id("00N1").unwrap().parent, "");
}

#[tokio::test]
async fn test_placeholder_target_skipped() {
    let builder = GraphBuilder::init(&StubSource::default()).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "01p1",
        "Helper",
        "ApexClass",
        "0DH1",
        "0DH000000000001",
        "CustomObject",
    )]);

    // The whole record is dropped: neither endpoint becomes a node
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[tokio::test]
async fn test_aura_bundle_reverse_edge() {
    let builder = GraphBuilder::init(&StubSource::default()).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "0Ad1",
        "helperController",
        "AuraDefinition",
        "0Ab1",
        "helper",
        "AuraDefinitionBundle",
    )]);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert!(has_edge(&graph, "0Ad1", "0Ab1"));
    assert!(has_edge(&graph, "0Ab1", "0Ad1"));
}

#[tokio::test]
async fn test_no_reverse_edge_for_other_pairs() {
    let builder = GraphBuilder::init(&StubSource::default()).await.unwrap();

    let graph = builder.build_graph(&[dep(
        "01p1",
        "Helper",
        "ApexClass",
        "0Ab1",
        "helper",
        "AuraDefinitionBundle",
    )]);

    assert_eq!(graph.edge_count(), 1);
    assert!(has_edge(&graph, "01p1", "0Ab1"));
}

#[tokio::test]
async fn test_field_relationship_inference() {
    let source = StubSource {
        custom_fields: vec![CustomFieldRecord {
            id: "00N1".to_string(),
            table_enum_or_id: "01I000000000001".to_string(),
        }],
        field_definitions: vec![FieldDefinitionRecord {
            entity_definition_id: "01I000000000001".to_string(),
            data_type: "Lookup(Project__c)".to_string(),
            durable_id: "01I000000000001.00N1".to_string(),
        }],
        ..Default::default()
    };
    let builder = GraphBuilder::init(&source).await.unwrap();

    let graph = builder.build_graph(&[
        dep(
            "01p1",
            "Helper",
            "ApexClass",
            "01I000000000001AAA",
            "Widget__c",
            "CustomObject",
        ),
        dep(
            "01p1",
            "Helper",
            "ApexClass",
            "01I000000000002AAA",
            "Project__c",
            "CustomObject",
        ),
    ]);

    // Inferred edge: owning entity (short id match) -> lookup target (name match)
    assert!(has_edge(&graph, "01I000000000001AAA", "01I000000000002AAA"));
    assert_eq!(graph.edge_count(), 3);
}

#[tokio::test]
async fn test_inference_miss_adds_nothing() {
    let source = StubSource {
        field_definitions: vec![FieldDefinitionRecord {
            entity_definition_id: "01I000000000001".to_string(),
            data_type: "Lookup(Project__c)".to_string(),
            durable_id: "01I000000000001.00N1".to_string(),
        }],
        ..Default::default()
    };
    let builder = GraphBuilder::init(&source).await.unwrap();

    // Neither endpoint of the lookup exists in the graph
    let graph = builder.build_graph(&[dep(
        "01p1",
        "Helper",
        "ApexClass",
        "01p2",
        "Util",
        "ApexClass",
    )]);

    assert_eq!(graph.edge_count(), 1);
}

#[tokio::test]
async fn test_build_graph_is_a_full_rebuild() {
    let builder = GraphBuilder::init(&StubSource::default()).await.unwrap();

    let first = builder.build_graph(&[dep(
        "01p1", "Helper", "ApexClass", "01p2", "Util", "ApexClass",
    )]);
    let second = builder.build_graph(&[dep(
        "01p3", "Other", "ApexClass", "01p4", "More", "ApexClass",
    )]);

    assert_eq!(first.node_count(), 2);
    assert_eq!(second.node_count(), 2);
    assert!(second.node_by_id("01p1").is_none());
}

#[tokio::test]
async fn test_duplicate_dependency_rows_collapse() {
    let builder = GraphBuilder::init(&StubSource::default()).await.unwrap();

    let record = dep("01p1", "Helper", "ApexClass", "01p2", "Util", "ApexClass");
    let graph = builder.build_graph(&[record.clone(), record]);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}
