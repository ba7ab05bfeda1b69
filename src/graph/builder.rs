//! Two-phase dependency graph construction
//!
//! [`GraphBuilder::init`] hydrates the auxiliary lookup tables from the
//! record source (a strict fetch chain, since each step depends on ids the
//! previous one discovered) and normalizes lookup-typed field definitions.
//! Only an initialized builder exposes [`GraphBuilder::build_graph`], so the
//! init-before-build ordering holds by construction.
//!
//! Resolution misses are not errors here: an unresolvable parent or target
//! simply produces no qualifier or no edge. Org metadata is routinely
//! incomplete, and a best-effort graph beats no graph.

use crate::graph::model::{DependencyGraph, NodeAttributes};
use crate::models::{
    ComponentIdPair, ComponentType, CustomFieldRecord, CustomObjectRecord, DependencyRecord,
    OBJECT_ID_PREFIX, QuickActionRecord, ValidationRuleRecord,
};
use crate::source::RecordSource;
use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};

/// Graph builder holding the hydrated lookup tables.
pub struct GraphBuilder {
    custom_fields: Vec<CustomFieldRecord>,
    validation_rules: Vec<ValidationRuleRecord>,
    quick_actions: Vec<QuickActionRecord>,
    custom_objects: Vec<CustomObjectRecord>,
    /// (owning entity id, lookup target object name) pairs, normalized from
    /// `Lookup(Target)` field definitions during init.
    lookup_relationships: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Hydrate the lookup tables from the record source.
    ///
    /// The fetches are sequential by necessity: custom fields and validation
    /// rules are keyed off ids discovered in the dependency feed, object
    /// records off owner ids found in those tables, and field definitions
    /// off the owning entities of the custom fields. Any failed fetch aborts
    /// the whole initialization.
    pub async fn init(source: &dyn RecordSource) -> Result<Self> {
        let id_pairs = source
            .parented_component_ids()
            .await
            .context("Failed to fetch dependency component ids")?;
        let component_ids = distinct_component_ids(&id_pairs);
        tracing::debug!(
            "Discovered {} distinct parent-qualified component ids",
            component_ids.len()
        );

        let custom_fields = source
            .custom_fields(&component_ids)
            .await
            .context("Failed to fetch custom fields")?;
        let validation_rules = source
            .validation_rules(&component_ids)
            .await
            .context("Failed to fetch validation rules")?;
        let quick_actions = source
            .quick_actions(&component_ids)
            .await
            .context("Failed to fetch quick actions")?;

        let object_ids = object_ids(&custom_fields, &validation_rules);
        let custom_objects = source
            .custom_objects(&object_ids)
            .await
            .context("Failed to fetch custom objects")?;

        let entity_ids = distinct_owning_entities(&custom_fields);
        let field_definitions = source
            .field_definitions(&entity_ids)
            .await
            .context("Failed to fetch field definitions")?;

        // Normalize `Lookup(Target)` down to the bare target name; only
        // lookup-typed definitions take part in relationship inference.
        let lookup_relationships: Vec<(String, String)> = field_definitions
            .into_iter()
            .filter_map(|def| {
                let target = def
                    .data_type
                    .strip_prefix("Lookup(")?
                    .strip_suffix(')')?
                    .to_string();
                Some((def.entity_definition_id, target))
            })
            .collect();

        tracing::debug!(
            "Hydrated lookup tables: {} fields, {} validation rules, {} quick actions, \
             {} objects, {} lookup relationships",
            custom_fields.len(),
            validation_rules.len(),
            quick_actions.len(),
            custom_objects.len(),
            lookup_relationships.len()
        );

        Ok(Self {
            custom_fields,
            validation_rules,
            quick_actions,
            custom_objects,
            lookup_relationships,
        })
    }

    /// Build a fresh graph from a batch of dependency rows.
    ///
    /// Always a full rebuild: the returned graph carries no state from
    /// previous calls.
    pub fn build_graph(&self, records: &[DependencyRecord]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let parents = self.parent_map();

        for record in records {
            // Targets named by a raw object id are unresolvable placeholders
            if record.ref_component_name.starts_with(OBJECT_ID_PREFIX) {
                continue;
            }

            let parent = qualifier(&parents, &record.component_type, &record.component_id);
            let ref_parent =
                qualifier(&parents, &record.ref_component_type, &record.ref_component_id);

            let src = graph.get_or_create_node(
                &record.component_id,
                NodeAttributes {
                    name: record.component_name.clone(),
                    kind: record.component_type.clone(),
                    parent,
                },
            );
            let dst = graph.get_or_create_node(
                &record.ref_component_id,
                NodeAttributes {
                    name: record.ref_component_name.clone(),
                    kind: record.ref_component_type.clone(),
                    parent: ref_parent,
                },
            );

            graph.add_edge(src, dst);

            // A bundle and its member definitions depend on each other for
            // traversal purposes even though the feed is one-directional
            if record.component_type.is_aura_definition()
                && record.ref_component_type.is_aura_bundle()
            {
                graph.add_edge(dst, src);
            }
        }

        self.add_field_relationships(&mut graph);

        tracing::debug!(
            "Built graph with {} nodes and {} edges from {} dependency rows",
            graph.node_count(),
            graph.edge_count(),
            records.len()
        );
        graph
    }

    /// Map each parent-qualified component id to its owning object name.
    ///
    /// Owner values that are raw object ids resolve through the custom
    /// object table to `DeveloperName__c`; a failed resolution drops the
    /// entry rather than qualifying with garbage.
    fn parent_map(&self) -> HashMap<String, String> {
        let mut parents = HashMap::new();

        for rule in &self.validation_rules {
            self.insert_parent(&mut parents, &rule.id, &rule.entity_definition_id);
        }
        for field in &self.custom_fields {
            self.insert_parent(&mut parents, &field.id, &field.table_enum_or_id);
        }
        for action in &self.quick_actions {
            self.insert_parent(&mut parents, &action.id, &action.sobject_type);
        }

        parents
    }

    fn insert_parent(&self, parents: &mut HashMap<String, String>, id: &str, owner: &str) {
        if owner.starts_with(OBJECT_ID_PREFIX) {
            // Owner is a raw object id (15- or 18-character form); resolve
            // to the custom object's API name
            match self
                .custom_objects
                .iter()
                .find(|object| object.id.starts_with(owner))
            {
                Some(object) => {
                    parents.insert(id.to_string(), format!("{}__c", object.developer_name));
                }
                None => {
                    tracing::warn!(
                        "No custom object matches owner id {}; leaving {} unqualified",
                        owner,
                        id
                    );
                }
            }
        } else {
            parents.insert(id.to_string(), owner.to_string());
        }
    }

    /// Add edges for cross-object lookup fields the dependency feed does not
    /// expose: owning entity -> lookup target object.
    fn add_field_relationships(&self, graph: &mut DependencyGraph) {
        for (entity_id, target_name) in &self.lookup_relationships {
            let src = graph.node_by_id_prefix(entity_id);
            let dst = graph.object_node_by_name(target_name);
            if let (Some(src), Some(dst)) = (src, dst) {
                graph.add_edge(src, dst);
            }
        }
    }
}

/// Qualifier prefix for a component: `Owner.` for parent-qualified types
/// with a known owner, empty otherwise.
fn qualifier(parents: &HashMap<String, String>, kind: &ComponentType, id: &str) -> String {
    if !kind.has_parent() {
        return String::new();
    }
    match parents.get(id) {
        Some(parent) => format!("{parent}."),
        None => String::new(),
    }
}

/// Distinct component ids from both sides of the dependency rows, in first
/// occurrence order.
fn distinct_component_ids(pairs: &[ComponentIdPair]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for pair in pairs {
        for id in [&pair.component_id, &pair.ref_component_id] {
            if seen.insert(id.clone()) {
                ids.push(id.clone());
            }
        }
    }
    ids
}

/// Distinct owning entities referenced by the custom field table.
fn distinct_owning_entities(fields: &[CustomFieldRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for field in fields {
        if seen.insert(field.table_enum_or_id.clone()) {
            ids.push(field.table_enum_or_id.clone());
        }
    }
    ids
}

/// Raw object ids referenced as owners by the field and validation rule
/// tables.
fn object_ids(
    fields: &[CustomFieldRecord],
    rules: &[ValidationRuleRecord],
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    let owners = fields
        .iter()
        .map(|field| &field.table_enum_or_id)
        .chain(rules.iter().map(|rule| &rule.entity_definition_id));
    for owner in owners {
        if owner.starts_with(OBJECT_ID_PREFIX) && seen.insert(owner.clone()) {
            ids.push(owner.clone());
        }
    }
    ids
}
