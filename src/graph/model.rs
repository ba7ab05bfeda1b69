//! Graph data structures for metadata dependencies
//!
//! The graph is a single arena: nodes live in an insertion-ordered vector,
//! identity lookup goes through an id-to-index map, and adjacency refers to
//! other nodes by index rather than by ownership.

use crate::models::ComponentType;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Display attributes of a node, independent of its place in the graph.
#[derive(Debug, Clone)]
pub struct NodeAttributes {
    /// Display name of the component.
    pub name: String,
    /// Component category.
    pub kind: ComponentType,
    /// Parent qualifier prefix including the trailing dot, or empty when the
    /// type needs no qualification.
    pub parent: String,
}

/// A node in the dependency graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Platform-assigned component id.
    pub id: String,
    pub name: String,
    pub kind: ComponentType,
    pub parent: String,
    /// Outgoing adjacency keyed by destination id, so re-adding the same
    /// destination is a no-op. Values index into the graph's node arena.
    outgoing: HashMap<String, usize>,
}

impl Node {
    pub fn attributes(&self) -> NodeAttributes {
        NodeAttributes {
            name: self.name.clone(),
            kind: self.kind.clone(),
            parent: self.parent.clone(),
        }
    }

    /// Outgoing edges as (destination id, arena index) pairs.
    pub fn outgoing(&self) -> &HashMap<String, usize> {
        &self.outgoing
    }
}

/// A directed dependency edge between two components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// A directed graph of metadata components and their dependencies.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    edge_set: HashSet<(String, String)>,
}

impl DependencyGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the index of the node for `id`, creating it with the given
    /// attributes if absent. First writer wins: attributes of an existing
    /// node are never overwritten.
    pub fn get_or_create_node(&mut self, id: &str, attributes: NodeAttributes) -> usize {
        if let Some(&index) = self.node_index.get(id) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(Node {
            id: id.to_string(),
            name: attributes.name,
            kind: attributes.kind,
            parent: attributes.parent,
            outgoing: HashMap::new(),
        });
        self.node_index.insert(id.to_string(), index);
        index
    }

    /// Record the directed edge `from -> to`, updating both the source
    /// node's adjacency and the graph-level edge list. Deduplicated by
    /// (from, to); self-loops are allowed.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        let from_id = self.nodes[from].id.clone();
        let to_id = self.nodes[to].id.clone();

        self.nodes[from].outgoing.insert(to_id.clone(), to);
        if self.edge_set.insert((from_id.clone(), to_id.clone())) {
            self.edges.push(Edge {
                from: from_id,
                to: to_id,
            });
        }
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Edges in insertion order, already deduplicated.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Find a CustomObject-typed node whose name starts with `prefix`.
    ///
    /// Scans every node; when several match, the last one scanned wins.
    /// That tie-break is the documented contract relied on by field
    /// relationship inference, not an accident of iteration.
    pub fn object_node_by_name(&self, prefix: &str) -> Option<usize> {
        let mut found = None;
        for (index, node) in self.nodes.iter().enumerate() {
            if node.name.starts_with(prefix) && node.kind.is_custom_object() {
                found = Some(index);
            }
        }
        found
    }

    /// Find a node whose id starts with `prefix` (15- vs 18-character id
    /// forms). Same last-match-wins tie-break as [`Self::object_node_by_name`].
    pub fn node_by_id_prefix(&self, prefix: &str) -> Option<usize> {
        let mut found = None;
        for (index, node) in self.nodes.iter().enumerate() {
            if node.id.starts_with(prefix) {
                found = Some(index);
            }
        }
        found
    }
}
