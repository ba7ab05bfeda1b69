//! DOT and structured renderers for a finished graph

use crate::graph::model::{DependencyGraph, Edge};
use serde::Serialize;
use std::fmt::Write;

/// One node of the structured export.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub parent: String,
}

/// Serializable view of a graph: `{ nodes: [...], edges: [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphExport {
    pub nodes: Vec<ComponentNode>,
    pub edges: Vec<Edge>,
}

impl DependencyGraph {
    /// Render as DOT format
    ///
    /// Node identifiers are the component ids prefixed with `X` (DOT
    /// identifiers cannot start with a digit); labels show the qualified
    /// name with the component type underneath in smaller type.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph graphname {\n");
        dot.push_str("  rankdir=RL;\n");
        dot.push_str("  node[shape=Mrecord, bgcolor=black, fillcolor=lightblue, style=filled];\n");
        dot.push_str("  // Nodes\n");

        for node in self.nodes() {
            let _ = writeln!(
                dot,
                "  X{} [label=<{}{}<BR/><FONT POINT-SIZE=\"8\">{}</FONT>>]",
                node.id, node.parent, node.name, node.kind
            );
        }

        dot.push_str("  // Paths\n");
        for edge in self.edges() {
            let _ = writeln!(dot, "  X{}->X{}", edge.from, edge.to);
        }

        dot.push('}');
        dot
    }

    /// Structured export: nodes in graph iteration order, edges in insertion
    /// order, no further deduplication needed.
    pub fn to_export(&self) -> GraphExport {
        GraphExport {
            nodes: self
                .nodes()
                .map(|node| ComponentNode {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    kind: node.kind.as_str().to_string(),
                    parent: node.parent.clone(),
                })
                .collect(),
            edges: self.edges().to_vec(),
        }
    }
}
