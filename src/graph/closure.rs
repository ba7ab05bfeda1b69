//! Transitive closure of the dependency graph
//!
//! Depth-first traversal from a set of seed components, reducing the graph
//! in place to the union of everything the seeds reach.

use crate::graph::model::{DependencyGraph, NodeAttributes};
use std::collections::HashSet;

/// A traversal seed: a component id plus the attributes to use if the id is
/// not already present in the graph.
#[derive(Debug, Clone)]
pub struct SeedNode {
    pub id: String,
    pub attributes: NodeAttributes,
}

/// Visited state shared across all seeds of one closure run, so the result
/// is the union of the per-seed closures.
#[derive(Default)]
struct VisitState {
    visit_order: Vec<String>,
    visited: HashSet<String>,
    edge_order: Vec<(String, String)>,
    edges_seen: HashSet<(String, String)>,
}

impl VisitState {
    fn visit(&mut self, graph: &DependencyGraph, index: usize) {
        let id = graph.node(index).id.clone();
        if !self.visited.insert(id.clone()) {
            return;
        }
        self.visit_order.push(id.clone());

        for (to_id, &to_index) in graph.node(index).outgoing() {
            let edge = (id.clone(), to_id.clone());
            if self.edges_seen.insert(edge.clone()) {
                self.edge_order.push(edge);
            }
            // The visited check is what makes cycles terminate
            if !self.visited.contains(to_id) {
                self.visit(graph, to_index);
            }
        }
    }
}

impl DependencyGraph {
    /// Reduce the graph to the nodes and edges reachable from `seeds`.
    ///
    /// Seeds are processed in input order; a seed not already present is
    /// first added with its given attributes, so it always appears in the
    /// result. The graph's nodes and edges are then replaced wholesale with
    /// the visited collections.
    pub fn run_dfs(&mut self, seeds: &[SeedNode]) {
        let mut state = VisitState::default();

        for seed in seeds {
            let index = self.get_or_create_node(&seed.id, seed.attributes.clone());
            state.visit(self, index);
        }

        let mut reachable = DependencyGraph::new();
        for id in &state.visit_order {
            if let Some(node) = self.node_by_id(id) {
                reachable.get_or_create_node(id, node.attributes());
            }
        }
        for (from, to) in &state.edge_order {
            if let (Some(from), Some(to)) = (reachable.index_of(from), reachable.index_of(to)) {
                reachable.add_edge(from, to);
            }
        }

        tracing::debug!(
            "Closure from {} seeds kept {} of {} nodes",
            seeds.len(),
            reachable.node_count(),
            self.node_count()
        );
        *self = reachable;
    }
}
