//! Dependency graph model, builder, closure and exporters

pub mod builder;
pub mod closure;
pub mod export;
pub mod model;

pub use builder::GraphBuilder;
pub use closure::SeedNode;
pub use export::{ComponentNode, GraphExport};
pub use model::{DependencyGraph, Edge, Node, NodeAttributes};
