//! orggraph library
//!
//! Builds a directed dependency graph among the metadata components of a
//! Salesforce org from the Tooling API dependency feed, optionally reduces
//! it to the transitive closure of a set of seed components, and renders
//! the result as DOT or JSON.

pub mod cli;
pub mod graph;
pub mod models;
pub mod source;

// Re-export the types a caller needs to drive a build end to end
pub use graph::{DependencyGraph, GraphBuilder, NodeAttributes, SeedNode};
pub use source::{RecordSource, ToolingApiSource};
