//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use project_graph::{GraphBuilder, GraphModel, ProjectNode};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once per test binary.
///
/// Controlled via `RUST_LOG`, e.g. `RUST_LOG=hot_reload_profile=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// A node with the given capability tags and references.
pub fn node(id: &str, tags: &[&str], refs: &[&str]) -> ProjectNode {
    ProjectNode::new(id)
        .with_capabilities(tags.iter().copied())
        .with_references(refs.iter().copied())
}

/// Build a graph, panicking on duplicate identities.
pub fn graph(entry_points: &[&str], nodes: Vec<ProjectNode>) -> GraphModel {
    entry_points
        .iter()
        .fold(GraphBuilder::new(), |b, id| b.entry_point(*id))
        .nodes(nodes)
        .build()
        .expect("failed to build test graph")
}
