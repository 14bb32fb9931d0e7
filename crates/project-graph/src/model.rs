//! The immutable project-reference graph.
//!
//! ## Design
//!
//! - Nodes live in an arena (`Vec<ProjectNode>`) in insertion order, with an
//!   identity → slot index for lookups
//! - References are stored by identity, so a shared project is one node with
//!   several incoming edges rather than a duplicated subtree
//! - Nothing here assumes acyclicity; cycles are a property of the data
//! - Closure of references is checked lazily (on lookup) or eagerly through
//!   [`GraphModel::validate`]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::node::{ProjectId, ProjectNode};

/// Read-only view of a reference graph.
///
/// This is the whole contract between a traversal and whatever produced the
/// graph: entry points plus per-node lookup. No mutation is exposed.
pub trait ReferenceGraph {
    /// Traversal roots in declaration order.
    fn entry_points(&self) -> &[ProjectId];

    /// Look up a node by identity.
    fn get(&self, id: &ProjectId) -> Option<&ProjectNode>;

    /// Look up a node, reporting a missing identity as an error.
    fn node(&self, id: &ProjectId) -> Result<&ProjectNode> {
        self.get(id)
            .ok_or_else(|| Error::UnknownNode {
                id: id.clone(),
                referrer: None,
            })
    }

    /// References of a node, in declaration order.
    fn references(&self, id: &ProjectId) -> Result<&[ProjectId]> {
        Ok(self.node(id)?.references())
    }
}

/// Serialized form of a materialized graph.
///
/// ```json
/// {
///   "entry_points": ["Server/Server.csproj"],
///   "nodes": [
///     { "id": "Server/Server.csproj", "capabilities": ["AspNetCore"], "references": ["Client/Client.csproj"] },
///     { "id": "Client/Client.csproj", "capabilities": ["WebAssembly"] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Traversal roots.
    #[serde(default)]
    pub entry_points: Vec<ProjectId>,
    /// Every node of the graph.
    #[serde(default)]
    pub nodes: Vec<ProjectNode>,
}

/// Entry points plus the nodes they (transitively) reference.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    entry_points: Vec<ProjectId>,
    nodes: Vec<ProjectNode>,
    index: HashMap<ProjectId, usize>,
}

impl GraphModel {
    /// Assemble a graph from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if two nodes share an identity.
    /// Dangling references are accepted here and reported when looked up.
    pub fn new(entry_points: Vec<ProjectId>, nodes: Vec<ProjectNode>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (slot, node) in nodes.iter().enumerate() {
            if index.insert(node.id().clone(), slot).is_some() {
                return Err(Error::DuplicateNode(node.id().clone()));
            }
        }

        Ok(Self {
            entry_points,
            nodes,
            index,
        })
    }

    /// Build a graph from its serialized form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if two nodes share an identity.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self> {
        let graph = Self::new(snapshot.entry_points, snapshot.nodes)?;
        tracing::debug!(
            nodes = graph.len(),
            entry_points = graph.entry_points.len(),
            "Loaded graph snapshot"
        );
        Ok(graph)
    }

    /// Parse a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed input and [`Error::DuplicateNode`]
    /// if two nodes share an identity.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_snapshot(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`GraphModel::from_json_str`].
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The serialized form of this graph, nodes in insertion order.
    #[must_use]
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            entry_points: self.entry_points.clone(),
            nodes: self.nodes.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    /// Check that every entry point and reference resolves to a node.
    ///
    /// Entry points are checked first, then nodes in insertion order, so the
    /// reported identity is deterministic.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::UnknownNode`] found.
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = self.entry_points.iter().find(|id| !self.contains(id.as_str())) {
            return Err(Error::unknown_entry_point(id.clone()));
        }

        for node in &self.nodes {
            if let Some(id) = node.references().iter().find(|id| !self.contains(id.as_str())) {
                return Err(Error::unknown_reference(id.clone(), node.id().clone()));
            }
        }

        Ok(())
    }

    /// Returns `true` if a node with this identity exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.nodes.iter()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of reference edges, counting repeated references.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.references().len()).sum()
    }

    /// Insertion slot of a node.
    pub(crate) fn slot(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

impl ReferenceGraph for GraphModel {
    fn entry_points(&self) -> &[ProjectId] {
        &self.entry_points
    }

    fn get(&self, id: &ProjectId) -> Option<&ProjectNode> {
        self.slot(id.as_str()).map(|slot| &self.nodes[slot])
    }
}

/// Incremental construction of a [`GraphModel`].
///
/// ```
/// use project_graph::{GraphBuilder, ProjectNode};
///
/// let graph = GraphBuilder::new()
///     .entry_point("Server")
///     .node(ProjectNode::new("Server").with_capabilities(["AspNetCore"]).with_references(["Client"]))
///     .node(ProjectNode::new("Client").with_capabilities(["WebAssembly"]))
///     .build()
///     .unwrap();
/// assert_eq!(graph.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    entry_points: Vec<ProjectId>,
    nodes: Vec<ProjectNode>,
}

impl GraphBuilder {
    /// Start an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a traversal root.
    #[must_use]
    pub fn entry_point(mut self, id: impl Into<ProjectId>) -> Self {
        self.entry_points.push(id.into());
        self
    }

    /// Append a node.
    #[must_use]
    pub fn node(mut self, node: ProjectNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append several nodes.
    #[must_use]
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = ProjectNode>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Finish the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if two nodes share an identity.
    pub fn build(self) -> Result<GraphModel> {
        GraphModel::new(self.entry_points, self.nodes)
    }
}
