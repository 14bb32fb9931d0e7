//! Error types for project-graph operations.
//!
//! Graph construction and lookup report problems with the input graph itself.
//! A graph handed over by an external build evaluator is trusted to be closed
//! over its references, but lookups never assume it: a missing identity is
//! surfaced as [`Error::UnknownNode`] at the point it is first needed.

use std::io;
use thiserror::Error;

use crate::node::ProjectId;

/// Result type for project-graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for project-graph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry point or reference names an identity absent from the graph.
    #[error("unknown project node '{id}'{}", referrer_suffix(.referrer))]
    UnknownNode {
        /// The identity that could not be resolved.
        id: ProjectId,
        /// The node whose reference list named `id`, or `None` for an entry point.
        referrer: Option<ProjectId>,
    },

    /// Two nodes were supplied with the same identity.
    #[error("duplicate project node '{0}'")]
    DuplicateNode(ProjectId),

    /// The operation requires an acyclic graph but a cycle is reachable.
    #[error("reference cycle through {}", format_cycle(.0))]
    CycleDetected(Vec<ProjectId>),

    /// IO error while reading a graph snapshot.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-node error for an identity named by `referrer`.
    #[must_use]
    pub fn unknown_reference(id: ProjectId, referrer: ProjectId) -> Self {
        Self::UnknownNode {
            id,
            referrer: Some(referrer),
        }
    }

    /// Create an unknown-node error for an entry point.
    #[must_use]
    pub fn unknown_entry_point(id: ProjectId) -> Self {
        Self::UnknownNode { id, referrer: None }
    }

    /// Returns `true` if this error reports an unresolvable identity.
    #[must_use]
    pub fn is_unknown_node(&self) -> bool {
        matches!(self, Self::UnknownNode { .. })
    }
}

#[allow(clippy::ref_option)]
fn referrer_suffix(referrer: &Option<ProjectId>) -> String {
    match referrer {
        Some(r) => format!(" referenced by '{r}'"),
        None => " listed as an entry point".to_string(),
    }
}

fn format_cycle(ids: &[ProjectId]) -> String {
    ids.iter()
        .map(ProjectId::as_str)
        .collect::<Vec<_>>()
        .join(" → ")
}
