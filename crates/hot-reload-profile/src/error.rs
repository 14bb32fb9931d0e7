//! Error types for hot-reload profile inference.

use std::io;
use thiserror::Error;

use crate::profile::Diagnostics;

/// The error type for profile inference.
///
/// A run either completes with a definite classification or fails with one
/// of these before producing one.
#[derive(Debug, Error)]
pub enum Error {
    /// The input graph is malformed (for example, a reference to an unknown node).
    #[error(transparent)]
    Graph(#[from] project_graph::Error),

    /// The traversal hit its configured ceiling on processed nodes.
    #[error("traversal stopped after {limit} processed nodes without a result ({diagnostics})")]
    StepBudgetExceeded {
        /// The configured ceiling.
        limit: usize,
        /// Counters at the moment the ceiling was hit.
        diagnostics: Diagnostics,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` if the graph named an identity it does not contain.
    #[must_use]
    pub fn is_unknown_node(&self) -> bool {
        matches!(self, Self::Graph(e) if e.is_unknown_node())
    }
}

/// A specialized Result type for profile inference.
pub type Result<T> = std::result::Result<T, Error>;
