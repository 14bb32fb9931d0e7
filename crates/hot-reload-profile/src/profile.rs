//! Classification results and traversal diagnostics.

use project_graph::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The inferred hot-reload profile of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// An ASP.NET Core project with no WebAssembly client.
    ///
    /// Reserved for hosting tools; traversal never produces it.
    AspNetCore,

    /// A WebAssembly project with no distinct ASP.NET Core host seen before it.
    BlazorWebAssembly,

    /// An ASP.NET Core host and a distinct WebAssembly project it leads to.
    BlazorHosted {
        /// The candidate host when the WebAssembly project was reached.
        host: ProjectId,
        /// The WebAssembly project that ended the traversal.
        wasm: ProjectId,
    },

    /// The frontier drained without reaching a WebAssembly project.
    Unknown,
}

impl Classification {
    /// Short name of the classification, without identities.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AspNetCore => "AspNetCore",
            Self::BlazorWebAssembly => "BlazorWebAssembly",
            Self::BlazorHosted { .. } => "BlazorHosted",
            Self::Unknown => "Unknown",
        }
    }

    /// The WebAssembly project for a hosted classification.
    #[must_use]
    pub fn wasm(&self) -> Option<&ProjectId> {
        match self {
            Self::BlazorHosted { wasm, .. } => Some(wasm),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlazorHosted { host, wasm } => {
                write!(f, "BlazorHosted ({host} references WebAssembly project {wasm})")
            }
            other => f.write_str(other.kind()),
        }
    }
}

/// Counters describing how much work a traversal did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Number of dequeue operations performed.
    pub nodes_processed: usize,
    /// Largest number of nodes waiting in the frontier at any point.
    pub peak_frontier_size: usize,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} nodes, peak frontier {}",
            self.nodes_processed, self.peak_frontier_size
        )
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReport {
    /// The inferred profile.
    pub classification: Classification,
    /// Work counters for the run.
    pub diagnostics: Diagnostics,
}

impl ProfileReport {
    /// Split into the classification and its diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (Classification, Diagnostics) {
        (self.classification, self.diagnostics)
    }
}
