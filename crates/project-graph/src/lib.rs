//! # project-graph
//!
//! An immutable model of a multi-project build's reference graph: entry
//! points, project nodes keyed by a stable identity, the capability tags
//! each project declares, and the ordered references between projects.
//!
//! The graph is produced elsewhere (by whatever evaluates the build) and
//! consumed read-only here. Shared dependencies are single nodes with
//! several incoming references, and the model never assumes the graph is
//! acyclic.
//!
//! ## Example
//!
//! ```
//! use project_graph::{CapabilityIndex, GraphBuilder, ProjectId, ProjectNode, ReferenceGraph};
//!
//! let graph = GraphBuilder::new()
//!     .entry_point("App")
//!     .node(ProjectNode::new("App").with_references(["Lib", "Ui"]))
//!     .node(ProjectNode::new("Lib"))
//!     .node(ProjectNode::new("Ui").with_capabilities(["WebAssembly"]).with_references(["Lib"]))
//!     .build()?;
//!
//! let ui = graph.node(&ProjectId::new("Ui"))?;
//! assert!(ui.has_capability("WebAssembly"));
//! assert_eq!(graph.reachable()?.len(), 3);
//! # Ok::<(), project_graph::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod analysis;
pub mod error;
pub mod model;
pub mod node;
pub mod synthetic;

pub use analysis::ReferenceDigraph;
pub use error::{Error, Result};
pub use model::{GraphBuilder, GraphModel, GraphSnapshot, ReferenceGraph};
pub use node::{Capabilities, CapabilityIndex, KnownCapability, ProjectId, ProjectNode};
