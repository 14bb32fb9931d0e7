//! # hot-reload-profile
//!
//! Infers the hot-reload profile of a multi-project build by walking its
//! project-reference graph breadth-first from the entry points and looking
//! at the capabilities each project declares:
//!
//! | Seen during the walk | Classification |
//! |----------------------|----------------|
//! | ASP.NET Core host, then a different WebAssembly project | `BlazorHosted` |
//! | WebAssembly project with no distinct host before it | `BlazorWebAssembly` |
//! | Anything else | `Unknown` |
//!
//! `Classification::AspNetCore` is part of the result vocabulary but no
//! walk produces it: a host with no WebAssembly project behind it is
//! reported as `Unknown`.
//!
//! When several ASP.NET Core projects are processed before the WebAssembly
//! project, the most recently processed one is reported as the host.
//!
//! Two traversal variants are provided. [`Variant::Memoized`] processes each
//! reachable project once. [`Variant::Naive`] forgets what it has already
//! enqueued, so a project shared by many referrers is processed once per
//! path, and a reference cycle keeps it running until a configured ceiling
//! stops it.
//!
//! ## Example
//!
//! ```
//! use hot_reload_profile::{classify, Classification, Variant};
//! use project_graph::{GraphBuilder, ProjectId, ProjectNode};
//!
//! let graph = GraphBuilder::new()
//!     .entry_point("Server")
//!     .node(ProjectNode::new("Server").with_capabilities(["AspNetCore"]).with_references(["Client"]))
//!     .node(ProjectNode::new("Client").with_capabilities(["WebAssembly"]))
//!     .build()?;
//!
//! let report = classify(&graph, Variant::Memoized)?;
//! assert_eq!(
//!     report.classification,
//!     Classification::BlazorHosted {
//!         host: ProjectId::new("Server"),
//!         wasm: ProjectId::new("Client"),
//!     }
//! );
//! assert_eq!(report.diagnostics.nodes_processed, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod cost;
pub mod error;
pub mod profile;

pub use classifier::{ProfileClassifier, classify};
pub use config::{ClassifierConfig, Variant};
pub use cost::{estimate_memoized_cost, estimate_naive_cost};
pub use error::{Error, Result};
pub use profile::{Classification, Diagnostics, ProfileReport};
