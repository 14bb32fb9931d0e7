//! Per-node decision logic shared by both traversal variants.

use project_graph::{KnownCapability, ProjectId, ProjectNode};

use crate::profile::Classification;

/// Outcome of inspecting one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Scan {
    /// Keep traversing.
    Scanning,
    /// A WebAssembly project ended the traversal.
    Terminated(Classification),
}

/// Traversal-local state: the most recently processed ASP.NET Core project.
#[derive(Debug, Default)]
pub(super) struct Decision<'g> {
    candidate_host: Option<&'g ProjectId>,
}

impl<'g> Decision<'g> {
    /// Inspect a dequeued node's tags in declaration order.
    ///
    /// `AspNetCore` makes the node the candidate host, replacing any earlier
    /// candidate. `WebAssembly` ends the traversal: hosted if the candidate is
    /// a different node, standalone otherwise. A node declaring both tags is
    /// its own candidate, so it classifies as standalone.
    pub(super) fn inspect(&mut self, node: &'g ProjectNode) -> Scan {
        for tag in node.capabilities().iter() {
            match KnownCapability::from_tag(tag) {
                Some(KnownCapability::AspNetCore) => {
                    if let Some(previous) = self.candidate_host.filter(|p| *p != node.id()) {
                        tracing::debug!(
                            previous = %previous,
                            host = %node.id(),
                            "Replacing candidate host"
                        );
                    }
                    self.candidate_host = Some(node.id());
                }
                Some(KnownCapability::WebAssembly) => {
                    let classification = match self.candidate_host {
                        Some(host) if host != node.id() => Classification::BlazorHosted {
                            host: host.clone(),
                            wasm: node.id().clone(),
                        },
                        _ => Classification::BlazorWebAssembly,
                    };
                    return Scan::Terminated(classification);
                }
                None => {}
            }
        }
        Scan::Scanning
    }
}
