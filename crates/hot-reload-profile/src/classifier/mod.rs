//! Breadth-first profile classification.
//!
//! Both variants walk the graph breadth-first from its entry points with a
//! FIFO frontier and apply the same per-node decision. They differ only in
//! which discovered references are admitted to the frontier:
//!
//! - **Naive** admits every reference every time, so shared dependencies
//!   are processed once per path that reaches them
//! - **Memoized** admits each identity once, so every reachable node is
//!   processed exactly once and reference cycles terminate
//!
//! Identities are resolved when they are discovered. An entry point or
//! reference naming a node the graph does not contain fails the run with
//! an unknown-node error.

mod decision;
mod policy;

use project_graph::{Error as GraphError, ProjectNode, ReferenceGraph};
use std::collections::VecDeque;

use crate::config::{ClassifierConfig, Variant};
use crate::error::{Error, Result};
use crate::profile::{Classification, Diagnostics, ProfileReport};
use decision::{Decision, Scan};
use policy::{Memoized, Naive, RevisitPolicy};

/// Infers a hot-reload profile from a reference graph.
///
/// The classifier holds only configuration; every run starts from fresh
/// traversal state and never mutates the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileClassifier {
    config: ClassifierConfig,
}

impl ProfileClassifier {
    /// Create a classifier from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Classifier for `variant` with no ceiling on processed nodes.
    #[must_use]
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            config: ClassifierConfig::new(variant),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Traverse `graph` and classify it.
    ///
    /// # Errors
    ///
    /// - [`Error::Graph`] with an unknown-node error if an entry point or a
    ///   discovered reference does not resolve
    /// - [`Error::StepBudgetExceeded`] if the configured ceiling is reached
    ///   while nodes are still waiting
    pub fn run<G>(&self, graph: &G) -> Result<ProfileReport>
    where
        G: ReferenceGraph + ?Sized,
    {
        let limit = self.config.max_nodes_processed;
        tracing::debug!(
            variant = %self.config.variant,
            entry_points = graph.entry_points().len(),
            limit = ?limit,
            "Inferring hot reload profile"
        );

        let report = match self.config.variant {
            Variant::Naive => traverse(graph, Naive, limit),
            Variant::Memoized => traverse(graph, Memoized::default(), limit),
        }?;

        tracing::debug!(
            variant = %self.config.variant,
            classification = %report.classification,
            nodes_processed = report.diagnostics.nodes_processed,
            peak_frontier_size = report.diagnostics.peak_frontier_size,
            "Hot reload profile inferred"
        );
        Ok(report)
    }
}

/// Classify `graph` with `variant` and no ceiling on processed nodes.
///
/// The naive variant does not terminate on a graph with a reachable
/// reference cycle; use a [`ProfileClassifier`] with
/// [`ClassifierConfig::max_nodes_processed`] set when the input is untrusted.
///
/// # Errors
///
/// Returns [`Error::Graph`] if an entry point or reference does not resolve.
pub fn classify<G>(graph: &G, variant: Variant) -> Result<ProfileReport>
where
    G: ReferenceGraph + ?Sized,
{
    ProfileClassifier::with_variant(variant).run(graph)
}

fn traverse<'g, G, P>(graph: &'g G, mut policy: P, limit: Option<usize>) -> Result<ProfileReport>
where
    G: ReferenceGraph + ?Sized,
    P: RevisitPolicy<'g>,
{
    let mut frontier: VecDeque<&'g ProjectNode> = VecDeque::new();
    for id in graph.entry_points() {
        let Some(node) = graph.get(id) else {
            tracing::warn!(node = %id, "Entry point is not in the graph");
            return Err(GraphError::unknown_entry_point(id.clone()).into());
        };
        if policy.admit(id) {
            frontier.push_back(node);
        }
    }

    let mut diagnostics = Diagnostics {
        nodes_processed: 0,
        peak_frontier_size: frontier.len(),
    };
    let mut decision = Decision::default();

    while let Some(node) = frontier.pop_front() {
        if let Some(limit) = limit
            && diagnostics.nodes_processed >= limit
        {
            tracing::warn!(
                limit,
                waiting = frontier.len() + 1,
                "Traversal reached its node ceiling"
            );
            return Err(Error::StepBudgetExceeded { limit, diagnostics });
        }
        diagnostics.nodes_processed += 1;
        tracing::trace!(node = %node.id(), queued = frontier.len(), "Processing node");

        if let Scan::Terminated(classification) = decision.inspect(node) {
            return Ok(ProfileReport {
                classification,
                diagnostics,
            });
        }

        for id in node.references() {
            let Some(target) = graph.get(id) else {
                tracing::warn!(node = %id, referrer = %node.id(), "Reference is not in the graph");
                return Err(GraphError::unknown_reference(id.clone(), node.id().clone()).into());
            };
            if policy.admit(id) {
                frontier.push_back(target);
            } else {
                tracing::trace!(node = %id, "Already enqueued");
            }
        }
        diagnostics.peak_frontier_size = diagnostics.peak_frontier_size.max(frontier.len());
    }

    // A host with no WebAssembly project behind it is still unclassified.
    Ok(ProfileReport {
        classification: Classification::Unknown,
        diagnostics,
    })
}
