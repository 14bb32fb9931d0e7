//! Structural analysis of a reference graph using petgraph.
//!
//! | Operation | Algorithm |
//! |-----------|-----------|
//! | Reachability | BFS from the entry points |
//! | Cycle detection | Tarjan's SCC algorithm |
//! | Path multiplicity | Topological order over the reachable subgraph |
//!
//! Path multiplicity is the number of distinct entry-point-rooted paths that
//! end at a node. A traversal that never remembers what it has already
//! enqueued processes each node exactly that many times, so the sum over all
//! nodes is its cost on a graph where nothing ends the walk early.

use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::model::{GraphModel, ReferenceGraph};
use crate::node::ProjectId;

/// Petgraph view of a [`GraphModel`].
#[derive(Debug, Clone)]
pub struct ReferenceDigraph {
    /// Nodes weighted by identity; one edge per declared reference.
    pub graph: DiGraph<ProjectId, ()>,
    /// Identity → petgraph index.
    pub node_map: HashMap<ProjectId, NodeIndex>,
}

impl GraphModel {
    /// Convert the whole graph into a petgraph `DiGraph`.
    ///
    /// Nodes are added in insertion order and repeated references become
    /// parallel edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if a reference does not resolve.
    pub fn to_digraph(&self) -> Result<ReferenceDigraph> {
        build_digraph(self, self.nodes().map(|n| n.id()))
    }

    /// Identities reachable from the entry points, in breadth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if an entry point or a reachable
    /// reference does not resolve.
    pub fn reachable(&self) -> Result<Vec<ProjectId>> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        let mut queue: VecDeque<&ProjectId> = VecDeque::new();

        for id in self.entry_points() {
            if !self.contains(id.as_str()) {
                return Err(Error::unknown_entry_point(id.clone()));
            }
            if visited.insert(id) {
                queue.push_back(id);
            }
        }

        while let Some(current) = queue.pop_front() {
            order.push(current.clone());
            for target in self.references(current)? {
                if !self.contains(target.as_str()) {
                    return Err(Error::unknown_reference(target.clone(), current.clone()));
                }
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        Ok(order)
    }

    /// Strongly connected components that form reference cycles.
    ///
    /// A component qualifies if it has more than one member or its single
    /// member references itself. Members are listed in insertion order and
    /// components are ordered by their first member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if a reference does not resolve.
    pub fn find_cycles(&self) -> Result<Vec<Vec<ProjectId>>> {
        let ReferenceDigraph { graph, .. } = self.to_digraph()?;

        let mut cycles: Vec<Vec<NodeIndex>> = algo::tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|mut scc| {
                scc.sort_unstable();
                scc
            })
            .collect();
        cycles.sort_unstable_by_key(|scc| scc[0]);

        tracing::trace!(cycles = cycles.len(), "Cycle detection finished");

        Ok(cycles
            .into_iter()
            .map(|scc| scc.into_iter().map(|n| graph[n].clone()).collect())
            .collect())
    }

    /// Returns `true` if no reference cycle exists anywhere in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if a reference does not resolve.
    pub fn is_acyclic(&self) -> Result<bool> {
        let ReferenceDigraph { graph, .. } = self.to_digraph()?;
        Ok(!algo::is_cyclic_directed(&graph))
    }

    /// Number of entry-point-rooted paths ending at each reachable node.
    ///
    /// An entry point listed twice contributes two paths. Counts saturate at
    /// `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if a cycle is reachable from the entry
    /// points (the count would be unbounded), or [`Error::UnknownNode`] if an
    /// identity does not resolve.
    pub fn path_multiplicity(&self) -> Result<HashMap<ProjectId, u64>> {
        let reachable = self.reachable()?;
        let ReferenceDigraph { graph, node_map } = build_digraph(self, reachable.iter())?;

        let order = algo::toposort(&graph, None).map_err(|cycle| {
            let start = cycle.node_id();
            let members = self
                .find_cycles()
                .ok()
                .and_then(|cycles| {
                    cycles
                        .into_iter()
                        .find(|members| members.contains(&graph[start]))
                })
                .unwrap_or_else(|| vec![graph[start].clone()]);
            Error::CycleDetected(members)
        })?;

        let mut counts = vec![0_u64; graph.node_count()];
        for id in self.entry_points() {
            let idx = node_map[id];
            counts[idx.index()] = counts[idx.index()].saturating_add(1);
        }

        for node in order {
            let here = counts[node.index()];
            for edge in graph.edges(node) {
                let target = edge.target().index();
                counts[target] = counts[target].saturating_add(here);
            }
        }

        Ok(graph
            .node_indices()
            .map(|n| (graph[n].clone(), counts[n.index()]))
            .collect())
    }
}

/// Build a digraph over `ids`, keeping only edges between included nodes.
fn build_digraph<'a>(
    model: &GraphModel,
    ids: impl Iterator<Item = &'a ProjectId>,
) -> Result<ReferenceDigraph> {
    let mut graph = DiGraph::new();
    let mut node_map = HashMap::new();

    for id in ids {
        let idx = graph.add_node(id.clone());
        node_map.insert(id.clone(), idx);
    }

    for source in graph.node_indices().collect::<Vec<_>>() {
        let source_id = graph[source].clone();
        for target in model.references(&source_id)? {
            let Some(&target_idx) = node_map.get(target) else {
                if model.contains(target.as_str()) {
                    continue;
                }
                return Err(Error::unknown_reference(target.clone(), source_id));
            };
            graph.add_edge(source, target_idx, ());
        }
    }

    Ok(ReferenceDigraph { graph, node_map })
}
