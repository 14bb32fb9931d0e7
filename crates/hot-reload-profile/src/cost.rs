//! Up-front cost estimates for the traversal variants.

use project_graph::GraphModel;

use crate::error::Result;

/// Worst-case number of nodes the naive variant processes on `graph`.
///
/// This is the number of entry-point-rooted paths in the graph, reached when
/// no WebAssembly project ends the walk early. Saturates at `u64::MAX`.
///
/// # Errors
///
/// Fails with a cycle error if a reference cycle is reachable (the naive
/// variant would never finish), or an unknown-node error for dangling
/// identities.
pub fn estimate_naive_cost(graph: &GraphModel) -> Result<u64> {
    let total = graph
        .path_multiplicity()?
        .into_values()
        .fold(0_u64, u64::saturating_add);
    Ok(total)
}

/// Worst-case number of nodes the memoized variant processes on `graph`.
///
/// # Errors
///
/// Fails with an unknown-node error for dangling identities.
pub fn estimate_memoized_cost(graph: &GraphModel) -> Result<u64> {
    Ok(graph.reachable()?.len() as u64)
}
