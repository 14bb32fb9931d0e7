//! Revisit policies: which discovered references enter the frontier.

use project_graph::ProjectId;
use std::collections::HashSet;

/// Decides whether a discovered identity is pushed onto the frontier.
pub(super) trait RevisitPolicy<'g> {
    /// Called once per discovery (entry point or reference edge).
    fn admit(&mut self, id: &'g ProjectId) -> bool;
}

/// Admits everything. The frontier is a literal FIFO with no memory.
#[derive(Debug, Default)]
pub(super) struct Naive;

impl<'g> RevisitPolicy<'g> for Naive {
    fn admit(&mut self, _id: &'g ProjectId) -> bool {
        true
    }
}

/// Admits an identity the first time it is discovered.
#[derive(Debug, Default)]
pub(super) struct Memoized<'g> {
    enqueued: HashSet<&'g ProjectId>,
}

impl<'g> RevisitPolicy<'g> for Memoized<'g> {
    fn admit(&mut self, id: &'g ProjectId) -> bool {
        self.enqueued.insert(id)
    }
}
