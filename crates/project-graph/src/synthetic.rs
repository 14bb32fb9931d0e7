//! Generated graph shapes for tests and benchmarks.
//!
//! Two shapes bracket the cost of traversal:
//!
//! - [`chain`]: every node has one referrer, so remembering visited nodes
//!   buys nothing
//! - [`diamond_ladder`]: every level doubles the number of paths into the
//!   level below, so a traversal that forgets what it has seen does
//!   exponentially more work than one that remembers

use crate::error::{Error, Result};
use crate::model::{GraphBuilder, GraphModel, ReferenceGraph};
use crate::node::{ProjectId, ProjectNode};

/// Identity of the `index`-th node of a [`chain`].
#[must_use]
pub fn chain_id(index: usize) -> ProjectId {
    ProjectId::new(format!("P{index}"))
}

/// `P0 → P1 → … → P(len-1)`, entered at `P0`.
///
/// A zero-length chain has no nodes and no entry points.
#[must_use]
pub fn chain(len: usize) -> GraphModel {
    let mut builder = GraphBuilder::new();
    if len > 0 {
        builder = builder.entry_point(chain_id(0));
    }

    for i in 0..len {
        let node = ProjectNode::new(chain_id(i));
        let node = if i + 1 < len {
            node.with_references([chain_id(i + 1)])
        } else {
            node
        };
        builder = builder.node(node);
    }

    // Identities are generated unique.
    builder.build().unwrap_or_default()
}

/// Identity of the `side` node (`'a'` or `'b'`) on ladder level `level`.
#[must_use]
pub fn ladder_id(level: usize, side: char) -> ProjectId {
    ProjectId::new(format!("L{level}{side}"))
}

/// Entry node of every [`diamond_ladder`].
pub const LADDER_ROOT: &str = "root";

/// Final node every [`diamond_ladder`] path ends in.
pub const LADDER_SINK: &str = "sink";

/// A ladder of `levels` diamond rungs.
///
/// ```text
///        root
///       /    \
///     L0a    L0b
///      | \  / |
///      |  \/  |
///      |  /\  |
///     L1a    L1b
///       \    /
///        sink
/// ```
///
/// `root` references both nodes of level 0; both nodes of level `i`
/// reference both nodes of level `i + 1`; both nodes of the last level
/// reference `sink`. There are `2^levels` paths from `root` to `sink`.
#[must_use]
pub fn diamond_ladder(levels: usize) -> GraphModel {
    let rung = |level: usize| {
        if level < levels {
            vec![ladder_id(level, 'a'), ladder_id(level, 'b')]
        } else {
            vec![ProjectId::new(LADDER_SINK)]
        }
    };

    let mut builder = GraphBuilder::new()
        .entry_point(LADDER_ROOT)
        .node(ProjectNode::new(LADDER_ROOT).with_references(rung(0)));

    for level in 0..levels {
        for side in ['a', 'b'] {
            builder = builder
                .node(ProjectNode::new(ladder_id(level, side)).with_references(rung(level + 1)));
        }
    }

    builder
        .node(ProjectNode::new(LADDER_SINK))
        .build()
        .unwrap_or_default()
}

/// Copy of `graph` with the capabilities of `id` replaced by `tags`.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if `graph` has no node `id`.
pub fn with_capabilities<I, S>(graph: &GraphModel, id: &str, tags: I) -> Result<GraphModel>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let target = ProjectId::new(id);
    if graph.get(&target).is_none() {
        return Err(Error::UnknownNode {
            id: target,
            referrer: None,
        });
    }

    let mut snapshot = graph.to_snapshot();
    let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
    snapshot.nodes = snapshot
        .nodes
        .into_iter()
        .map(|node| {
            if node.id() == &target {
                node.with_capabilities(tags.iter().cloned())
            } else {
                node
            }
        })
        .collect();

    GraphModel::from_snapshot(snapshot)
}
