//! Breadth-first execution order over the nodes reachable from a start node.

use crate::graph::Adjacency;
use crate::workflow::{Edge, Node};
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use tracing::warn;

/// Computes the order in which nodes are visited, starting from `start`.
///
/// Successors are enqueued in edge declaration order, so given `[start→a, start→b]`
/// node `a` is visited before `b`. Each reachable node appears exactly once; nodes that
/// cannot be reached from `start` are left out, as are edge targets that name no node.
pub fn build_order<'a>(start: &'a Node, nodes: &'a [Node], edges: &[Edge]) -> Vec<&'a Node> {
    let by_id: AHashMap<&str, &'a Node> = nodes.iter().map(|n| (n.id.as_str(), n)).collect();
    let adjacency = Adjacency::from_edges(edges);

    let mut order = Vec::new();
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<&'a Node> = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        // A node with two incoming edges can be enqueued twice before it is visited.
        if !visited.insert(current.id.as_str()) {
            continue;
        }
        order.push(current);

        for &next_id in adjacency.successors(&current.id) {
            if visited.contains(next_id) {
                continue;
            }
            match by_id.get(next_id) {
                Some(&next) => queue.push_back(next),
                None => warn!(
                    from = %current.id,
                    missing = next_id,
                    "skipping edge to unknown node"
                ),
            }
        }
    }
    order
}
