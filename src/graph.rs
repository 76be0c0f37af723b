//! Adjacency indexing and reference checks shared by the validator and the order builder.

use crate::workflow::{Edge, Node};
use ahash::{AHashMap, AHashSet};

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Source => "source",
            Endpoint::Target => "target",
        }
    }
}

/// An edge endpoint naming a node id that does not exist in the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    pub edge_id: String,
    pub endpoint: Endpoint,
    pub missing_node_id: String,
}

/// Checks that every edge's `source` and `target` name an existing node.
///
/// Returns one entry per missing endpoint, in edge order, source before target.
pub fn check_references(nodes: &[Node], edges: &[Edge]) -> Vec<DanglingReference> {
    let known: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut dangling = Vec::new();

    for edge in edges {
        for (endpoint, node_id) in [
            (Endpoint::Source, &edge.source),
            (Endpoint::Target, &edge.target),
        ] {
            if !known.contains(node_id.as_str()) {
                dangling.push(DanglingReference {
                    edge_id: edge.id.clone(),
                    endpoint,
                    missing_node_id: node_id.clone(),
                });
            }
        }
    }
    dangling
}

/// Successor lists keyed by node id, borrowed from the edge list.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<'a> {
    successors: AHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Adjacency<'a> {
    /// Builds successor lists by scanning `edges` in order, so fan-out preserves
    /// declaration order.
    pub fn from_edges(edges: &'a [Edge]) -> Self {
        let mut successors: AHashMap<&'a str, Vec<&'a str>> = AHashMap::new();
        for edge in edges {
            successors
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
        Self { successors }
    }

    /// Downstream node ids of `node_id`, empty if it has no outgoing edges.
    pub fn successors(&self, node_id: &str) -> &[&'a str] {
        self.successors
            .get(node_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

/// Ids that appear as the source or target of at least one edge.
pub fn connected_ids(edges: &[Edge]) -> AHashSet<&str> {
    edges
        .iter()
        .flat_map(|e| [e.source.as_str(), e.target.as_str()])
        .collect()
}

/// Returns `true` if the directed graph contains a cycle.
///
/// Depth-first search from every unvisited node in node order, tracking the current
/// recursion stack; any edge back onto the stack is a cycle. Successors that are not
/// nodes are treated as leaves.
pub fn has_cycle(nodes: &[Node], adjacency: &Adjacency<'_>) -> bool {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut on_stack: AHashSet<&str> = AHashSet::new();

    for root in nodes.iter().map(|n| n.id.as_str()) {
        if visited.contains(root) {
            continue;
        }

        // Each frame is (node id, index of the next successor to explore).
        let mut frames: Vec<(&str, usize)> = vec![(root, 0)];
        visited.insert(root);
        on_stack.insert(root);

        while let Some(&(node_id, next)) = frames.last() {
            match adjacency.successors(node_id).get(next) {
                Some(&successor) => {
                    let top = frames.len() - 1;
                    frames[top].1 += 1;
                    if on_stack.contains(successor) {
                        return true;
                    }
                    if visited.insert(successor) {
                        on_stack.insert(successor);
                        frames.push((successor, 0));
                    }
                }
                None => {
                    on_stack.remove(node_id);
                    frames.pop();
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{NodeKind, NodeType};

    fn task(id: &str) -> Node {
        Node::new(id, NodeKind::default_for(NodeType::Task))
    }

    fn edge(source: &str, target: &str) -> Edge {
        Edge::new(Edge::default_id(source, target), source, target)
    }

    #[test]
    fn adjacency_preserves_declaration_order() {
        let edges = vec![edge("s", "b"), edge("s", "a"), edge("a", "b")];
        let adjacency = Adjacency::from_edges(&edges);
        assert_eq!(adjacency.successors("s"), &["b", "a"]);
        assert!(adjacency.successors("b").is_empty());
    }

    #[test]
    fn detects_self_loop() {
        let nodes = vec![task("a")];
        let edges = vec![edge("a", "a")];
        assert!(has_cycle(&nodes, &Adjacency::from_edges(&edges)));
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let nodes = vec![task("s"), task("a"), task("b"), task("e")];
        let edges = vec![edge("s", "a"), edge("s", "b"), edge("a", "e"), edge("b", "e")];
        assert!(!has_cycle(&nodes, &Adjacency::from_edges(&edges)));
    }

    #[test]
    fn finds_cycle_outside_first_component() {
        let nodes = vec![task("s"), task("e"), task("x"), task("y")];
        let edges = vec![edge("s", "e"), edge("x", "y"), edge("y", "x")];
        assert!(has_cycle(&nodes, &Adjacency::from_edges(&edges)));
    }

    #[test]
    fn reports_each_missing_endpoint() {
        let nodes = vec![task("a")];
        let edges = vec![edge("a", "ghost"), edge("nobody", "nothing")];
        let dangling = check_references(&nodes, &edges);
        assert_eq!(dangling.len(), 3);
        assert_eq!(dangling[0].endpoint, Endpoint::Target);
        assert_eq!(dangling[0].missing_node_id, "ghost");
        assert_eq!(dangling[1].endpoint, Endpoint::Source);
        assert_eq!(dangling[2].missing_node_id, "nothing");
    }
}
