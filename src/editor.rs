//! In-memory editing surface for building and reshaping workflows.
//!
//! Node ids handed out by an editor are never reused, even after the node is removed.

use crate::error::EditorError;
use crate::workflow::{Edge, Node, NodeKind, Position, Workflow};
use tracing::debug;

const NODE_ID_PREFIX: &str = "node_";

#[derive(Debug, Clone, Default)]
pub struct WorkflowEditor {
    workflow: Workflow,
    next_id: u64,
}

impl WorkflowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing an existing workflow. New ids continue past any `node_{n}` id it holds.
    pub fn from_workflow(workflow: Workflow) -> Self {
        let mut editor = Self::new();
        editor.load(workflow);
        editor
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }

    /// Adds a node and returns its freshly allocated id.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> String {
        let id = format!("{}{}", NODE_ID_PREFIX, self.next_id);
        self.next_id += 1;
        debug!(node = %id, node_type = %kind.node_type(), "adding node");
        self.workflow
            .nodes
            .push(Node::new(id.clone(), kind).with_position(position));
        id
    }

    /// Replaces a node's type and data, keeping its id and position.
    pub fn update_node(&mut self, node_id: &str, kind: NodeKind) -> Result<(), EditorError> {
        self.node_mut(node_id)?.kind = kind;
        Ok(())
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), EditorError> {
        self.node_mut(node_id)?.position = position;
        Ok(())
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, node_id: &str) -> Result<Node, EditorError> {
        let index = self
            .workflow
            .nodes
            .iter()
            .position(|n| n.id == node_id)
            .ok_or_else(|| EditorError::NodeNotFound(node_id.to_string()))?;
        let node = self.workflow.nodes.remove(index);
        self.workflow
            .edges
            .retain(|e| e.source != node_id && e.target != node_id);
        debug!(node = %node_id, "removed node");
        Ok(node)
    }

    /// Connects two existing nodes and returns the new edge's id.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<String, EditorError> {
        for endpoint in [source, target] {
            if self.workflow.node(endpoint).is_none() {
                return Err(EditorError::NodeNotFound(endpoint.to_string()));
            }
        }

        let base = Edge::default_id(source, target);
        let mut id = base.clone();
        let mut suffix = 1;
        while self.workflow.edges.iter().any(|e| e.id == id) {
            id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        self.workflow.edges.push(Edge::new(id.clone(), source, target));
        Ok(id)
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> Result<Edge, EditorError> {
        let index = self
            .workflow
            .edges
            .iter()
            .position(|e| e.id == edge_id)
            .ok_or_else(|| EditorError::EdgeNotFound(edge_id.to_string()))?;
        Ok(self.workflow.edges.remove(index))
    }

    /// Removes every node and edge. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.workflow.nodes.clear();
        self.workflow.edges.clear();
    }

    /// Replaces the workflow being edited.
    pub fn load(&mut self, workflow: Workflow) {
        let highest = workflow
            .nodes
            .iter()
            .filter_map(|n| n.id.strip_prefix(NODE_ID_PREFIX)?.parse::<u64>().ok())
            .max();
        if let Some(highest) = highest {
            self.next_id = self.next_id.max(highest + 1);
        }
        self.workflow = workflow;
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut Node, EditorError> {
        self.workflow
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| EditorError::NodeNotFound(node_id.to_string()))
    }
}
