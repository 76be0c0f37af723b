use super::message::step_message;
use crate::workflow::{Node, NodeType};
use serde::{Deserialize, Serialize};

/// Outcome of a single simulated step. Every visited node completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
}

/// One entry in the simulation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub node_id: String,
    pub node_name: String,
    pub node_type: NodeType,
    pub status: StepStatus,
    pub message: String,
    /// Simulated offset from the start of the run, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<u64>,
    /// Simulated elapsed time, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl Step {
    pub(super) fn completed(node: &Node, started_at: Option<u64>, duration: Option<u64>) -> Self {
        Self {
            node_id: node.id.clone(),
            node_name: node.display_name().to_string(),
            node_type: node.node_type(),
            status: StepStatus::Completed,
            message: step_message(node),
            started_at,
            duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of nodes reached from the start node.
    pub total_nodes: usize,
    pub completed_steps: usize,
    /// Always zero: no step has a failure path.
    pub failed_steps: usize,
}

/// The trace and summary of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub status: SimulationStatus,
    /// Total simulated time, in milliseconds.
    pub duration: u64,
    pub steps: Vec<Step>,
    pub summary: Summary,
}

impl SimulationResult {
    /// Node ids in visit order.
    pub fn visit_order(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.node_id.as_str()).collect()
    }
}
