use crate::workflow::Workflow;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

mod checks;

/// How a validation finding affects simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks simulation.
    Error,
    /// Advisory; simulation may still run.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Returns `true` if any issue is blocking.
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(Issue::is_error)
}

/// Statically analyses a workflow and returns its findings in a stable order.
///
/// An empty workflow yields a single error and nothing else. Otherwise every check runs,
/// regardless of what earlier checks found:
///
/// 1. Start node cardinality
/// 2. End node cardinality
/// 3. Duplicate ids and edges referencing unknown nodes
/// 4. Nodes not touched by any edge (one summary warning)
/// 5. Cycles anywhere in the graph (one warning)
/// 6. Required fields per node, in node order
pub fn validate(workflow: &Workflow) -> Vec<Issue> {
    if workflow.nodes.is_empty() {
        return vec![Issue::error("Workflow is empty. Add at least one node.")];
    }

    let mut issues = Vec::new();
    checks::start_cardinality(workflow, &mut issues);
    checks::end_cardinality(workflow, &mut issues);
    checks::references(workflow, &mut issues);
    checks::connectivity(workflow, &mut issues);
    checks::cycles(workflow, &mut issues);
    checks::required_fields(workflow, &mut issues);

    debug!(
        errors = issues.iter().filter(|i| i.is_error()).count(),
        warnings = issues.iter().filter(|i| !i.is_error()).count(),
        "validated workflow"
    );
    issues
}
