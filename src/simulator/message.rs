use crate::workflow::{Node, NodeKind};

/// Returns `value`, or `fallback` when `value` is blank.
fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Describes what simulating `node` did, in the wording shown on the trace.
pub fn step_message(node: &Node) -> String {
    match &node.kind {
        NodeKind::Start(data) => format!("Workflow initiated: {}", data.title),
        NodeKind::Task(data) => format!(
            "Task assigned to {}: {}",
            or_fallback(&data.assignee, "unassigned"),
            data.title
        ),
        NodeKind::Approval(data) => format!(
            "Approval requested from {}: {}",
            or_fallback(&data.approver_role, "approver"),
            data.title
        ),
        NodeKind::Automated(data) => format!(
            "Automated action executed: {}",
            or_fallback(&data.action_label, or_fallback(&data.action, "action"))
        ),
        NodeKind::End(data) => format!(
            "Workflow completed: {}",
            or_fallback(&data.end_message, "Success")
        ),
    }
}
