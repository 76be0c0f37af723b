//! Common test utilities for building workflow graphs.
use junro::prelude::*;

#[allow(dead_code)]
pub fn start(id: &str, title: &str) -> Node {
    Node::new(
        id,
        NodeKind::Start(StartData {
            title: title.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn task(id: &str, title: &str, assignee: &str) -> Node {
    Node::new(
        id,
        NodeKind::Task(TaskData {
            title: title.to_string(),
            assignee: assignee.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn approval(id: &str, title: &str, role: &str) -> Node {
    Node::new(
        id,
        NodeKind::Approval(ApprovalData {
            title: title.to_string(),
            approver_role: role.to_string(),
            auto_approve_threshold: None,
        }),
    )
}

#[allow(dead_code)]
pub fn automated(id: &str, title: &str, action: &str) -> Node {
    Node::new(
        id,
        NodeKind::Automated(AutomatedData {
            title: title.to_string(),
            action: action.to_string(),
            ..Default::default()
        }),
    )
}

#[allow(dead_code)]
pub fn end(id: &str, message: &str) -> Node {
    Node::new(
        id,
        NodeKind::End(EndData {
            end_message: message.to_string(),
            generate_summary: false,
        }),
    )
}

#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> Edge {
    Edge::new(Edge::default_id(source, target), source, target)
}

/// Connects `ids` in sequence: `ids[0] → ids[1] → ...`.
#[allow(dead_code)]
pub fn chain(ids: &[&str]) -> Vec<Edge> {
    ids.windows(2).map(|pair| edge(pair[0], pair[1])).collect()
}

/// Start(s, "Onboard") → Task(t, "Collect Docs", HR) → End(e, "Done").
#[allow(dead_code)]
pub fn create_onboarding_workflow() -> Workflow {
    Workflow::new(
        vec![
            start("s", "Onboard"),
            task("t", "Collect Docs", "HR"),
            end("e", "Done"),
        ],
        chain(&["s", "t", "e"]),
    )
}

/// Start → {Task a, Approval b} → Automated c → End, with a and b both feeding c.
#[allow(dead_code)]
pub fn create_branching_workflow() -> Workflow {
    Workflow::new(
        vec![
            start("s", "Hire"),
            task("a", "Prepare Laptop", "IT"),
            approval("b", "Approve Offer", "Director"),
            automated("c", "Welcome Mail", "send_email"),
            end("e", "Hired"),
        ],
        vec![
            edge("s", "a"),
            edge("s", "b"),
            edge("a", "c"),
            edge("b", "c"),
            edge("c", "e"),
        ],
    )
}

/// The editor's JSON export for the onboarding workflow, including presentation keys.
#[allow(dead_code)]
pub const ONBOARDING_JSON: &str = r#"{
  "nodes": [
    {
      "id": "s",
      "type": "start",
      "position": { "x": 250, "y": 0 },
      "data": { "title": "Onboard", "metadata": { "team": "Platform", "level": "L3" } }
    },
    {
      "id": "t",
      "type": "task",
      "position": { "x": 250, "y": 150 },
      "data": {
        "title": "Collect Docs",
        "description": "ID and tax forms",
        "assignee": "HR",
        "dueDate": "2024-06-01",
        "customFields": { "priority": "high" }
      }
    },
    {
      "id": "e",
      "type": "end",
      "position": { "x": 250, "y": 300 },
      "data": { "endMessage": "Done", "generateSummary": true }
    }
  ],
  "edges": [
    { "id": "es-t", "source": "s", "target": "t", "type": "smoothstep", "animated": true },
    { "source": "t", "target": "e" }
  ],
  "metadata": { "version": "1.0", "createdAt": "2024-05-01T09:00:00.000Z" }
}"#;
