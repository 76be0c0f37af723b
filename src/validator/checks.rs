use super::Issue;
use crate::graph::{self, Adjacency};
use crate::workflow::{NodeKind, NodeType, Workflow};
use itertools::Itertools;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(super) fn start_cardinality(workflow: &Workflow, issues: &mut Vec<Issue>) {
    match workflow.nodes_of(NodeType::Start).count() {
        0 => issues.push(Issue::error("Workflow must have a Start node.")),
        1 => {}
        _ => issues.push(Issue::warning(
            "Workflow has multiple Start nodes. Only one is recommended.",
        )),
    }
}

pub(super) fn end_cardinality(workflow: &Workflow, issues: &mut Vec<Issue>) {
    if workflow.nodes_of(NodeType::End).next().is_none() {
        issues.push(Issue::error("Workflow must have an End node."));
    }
}

pub(super) fn references(workflow: &Workflow, issues: &mut Vec<Issue>) {
    for id in workflow.nodes.iter().map(|n| n.id.as_str()).duplicates() {
        issues.push(Issue::error(format!("Node id \"{}\" is used more than once.", id)));
    }
    for id in workflow.edges.iter().map(|e| e.id.as_str()).duplicates() {
        issues.push(Issue::error(format!("Edge id \"{}\" is used more than once.", id)));
    }
    for dangling in graph::check_references(&workflow.nodes, &workflow.edges) {
        issues.push(Issue::error(format!(
            "Edge \"{}\" {} references unknown node \"{}\".",
            dangling.edge_id,
            dangling.endpoint.as_str(),
            dangling.missing_node_id
        )));
    }
}

pub(super) fn connectivity(workflow: &Workflow, issues: &mut Vec<Issue>) {
    if workflow.nodes.len() <= 1 {
        return;
    }
    let connected = graph::connected_ids(&workflow.edges);
    let disconnected = workflow
        .nodes
        .iter()
        .filter(|n| !connected.contains(n.id.as_str()))
        .count();
    if disconnected > 0 {
        issues.push(Issue::warning(format!(
            "{} node(s) are not connected to the workflow.",
            disconnected
        )));
    }
}

pub(super) fn cycles(workflow: &Workflow, issues: &mut Vec<Issue>) {
    let adjacency = Adjacency::from_edges(&workflow.edges);
    if graph::has_cycle(&workflow.nodes, &adjacency) {
        issues.push(Issue::warning(
            "Workflow may contain a cycle. This could cause infinite loops.",
        ));
    }
}

pub(super) fn required_fields(workflow: &Workflow, issues: &mut Vec<Issue>) {
    for node in &workflow.nodes {
        let label = node.node_type().label();
        let missing = |field: &str| format!("{} node \"{}\" is missing {}.", label, node.id, field);

        if node.kind.title().is_some_and(is_blank) {
            issues.push(Issue::error(missing("a title")));
        }

        match &node.kind {
            NodeKind::Approval(data) if is_blank(&data.approver_role) => {
                issues.push(Issue::warning(missing("an approver role")));
            }
            NodeKind::Automated(data) if is_blank(&data.action) => {
                issues.push(Issue::error(missing("an action")));
            }
            NodeKind::Start(_)
            | NodeKind::Task(_)
            | NodeKind::Approval(_)
            | NodeKind::Automated(_)
            | NodeKind::End(_) => {}
        }
    }
}
