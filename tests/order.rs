//! Tests for breadth-first execution order.
mod common;
use common::*;
use junro::prelude::*;

fn order_ids(workflow: &Workflow) -> Vec<&str> {
    let start = workflow.start_node().expect("workflow has a start node");
    build_order(start, &workflow.nodes, &workflow.edges)
        .into_iter()
        .map(|n| n.id.as_str())
        .collect()
}

#[test]
fn test_linear_chain_is_visited_in_sequence() {
    let workflow = create_onboarding_workflow();
    assert_eq!(order_ids(&workflow), vec!["s", "t", "e"]);
}

#[test]
fn test_fan_out_follows_edge_declaration_order() {
    let workflow = Workflow::new(
        vec![
            start("s", "Go"),
            task("b", "B", ""),
            task("a", "A", ""),
            end("e", "Done"),
        ],
        vec![edge("s", "a"), edge("s", "b"), edge("a", "e"), edge("b", "e")],
    );
    assert_eq!(order_ids(&workflow), vec!["s", "a", "b", "e"]);
}

#[test]
fn test_merge_node_is_visited_once() {
    let workflow = create_branching_workflow();
    assert_eq!(order_ids(&workflow), vec!["s", "a", "b", "c", "e"]);
}

#[test]
fn test_breadth_first_not_depth_first() {
    // s → a → deep, s → b: breadth-first visits b before deep.
    let workflow = Workflow::new(
        vec![
            start("s", "Go"),
            task("a", "A", ""),
            task("deep", "Deep", ""),
            task("b", "B", ""),
        ],
        vec![edge("s", "a"), edge("a", "deep"), edge("s", "b")],
    );
    assert_eq!(order_ids(&workflow), vec!["s", "a", "b", "deep"]);
}

#[test]
fn test_unreachable_nodes_are_excluded() {
    let mut workflow = create_onboarding_workflow();
    workflow.nodes.push(task("x", "Island", ""));
    workflow.nodes.push(task("y", "Island 2", ""));
    workflow.edges.push(edge("x", "y"));
    assert_eq!(order_ids(&workflow), vec!["s", "t", "e"]);
}

#[test]
fn test_cycles_terminate() {
    let workflow = Workflow::new(
        vec![start("s", "Go"), task("a", "A", ""), task("b", "B", "")],
        vec![edge("s", "a"), edge("a", "b"), edge("b", "a"), edge("b", "s")],
    );
    assert_eq!(order_ids(&workflow), vec!["s", "a", "b"]);
}

#[test]
fn test_dangling_targets_are_skipped() {
    let mut workflow = create_onboarding_workflow();
    workflow.edges.insert(0, edge("s", "ghost"));
    assert_eq!(order_ids(&workflow), vec!["s", "t", "e"]);
}

#[test]
fn test_order_starts_from_given_node() {
    let workflow = create_onboarding_workflow();
    let task_node = workflow.node("t").expect("task exists");
    let order: Vec<&str> = build_order(task_node, &workflow.nodes, &workflow.edges)
        .into_iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(order, vec!["t", "e"]);
}
