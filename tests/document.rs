//! Tests for reading and writing the editor's JSON document format.
mod common;
use common::*;
use junro::prelude::*;
use junro::workflow::DocumentMetadata;

#[test]
fn test_parses_editor_export() {
    let document = WorkflowDocument::from_json(ONBOARDING_JSON).expect("document parses");
    let workflow = &document.workflow;

    assert_eq!(workflow.nodes.len(), 3);
    assert_eq!(workflow.edges.len(), 2);
    assert_eq!(workflow.nodes[0].position, Position::new(250.0, 0.0));

    match &workflow.nodes[0].kind {
        NodeKind::Start(data) => {
            assert_eq!(data.title, "Onboard");
            assert_eq!(data.metadata.keys().collect::<Vec<_>>(), vec!["team", "level"]);
        }
        other => panic!("Expected Start node, got {:?}", other),
    }
    match &workflow.nodes[1].kind {
        NodeKind::Task(data) => {
            assert_eq!(data.assignee, "HR");
            assert_eq!(data.due_date, "2024-06-01");
            assert_eq!(data.custom_fields.get("priority"), Some("high"));
        }
        other => panic!("Expected Task node, got {:?}", other),
    }
    match &workflow.nodes[2].kind {
        NodeKind::End(data) => {
            assert_eq!(data.end_message, "Done");
            assert!(data.generate_summary);
        }
        other => panic!("Expected End node, got {:?}", other),
    }
}

#[test]
fn test_metadata_is_carried_but_not_required() {
    let document = WorkflowDocument::from_json(ONBOARDING_JSON).expect("document parses");
    assert_eq!(
        document.metadata,
        Some(DocumentMetadata {
            version: Some("1.0".to_string()),
            created_at: Some("2024-05-01T09:00:00.000Z".to_string()),
        })
    );

    let bare = WorkflowDocument::from_json(r#"{"nodes": [], "edges": []}"#)
        .expect("bare document parses");
    assert!(bare.metadata.is_none());
    assert!(bare.workflow.is_empty());
}

#[test]
fn test_missing_edge_id_is_synthesised() {
    let workflow = WorkflowDocument::from_json(ONBOARDING_JSON)
        .expect("document parses")
        .into_workflow();
    assert_eq!(workflow.edges[0].id, "es-t");
    assert_eq!(workflow.edges[1].id, "et-e");
}

#[test]
fn test_parsed_document_simulates_like_built_workflow() {
    let parsed = WorkflowDocument::from_json(ONBOARDING_JSON)
        .expect("document parses")
        .into_workflow();
    let parsed_result = simulate(&parsed).expect("simulation should succeed");
    let built_result =
        simulate(&create_onboarding_workflow()).expect("simulation should succeed");

    let messages = |r: &SimulationResult| -> Vec<String> {
        r.steps.iter().map(|s| s.message.clone()).collect()
    };
    assert_eq!(messages(&parsed_result), messages(&built_result));
    assert!(validate(&parsed).is_empty());
}

#[test]
fn test_missing_data_fields_default_to_empty() {
    let json = r#"{
        "nodes": [
            { "id": "a", "type": "approval", "data": { "title": "Sign" } },
            { "id": "m", "type": "automated" }
        ],
        "edges": []
    }"#;
    let workflow = WorkflowDocument::from_json(json)
        .expect("document parses")
        .into_workflow();
    match &workflow.nodes[0].kind {
        NodeKind::Approval(data) => {
            assert!(data.approver_role.is_empty());
            assert_eq!(data.auto_approve_threshold, None);
        }
        other => panic!("Expected Approval node, got {:?}", other),
    }
    assert_eq!(
        workflow.nodes[1].kind,
        NodeKind::Automated(AutomatedData::default())
    );
}

#[test]
fn test_unknown_node_type_is_rejected() {
    let json = r#"{ "nodes": [{ "id": "q", "type": "quantum", "data": {} }], "edges": [] }"#;
    match WorkflowDocument::from_json(json) {
        Err(DocumentError::Conversion(ConversionError::UnknownNodeType { node_id, type_name })) => {
            assert_eq!(node_id, "q");
            assert_eq!(type_name, "quantum");
        }
        other => panic!("Expected UnknownNodeType, got {:?}", other),
    }
}

#[test]
fn test_field_order_survives_import() {
    let json = r#"{
        "nodes": [{
            "id": "m",
            "type": "automated",
            "data": {
                "title": "Notify",
                "action": "send_slack",
                "parameters": { "zeta": "1", "message": "hi", "alpha": "2" }
            }
        }]
    }"#;
    let workflow = WorkflowDocument::from_json(json)
        .expect("document parses")
        .into_workflow();
    match &workflow.nodes[0].kind {
        NodeKind::Automated(data) => assert_eq!(
            data.parameters.keys().collect::<Vec<_>>(),
            vec!["zeta", "message", "alpha"]
        ),
        other => panic!("Expected Automated node, got {:?}", other),
    }
}

#[test]
fn test_node_type_must_match_exactly() {
    let json = r#"{ "nodes": [{ "id": "s", "type": "Start", "data": {} }] }"#;
    assert!(matches!(
        WorkflowDocument::from_json(json),
        Err(DocumentError::Conversion(ConversionError::UnknownNodeType { .. }))
    ));
}

#[test]
fn test_invalid_node_data_is_rejected() {
    let json = r#"{ "nodes": [{ "id": "e", "type": "end", "data": { "generateSummary": "yes" } }] }"#;
    assert!(matches!(
        WorkflowDocument::from_json(json),
        Err(DocumentError::Conversion(ConversionError::InvalidData { .. }))
    ));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(
        WorkflowDocument::from_json("{ nodes: "),
        Err(DocumentError::JsonParseError(_))
    ));
}

#[test]
fn test_generated_text_in_code_fence() {
    let fenced = format!("```json\n{}\n```", ONBOARDING_JSON);
    let workflow = WorkflowDocument::from_generated_text(&fenced)
        .expect("fenced document parses")
        .into_workflow();
    assert_eq!(workflow.nodes.len(), 3);
}

#[test]
fn test_export_reimports_identically() {
    let workflow = create_branching_workflow();
    let json = WorkflowDocument::from_workflow(&workflow)
        .with_created_at("2024-05-01T09:00:00.000Z")
        .to_json_pretty()
        .expect("document serializes");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["metadata"]["version"], "1.0");
    assert_eq!(value["nodes"][2]["type"], "approval");
    assert_eq!(value["nodes"][2]["data"]["approverRole"], "Director");

    let reimported = WorkflowDocument::from_json(&json)
        .expect("export parses")
        .into_workflow();
    assert_eq!(reimported, workflow);
}
