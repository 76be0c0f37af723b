use super::FieldMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles offered by the approval form. Free text is still accepted.
pub const RECOMMENDED_APPROVER_ROLES: [&str; 7] = [
    "Manager",
    "HRBP",
    "Director",
    "VP",
    "C-Level",
    "Department Head",
    "Team Lead",
];

/// Returns `true` if `role` is one of [`RECOMMENDED_APPROVER_ROLES`].
pub fn is_recommended_role(role: &str) -> bool {
    RECOMMENDED_APPROVER_ROLES.contains(&role)
}

/// The tag of a node, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    Task,
    Approval,
    Automated,
    End,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Start,
        NodeType::Task,
        NodeType::Approval,
        NodeType::Automated,
        NodeType::End,
    ];

    /// The wire name used in workflow documents (`"start"`, `"task"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Start => "start",
            NodeType::Task => "task",
            NodeType::Approval => "approval",
            NodeType::Automated => "automated",
            NodeType::End => "end",
        }
    }

    /// The capitalized name used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::Start => "Start",
            NodeType::Task => "Task",
            NodeType::Approval => "Approval",
            NodeType::Automated => "Automated",
            NodeType::End => "End",
        }
    }

    /// Parses a wire name. Names are matched exactly, so `"Start"` is not a start node.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas coordinates. Presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartData {
    pub title: String,
    pub metadata: FieldMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskData {
    pub title: String,
    pub description: String,
    pub assignee: String,
    /// ISO date (`YYYY-MM-DD`) or empty.
    pub due_date: String,
    pub custom_fields: FieldMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalData {
    pub title: String,
    pub approver_role: String,
    pub auto_approve_threshold: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomatedData {
    pub title: String,
    /// Identifier into the automation catalog.
    pub action: String,
    /// Display name of the resolved action.
    pub action_label: String,
    pub parameters: FieldMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndData {
    pub end_message: String,
    pub generate_summary: bool,
}

/// A node's type together with its type-specific data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeKind {
    Start(StartData),
    Task(TaskData),
    Approval(ApprovalData),
    Automated(AutomatedData),
    End(EndData),
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Start(_) => NodeType::Start,
            NodeKind::Task(_) => NodeType::Task,
            NodeKind::Approval(_) => NodeType::Approval,
            NodeKind::Automated(_) => NodeType::Automated,
            NodeKind::End(_) => NodeType::End,
        }
    }

    /// The node's title. End nodes carry no title.
    pub fn title(&self) -> Option<&str> {
        match self {
            NodeKind::Start(d) => Some(&d.title),
            NodeKind::Task(d) => Some(&d.title),
            NodeKind::Approval(d) => Some(&d.title),
            NodeKind::Automated(d) => Some(&d.title),
            NodeKind::End(_) => None,
        }
    }

    /// The data a freshly dropped node of `node_type` starts with.
    pub fn default_for(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Start => NodeKind::Start(StartData {
                title: "Start Workflow".to_string(),
                ..Default::default()
            }),
            NodeType::Task => NodeKind::Task(TaskData {
                title: "New Task".to_string(),
                ..Default::default()
            }),
            NodeType::Approval => NodeKind::Approval(ApprovalData {
                title: "Approval Required".to_string(),
                ..Default::default()
            }),
            NodeType::Automated => NodeKind::Automated(AutomatedData {
                title: "Automated Step".to_string(),
                ..Default::default()
            }),
            NodeType::End => NodeKind::End(EndData {
                end_message: "Workflow Complete".to_string(),
                generate_summary: false,
            }),
        }
    }
}

/// A single step in the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub kind: NodeKind,
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::default(),
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// The title if present and non-blank, otherwise the type name.
    pub fn display_name(&self) -> &str {
        match self.kind.title() {
            Some(title) if !title.trim().is_empty() => title,
            _ => self.node_type().as_str(),
        }
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// The id the editor assigns to a connection when none is supplied.
    pub fn default_id(source: &str, target: &str) -> String {
        format!("e{}-{}", source, target)
    }
}

/// The complete graph under validation or simulation.
///
/// The engine only ever borrows a workflow; it is never mutated by validation or simulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Workflow {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Workflow {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The first Start node in node order.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.node_type() == NodeType::Start)
    }

    pub fn nodes_of(&self, node_type: NodeType) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(move |n| n.node_type() == node_type)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
