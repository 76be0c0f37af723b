use super::conversion::IntoWorkflow;
use super::definition::{Edge, Node, NodeKind, NodeType, Position, Workflow};
use crate::error::{ConversionError, DocumentError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// The document format version written on export.
pub const DOCUMENT_VERSION: &str = "1.0";

// --- JSON Deserialization Structs (Editor Format Specific) ---
// These match the editor's export format and are only used for conversion.

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
    #[serde(default)]
    metadata: Option<DocumentMetadata>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct RawEdge {
    #[serde(default)]
    id: Option<String>,
    source: String,
    target: String,
}

/// Optional document header. Carried through, never interpreted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    nodes: &'a [Node],
    edges: &'a [Edge],
    metadata: &'a DocumentMetadata,
}

impl RawNode {
    fn parse_data<T: DeserializeOwned + Default>(&self) -> Result<T, ConversionError> {
        if self.data.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(self.data.clone()).map_err(|e| ConversionError::InvalidData {
            node_id: self.id.clone(),
            message: e.to_string(),
        })
    }
}

impl TryFrom<RawNode> for Node {
    type Error = ConversionError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let node_type =
            NodeType::parse(&raw.node_type).ok_or_else(|| ConversionError::UnknownNodeType {
                node_id: raw.id.clone(),
                type_name: raw.node_type.clone(),
            })?;

        let kind = match node_type {
            NodeType::Start => NodeKind::Start(raw.parse_data()?),
            NodeType::Task => NodeKind::Task(raw.parse_data()?),
            NodeType::Approval => NodeKind::Approval(raw.parse_data()?),
            NodeType::Automated => NodeKind::Automated(raw.parse_data()?),
            NodeType::End => NodeKind::End(raw.parse_data()?),
        };

        Ok(Node {
            id: raw.id,
            kind,
            position: raw.position,
        })
    }
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        let id = raw
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Edge::default_id(&raw.source, &raw.target));
        Edge {
            id,
            source: raw.source,
            target: raw.target,
        }
    }
}

impl IntoWorkflow for RawDocument {
    fn into_workflow(self) -> Result<Workflow, ConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = self.edges.into_iter().map(Edge::from).collect();
        Ok(Workflow { nodes, edges })
    }
}

/// A workflow as exchanged with the editor: the graph plus an optional metadata header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowDocument {
    pub workflow: Workflow,
    pub metadata: Option<DocumentMetadata>,
}

impl WorkflowDocument {
    /// Wraps a workflow for export, stamping the current document version.
    pub fn from_workflow(workflow: &Workflow) -> Self {
        Self {
            workflow: workflow.clone(),
            metadata: Some(DocumentMetadata {
                version: Some(DOCUMENT_VERSION.to_string()),
                created_at: None,
            }),
        }
    }

    /// Sets the `createdAt` stamp written on export.
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.metadata.get_or_insert_with(DocumentMetadata::default).created_at =
            Some(created_at.into());
        self
    }

    /// Parses a document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        let metadata = raw.metadata.clone();
        let workflow = raw.into_workflow()?;
        debug!(
            nodes = workflow.nodes.len(),
            edges = workflow.edges.len(),
            "parsed workflow document"
        );
        Ok(Self { workflow, metadata })
    }

    /// Loads a document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses generator output that may wrap the JSON in a Markdown code fence.
    pub fn from_generated_text(text: &str) -> Result<Self, DocumentError> {
        Self::from_json(strip_code_fence(text))
    }

    /// Serializes the document in the editor's export format.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        let metadata = self.metadata.clone().unwrap_or_default();
        let export = ExportDocument {
            nodes: &self.workflow.nodes,
            edges: &self.workflow.edges,
            metadata: &metadata,
        };
        serde_json::to_string_pretty(&export)
            .map_err(|e| DocumentError::JsonWriteError(e.to_string()))
    }

    /// Writes the document to a JSON file.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })
    }

    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }
}

/// Removes a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````), if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let inner = match trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    {
        Some(rest) => rest,
        None => return trimmed,
    };
    inner.trim().strip_suffix("```").unwrap_or(inner).trim()
}
