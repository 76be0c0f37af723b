use crate::validator::Issue;
use thiserror::Error;

/// Errors that can occur while simulating a workflow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("No start node found in workflow")]
    NoStartNode,

    #[error("Workflow validation failed with {} blocking issue(s)", .issues.len())]
    Blocked { issues: Vec<Issue> },
}

/// Errors that can occur when converting a custom user format into a Junro `Workflow`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Node '{node_id}' has an unknown node type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node '{node_id}' has invalid data: {message}")]
    InvalidData { node_id: String, message: String },
}

/// Errors that can occur while reading or writing a workflow JSON document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to parse workflow JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to serialize workflow JSON: {0}")]
    JsonWriteError(String),

    #[error("Could not access workflow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors raised by the in-memory editing surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Node '{0}' not found in workflow")]
    NodeNotFound(String),

    #[error("Edge '{0}' not found in workflow")]
    EdgeNotFound(String),
}
