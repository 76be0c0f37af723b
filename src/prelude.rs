//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the junro crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use junro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = WorkflowDocument::from_file("path/to/workflow.json")?.into_workflow();
//! let result = simulate(&workflow)?;
//! println!("{}", TraceFormatter::format_result(&result));
//! # Ok(())
//! # }
//! ```

// Validation and simulation
pub use crate::order::build_order;
pub use crate::simulator::{
    SimulatedClock, SimulationResult, SimulationStatus, Simulator, SimulatorBuilder,
    SimulatorState, Step, StepObserver, StepStatus, Summary, simulate,
};
pub use crate::validator::{Issue, Severity, has_errors, validate};

// Workflow model
pub use crate::workflow::{
    ApprovalData, AutomatedData, AutomationCatalog, AutomationEntry, AutomationProvider, Edge,
    EndData, FieldMap, IntoWorkflow, Node, NodeKind, NodeType, Position, StartData, TaskData,
    Workflow, WorkflowDocument,
};

// Editing
pub use crate::editor::WorkflowEditor;

// Error types
pub use crate::error::{ConversionError, DocumentError, EditorError, SimulationError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
