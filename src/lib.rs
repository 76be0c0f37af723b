//! # Junro - Workflow Validation and Simulation Engine
//!
//! **Junro** checks and dry-runs directed workflow graphs built from Start, Task, Approval,
//! Automated and End steps. It reports structural problems before anything runs, then walks
//! the graph breadth-first from the Start node and produces a readable step-by-step trace.
//! Nothing is ever executed against a live system: automated actions are only described.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Graph**: Parse an editor export with [`WorkflowDocument`](workflow::WorkflowDocument),
//!     or implement [`IntoWorkflow`](workflow::IntoWorkflow) for your own format.
//! 2.  **Validate**: [`validate`](validator::validate) returns an ordered list of issues. Errors
//!     block simulation, warnings are advisory.
//! 3.  **Simulate**: [`Simulator::builder`](simulator::Simulator::builder) validates, walks the
//!     graph and assembles a [`SimulationResult`](simulator::SimulationResult).
//! 4.  **Present**: [`TraceFormatter`](trace::TraceFormatter) renders issues and traces as text;
//!     results also serialize to the editor's JSON shape.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use junro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let document = WorkflowDocument::from_file("onboarding.json")?;
//!     let workflow = document.into_workflow();
//!
//!     let issues = validate(&workflow);
//!     if !issues.is_empty() {
//!         println!("{}", TraceFormatter::format_issues(&issues));
//!     }
//!
//!     let mut simulator = Simulator::builder(&workflow)
//!         .with_observer(|index: usize, step: &Step| println!("step {}: {}", index + 1, step.message))
//!         .build();
//!
//!     match simulator.run() {
//!         Ok(result) => println!("{}", TraceFormatter::format_result(&result)),
//!         Err(e) => eprintln!("Simulation did not run: {}", e),
//!     }
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod order;
pub mod prelude;
pub mod simulator;
pub mod trace;
pub mod validator;
pub mod workflow;
