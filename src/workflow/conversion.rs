use super::definition::Workflow;
use crate::error::ConversionError;

/// A trait for custom data models that can be converted into a Junro `Workflow`.
///
/// This is the extension point for feeding the engine from any editor format. The built-in
/// JSON document reader is itself an implementation of this trait.
///
/// # Example
///
/// ```rust,no_run
/// use junro::prelude::*;
///
/// // 1. Your own structs, parsed from whatever format your editor saves.
/// struct Step { id: String, label: String, next: Option<String> }
/// struct Checklist { steps: Vec<Step> }
///
/// // 2. Map them onto Junro's model.
/// impl IntoWorkflow for Checklist {
///     fn into_workflow(self) -> std::result::Result<Workflow, ConversionError> {
///         let mut nodes = Vec::new();
///         let mut edges = Vec::new();
///         for step in self.steps {
///             if let Some(next) = &step.next {
///                 edges.push(Edge::new(Edge::default_id(&step.id, next), &step.id, next));
///             }
///             let kind = NodeKind::Task(TaskData { title: step.label, ..Default::default() });
///             nodes.push(Node::new(step.id, kind));
///         }
///         Ok(Workflow::new(nodes, edges))
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a workflow graph.
    fn into_workflow(self) -> Result<Workflow, ConversionError>;
}

impl IntoWorkflow for Workflow {
    fn into_workflow(self) -> Result<Workflow, ConversionError> {
        Ok(self)
    }
}
