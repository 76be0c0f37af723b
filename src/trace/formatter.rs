use crate::simulator::{SimulationResult, SimulationStatus, Step, StepStatus};
use crate::validator::Issue;
use itertools::Itertools;

/// Formats validation issues and simulation traces into human-readable text.
pub struct TraceFormatter;

impl TraceFormatter {
    /// One bullet per issue, prefixed by its severity.
    pub fn format_issues(issues: &[Issue]) -> String {
        issues
            .iter()
            .map(|issue| format!("  • {}", issue))
            .join("\n")
    }

    /// Renders the execution timeline followed by a summary block.
    pub fn format_result(result: &SimulationResult) -> String {
        let timeline = result
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| Self::format_step(index, step))
            .join("\n");
        format!(
            "Execution Timeline\n{}\n\n{}",
            timeline,
            Self::format_summary(result)
        )
    }

    /// A single timeline line, e.g. `  2. [completed] Collect Docs: Task assigned to HR: Collect Docs (250ms)`.
    pub fn format_step(index: usize, step: &Step) -> String {
        let status = match step.status {
            StepStatus::Completed => "completed",
        };
        let timing = step
            .duration
            .map(|ms| format!(" ({}ms)", ms))
            .unwrap_or_default();
        format!(
            "  {}. [{}] {}: {}{}",
            index + 1,
            status,
            step.node_name,
            step.message,
            timing
        )
    }

    pub fn format_summary(result: &SimulationResult) -> String {
        [
            "Summary".to_string(),
            format!("  Total Duration: {}ms", result.duration),
            format!("  Status: {}", Self::format_status(result.status)),
            format!("  Nodes Visited: {}", result.summary.total_nodes),
            format!("  Completed Steps: {}", result.summary.completed_steps),
            format!("  Failed Steps: {}", result.summary.failed_steps),
        ]
        .join("\n")
    }

    fn format_status(status: SimulationStatus) -> &'static str {
        match status {
            SimulationStatus::Success => "success",
        }
    }
}
