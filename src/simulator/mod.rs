use crate::error::SimulationError;
use crate::order::build_order;
use crate::validator::{Issue, has_errors, validate};
use crate::workflow::Workflow;
use tracing::{debug, info, warn};

mod message;
mod observer;
mod step;

pub use message::step_message;
pub use observer::StepObserver;
pub use step::{SimulationResult, SimulationStatus, Step, StepStatus, Summary};

/// Deterministic stand-in for wall-clock time.
///
/// Every step takes `step_duration_ms`, so step `i` starts at `i * step_duration_ms`.
/// Offsets and totals saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedClock {
    pub step_duration_ms: u64,
}

impl Default for SimulatedClock {
    fn default() -> Self {
        Self {
            step_duration_ms: 250,
        }
    }
}

impl SimulatedClock {
    pub fn new(step_duration_ms: u64) -> Self {
        Self { step_duration_ms }
    }

    fn started_at(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.step_duration_ms)
    }
}

/// Where a simulator is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    Idle,
    Validating,
    /// Validation found blocking issues; no trace was produced.
    Blocked,
    Running,
    Done,
}

/// Simulates a workflow without a validation gate.
///
/// Fails only when the workflow has no Start node.
pub fn simulate(workflow: &Workflow) -> Result<SimulationResult, SimulationError> {
    Simulator::builder(workflow).skip_validation().build().run()
}

pub struct SimulatorBuilder<'a> {
    workflow: &'a Workflow,
    observers: Vec<Box<dyn StepObserver + 'a>>,
    clock: Option<SimulatedClock>,
    validate_first: bool,
    strict: bool,
}

impl<'a> SimulatorBuilder<'a> {
    pub fn new(workflow: &'a Workflow) -> Self {
        Self {
            workflow,
            observers: Vec::new(),
            clock: Some(SimulatedClock::default()),
            validate_first: true,
            strict: false,
        }
    }

    /// Registers an observer called once per completed step, in order.
    pub fn with_observer(mut self, observer: impl StepObserver + 'a) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn with_clock(mut self, clock: SimulatedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Produces steps without timing information and a total duration of zero.
    pub fn without_timing(mut self) -> Self {
        self.clock = None;
        self
    }

    /// Runs straight to traversal without validating first.
    pub fn skip_validation(mut self) -> Self {
        self.validate_first = false;
        self
    }

    /// Treats warnings as blocking, not just errors.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn build(self) -> Simulator<'a> {
        Simulator {
            workflow: self.workflow,
            observers: self.observers,
            clock: self.clock,
            validate_first: self.validate_first,
            strict: self.strict,
            state: SimulatorState::Idle,
            issues: Vec::new(),
        }
    }
}

/// Validates and walks a borrowed workflow, producing a step trace.
///
/// A run moves through `Idle → Validating → (Blocked | Running) → Done`.
pub struct Simulator<'a> {
    workflow: &'a Workflow,
    observers: Vec<Box<dyn StepObserver + 'a>>,
    clock: Option<SimulatedClock>,
    validate_first: bool,
    strict: bool,
    state: SimulatorState,
    issues: Vec<Issue>,
}

impl<'a> Simulator<'a> {
    pub fn builder(workflow: &'a Workflow) -> SimulatorBuilder<'a> {
        SimulatorBuilder::new(workflow)
    }

    pub fn state(&self) -> SimulatorState {
        self.state
    }

    /// Every issue found by the most recent validation phase, blocking or not.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn run(&mut self) -> Result<SimulationResult, SimulationError> {
        self.issues.clear();

        if self.validate_first {
            self.state = SimulatorState::Validating;
            self.issues = validate(self.workflow);

            let blocked = if self.strict {
                !self.issues.is_empty()
            } else {
                has_errors(&self.issues)
            };
            if blocked {
                self.state = SimulatorState::Blocked;
                let issues: Vec<Issue> = self
                    .issues
                    .iter()
                    .filter(|i| self.strict || i.is_error())
                    .cloned()
                    .collect();
                warn!(blocking = issues.len(), "simulation blocked by validation");
                return Err(SimulationError::Blocked { issues });
            }
        }

        self.state = SimulatorState::Running;
        let result = self.execute();
        self.state = SimulatorState::Done;
        result
    }

    fn execute(&mut self) -> Result<SimulationResult, SimulationError> {
        let workflow = self.workflow;
        let start = workflow.start_node().ok_or(SimulationError::NoStartNode)?;
        info!(start = %start.id, "starting simulation");

        let order = build_order(start, &workflow.nodes, &workflow.edges);
        let mut steps = Vec::with_capacity(order.len());

        for (index, node) in order.iter().enumerate() {
            let step = Step::completed(
                node,
                self.clock.map(|c| c.started_at(index)),
                self.clock.map(|c| c.step_duration_ms),
            );
            debug!(index, node = %step.node_id, message = %step.message, "step completed");
            for observer in &mut self.observers {
                observer.on_step(index, &step);
            }
            steps.push(step);
        }

        let duration = self
            .clock
            .map(|c| c.step_duration_ms.saturating_mul(steps.len() as u64))
            .unwrap_or(0);
        info!(steps = steps.len(), duration, "simulation finished");

        Ok(SimulationResult {
            status: SimulationStatus::Success,
            duration,
            summary: Summary {
                total_nodes: order.len(),
                completed_steps: steps.len(),
                failed_steps: 0,
            },
            steps,
        })
    }
}
