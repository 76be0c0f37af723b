use super::Step;

/// Receives each step as soon as it completes.
///
/// Observers exist for presentation pacing (animating a trace, streaming progress) and
/// cannot influence the simulation result.
pub trait StepObserver {
    fn on_step(&mut self, index: usize, step: &Step);
}

impl<F> StepObserver for F
where
    F: FnMut(usize, &Step),
{
    fn on_step(&mut self, index: usize, step: &Step) {
        self(index, step)
    }
}
