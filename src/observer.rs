//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation tick.
///
/// Implement this to monitor the engine (debug overlays, profiling,
/// visualization). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after every spring has deposited its forces.
    fn on_springs_applied(&mut self) {}

    /// Called after every mass has been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a tick is fully complete (accumulators cleared).
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
