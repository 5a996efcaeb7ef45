//! Configuration types for the simulation.

use crate::float::Float;
use crate::vec::Vec2;

/// Default capacity of a system's mass and spring collections.
pub const DEFAULT_SYSTEM_CAPACITY: usize = 8096;

/// Default capacity of a single mass's force accumulator.
pub const DEFAULT_FORCE_CAPACITY: usize = 64;

/// Configuration for a [`System`](crate::System).
///
/// Capacities and gravity are supplied at construction so the engine
/// carries no compiled-in constants.
///
/// # Builder Pattern
/// ```
/// use springnet::{SystemConfig, Vec2};
///
/// let config: SystemConfig<f32> = SystemConfig::new()
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_mass_capacity(1024)
///     .with_spring_capacity(2048);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemConfig<F: Float> {
    /// Maximum number of masses the system accepts. Default: 8096.
    pub mass_capacity: usize,
    /// Maximum number of springs the system accepts. Default: 8096.
    pub spring_capacity: usize,
    /// Per-mass force accumulator capacity. Default: 64.
    pub force_capacity: usize,
    /// Gravitational acceleration applied to every free mass.
    /// Default: (0, 98), screen-space downward.
    pub gravity: Vec2<F>,
    /// Multiplier applied to `dt` by [`System::step`](crate::System::step).
    /// Default: 1.
    pub time_scale: F,
}

impl<F: Float> SystemConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SystemConfig {
            mass_capacity: DEFAULT_SYSTEM_CAPACITY,
            spring_capacity: DEFAULT_SYSTEM_CAPACITY,
            force_capacity: DEFAULT_FORCE_CAPACITY,
            gravity: Vec2::new(F::zero(), F::from_f32(98.0)),
            time_scale: F::one(),
        }
    }

    /// Set the mass collection capacity.
    pub fn with_mass_capacity(mut self, capacity: usize) -> Self {
        self.mass_capacity = capacity;
        self
    }

    /// Set the spring collection capacity.
    pub fn with_spring_capacity(mut self, capacity: usize) -> Self {
        self.spring_capacity = capacity;
        self
    }

    /// Set the per-mass force accumulator capacity.
    pub fn with_force_capacity(mut self, capacity: usize) -> Self {
        self.force_capacity = capacity;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the timestep scale.
    pub fn with_time_scale(mut self, time_scale: F) -> Self {
        self.time_scale = time_scale;
        self
    }
}

impl<F: Float> Default for SystemConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
