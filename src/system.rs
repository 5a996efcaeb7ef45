//! The owning container coordinating masses, springs, and the tick order.

use crate::config::SystemConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass::Mass;
use crate::observer::StepObserver;
use crate::spring::Spring;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// A spring-mass network.
///
/// Owns bounded collections of [`Mass`] and [`Spring`]; springs reference
/// masses by stable index. Capacity violations and bad indices are
/// rejected with no partial mutation.
///
/// # Tick order
///
/// Each simulated tick must run, exactly once and in this order:
/// [`step_springs`](System::step_springs),
/// [`step_masses`](System::step_masses),
/// [`reset_forces`](System::reset_forces), then optionally
/// [`apply_uniform_force`](System::apply_uniform_force) so the wind
/// persists into the next tick's spring evaluation. Repeating
/// `step_springs` without an intervening reset double-accumulates forces.
/// [`step`](System::step) runs the mandatory sequence for you.
///
/// The container is not internally synchronized; drive it from a single
/// execution context, or synchronize externally.
pub struct System<F: Float> {
    masses: Vec<Mass<F>>,
    springs: Vec<Spring<F>>,
    config: SystemConfig<F>,
}

impl<F: Float> System<F> {
    /// Create an empty system with the given configuration.
    pub fn new(config: SystemConfig<F>) -> Self {
        System {
            masses: Vec::new(),
            springs: Vec::new(),
            config,
        }
    }

    /// Append a mass; returns its stable index.
    ///
    /// Fails with [`PhysicsError::MassCapacityExceeded`] at capacity; the
    /// mass is not added.
    pub fn add_mass(&mut self, mass: Mass<F>) -> Result<usize, PhysicsError> {
        if self.masses.len() >= self.config.mass_capacity {
            return Err(PhysicsError::MassCapacityExceeded {
                capacity: self.config.mass_capacity,
            });
        }
        let index = self.masses.len();
        self.masses.push(mass);
        Ok(index)
    }

    /// Append a spring after validating its endpoints; returns its index.
    ///
    /// Rejects out-of-range endpoints, self-loops, and a full spring
    /// collection. Nothing is mutated on failure.
    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<usize, PhysicsError> {
        let count = self.masses.len();
        if spring.a >= count {
            return Err(PhysicsError::MassOutOfRange { index: spring.a, count });
        }
        if spring.b >= count {
            return Err(PhysicsError::MassOutOfRange { index: spring.b, count });
        }
        if spring.a == spring.b {
            return Err(PhysicsError::SelfReferentialSpring { index: spring.a });
        }
        if self.springs.len() >= self.config.spring_capacity {
            return Err(PhysicsError::SpringCapacityExceeded {
                capacity: self.config.spring_capacity,
            });
        }
        let index = self.springs.len();
        self.springs.push(spring);
        Ok(index)
    }

    /// Deposit every spring's force pair, in insertion order.
    ///
    /// Spring order does not affect the tick's outcome (superposition is
    /// commutative), but the full pass must complete before
    /// [`step_masses`](System::step_masses).
    pub fn step_springs(&mut self) {
        for spring in self.springs.iter() {
            spring.apply_forces(&mut self.masses);
        }
    }

    /// Integrate every mass by `dt`, in insertion order.
    pub fn step_masses(&mut self, dt: F) {
        for mass in self.masses.iter_mut() {
            mass.integrate(dt, self.config.gravity);
        }
    }

    /// Clear every mass's force accumulator.
    ///
    /// Must run after [`step_masses`](System::step_masses) and before the
    /// next [`step_springs`](System::step_springs).
    pub fn reset_forces(&mut self) {
        for mass in self.masses.iter_mut() {
            mass.reset_forces();
        }
    }

    /// Append `force` to every mass's accumulator (e.g. a uniform wind).
    ///
    /// Masses with full accumulators drop the force; the sweep still
    /// visits every mass, and the first overflow is reported afterwards.
    pub fn apply_uniform_force(&mut self, force: Vec2<F>) -> Result<(), PhysicsError> {
        let mut first_err = None;
        for mass in self.masses.iter_mut() {
            if let Err(err) = mass.apply_force(force) {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Append `force` to a single mass's accumulator (drag interactions).
    pub fn apply_force_at(&mut self, index: usize, force: Vec2<F>) -> Result<(), PhysicsError> {
        let count = self.masses.len();
        match self.masses.get_mut(index) {
            Some(mass) => mass.apply_force(force),
            None => Err(PhysicsError::MassOutOfRange { index, count }),
        }
    }

    /// Run one full tick: springs, then integration with
    /// `dt * time_scale`, then accumulator reset, notifying `observer`
    /// between phases. Apply wind *after* this returns so it feeds the
    /// next tick.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        self.step_springs();
        observer.on_springs_applied();
        self.step_masses(dt * self.config.time_scale);
        observer.on_integrate();
        self.reset_forces();
        observer.on_step_complete();
    }

    /// Remove every mass and spring. The only operation that invalidates
    /// spring endpoint indices.
    pub fn clear(&mut self) {
        self.masses.clear();
        self.springs.clear();
    }

    /// The ordered mass collection.
    pub fn masses(&self) -> &[Mass<F>] {
        &self.masses
    }

    /// The ordered spring collection.
    pub fn springs(&self) -> &[Spring<F>] {
        &self.springs
    }

    /// A single mass by index.
    pub fn mass(&self, index: usize) -> Option<&Mass<F>> {
        self.masses.get(index)
    }

    /// Mutable access to a single mass (repositioning, pinning).
    pub fn mass_mut(&mut self, index: usize) -> Option<&mut Mass<F>> {
        self.masses.get_mut(index)
    }

    pub fn mass_count(&self) -> usize {
        self.masses.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &SystemConfig<F> {
        &self.config
    }
}

impl<F: Float> Default for System<F> {
    fn default() -> Self {
        Self::new(SystemConfig::default())
    }
}
