//! Point masses with force accumulation and semi-implicit Euler integration.

use crate::config::DEFAULT_FORCE_CAPACITY;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec;

/// A simulated point mass.
///
/// Forces are accumulated into a bounded list over one tick and converted
/// to acceleration during [`integrate`](Mass::integrate). A `fixed` mass
/// never moves but still serves as a spring anchor.
#[derive(Clone, Debug)]
pub struct Mass<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub mass: F,
    pub inv_mass: F,
    pub fixed: bool,
    forces: Vec<Vec2<F>>,
    force_capacity: usize,
}

impl<F: Float> Mass<F> {
    /// Create a free mass at `position` with zeroed kinematics.
    pub fn new(position: Vec2<F>, mass: F) -> Self {
        Mass {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            inv_mass: inv_mass(mass),
            fixed: false,
            forces: Vec::new(),
            force_capacity: DEFAULT_FORCE_CAPACITY,
        }
    }

    /// Create a fixed (anchor) mass. It participates as a spring endpoint
    /// but is skipped by integration entirely.
    pub fn fixed(position: Vec2<F>, mass: F) -> Self {
        Mass {
            fixed: true,
            ..Mass::new(position, mass)
        }
    }

    /// Override the force accumulator capacity.
    pub fn with_force_capacity(mut self, capacity: usize) -> Self {
        self.force_capacity = capacity;
        self
    }

    /// Append a force to the accumulator for the current tick.
    ///
    /// Fails with [`PhysicsError::ForceCapacityExceeded`] when the
    /// accumulator is full; the force is dropped and the accumulator is
    /// left untouched.
    pub fn apply_force(&mut self, force: Vec2<F>) -> Result<(), PhysicsError> {
        if self.forces.len() >= self.force_capacity {
            return Err(PhysicsError::ForceCapacityExceeded {
                capacity: self.force_capacity,
            });
        }
        self.forces.push(force);
        Ok(())
    }

    /// Clear the force accumulator.
    pub fn reset_forces(&mut self) {
        self.forces.clear();
    }

    /// Advance velocity and position by one timestep.
    ///
    /// Acceleration is rebuilt from scratch each call: gravity plus every
    /// accumulated force scaled by the inverse mass. The Euler step is
    /// semi-implicit: velocity first, then position from the *updated*
    /// velocity. That ordering is load-bearing for stability at high
    /// stiffness and must not be swapped.
    ///
    /// `dt` is assumed strictly positive; validating it is the driver's
    /// responsibility.
    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>) {
        if self.fixed {
            return;
        }
        self.acceleration = gravity;
        for force in self.forces.iter() {
            self.acceleration = self.acceleration + force.scale(self.inv_mass);
        }
        self.velocity = self.velocity + self.acceleration.scale(dt);
        self.position = self.position + self.velocity.scale(dt);
    }

    /// Forces accumulated so far this tick.
    pub fn forces(&self) -> &[Vec2<F>] {
        &self.forces
    }

    /// Number of forces accumulated so far this tick.
    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// Capacity of the force accumulator.
    pub fn force_capacity(&self) -> usize {
        self.force_capacity
    }
}

fn inv_mass<F: Float>(mass: F) -> F {
    if mass.is_near_zero(F::from_f32(1e-10)) {
        F::zero()
    } else {
        F::one() / mass
    }
}
