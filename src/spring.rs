//! Damped springs connecting two masses by stable index.

use crate::float::Float;
use crate::mass::Mass;
use crate::vec::Vec2;

/// A damped spring between two masses in the same [`System`](crate::System).
///
/// Endpoints are stable indices into the owning system's mass collection,
/// never references: indices stay valid through incremental growth and are
/// only invalidated by a full topology reset.
///
/// A spring is stateless between ticks beyond its coefficients.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    /// Index of the first endpoint mass.
    pub a: usize,
    /// Index of the second endpoint mass.
    pub b: usize,
    /// Natural length at which the elastic force is zero.
    pub rest_length: F,
    /// Stiffness coefficient (force per unit displacement from rest).
    pub stiffness: F,
    /// Velocity-relative damping coefficient.
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, rest_length: F, stiffness: F, damping: F) -> Self {
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Build a spring whose rest length is the current separation of its
    /// endpoints, so it starts in equilibrium.
    pub fn from_masses(
        a: usize,
        b: usize,
        masses: &[Mass<F>],
        stiffness: F,
        damping: F,
    ) -> Self {
        let rest_length = masses[a].position.distance(masses[b].position);
        Spring { a, b, rest_length, stiffness, damping }
    }

    /// Apply the elastic and damping force pair to both endpoint masses.
    ///
    /// Both contributions on each endpoint are exact negations of the
    /// other endpoint's, so the pair always sums to zero net force.
    /// Contributions are appended to the accumulators, never overwritten;
    /// multiple springs incident on one mass superpose within a tick.
    ///
    /// Coincident endpoints have no defined direction and exert no force.
    /// A full accumulator drops the contribution with a warning, since
    /// this path has no return channel.
    pub fn apply_forces(&self, masses: &mut [Mass<F>]) {
        let span = masses[self.b].position - masses[self.a].position;
        let current_length = span.length();
        if current_length.is_near_zero(F::from_f32(1e-10)) {
            return;
        }
        let direction = span.scale(F::one() / current_length);

        // Elastic: displacement is positive when compressed, negative
        // when stretched.
        let displacement = self.rest_length - current_length;
        let elastic = direction.scale(self.stiffness * -displacement);
        deposit(masses, self.a, elastic);
        deposit(masses, self.b, -elastic);

        // Damping: closing rate of the endpoints along the spring axis.
        let closing_rate = masses[self.a].velocity.dot(direction)
            - masses[self.b].velocity.dot(direction);
        let damper = direction.scale(self.damping * -closing_rate);
        deposit(masses, self.a, damper);
        deposit(masses, self.b, -damper);
    }

    /// Current distance between the endpoint masses.
    pub fn current_length(&self, masses: &[Mass<F>]) -> F {
        masses[self.a].position.distance(masses[self.b].position)
    }

    /// Signed extension: positive when stretched beyond rest length,
    /// negative when compressed. Intended for visualization collaborators.
    pub fn extension(&self, masses: &[Mass<F>]) -> F {
        self.current_length(masses) - self.rest_length
    }
}

fn deposit<F: Float>(masses: &mut [Mass<F>], index: usize, force: Vec2<F>) {
    if let Err(err) = masses[index].apply_force(force) {
        log::warn!("dropping spring force on mass {}: {}", index, err);
    }
}
