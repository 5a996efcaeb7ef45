//! Error types for physics operations.

use core::fmt;

/// Errors that can occur during physics operations.
///
/// All errors are non-fatal: the rejected mutation leaves the container
/// exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
    /// The mass collection is full.
    MassCapacityExceeded { capacity: usize },
    /// The spring collection is full.
    SpringCapacityExceeded { capacity: usize },
    /// A mass's force accumulator is full; the force was dropped.
    ForceCapacityExceeded { capacity: usize },
    /// A mass index does not refer to an existing mass.
    MassOutOfRange { index: usize, count: usize },
    /// A spring's endpoints refer to the same mass.
    SelfReferentialSpring { index: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::MassCapacityExceeded { capacity } => {
                write!(f, "cannot add more masses to the system (capacity: {})", capacity)
            }
            PhysicsError::SpringCapacityExceeded { capacity } => {
                write!(f, "cannot add more springs to the system (capacity: {})", capacity)
            }
            PhysicsError::ForceCapacityExceeded { capacity } => {
                write!(f, "cannot append any more forces to mass (capacity: {})", capacity)
            }
            PhysicsError::MassOutOfRange { index, count } => {
                write!(f, "mass index {} out of range (count: {})", index, count)
            }
            PhysicsError::SelfReferentialSpring { index } => {
                write!(f, "spring connects mass {} to itself", index)
            }
        }
    }
}
