//! Rectangular lattice builder: a cloth-like sheet pinned along its top edge.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::system::System;
use crate::vec::Vec2;

/// Configuration for a rectangular grid of masses and structural springs.
///
/// Defaults produce a 20x20 sheet with 25-unit cells, unit mass,
/// stiffness 1000, and damping 1, hung from the origin corner.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    pub rows: usize,
    pub cols: usize,
    /// Position of the mass at row 0, column 0.
    pub origin: Vec2<F>,
    /// Lattice spacing; also the rest length of every structural spring.
    pub cell_size: F,
    /// Mass value given uniformly to every lattice point.
    pub mass: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> GridConfig<F> {
    /// Row-major index of the mass at (col, row): `row * cols + col`.
    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Number of masses the grid will create.
    pub fn mass_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of structural springs the grid will create.
    pub fn spring_count(&self) -> usize {
        if self.rows == 0 || self.cols == 0 {
            return 0;
        }
        self.rows * (self.cols - 1) + self.cols * (self.rows - 1)
    }
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        GridConfig {
            rows: 20,
            cols: 20,
            origin: Vec2::new(F::from_f32(10.0), F::from_f32(10.0)),
            cell_size: F::from_f32(25.0),
            mass: F::one(),
            stiffness: F::from_f32(1000.0),
            damping: F::one(),
        }
    }
}

impl<F: Float> System<F> {
    /// Replace the current topology with a rectangular lattice.
    ///
    /// Masses are laid out row-major from `origin`, columns extending in
    /// +x and rows in +y; the top row (`row == 0`) is fixed, all others
    /// free. Structural springs connect horizontal neighbors first, then
    /// vertical neighbors, rest length `cell_size`. The ordering is
    /// deterministic so collaborators may index masses by grid position.
    ///
    /// The mass and spring demand is checked against the system's
    /// capacities up front; on failure the existing topology is left
    /// untouched.
    pub fn build_grid(&mut self, grid: &GridConfig<F>) -> Result<(), PhysicsError> {
        if grid.mass_count() > self.config().mass_capacity {
            return Err(PhysicsError::MassCapacityExceeded {
                capacity: self.config().mass_capacity,
            });
        }
        if grid.spring_count() > self.config().spring_capacity {
            return Err(PhysicsError::SpringCapacityExceeded {
                capacity: self.config().spring_capacity,
            });
        }

        self.clear();
        let force_capacity = self.config().force_capacity;

        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let offset = Vec2::new(
                    F::from_f32(col as f32) * grid.cell_size,
                    F::from_f32(row as f32) * grid.cell_size,
                );
                let position = grid.origin + offset;
                let mass = if row == 0 {
                    Mass::fixed(position, grid.mass)
                } else {
                    Mass::new(position, grid.mass)
                };
                self.add_mass(mass.with_force_capacity(force_capacity))?;
            }
        }

        // Horizontal structural springs: (col, col + 1).
        for row in 0..grid.rows {
            for col in 0..grid.cols.saturating_sub(1) {
                self.add_spring(Spring::new(
                    grid.index(col, row),
                    grid.index(col + 1, row),
                    grid.cell_size,
                    grid.stiffness,
                    grid.damping,
                ))?;
            }
        }

        // Vertical structural springs: (row, row + 1).
        for row in 0..grid.rows.saturating_sub(1) {
            for col in 0..grid.cols {
                self.add_spring(Spring::new(
                    grid.index(col, row),
                    grid.index(col, row + 1),
                    grid.cell_size,
                    grid.stiffness,
                    grid.damping,
                ))?;
            }
        }

        Ok(())
    }
}
