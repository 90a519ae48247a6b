//! Domain boundaries for a 1-D time-dependent problem
//!
//! Holds the temporal boundary (the initial field) and the two spatial
//! boundaries. Only Dirichlet conditions exist here: the end-point values of
//! the initial field are held fixed for the whole run.

use std::fmt;

use crate::error::SimulationError;
use crate::physics::{ConcentrationField, Grid};

// =================================================================================================
// Domain Boundaries
// =================================================================================================

/// Initial condition plus fixed left/right values
///
/// # Example
///
/// ```rust
/// use diffuse_rs::physics::ConcentrationField;
/// use diffuse_rs::solver::DomainBoundaries;
///
/// let initial = ConcentrationField::from_vec(vec![500.0, 500.0, 0.0, 0.0]);
/// let boundaries = DomainBoundaries::dirichlet(initial);
///
/// assert_eq!(boundaries.left(), 500.0);
/// assert_eq!(boundaries.right(), 0.0);
/// assert_eq!(boundaries.points(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DomainBoundaries {
    /// C(0, t), fixed
    left: f64,

    /// C(x_last, t), fixed
    right: f64,

    /// C(x, 0)
    initial: ConcentrationField,
}

impl DomainBoundaries {
    /// Dirichlet boundaries taken from the end points of `initial`
    ///
    /// An empty field gives NaN boundary values, which
    /// [`validate`](Self::validate) rejects.
    pub fn dirichlet(initial: ConcentrationField) -> Self {
        let left = initial.left().unwrap_or(f64::NAN);
        let right = initial.right().unwrap_or(f64::NAN);
        Self { left, right, initial }
    }

    /// Initial field (temporal boundary at t = 0)
    pub fn initial_condition(&self) -> &ConcentrationField {
        &self.initial
    }

    /// Fixed value at the first point
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Fixed value at the last point
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Number of grid points covered
    pub fn points(&self) -> usize {
        self.initial.len()
    }

    /// Check the boundaries can drive a stepper
    ///
    /// # Errors
    ///
    /// - fewer than 3 points → [`SimulationError::DegenerateGrid`]
    /// - non-finite initial value → [`SimulationError::InvalidScenario`]
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.points() < Grid::MIN_POINTS {
            return Err(SimulationError::DegenerateGrid { points: self.points() });
        }

        if let Some((index, value)) = self.initial.first_non_finite() {
            return Err(SimulationError::InvalidScenario(format!(
                "Initial condition is not finite at index {}: {}",
                index, value
            )));
        }

        Ok(())
    }
}

impl fmt::Display for DomainBoundaries {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Dirichlet [left = {}, right = {}] over {} points",
            self.left,
            self.right,
            self.points()
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
