//! Error type shared by parameter validation and the solvers
//!
//! Two families of failure exist:
//!
//! - **Precondition violations** are detected before the first time step
//!   (non-positive diffusivity, spacing or time step, a time step above the
//!   explicit stability limit, a grid without interior points).
//! - **Numerical failures** are detected while stepping (NaN or infinite
//!   values in a stored state).
//!
//! Output modules keep their own error types (see [`crate::output`]).

use thiserror::Error;

/// Errors raised while configuring or running a diffusion simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Diffusivity D must be strictly positive
    #[error("Diffusivity must be positive, got {0}")]
    NonPositiveDiffusivity(f64),

    /// Grid spacing dx must be strictly positive
    #[error("Grid spacing must be positive, got {0}")]
    NonPositiveSpacing(f64),

    /// Domain length Lx must be strictly positive
    #[error("Domain length must be positive, got {0}")]
    NonPositiveLength(f64),

    /// Time step dt must be strictly positive
    #[error("Time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    /// A scalar parameter is NaN or infinite
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// dt exceeds the explicit scheme bound dx²/(2D)
    #[error(
        "Time step {dt} exceeds the explicit stability limit dx²/(2D) = {limit}. \
         Reduce the time step or coarsen the grid."
    )]
    UnstableTimeStep { dt: f64, limit: f64 },

    /// Fewer than 3 grid points: no interior point to update
    #[error("Grid has {points} point(s); at least 3 are needed to have an interior")]
    DegenerateGrid { points: usize },

    /// `Lx / dx` asks for more points than a grid may hold
    #[error("Grid of length {length} with spacing {spacing} needs more than {max} points")]
    GridTooLarge { length: f64, spacing: f64, max: usize },

    /// Solver configuration is not usable
    #[error("Invalid solver configuration: {0}")]
    InvalidConfiguration(String),

    /// Scenario (model + boundaries) is inconsistent
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// The solver cannot integrate this kind of model
    #[error("{solver} cannot integrate model '{model}': {reason}")]
    UnsupportedModel {
        solver: &'static str,
        model: String,
        reason: &'static str,
    },

    /// NaN found in a state
    #[error(
        "NaN detected in concentration at step {step} (index {index}). \
         This indicates numerical instability."
    )]
    NotANumber { step: usize, index: usize },

    /// Infinity found in a state
    #[error(
        "Infinity detected in concentration at step {step} (index {index}). \
         This indicates numerical overflow."
    )]
    Overflow { step: usize, index: usize },
}

impl SimulationError {
    /// True for errors raised before stepping starts
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            SimulationError::NotANumber { .. } | SimulationError::Overflow { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstable_message_names_limit() {
        let error = SimulationError::UnstableTimeStep { dt: 0.002, limit: 0.00125 };
        let message = error.to_string();
        assert!(message.contains("0.002"));
        assert!(message.contains("0.00125"));
        assert!(error.is_precondition());
    }

    #[test]
    fn test_numerical_failures_are_not_preconditions() {
        let nan = SimulationError::NotANumber { step: 3, index: 7 };
        let inf = SimulationError::Overflow { step: 3, index: 7 };

        assert!(nan.to_string().contains("NaN"));
        assert!(inf.to_string().contains("Infinity"));
        assert!(!nan.is_precondition());
        assert!(!inf.is_precondition());
    }

    #[test]
    fn test_degenerate_grid_message() {
        let error = SimulationError::DegenerateGrid { points: 2 };
        assert_eq!(
            error.to_string(),
            "Grid has 2 point(s); at least 3 are needed to have an interior"
        );
    }

    #[test]
    fn test_grid_too_large_message() {
        let error = SimulationError::GridTooLarge { length: 1e30, spacing: 1e-10, max: 1 << 28 };
        let message = error.to_string();

        assert!(message.contains("1000000000000000000000000000000"));
        assert!(message.contains(&(1usize << 28).to_string()));
        assert!(error.is_precondition());
    }
}
