//! Simulation scenario definition
//!
//! A scenario combines a physical model with boundary conditions.

use crate::error::SimulationError;
use crate::models::{DiffusionParameters, StepDiffusion};
use crate::physics::traits::PhysicalModel;
use crate::solver::boundary::DomainBoundaries;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (equations)
/// - Boundary conditions (initial field and fixed end values)
///
/// The same scenario can be solved with different numerical methods.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Example
///
/// ```rust
/// use diffuse_rs::models::DiffusionParameters;
/// use diffuse_rs::solver::Scenario;
///
/// let scenario = Scenario::from_parameters(&DiffusionParameters::default()).unwrap();
/// assert!(scenario.validate().is_ok());
/// assert_eq!(scenario.conditions.left(), 500.0);
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// Conditions and boundaries
    pub conditions: DomainBoundaries,
}

impl Scenario {
    /// Create a scenario
    pub fn new(model: Box<dyn PhysicalModel>, conditions: DomainBoundaries) -> Self {
        Self { model, conditions }
    }

    /// Step-diffusion scenario: model built from `parameters`, Dirichlet
    /// boundaries taken from its initial state
    pub fn from_parameters(parameters: &DiffusionParameters) -> Result<Self, SimulationError> {
        let model = StepDiffusion::new(*parameters)?;
        let conditions = DomainBoundaries::dirichlet(model.setup_initial_state());
        Ok(Self::new(Box::new(model), conditions))
    }

    /// Check boundaries and model agree
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.conditions.validate()?;

        if self.model.points() != self.conditions.points() {
            return Err(SimulationError::InvalidScenario(format!(
                "Model '{}' has {} points but the initial condition has {}",
                self.model.name(),
                self.model.points(),
                self.conditions.points()
            )));
        }

        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("points", &self.model.points())
            .field("Boundaries / conditions", &self.conditions)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================
