//! Mock physical models for testing
//!
//! These models have known analytical solutions or deliberately hide
//! capabilities, so solver behaviour can be checked in isolation.

use diffuse_rs::models::StepDiffusion;
use diffuse_rs::physics::{ConcentrationField, PhysicalModel};

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay model: dy/dt = -k*y at every point
///
/// Analytical solution: y(t) = y₀ * exp(-k*t)
pub struct ExponentialDecay {
    pub points: usize,
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(points: usize, decay_rate: f64) -> Self {
        Self { points, decay_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }
}

impl PhysicalModel for ExponentialDecay {
    fn points(&self) -> usize {
        self.points
    }

    fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
        state.clone() * (-self.decay_rate)
    }

    fn setup_initial_state(&self) -> ConcentrationField {
        ConcentrationField::uniform(self.points, 1.0)
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Opaque Diffusion
// =================================================================================================

/// Step diffusion that only exposes its rate
///
/// No diffusion number and no stability limit: the FTCS solver must refuse
/// it, the Euler solver must still integrate it.
pub struct OpaqueDiffusion {
    pub inner: StepDiffusion,
}

impl OpaqueDiffusion {
    pub fn new(inner: StepDiffusion) -> Self {
        Self { inner }
    }
}

impl PhysicalModel for OpaqueDiffusion {
    fn points(&self) -> usize {
        self.inner.points()
    }

    fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
        self.inner.compute_physics(state)
    }

    fn setup_initial_state(&self) -> ConcentrationField {
        self.inner.setup_initial_state()
    }

    fn name(&self) -> &str {
        "Opaque Diffusion"
    }
}
