//! Physical model trait
//!
//! A model provides the semi-discrete equations (the rate dC/dt on the grid)
//! and its initial state. It does NOT integrate them in time; that is the
//! solver's job.

use crate::physics::ConcentrationField;

// ==================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for physical models
///
/// # Responsibility
///
/// Computes the right-hand side of dC/dt = f(C) at a given state. The
/// solver decides how to advance C in time.
///
/// # Boundary Convention
///
/// Models with fixed (Dirichlet) boundary values return a zero rate at the
/// first and last point, so that any explicit integrator leaves them
/// untouched.
///
/// # Optional Capabilities
///
/// - [`stability_limit`](PhysicalModel::stability_limit): largest stable time
///   step for explicit integration. Solvers reject larger steps up front.
/// - [`diffusion_number`](PhysicalModel::diffusion_number): the three-point
///   stencil weight `D·dt/dx²`. Required by the dedicated FTCS stepper.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::physics::{ConcentrationField, PhysicalModel};
///
/// struct Frozen;
///
/// impl PhysicalModel for Frozen {
///     fn points(&self) -> usize { 3 }
///     fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
///         ConcentrationField::zeros(state.len())
///     }
///     fn setup_initial_state(&self) -> ConcentrationField {
///         ConcentrationField::uniform(3, 1.0)
///     }
///     fn name(&self) -> &str { "Frozen" }
/// }
///
/// let model = Frozen;
/// assert_eq!(model.stability_limit(), None);
/// assert_eq!(model.diffusion_number(0.1), None);
/// ```
pub trait PhysicalModel: Send + Sync {
    /// Number of spatial points
    ///
    /// Used by the scenario to check the initial field.
    fn points(&self) -> usize;

    /// Rate dC/dt at the given state
    ///
    /// Must only read `state`; every entry of the returned rate is computed
    /// from the same (old) values.
    fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField;

    /// Initial field for this model
    fn setup_initial_state(&self) -> ConcentrationField;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }

    /// Largest time step for which explicit integration stays bounded
    fn stability_limit(&self) -> Option<f64> {
        None
    }

    /// Stencil weight `r = D·dt/dx²` for a time step `dt`
    fn diffusion_number(&self, _dt: f64) -> Option<f64> {
        None
    }
}
