//! Physical models for diffusion simulation
//!
//! All models implement the [`PhysicalModel`](crate::physics::PhysicalModel) trait.
//! Models are responsible for the physics (the semi-discrete rate dC/dt); the
//! solver is responsible for the time integration.
//!
//! # Available Models
//!
//! ## [`StepDiffusion`]: step profile between fixed boundaries
//!
//! One species diffusing along a 1-D domain from an initial step. The two end
//! points keep their initial values for the whole run. Built from a validated
//! [`DiffusionParameters`] record.
//!
//! # Initial Profiles
//!
//! [`InitialProfile`] defines C(x, t=0). The step is the default; uniform and
//! custom profiles are available for other set-ups.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod diffusion;
pub mod initial;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use diffusion::{DiffusionParameters, StepDiffusion};
pub use initial::InitialProfile;
