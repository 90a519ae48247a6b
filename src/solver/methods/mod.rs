//! Numerical methods for the diffusion equation
//!
//! This module contains concrete implementations of the [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! - **[`FtcsSolver`]**: Forward-Time Central-Space
//!   - Order: first in time, second in space
//!   - Cost: one stencil sweep per step, two buffers swapped in place
//!   - Use: **production runs**; needs a model exposing a diffusion number
//!
//! - **[`EulerSolver`]**: forward Euler on the method-of-lines system
//!   - Order: first in time
//!   - Cost: one `compute_physics` call (one allocation) per step
//!   - Use: any [`PhysicalModel`](crate::physics::PhysicalModel); reference
//!     for cross-checking FTCS
//!
//! For the step-diffusion model both methods compute the same update; they
//! differ only in rounding.
//!
//! # Performance Considerations
//!
//! The FTCS sweep uses Rayon (feature `parallel`) once the interior exceeds
//! [`parallel_threshold()`](crate::solver::parallel_threshold).

pub mod euler;
pub mod ftcs;

// Re-exports for convenience
pub use euler::EulerSolver;
pub use ftcs::{FtcsSolver, ftcs_step};
