//! diffuse-rs: one-dimensional diffusion with an explicit FTCS scheme
//!
//! Simulates ∂C/∂t = D·∂²C/∂x² on a uniform grid, starting from a step
//! profile, with both end values held fixed. The core is a double-buffered
//! Forward-Time Central-Space stepper.
//!
//! # Architecture
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - Numerical solvers provide methods (how to solve)
//!
//! 2. **Validated configuration**
//!    - All scalar inputs live in one [`DiffusionParameters`](models::DiffusionParameters) record
//!    - The explicit stability bound `dt ≤ dx²/(2D)` is checked before any step
//!
//! # Quick Start
//!
//! ```rust
//! use diffuse_rs::prelude::*;
//!
//! // D = 100, Lx = 300, dx = 0.5, dt = 0.00125, C = 500 | 0
//! let parameters = DiffusionParameters::default().with_time_steps(200);
//!
//! let result = FtcsSolver::new().run(&parameters)?;
//!
//! // Boundary values never move
//! assert_eq!(result.final_state.left(), Some(500.0));
//! assert_eq!(result.final_state.right(), Some(0.0));
//!
//! // Only the initial and final states are kept
//! assert_eq!(result.len(), 2);
//! # Ok::<(), SimulationError>(())
//! ```
//!
//! # Modules
//!
//! - [`physics`]: grid, concentration field, model trait
//! - [`models`]: step-diffusion model, parameters, initial profiles
//! - [`solver`]: scenario, configuration, FTCS and Euler solvers
//! - [`output`]: plots and CSV export
//! - [`error`]: error type
//!
//! # Features
//!
//! - `parallel`: run large stencil sweeps on the Rayon thread pool

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use diffuse_rs::prelude::*;
    //! ```
    pub use crate::error::SimulationError;
    pub use crate::models::{DiffusionParameters, InitialProfile, StepDiffusion};
    pub use crate::physics::{ConcentrationField, Grid, PhysicalModel};
    pub use crate::solver::{
        DomainBoundaries, EulerSolver, FtcsSolver, Recording, Scenario, SimulationResult, Solver,
        SolverConfiguration, SolverType,
    };
}
