//! Physical description of the problem
//!
//! This module provides the spatial grid, the concentration field and the
//! trait every physical model implements.
//!
//! # Core Concepts
//!
//! - **Grid**: `nx = ceil(Lx/dx)` evenly spaced points over `[0, Lx)`
//! - **Concentration field**: one value per grid point
//! - **Physical model**: computes dC/dt at a given field (the equations)
//!
//! # Architecture
//!
//! Physical models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to advance them (numerics)
//!
//! # Example
//!
//! ```rust
//! use diffuse_rs::physics::{ConcentrationField, Grid};
//!
//! let grid = Grid::new(300.0, 0.5).unwrap();
//! let field = ConcentrationField::uniform(grid.len(), 0.0);
//! assert_eq!(field.len(), 600);
//! ```

pub mod field;
pub mod grid;
pub mod traits;

pub use field::ConcentrationField;
pub use grid::Grid;
pub use traits::PhysicalModel;
