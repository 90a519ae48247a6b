//! Visualization of diffusion results
//!
//! This module plots concentration profiles with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (C against x)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use diffuse_rs::output::visualization::{plot_initial_and_final, plot_profile, PlotConfig};
//!
//! let result = FtcsSolver::new().run(&parameters)?;
//! let grid = parameters.grid()?;
//!
//! // "Initial profile" / "Final profile", axes "x" and "C"
//! plot_initial_and_final(&result, &grid, "initial.png", "final.png")?;
//!
//! // Or with custom config
//! let config = PlotConfig::profile("Steady state");
//! plot_profile(grid.coordinates(), steady.as_slice(), "steady.svg", Some(&config))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One profile | `plot_profile` |
//! | First and last state of a run | `plot_initial_and_final` |
//! | Compare arbitrary profiles | `plot_profile_comparison` |
//! | Snapshots over time | `plot_profile_evolution` |

pub mod config;
pub mod profile;

pub use config::{IntoOptionalTitle, NO_TITLE, PlotConfig};

pub use profile::{
    FINAL_PROFILE_TITLE, INITIAL_PROFILE_TITLE, plot_initial_and_final, plot_profile,
    plot_profile_comparison, plot_profile_evolution,
};
