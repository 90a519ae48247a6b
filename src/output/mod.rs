//! Output module for simulation results
//!
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! Output is presentational only: nothing here feeds back into the stepper.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use diffuse_rs::output::{plot_initial_and_final, CsvExporter, Exporter};
//!
//! plot_initial_and_final(&result, &grid, "initial.png", "final.png")?;
//! CsvExporter::default().export_profile(&result, &grid, "final.csv")?;
//! ```
//!
//! Both sub-modules accept plain `&[f64]` slices in their free functions.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    PlotConfig, plot_initial_and_final, plot_profile, plot_profile_comparison,
    plot_profile_evolution,
};

pub use export::{CsvConfig, CsvExporter, Exporter, export_profile_csv};
