//! Export of simulation results
//!
//! # Architecture
//!
//! The [`Exporter`] trait abstracts the export format. Each format is an
//! independent implementation in its own sub-module, so adding a format means
//! adding a file.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use diffuse_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // Final profile: columns x, C
//! exporter.export_profile(&result, &grid, "final.csv")?;
//!
//! // Every recorded snapshot: columns x, C(t=...), C(t=...), ...
//! exporter.export_snapshots(&result, &grid, "snapshots.csv")?;
//! ```

pub mod csv;

pub use csv::{
    CsvConfig, CsvError, CsvExporter, CsvMetadata, export_profile_csv, export_snapshots_csv,
};

use crate::physics::Grid;
use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the caller
/// can react precisely to the failure.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Exports the final state of `result` against the grid coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid or the state does not match
    /// the grid.
    fn export_profile(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Exports every recorded snapshot, one column per recorded time.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is invalid, the trajectory is empty, or a
    /// snapshot does not match the grid.
    fn export_snapshots(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        path: &str,
    ) -> Result<(), Self::Error>;
}
