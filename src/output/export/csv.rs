//! CSV export of diffusion profiles
//!
//! Compatible with spreadsheets, pandas, gnuplot and most analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: export from `&[f64]` slices
//! - **Metadata support**: optional `#` header with run parameters and a timestamp
//! - **Customizable**: delimiter, precision, decimal separator
//! - **Snapshots**: one column per recorded time
//! - **Validation**: empty data, mismatched lengths, NaN / infinity
//!
//! # Quick Examples
//!
//! ## Single Profile
//!
//! ```rust,ignore
//! use diffuse_rs::output::export::export_profile_csv;
//!
//! export_profile_csv(grid.coordinates(), result.final_state.as_slice(), "final.csv", None)?;
//! ```
//!
//! **Output** (`final.csv`):
//! ```csv
//! x,C
//! 0.000000,500.000000
//! 0.500000,499.999812
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use diffuse_rs::output::export::{CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_parameters(&parameters));
//! ```
//!
//! **Output**:
//! ```csv
//! # Diffusion Simulation Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Model: Step Diffusion (1D FTCS)
//! # Diffusivity: 100
//! # Spacing: 0.5
//! # Time Step: 0.00125
//! # Time Steps: 5000
//! #
//! x,C
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use super::Exporter;
use crate::models::DiffusionParameters;
use crate::physics::Grid;
use crate::solver::SimulationResult;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised by CSV export
#[derive(Debug, Error)]
pub enum CsvError {
    /// Nothing to write
    #[error("Empty data: {0}")]
    EmptyData(&'static str),

    /// A column does not have the expected number of rows
    #[error("Data length mismatch in '{column}': expected {expected} rows, got {found}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    /// NaN or infinity in a column
    #[error("Invalid data: NaN or Inf in '{column}' at row {row}")]
    NonFinite { column: String, row: usize },

    /// File creation or write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use diffuse_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.position_header, "x");
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the position column (default: "x")
    pub position_header: String,

    /// Header of the concentration column (default: "C")
    pub concentration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            position_header: "x".to_string(),
            concentration_header: "C".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self { delimiter: ';', decimal_separator: ',', ..Default::default() }
    }

    /// High precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self { precision: 12, ..Default::default() }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set end up in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name
    pub model_name: Option<String>,

    /// Solver name (e.g., "FTCS", "Forward Euler")
    pub solver_name: Option<String>,

    /// Diffusivity D
    pub diffusivity: Option<f64>,

    /// Grid spacing dx
    pub spacing: Option<f64>,

    /// Time step dt
    pub time_step: Option<f64>,

    /// Number of time steps
    pub time_steps: Option<usize>,

    /// Simulated time nt·dt
    pub total_time: Option<f64>,

    /// r = D·dt/dx²
    pub diffusion_number: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata from model / solver names and time axis
    pub fn from_simulation(model: &str, solver: &str, total_time: f64, time_steps: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            solver_name: Some(solver.to_string()),
            total_time: Some(total_time),
            time_steps: Some(time_steps),
            ..Default::default()
        }
    }

    /// Metadata from a parameter record
    pub fn from_parameters(parameters: &DiffusionParameters) -> Self {
        Self {
            diffusivity: Some(parameters.diffusivity),
            spacing: Some(parameters.spacing),
            time_step: Some(parameters.time_step),
            time_steps: Some(parameters.time_steps),
            total_time: Some(parameters.total_time()),
            diffusion_number: Some(parameters.diffusion_number()),
            ..Default::default()
        }
    }

    /// Builder pattern: set model name
    pub fn with_model(mut self, model: &str) -> Self {
        self.model_name = Some(model.to_string());
        self
    }

    /// Builder pattern: set solver name
    pub fn with_solver(mut self, solver: &str) -> Self {
        self.solver_name = Some(solver.to_string());
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(out, "# Diffusion Simulation Data")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(d) = metadata.diffusivity {
        writeln!(out, "# Diffusivity: {}", d)?;
    }
    if let Some(dx) = metadata.spacing {
        writeln!(out, "# Spacing: {}", dx)?;
    }
    if let Some(dt) = metadata.time_step {
        writeln!(out, "# Time Step: {}", dt)?;
    }
    if let Some(nt) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", nt)?;
    }
    if let Some(total_time) = metadata.total_time {
        writeln!(out, "# Total Time: {}", total_time)?;
    }
    if let Some(r) = metadata.diffusion_number {
        writeln!(out, "# Diffusion Number: {}", r)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Check one column against the expected row count and for non-finite values
fn check_column(name: &str, values: &[f64], rows: usize) -> Result<(), CsvError> {
    if values.len() != rows {
        return Err(CsvError::LengthMismatch {
            column: name.to_string(),
            expected: rows,
            found: values.len(),
        });
    }
    if let Some(row) = values.iter().position(|v| !v.is_finite()) {
        return Err(CsvError::NonFinite { column: name.to_string(), row });
    }
    Ok(())
}

/// Header, then one row per position: x, then each column
fn write_table<W: Write>(
    out: &mut W,
    positions: &[f64],
    headers: &[String],
    columns: &[&[f64]],
    config: &CsvConfig,
) -> Result<(), CsvError> {
    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(out, metadata)?;
    }

    write!(out, "{}", config.position_header)?;
    for header in headers {
        write!(out, "{}{}", config.delimiter, header)?;
    }
    writeln!(out)?;

    for (row, x) in positions.iter().enumerate() {
        write!(out, "{}", format_number(*x, config))?;
        for column in columns {
            write!(out, "{}{}", config.delimiter, format_number(column[row], config))?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one profile C(x) to CSV
///
/// Two columns: position and concentration.
///
/// # Errors
///
/// - Empty data
/// - Mismatched lengths
/// - NaN or Inf values
/// - File creation errors
pub fn export_profile_csv(
    positions: &[f64],
    concentration: &[f64],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if positions.is_empty() {
        return Err(CsvError::EmptyData("positions must not be empty"));
    }

    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    check_column(&config.position_header, positions, positions.len())?;
    check_column(&config.concentration_header, concentration, positions.len())?;

    let mut out = BufWriter::new(File::create(output_path)?);
    write_table(
        &mut out,
        positions,
        &[config.concentration_header.clone()],
        &[concentration],
        config,
    )
}

/// Export several profiles sampled on the same positions
///
/// One column per profile, headed `C(t=<time>)`.
///
/// # Errors
///
/// As [`export_profile_csv`], plus a mismatch between `times` and `profiles`.
pub fn export_snapshots_csv(
    positions: &[f64],
    times: &[f64],
    profiles: &[&[f64]],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    if positions.is_empty() {
        return Err(CsvError::EmptyData("positions must not be empty"));
    }
    if profiles.is_empty() {
        return Err(CsvError::EmptyData("no profiles to export"));
    }
    if times.len() != profiles.len() {
        return Err(CsvError::LengthMismatch {
            column: "time".to_string(),
            expected: profiles.len(),
            found: times.len(),
        });
    }

    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    check_column(&config.position_header, positions, positions.len())?;

    let headers: Vec<String> = times
        .iter()
        .map(|t| format!("{}(t={})", config.concentration_header, format_number(*t, config)))
        .collect();

    for (header, profile) in headers.iter().zip(profiles) {
        check_column(header, profile, positions.len())?;
    }

    let mut out = BufWriter::new(File::create(output_path)?);
    write_table(&mut out, positions, &headers, profiles, config)
}

// =============================================================================
// Exporter
// =============================================================================

/// [`Exporter`] writing CSV files
///
/// # Example
///
/// ```rust,ignore
/// use diffuse_rs::output::export::{CsvExporter, Exporter};
///
/// let exporter = CsvExporter::default();
/// exporter.export_profile(&result, &grid, "final.csv")?;
/// exporter.export_snapshots(&result, &grid, "snapshots.csv")?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    /// Format options used for every file
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Exporter with a custom configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_profile(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        path: &str,
    ) -> Result<(), Self::Error> {
        export_profile_csv(
            grid.coordinates(),
            result.final_state.as_slice(),
            path,
            Some(&self.config),
        )
    }

    fn export_snapshots(
        &self,
        result: &SimulationResult,
        grid: &Grid,
        path: &str,
    ) -> Result<(), Self::Error> {
        let profiles: Vec<&[f64]> =
            result.state_trajectory.iter().map(|s| s.as_slice()).collect();

        export_snapshots_csv(
            grid.coordinates(),
            &result.time_points,
            &profiles,
            path,
            Some(&self.config),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_number() {
        let config = CsvConfig::default();
        assert_eq!(format_number(0.5, &config), "0.500000");

        let european = CsvConfig::european();
        assert_eq!(format_number(0.5, &european), "0,500000");

        let coarse = CsvConfig::default().precision(1);
        assert_eq!(format_number(499.96, &coarse), "500.0");
    }

    #[test]
    fn test_write_table_in_memory() {
        let mut buffer: Vec<u8> = Vec::new();
        let config = CsvConfig::default().precision(1);
        let column: &[f64] = &[500.0, 250.0];

        write_table(&mut buffer, &[0.0, 0.5], &["C".to_string()], &[column], &config).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "x,C\n0.0,500.0\n0.5,250.0\n");
    }

    #[test]
    fn test_metadata_header() {
        let mut buffer: Vec<u8> = Vec::new();
        let metadata = CsvMetadata::from_parameters(&DiffusionParameters::default())
            .with_model("Step Diffusion")
            .with_solver("FTCS");

        write_metadata_header(&mut buffer, &metadata).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Diffusion Simulation Data\n# Generated: "));
        assert!(text.contains("# Model: Step Diffusion"));
        assert!(text.contains("# Solver: FTCS"));
        assert!(text.contains("# Diffusivity: 100"));
        assert!(text.contains("# Time Steps: 5000"));
        assert!(text.ends_with("#\n"));
    }

    #[test]
    fn test_export_profile_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_profile_csv(&[0.0, 1.0, 2.0], &[500.0, 250.0, 0.0], path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "x,C");
        assert_eq!(lines[2], "1.000000,250.000000");
    }

    #[test]
    fn test_export_profile_validation() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        assert!(matches!(
            export_profile_csv(&[], &[], path, None),
            Err(CsvError::EmptyData(_))
        ));
        assert!(matches!(
            export_profile_csv(&[0.0, 1.0], &[1.0], path, None),
            Err(CsvError::LengthMismatch { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            export_profile_csv(&[0.0, 1.0], &[1.0, f64::NAN], path, None),
            Err(CsvError::NonFinite { row: 1, .. })
        ));
    }

    #[test]
    fn test_export_snapshots_headers() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let config = CsvConfig::default().precision(2);
        let initial: &[f64] = &[1.0, 0.0, 0.0];
        let later: &[f64] = &[1.0, 0.5, 0.0];

        export_snapshots_csv(&[0.0, 1.0, 2.0], &[0.0, 0.5], &[initial, later], path, Some(&config))
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, "x,C(t=0.00),C(t=0.50)");
    }

    #[test]
    fn test_export_snapshots_time_mismatch() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let profile: &[f64] = &[1.0, 2.0];

        let error =
            export_snapshots_csv(&[0.0, 1.0], &[0.0], &[profile, profile], path, None).unwrap_err();
        assert!(matches!(error, CsvError::LengthMismatch { .. }));
    }

    #[test]
    fn test_io_error_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let error =
            export_profile_csv(&[0.0, 1.0], &[1.0, 2.0], path.to_str().unwrap(), None).unwrap_err();
        assert!(matches!(error, CsvError::Io(_)));
    }
}
