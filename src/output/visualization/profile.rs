//! Spatial profile plotting
//!
//! Line plots of C against x: a single profile, the initial/final pair of a
//! run, an overlay of arbitrary profiles, and the evolution of recorded
//! snapshots.
//!
//! The output format follows the file extension: `.svg` gives SVG, anything
//! else PNG.
//!
//! # Usage
//!
//! ```rust,ignore
//! use diffuse_rs::output::visualization::plot_initial_and_final;
//!
//! let result = FtcsSolver::new().run(&parameters)?;
//! plot_initial_and_final(&result, &parameters.grid()?, "initial.png", "final.png")?;
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use super::config::{NO_TITLE, PlotConfig};
use crate::physics::Grid;
use crate::solver::SimulationResult;

/// Title of the initial-profile figure
pub const INITIAL_PROFILE_TITLE: &str = "Initial profile";

/// Title of the final-profile figure
pub const FINAL_PROFILE_TITLE: &str = "Final profile";

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot one profile C(x)
///
/// # Arguments
///
/// * `x` - Grid coordinates
/// * `concentration` - Values at those coordinates
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
///
/// # Errors
///
/// Fails if the slices differ in length, hold fewer than 2 points, or if the
/// backend cannot write the file.
pub fn plot_profile(
    x: &[f64],
    concentration: &[f64],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    check_series(x, concentration)?;

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x_range = x[0]..x[x.len() - 1];
    let y_range = value_range(concentration.iter().copied());

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, x, concentration, config, x_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, x, concentration, config, x_range, y_range)
        }
    }
}

/// Implementation for single-profile plotting with concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    concentration: &[f64],
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    // Axis labels are drawn with or without grid lines
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    chart.draw_series(LineSeries::new(
        x.iter().zip(concentration.iter()).map(|(x, c)| (*x, *c)),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    root.present()?;

    Ok(())
}

/// Plot the first and last recorded states of a run as two figures
///
/// Titles are [`INITIAL_PROFILE_TITLE`] and [`FINAL_PROFILE_TITLE`]; axes are
/// labelled "x" and "C".
///
/// # Errors
///
/// Fails on an empty trajectory, or if a state does not match the grid.
pub fn plot_initial_and_final(
    result: &SimulationResult,
    grid: &Grid,
    initial_path: &str,
    final_path: &str,
) -> Result<(), Box<dyn Error>> {
    let initial = result.initial_state().ok_or("Empty trajectory")?;

    plot_profile(
        grid.coordinates(),
        initial.as_slice(),
        initial_path,
        Some(&PlotConfig::profile(INITIAL_PROFILE_TITLE)),
    )?;

    plot_profile(
        grid.coordinates(),
        result.final_state.as_slice(),
        final_path,
        Some(&PlotConfig::profile(FINAL_PROFILE_TITLE)),
    )
}

/// Plot multiple profiles on the same axes
///
/// # Arguments
///
/// * `profiles` - Vec of (label, x, concentration)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// let profiles = vec![
///     ("FTCS", x, ftcs.as_slice()),
///     ("Steady state", x, steady.as_slice()),
/// ];
/// plot_profile_comparison(profiles, "comparison.svg", None)?;
/// ```
pub fn plot_profile_comparison(
    profiles: Vec<(&str, &[f64], &[f64])>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }
    for (_, x, c) in &profiles {
        check_series(x, c)?;
    }

    let default_config = PlotConfig::evolution(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x_min = profiles.iter().map(|(_, x, _)| x[0]).fold(f64::INFINITY, f64::min);
    let x_max = profiles
        .iter()
        .map(|(_, x, _)| x[x.len() - 1])
        .fold(f64::NEG_INFINITY, f64::max);
    let y_range = value_range(profiles.iter().flat_map(|(_, _, c)| c.iter().copied()));

    match extension(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, x_min..x_max, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config, x_min..x_max, y_range)
        }
    }
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &[f64], &[f64])],
    config: &PlotConfig,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    // Axis labels are drawn with or without grid lines
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);

    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    for (idx, (label, x, concentration)) in profiles.iter().enumerate() {
        let color = config.series_color(idx);

        chart
            .draw_series(LineSeries::new(
                x.iter().zip(concentration.iter()).map(|(x, c)| (*x, *c)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot `n_snapshots` recorded states spread evenly over the trajectory
///
/// The last recorded state is always included.
///
/// # Example
///
/// ```rust,ignore
/// let config = SolverConfiguration::fixed_step(dt, 5000).with_recording(Recording::Every(500));
/// let result = FtcsSolver::new().solve(&scenario, &config)?;
/// plot_profile_evolution(&result, &grid, 6, "evolution.png", None)?;
/// ```
pub fn plot_profile_evolution(
    result: &SimulationResult,
    grid: &Grid,
    n_snapshots: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.is_empty() {
        return Err("Empty trajectory".into());
    }
    if n_snapshots == 0 {
        return Err("At least one snapshot is required".into());
    }

    let labelled: Vec<(String, &[f64])> = snapshot_indices(result.len(), n_snapshots)
        .into_iter()
        .map(|idx| {
            (
                format!("t = {:.3}", result.time_points[idx]),
                result.state_trajectory[idx].as_slice(),
            )
        })
        .collect();

    let profiles: Vec<(&str, &[f64], &[f64])> = labelled
        .iter()
        .map(|(label, c)| (label.as_str(), grid.coordinates(), *c))
        .collect();

    plot_profile_comparison(profiles, output_path, config)
}

// =================================================================================================
// Helpers
// =================================================================================================

fn extension(output_path: &str) -> &str {
    Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
}

fn check_series(x: &[f64], concentration: &[f64]) -> Result<(), Box<dyn Error>> {
    if x.len() != concentration.len() {
        return Err(format!(
            "Length mismatch: {} coordinates, {} values",
            x.len(),
            concentration.len()
        )
        .into());
    }
    if x.len() < 2 {
        return Err("At least 2 points are needed to draw a profile".into());
    }
    Ok(())
}

/// Y-axis range: always includes 0, with 10% headroom
fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .fold((0.0_f64, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let max = max.max(1e-10);
    let pad = 0.1 * (max - min);
    let low = if min < 0.0 { min - pad } else { 0.0 };
    low..(max + pad)
}

/// `count` indices spread over `0..len`, last index included
fn snapshot_indices(len: usize, count: usize) -> Vec<usize> {
    let count = count.min(len);
    if count == 1 {
        return vec![len - 1];
    }
    let mut indices: Vec<usize> = (0..count).map(|i| i * (len - 1) / (count - 1)).collect();
    indices.dedup();
    indices
}

// =================================================================================================
// Tests
// =================================================================================================
