//! Step Diffusion with Fixed Ends
//!
//! ∂C/∂t = D·∂²C/∂x²
//!
//! - Initial state: C = 500 for x ≤ Lx/2, C = 0 beyond
//! - Boundaries: C(0) = 500, C(last) = 0 for all t
//! - Scheme: FTCS at r = 0.5 (the stability limit)
//!
//! Writes the initial and final profiles as PNG plus every 500th step as CSV
//! to the system temp directory.
//!
//! ```bash
//! cargo run --release --example step_diffusion
//! RUST_LOG=debug cargo run --release --example step_diffusion
//! ```

use diffuse_rs::{
    models::{DiffusionParameters, StepDiffusion},
    output::export::{CsvConfig, CsvExporter, CsvMetadata, Exporter},
    output::visualization::{PlotConfig, plot_initial_and_final, plot_profile_comparison},
    solver::{FtcsSolver, Recording, Scenario, Solver},
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let parameters = DiffusionParameters::default();
    parameters.validate()?;
    let grid = parameters.grid()?;

    log::info!("=== Step Diffusion (1D FTCS) ===");
    log::info!(
        "D = {}, Lx = {}, dx = {} ({} points)",
        parameters.diffusivity,
        parameters.length,
        parameters.spacing,
        grid.len()
    );
    log::info!(
        "dt = {} (limit {}), r = {}, {} steps → t = {}",
        parameters.time_step,
        parameters.stability_limit(),
        parameters.diffusion_number(),
        parameters.time_steps,
        parameters.total_time()
    );

    let scenario = Scenario::from_parameters(&parameters)?;
    let config = parameters
        .solver_configuration()
        .with_recording(Recording::Every(500));

    let start = std::time::Instant::now();
    let result = FtcsSolver::new().solve(&scenario, &config)?;
    log::info!(
        "Solved in {:.3}s, {} snapshots",
        start.elapsed().as_secs_f64(),
        result.len()
    );

    let c = &result.final_state;
    log::info!("Final field: {}", c);
    log::info!("C(x=0) = {:?}, C(x=last) = {:?}", c.left(), c.right());
    if let Some(mid) = grid.index_of(grid.midpoint())
        && let Some(right_of_mid) = c.get(mid + 1)
    {
        log::info!("C at the former jump: {:.4} | {:.4}", c[mid], right_of_mid);
    }

    let steady = StepDiffusion::new(parameters)?.linear_steady_state();
    log::info!("max |C - C∞| = {:.4}", c.max_abs_difference(&steady));

    // ====== Output ======

    let out_dir = std::env::temp_dir();
    let path = |name: &str| out_dir.join(name).to_string_lossy().into_owned();

    let initial_path = path("step_diffusion_initial.png");
    let final_path = path("step_diffusion_final.png");
    plot_initial_and_final(&result, &grid, &initial_path, &final_path)?;
    log::info!("Plots: {} and {}", initial_path, final_path);

    let comparison_path = path("step_diffusion_steady.png");
    plot_profile_comparison(
        vec![
            ("FTCS", grid.coordinates(), c.as_slice()),
            ("Linear steady state", grid.coordinates(), steady.as_slice()),
        ],
        &comparison_path,
        Some(&PlotConfig::profile("Final profile vs steady state")),
    )?;
    log::info!("Comparison: {}", comparison_path);

    let csv_path = path("step_diffusion_snapshots.csv");
    let metadata = CsvMetadata::from_parameters(&parameters)
        .with_model(scenario.get_model_name())
        .with_solver("FTCS");
    CsvExporter::new(CsvConfig::default().with_metadata(metadata))
        .export_snapshots(&result, &grid, &csv_path)?;
    log::info!("Snapshots: {}", csv_path);

    Ok(())
}
