//! Forward-Time Central-Space stepper
//!
//! # Mathematical Background
//!
//! For ∂C/∂t = D·∂²C/∂x² on a uniform grid, FTCS advances every interior
//! point with
//!
//! ```text
//! Cᵢⁿ⁺¹ = Cᵢⁿ + r · (Cᵢ₋₁ⁿ − 2Cᵢⁿ + Cᵢ₊₁ⁿ),      r = D·dt/dx²
//! ```
//!
//! and leaves both end points untouched (fixed Dirichlet values).
//!
//! # Synchronous Update
//!
//! All three stencil terms must be the values of step n. The stepper reads
//! from one buffer and writes to another, then swaps them: no value written
//! in step n+1 is ever read during the same step.
//!
//! ```text
//! step n:   current ──stencil──► next      swap
//! step n+1: current ──stencil──► next      swap
//! ...
//! ```
//!
//! # Characteristics
//!
//! - **Order**: O(dt) in time, O(dx²) in space
//! - **Stability**: r ≤ 1/2, i.e. dt ≤ dx²/(2D)
//! - **Memory**: two working buffers, plus requested snapshots
//!
//! # Example
//!
//! ```rust
//! use diffuse_rs::models::DiffusionParameters;
//! use diffuse_rs::solver::FtcsSolver;
//!
//! let parameters = DiffusionParameters::default().with_time_steps(10);
//! let result = FtcsSolver::new().run(&parameters)?;
//!
//! assert_eq!(result.time_points.len(), 2);
//! assert_eq!(result.final_state.right(), Some(0.0));
//! # Ok::<(), diffuse_rs::error::SimulationError>(())
//! ```

use crate::error::SimulationError;
use crate::models::DiffusionParameters;
use crate::physics::{ConcentrationField, Grid};
use crate::solver;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Single Step
// =================================================================================================

/// Apply one FTCS update from `current` into `next`
///
/// `next[0]` and `next[n-1]` are copied from `current`; every interior entry
/// is computed from `current` only. Fields shorter than 3 points have no
/// interior and are copied through unchanged.
///
/// # Panics
///
/// Panics if the two buffers have different lengths.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::solver::ftcs_step;
///
/// let current = [500.0, 500.0, 0.0, 0.0];
/// let mut next = [0.0; 4];
///
/// ftcs_step(&current, &mut next, 0.5);
/// assert_eq!(next, [500.0, 250.0, 250.0, 0.0]);
/// ```
pub fn ftcs_step(current: &[f64], next: &mut [f64], diffusion_number: f64) {
    assert_eq!(current.len(), next.len(), "Buffer lengths must match");

    let n = current.len();
    if n < Grid::MIN_POINTS {
        next.copy_from_slice(current);
        return;
    }

    next[0] = current[0];
    next[n - 1] = current[n - 1];
    update_interior(current, &mut next[1..n - 1], diffusion_number);
}

/// Stencil sweep: `interior[j]` is the new value of point `j + 1`
fn sweep(current: &[f64], interior: &mut [f64], r: f64) {
    for (out, w) in interior.iter_mut().zip(current.windows(3)) {
        *out = w[1] + r * (w[0] - 2.0 * w[1] + w[2]);
    }
}

#[cfg(not(feature = "parallel"))]
fn update_interior(current: &[f64], interior: &mut [f64], r: f64) {
    sweep(current, interior, r);
}

#[cfg(feature = "parallel")]
fn update_interior(current: &[f64], interior: &mut [f64], r: f64) {
    use rayon::prelude::*;

    if interior.len() < solver::parallel_threshold() {
        sweep(current, interior, r);
        return;
    }

    interior
        .par_iter_mut()
        .zip(current.par_windows(3))
        .for_each(|(out, w)| *out = w[1] + r * (w[0] - 2.0 * w[1] + w[2]));
}

// =================================================================================================
// FTCS Solver
// =================================================================================================

/// Double-buffered FTCS solver
///
/// # Algorithm
///
/// 1. Validate configuration, scenario and stability (`dt ≤ dx²/(2D)`)
/// 2. Copy the initial field into buffer A, allocate buffer B
/// 3. For each of the nt steps: sweep A → B, swap, store a snapshot if the
///    [`Recording`](crate::solver::Recording) policy asks for it
/// 4. Return the trajectory and the final field
///
/// # Requirements
///
/// The scenario model must provide
/// [`diffusion_number`](crate::physics::PhysicalModel::diffusion_number);
/// otherwise the solve fails with [`SimulationError::UnsupportedModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FtcsSolver;

impl FtcsSolver {
    /// Create a new FTCS solver
    pub fn new() -> Self {
        Self
    }

    /// Build the step-diffusion scenario from `parameters` and solve it
    ///
    /// Records the initial and final states only, as
    /// [`DiffusionParameters::solver_configuration`] does.
    pub fn run(&self, parameters: &DiffusionParameters) -> Result<SimulationResult, SimulationError> {
        let scenario = Scenario::from_parameters(parameters)?;
        self.solve(&scenario, &parameters.solver_configuration())
    }
}

impl Solver for FtcsSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, SimulationError> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        let dt = config.time_step();
        let time_steps = config.time_steps();
        let recording = config.recording;

        let r = scenario.model.diffusion_number(dt).ok_or_else(|| {
            SimulationError::UnsupportedModel {
                solver: "FTCS",
                model: scenario.model.name().to_string(),
                reason: "model does not provide a diffusion number",
            }
        })?;

        if let Some(limit) = scenario.model.stability_limit() {
            solver::check_time_step(dt, limit)?;
        }

        log::info!(
            "FTCS: '{}' on {} points, {} steps of dt = {} (r = {})",
            scenario.get_model_name(),
            scenario.conditions.points(),
            time_steps,
            dt,
            r
        );

        // ====== Step 2: Setup ======

        let initial = scenario.conditions.initial_condition();
        let mut current = initial.to_vec();
        let mut next = vec![0.0; current.len()];

        let capacity = recording.snapshot_count(time_steps);
        let mut time_points = Vec::with_capacity(capacity);
        let mut state_trajectory = Vec::with_capacity(capacity);

        time_points.push(0.0);
        state_trajectory.push(initial.clone());

        // ====== Step 3: Time Integration ======

        // The last state is stored after the loop, from the working buffer
        for step in 1..time_steps {
            ftcs_step(&current, &mut next, r);
            std::mem::swap(&mut current, &mut next);

            if recording.records(step, time_steps) {
                let snapshot = ConcentrationField::from_vec(current.clone());
                solver::check_finite(&snapshot, step)?;

                // t = step·dt, not accumulated
                let t = step as f64 * dt;
                log::debug!("FTCS: step {} (t = {}): {}", step, t, snapshot);

                time_points.push(t);
                state_trajectory.push(snapshot);
            }
        }

        ftcs_step(&current, &mut next, r);
        std::mem::swap(&mut current, &mut next);

        // ====== Step 4: Build Result ======

        let final_state = ConcentrationField::from_vec(current);
        solver::check_finite(&final_state, time_steps)?;

        time_points.push(time_steps as f64 * dt);
        state_trajectory.push(final_state.clone());

        log::info!("FTCS: done, final {}", final_state);

        let mut result = SimulationResult::new(time_points, state_trajectory, final_state);
        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &(time_steps as f64 * dt).to_string());
        result.add_metadata("diffusion number", &r.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "FTCS"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
