//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The method of lines turns the PDE into an ODE system on the grid,
//!
//! ```text
//! dC/dt = f(C)
//! ```
//!
//! where `f` is the model's [`compute_physics`](crate::physics::PhysicalModel::compute_physics).
//! Forward Euler advances it with
//!
//! ```text
//! C_{n+1} = C_n + dt * f(C_n)
//! ```
//!
//! For the three-point diffusion rate `f_i = D/dx² · (C_{i-1} − 2C_i + C_{i+1})`
//! this is exactly the FTCS update; the two solvers then differ only by
//! rounding (`dt · D/dx²` versus `r`).
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable; the model's
//!   [`stability_limit`](crate::physics::PhysicalModel::stability_limit) is enforced
//! - **Complexity**: 1 rate evaluation (1 allocation) per step
//!
//! # When to Use
//!
//! - Any model, including ones without a diffusion number
//! - Cross-checking [`FtcsSolver`](crate::solver::FtcsSolver)
//!
//! # Example
//!
//! ```rust
//! use diffuse_rs::models::DiffusionParameters;
//! use diffuse_rs::solver::{EulerSolver, Recording, Scenario, Solver};
//!
//! let parameters = DiffusionParameters::default().with_time_steps(10);
//! let scenario = Scenario::from_parameters(&parameters)?;
//!
//! let config = parameters.solver_configuration().with_recording(Recording::EveryStep);
//!
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//! assert_eq!(result.len(), 11);
//! # Ok::<(), diffuse_rs::error::SimulationError>(())
//! ```

use crate::error::SimulationError;
use crate::solver;
use crate::solver::{Scenario, SimulationResult, Solver, SolverConfiguration};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. Start with the initial field C_0
/// 2. For each time step n = 0, 1, ..., N-1:
///    - Compute physics: k = f(C_n)
///    - Update state: C_{n+1} = C_n + dt * k
///    - Check for NaN / infinity
///    - Store the state if the recording policy asks for it
/// 3. Return the trajectory
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use diffuse_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Solver for EulerSolver {
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

        if let Some(limit) = scenario.model.stability_limit() {
            solver::check_time_step(dt, limit)?;
        }

        log::info!(
            "Forward Euler: '{}' on {} points, {} steps of dt = {}",
            scenario.get_model_name(),
            scenario.conditions.points(),
            time_steps,
            dt
        );

        // ====== Step 2: Setup ======

        let mut state = scenario.conditions.initial_condition().clone();

        let capacity = recording.snapshot_count(time_steps);
        let mut time_points = Vec::with_capacity(capacity);
        let mut state_trajectory = Vec::with_capacity(capacity);

        time_points.push(0.0);
        state_trajectory.push(state.clone());

        // ====== Step 3: Time Integration ======

        for step in 1..=time_steps {
            let physics = scenario.model.compute_physics(&state);
            state.add_scaled(&physics, dt);

            solver::check_finite(&state, step)?;

            if recording.records(step, time_steps) {
                // Direct step·dt avoids accumulating rounding in t
                let t = step as f64 * dt;
                log::debug!("Forward Euler: step {} (t = {}): {}", step, t, state);

                time_points.push(t);
                state_trajectory.push(state.clone());
            }
        }

        // ====== Step 4: Build Result ======

        log::info!("Forward Euler: done, final {}", state);

        let mut result = SimulationResult::new(time_points, state_trajectory, state);
        result.add_metadata("solver", self.name());
        result.add_metadata("time steps", &time_steps.to_string());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("total time", &(time_steps as f64 * dt).to_string());
        if let Some(r) = scenario.model.diffusion_number(dt) {
            result.add_metadata("diffusion number", &r.to_string());
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{ConcentrationField, PhysicalModel};
    use crate::solver::{DomainBoundaries, Recording};

    // ====== Mock Models for Testing ======

    /// Exponential decay dy/dt = -k * y at every point
    ///
    /// Analytical solution: y(t) = y_0 * exp(-k * t)
    struct ExponentialDecay {
        points: usize,
        decay_rate: f64,
    }

    impl PhysicalModel for ExponentialDecay {
        fn points(&self) -> usize {
            self.points
        }

        fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
            state.clone() * (-self.decay_rate)
        }

        fn setup_initial_state(&self) -> ConcentrationField {
            ConcentrationField::uniform(self.points, 1.0)
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    /// Constant growth dy/dt = c
    struct ConstantGrowth {
        points: usize,
        growth_rate: f64,
    }

    impl PhysicalModel for ConstantGrowth {
        fn points(&self) -> usize {
            self.points
        }

        fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
            ConcentrationField::uniform(state.len(), self.growth_rate)
        }

        fn setup_initial_state(&self) -> ConcentrationField {
            ConcentrationField::zeros(self.points)
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    /// Rate filled with a fixed value (NaN / infinity)
    struct PoisonedModel(f64);

    impl PhysicalModel for PoisonedModel {
        fn points(&self) -> usize {
            5
        }

        fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
            ConcentrationField::uniform(state.len(), self.0)
        }

        fn setup_initial_state(&self) -> ConcentrationField {
            ConcentrationField::uniform(5, 1.0)
        }

        fn name(&self) -> &str {
            "Poisoned"
        }
    }

    fn scenario_for(model: impl PhysicalModel + 'static) -> Scenario {
        let boundaries = DomainBoundaries::dirichlet(model.setup_initial_state());
        Scenario::new(Box::new(model), boundaries)
    }

    // ====== Creation ======

    #[test]
    fn test_euler_solver_creation() {
        let solver = EulerSolver::new();
        assert_eq!(solver.name(), "Forward Euler");
        assert_eq!(EulerSolver::default().name(), "Forward Euler");
    }

    // ====== Accuracy ======

    #[test]
    fn test_euler_constant_growth() {
        // Euler is exact for a constant rate
        let scenario = scenario_for(ConstantGrowth { points: 5, growth_rate: 2.0 });
        let config = SolverConfiguration::time_evolution(10.0, 100);

        let result = EulerSolver::new().solve(&scenario, &config).unwrap();

        for value in result.final_state.as_slice() {
            assert!((value - 20.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_euler_convergence() {
        // Error should halve when dt halves (first-order convergence)
        let decay_rate: f64 = 0.5;
        let total_time = 5.0;
        let exact = (-decay_rate * total_time).exp();

        let errors: Vec<f64> = [100, 200, 400, 800]
            .iter()
            .map(|&steps| {
                let scenario = scenario_for(ExponentialDecay { points: 3, decay_rate });
                let config = SolverConfiguration::time_evolution(total_time, steps);
                let result = EulerSolver::new().solve(&scenario, &config).unwrap();
                (result.final_state[0] - exact).abs()
            })
            .collect();

        for pair in errors.windows(2) {
            let ratio = pair[0] / pair[1];
            assert!(ratio > 1.8 && ratio < 2.2, "Convergence ratio {} not first order", ratio);
        }
    }

    // ====== Trajectory ======

    #[test]
    fn test_euler_time_points() {
        let scenario = scenario_for(ConstantGrowth { points: 5, growth_rate: 1.0 });
        let total_time = 20.0;
        let time_steps = 100;
        let dt = total_time / time_steps as f64;

        let config = SolverConfiguration::time_evolution(total_time, time_steps);
        let result = EulerSolver::new().solve(&scenario, &config).unwrap();

        assert_eq!(result.time_points.len(), time_steps + 1);
        assert_eq!(result.time_points[0], 0.0);

        let final_time = *result.time_points.last().unwrap();
        assert!((final_time - total_time).abs() <= 1e-12);

        for pair in result.time_points.windows(2) {
            assert!((pair[1] - pair[0] - dt).abs() <= 1e-12);
        }
    }

    #[test]
    fn test_euler_recording_endpoints() {
        let scenario = scenario_for(ConstantGrowth { points: 3, growth_rate: 1.0 });
        let config =
            SolverConfiguration::time_evolution(1.0, 50).with_recording(Recording::Endpoints);

        let result = EulerSolver::new().solve(&scenario, &config).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.state_trajectory[1], result.final_state);
    }

    #[test]
    fn test_euler_metadata() {
        let scenario = scenario_for(ConstantGrowth { points: 3, growth_rate: 1.0 });
        let config = SolverConfiguration::time_evolution(100.0, 500);

        let result = EulerSolver::new().solve(&scenario, &config).unwrap();

        assert_eq!(result.metadata.get("solver"), Some(&"Forward Euler".to_string()));
        assert_eq!(result.metadata.get("time steps"), Some(&"500".to_string()));
        assert!(result.metadata.get("diffusion number").is_none());

        let dt: f64 = result.metadata["dt"].parse().unwrap();
        assert!((dt - 0.2).abs() < 1e-10);
    }

    // ====== Validation ======

    #[test]
    fn test_euler_detects_nan() {
        let scenario = scenario_for(PoisonedModel(f64::NAN));
        let config = SolverConfiguration::time_evolution(10.0, 10);

        let error = EulerSolver::new().solve(&scenario, &config).unwrap_err();

        assert_eq!(error, SimulationError::NotANumber { step: 1, index: 0 });
        assert!(error.to_string().contains("NaN"));
    }

    #[test]
    fn test_euler_detects_inf() {
        let scenario = scenario_for(PoisonedModel(f64::INFINITY));
        let config = SolverConfiguration::time_evolution(10.0, 10);

        let error = EulerSolver::new().solve(&scenario, &config).unwrap_err();

        assert_eq!(error, SimulationError::Overflow { step: 1, index: 0 });
        assert!(error.to_string().contains("Infinity"));
    }

    #[test]
    fn test_euler_enforces_stability_limit() {
        let parameters = crate::models::DiffusionParameters::default();
        let scenario = Scenario::from_parameters(&parameters).unwrap();
        let config = SolverConfiguration::fixed_step(2.0 * parameters.time_step, 10);

        assert!(matches!(
            EulerSolver::new().solve(&scenario, &config),
            Err(SimulationError::UnstableTimeStep { .. })
        ));
    }

    #[test]
    fn test_euler_single_step_on_step_profile() {
        let parameters = crate::models::DiffusionParameters::default().with_time_steps(1);
        let scenario = Scenario::from_parameters(&parameters).unwrap();

        let result =
            EulerSolver::new().solve(&scenario, &parameters.solver_configuration()).unwrap();

        assert_eq!(result.final_state[0], 500.0);
        assert_eq!(result.final_state[599], 0.0);
        assert!((result.final_state[300] - 250.0).abs() < 1e-9);
        assert!((result.final_state[301] - 250.0).abs() < 1e-9);
    }
}
