//! Properties of the FTCS stepper on the step-diffusion problem
//!
//! Initial condition, fixed boundaries, mass bookkeeping, the maximum
//! principle and the stability bound, checked through the public API.

use approx::assert_relative_eq;

use diffuse_rs::error::SimulationError;
use diffuse_rs::models::{DiffusionParameters, StepDiffusion};
use diffuse_rs::physics::PhysicalModel;
use diffuse_rs::physics::Grid;
use diffuse_rs::solver::{FtcsSolver, Recording, Scenario, SimulationResult, Solver, ftcs_step};

mod common;
use common::{OpaqueDiffusion, boundary_flux, create_simple_scenario};

/// Solve `parameters` keeping the state after every step
fn run_every_step(parameters: &DiffusionParameters) -> SimulationResult {
    let scenario = Scenario::from_parameters(parameters).unwrap();
    let config = parameters.solver_configuration().with_recording(Recording::EveryStep);
    FtcsSolver::new().solve(&scenario, &config).unwrap()
}

// =================================================================================================
// Initialization
// =================================================================================================

#[test]
fn test_default_initial_profile() {
    let model = StepDiffusion::new(DiffusionParameters::default()).unwrap();
    let initial = model.setup_initial_state();

    assert_eq!(initial.len(), 600);

    // x_300 = 150 = Lx/2 belongs to the left plateau
    for i in 0..=300 {
        assert_eq!(initial[i], 500.0, "index {}", i);
    }
    for i in 301..600 {
        assert_eq!(initial[i], 0.0, "index {}", i);
    }

    assert_relative_eq!(model.grid().coordinates()[300], 150.0);
    assert_relative_eq!(model.grid().last_coordinate(), 299.5);
}

#[test]
fn test_uneven_domain_rounds_point_count_up() {
    // 10 / 3 → ceil = 4 points: 0, 3, 6, 9
    let parameters = DiffusionParameters::default()
        .with_domain(10.0, 3.0)
        .with_diffusion_number(0.25);
    let model = StepDiffusion::new(parameters).unwrap();

    assert_eq!(model.points(), 4);
    assert_relative_eq!(model.grid().last_coordinate(), 9.0);

    let initial = model.setup_initial_state();
    assert_eq!(initial.as_slice(), &[500.0, 500.0, 0.0, 0.0]);
}

// =================================================================================================
// First Step
// =================================================================================================

#[test]
fn test_first_step_splits_the_jump() {
    let parameters = DiffusionParameters::default().with_time_steps(1);
    let result = FtcsSolver::new().run(&parameters).unwrap();
    let c = &result.final_state;

    // r = 0.5: both points around the jump land on the mean
    assert_relative_eq!(c[300], 250.0, epsilon = 1e-9);
    assert_relative_eq!(c[301], 250.0, epsilon = 1e-9);

    // Everything else is untouched
    assert_eq!(c[299], 500.0);
    assert_eq!(c[302], 0.0);
    assert_eq!(c[0], 500.0);
    assert_eq!(c[599], 0.0);
}

#[test]
fn test_default_run_stores_only_endpoints() {
    let parameters = DiffusionParameters::default();
    let result = FtcsSolver::new().run(&parameters).unwrap();

    // 5000 steps, yet only t = 0 and t = nt·dt are kept
    assert_eq!(result.len(), 2);
    assert_eq!(result.time_points[0], 0.0);
    assert_relative_eq!(result.time_points[1], 6.25, epsilon = 1e-9);
    assert_eq!(result.state_trajectory[1], result.final_state);
    assert_eq!(result.state_trajectory[0][300], 500.0);
}

#[test]
fn test_step_reads_only_previous_values() {
    // An in-place sweep would feed the updated C[1] into C[2]
    let current = [1.0, 0.0, 0.0, 0.0, 0.0];
    let mut next = [0.0; 5];

    ftcs_step(&current, &mut next, 0.5);

    assert_eq!(next, [1.0, 0.5, 0.0, 0.0, 0.0]);
}

// =================================================================================================
// Boundaries
// =================================================================================================

#[test]
fn test_boundaries_hold_for_every_step() {
    let parameters = DiffusionParameters::default()
        .with_domain(30.0, 0.5)
        .with_time_steps(400);
    let result = run_every_step(&parameters);

    assert_eq!(result.len(), 401);
    for (step, state) in result.state_trajectory.iter().enumerate() {
        assert_eq!(state.left(), Some(500.0), "left boundary at step {}", step);
        assert_eq!(state.right(), Some(0.0), "right boundary at step {}", step);
    }
}

#[test]
fn test_custom_boundary_values() {
    let parameters = DiffusionParameters::default()
        .with_domain(40.0, 1.0)
        .with_diffusion_number(0.4)
        .with_boundary_values(-3.0, 7.0)
        .with_time_steps(50);
    let result = FtcsSolver::new().run(&parameters).unwrap();

    assert_eq!(result.final_state.left(), Some(-3.0));
    assert_eq!(result.final_state.right(), Some(7.0));
    assert!(result.final_state.min() >= -3.0 - 1e-9);
    assert!(result.final_state.max() <= 7.0 + 1e-9);
}

// =================================================================================================
// Mass Bookkeeping
// =================================================================================================

#[test]
fn test_total_changes_only_through_boundary_flux() {
    let parameters = DiffusionParameters::default()
        .with_domain(20.0, 1.0)
        .with_diffusion_number(0.4)
        .with_time_steps(300);
    let r = parameters.diffusion_number();
    let result = run_every_step(&parameters);

    assert_eq!(result.len(), 301);
    for window in result.state_trajectory.windows(2) {
        let (before, after) = (&window[0], &window[1]);
        let expected = before.total() + boundary_flux(before, r);

        assert_relative_eq!(after.total(), expected, epsilon = 1e-8);
    }
}

#[test]
fn test_total_conserved_before_front_reaches_boundaries() {
    let parameters = DiffusionParameters::default().with_time_steps(100);
    let result = run_every_step(&parameters);

    // The stencil moves information one cell per step: after 100 steps the
    // front is still 200 cells away from either end.
    let initial_total = result.state_trajectory[0].total();
    assert_relative_eq!(initial_total, 301.0 * 500.0);

    for state in &result.state_trajectory {
        assert_relative_eq!(state.total(), initial_total, max_relative = 1e-12);
    }
}

// =================================================================================================
// Maximum Principle
// =================================================================================================

#[test]
fn test_profile_stays_monotone_and_bounded() {
    let parameters = DiffusionParameters::default()
        .with_domain(50.0, 0.5)
        .with_time_steps(2000);
    let scenario = Scenario::from_parameters(&parameters).unwrap();
    let config = parameters
        .solver_configuration()
        .with_recording(Recording::Every(250));

    let result = FtcsSolver::new().solve(&scenario, &config).unwrap();

    for state in &result.state_trajectory {
        assert!(state.min() >= -1e-9, "undershoot: {}", state);
        assert!(state.max() <= 500.0 + 1e-9, "overshoot: {}", state);

        for pair in state.as_slice().windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9, "profile is not non-increasing");
        }
    }
}

#[test]
fn test_default_scenario_stable_at_the_limit() {
    let parameters = DiffusionParameters::default();
    assert_relative_eq!(parameters.time_step, parameters.stability_limit());

    let scenario = Scenario::from_parameters(&parameters).unwrap();
    let config = parameters
        .solver_configuration()
        .with_recording(Recording::Endpoints);

    let result = FtcsSolver::new().solve(&scenario, &config).unwrap();
    let c = &result.final_state;

    assert!(c.first_non_finite().is_none());
    assert!(c.min() >= -1e-9 && c.max() <= 500.0 + 1e-9);

    // Symmetric spreading around the jump
    assert_relative_eq!(c[300] + c[301], 500.0, epsilon = 1e-3);
    assert!(c[250] > 250.0 && c[350] < 250.0);

    assert_relative_eq!(result.time_points[1], 6.25, epsilon = 1e-9);
}

// =================================================================================================
// Rejected Configurations
// =================================================================================================

#[test]
fn test_time_step_above_limit_is_rejected() {
    let parameters = DiffusionParameters::default().with_time_step(0.0013);

    match FtcsSolver::new().run(&parameters) {
        Err(SimulationError::UnstableTimeStep { dt, limit }) => {
            assert_relative_eq!(dt, 0.0013);
            assert_relative_eq!(limit, 0.00125);
        }
        other => panic!("expected UnstableTimeStep, got {:?}", other),
    }
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let cases = [
        DiffusionParameters::default().with_diffusivity(0.0),
        DiffusionParameters::default().with_domain(300.0, 0.0),
        DiffusionParameters::default().with_domain(-1.0, 0.5),
        DiffusionParameters::default().with_time_step(0.0),
        DiffusionParameters::default().with_time_steps(0),
        DiffusionParameters::default().with_boundary_values(f64::NAN, 0.0),
        DiffusionParameters::default().with_domain(1e30, 1e-10),
    ];

    for parameters in cases {
        let err = FtcsSolver::new().run(&parameters).unwrap_err();
        assert!(err.is_precondition(), "{:?} should be a precondition error", err);
    }
}

#[test]
fn test_degenerate_grid_is_rejected() {
    // 1.0 / 0.5 → 2 points, no interior
    let parameters = DiffusionParameters::default()
        .with_domain(1.0, 0.5)
        .with_diffusion_number(0.5);

    assert_eq!(
        FtcsSolver::new().run(&parameters).unwrap_err(),
        SimulationError::DegenerateGrid { points: 2 }
    );
}

#[test]
fn test_oversized_grid_is_rejected() {
    let parameters = DiffusionParameters::default().with_domain(1e30, 1e-10);

    assert!(matches!(
        FtcsSolver::new().run(&parameters).unwrap_err(),
        SimulationError::GridTooLarge { max, .. } if max == Grid::MAX_POINTS
    ));
}

#[test]
fn test_model_without_diffusion_number_is_rejected() {
    let parameters = DiffusionParameters::default().with_domain(20.0, 1.0);
    let model = StepDiffusion::new(parameters).unwrap();
    let scenario = create_simple_scenario(Box::new(OpaqueDiffusion::new(model)));

    let err = FtcsSolver::new()
        .solve(&scenario, &parameters.solver_configuration())
        .unwrap_err();

    assert!(matches!(
        err,
        SimulationError::UnsupportedModel { solver: "FTCS", .. }
    ));
}
