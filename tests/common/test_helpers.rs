//! Helper functions for integration tests

use diffuse_rs::models::DiffusionParameters;
use diffuse_rs::physics::{ConcentrationField, PhysicalModel};
use diffuse_rs::solver::{DomainBoundaries, Scenario};

/// Assert that two fields are close (within tolerance), element by element
pub fn assert_fields_close(
    field1: &ConcentrationField,
    field2: &ConcentrationField,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(field1.len(), field2.len(), "{}: Dimension mismatch", message);

    for (i, (&v1, &v2)) in field1.as_slice().iter().zip(field2.as_slice()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Root-mean-square difference between two fields
pub fn compute_l2_error(field1: &ConcentrationField, field2: &ConcentrationField) -> f64 {
    if field1.is_empty() {
        return 0.0;
    }

    let sum_squared_diff: f64 = field1
        .as_slice()
        .iter()
        .zip(field2.as_slice())
        .map(|(a, b)| (a - b).powi(2))
        .sum();

    (sum_squared_diff / field1.len() as f64).sqrt()
}

/// Scenario with Dirichlet boundaries taken from the model's initial state
pub fn create_simple_scenario(model: Box<dyn PhysicalModel>) -> Scenario {
    let initial = model.setup_initial_state();
    let boundaries = DomainBoundaries::dirichlet(initial);
    Scenario::new(model, boundaries)
}

/// Reference scenario on a coarser grid
///
/// `Lx = 300`, `dx = 5` (60 points), `r = 0.5`, so `dt = 0.125`.
pub fn coarse_parameters() -> DiffusionParameters {
    DiffusionParameters::default()
        .with_domain(300.0, 5.0)
        .with_diffusion_number(0.5)
}

/// Boundary flux of one FTCS step: r·[(C₀ − C₁) + (C_{n-1} − C_{n-2})]
pub fn boundary_flux(field: &ConcentrationField, diffusion_number: f64) -> f64 {
    let c = field.as_slice();
    let n = c.len();
    diffusion_number * ((c[0] - c[1]) + (c[n - 1] - c[n - 2]))
}
