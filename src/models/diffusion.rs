//! One-dimensional diffusion of a step profile
//!
//! # Physical Model
//!
//! ```text
//! ∂C/∂t = D · ∂²C/∂x²        0 < x < Lx
//! C(0, t)    = C_left         (fixed)
//! C(Lx⁻, t)  = C_right        (fixed)
//! C(x, 0)    = C_left  if x ≤ Lx/2
//!              C_right otherwise
//! ```
//!
//! # Spatial Discretization
//!
//! The second derivative uses the central three-point stencil:
//!
//! ```text
//! ∂²C/∂x²|ᵢ ≈ (Cᵢ₋₁ − 2Cᵢ + Cᵢ₊₁) / dx²
//! ```
//!
//! Combined with a forward difference in time this is the FTCS scheme:
//!
//! ```text
//! Cᵢⁿ⁺¹ = Cᵢⁿ + r · (Cᵢ₋₁ⁿ − 2Cᵢⁿ + Cᵢ₊₁ⁿ),     r = D·dt/dx²
//! ```
//!
//! # Stability
//!
//! The explicit scheme stays bounded (and monotone) for `r ≤ 1/2`, i.e.
//! `dt ≤ dx²/(2D)`. At `r = 1/2` every interior update is the average of its
//! two neighbours.
//!
//! # Steady State
//!
//! With fixed unequal boundary values the solution relaxes toward the linear
//! profile joining them, see [`StepDiffusion::linear_steady_state`].

use crate::error::SimulationError;
use crate::models::InitialProfile;
use crate::physics::{ConcentrationField, Grid, PhysicalModel};
use crate::solver::{self, Recording, SolverConfiguration};

/// Diffusion number used by [`DiffusionParameters::default`]
pub const DEFAULT_DIFFUSION_NUMBER: f64 = 0.5;

/// Largest diffusion number for which FTCS is stable
pub const MAX_STABLE_DIFFUSION_NUMBER: f64 = 0.5;

// =================================================================================================
// Parameters
// =================================================================================================

/// Complete parameter record for a step-diffusion run
///
/// `Default` is the reference scenario:
///
/// | Parameter | Value |
/// |-----------|-------|
/// | D         | 100   |
/// | Lx        | 300   |
/// | dx        | 0.5   |
/// | dt        | 0.5·dx²/D = 0.00125 |
/// | nt        | 5000  |
/// | C_left    | 500   |
/// | C_right   | 0     |
///
/// # Example
///
/// ```rust
/// use diffuse_rs::models::DiffusionParameters;
///
/// let parameters = DiffusionParameters::default()
///     .with_domain(300.0, 5.0)
///     .with_diffusion_number(0.4)
///     .with_time_steps(1000);
///
/// assert!(parameters.validate().is_ok());
/// assert!((parameters.diffusion_number() - 0.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionParameters {
    /// Diffusivity D (> 0)
    pub diffusivity: f64,

    /// Domain length Lx
    pub length: f64,

    /// Grid spacing dx
    pub spacing: f64,

    /// Time step dt
    pub time_step: f64,

    /// Number of time steps nt
    pub time_steps: usize,

    /// Initial value left of the step, and fixed value at x = 0
    pub left_value: f64,

    /// Initial value right of the step, and fixed value at the last point
    pub right_value: f64,
}

impl Default for DiffusionParameters {
    fn default() -> Self {
        let diffusivity = 100.0;
        let spacing = 0.5;
        Self {
            diffusivity,
            length: 300.0,
            spacing,
            time_step: DEFAULT_DIFFUSION_NUMBER * spacing * spacing / diffusivity,
            time_steps: 5000,
            left_value: 500.0,
            right_value: 0.0,
        }
    }
}

impl DiffusionParameters {
    /// Builder pattern: set diffusivity (time step unchanged)
    pub fn with_diffusivity(mut self, diffusivity: f64) -> Self {
        self.diffusivity = diffusivity;
        self
    }

    /// Builder pattern: set domain length and grid spacing (time step unchanged)
    pub fn with_domain(mut self, length: f64, spacing: f64) -> Self {
        self.length = length;
        self.spacing = spacing;
        self
    }

    /// Builder pattern: set time step directly
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Builder pattern: derive the time step from a diffusion number, dt = r·dx²/D
    ///
    /// Uses the current diffusivity and spacing, so call it after
    /// [`with_diffusivity`](Self::with_diffusivity) / [`with_domain`](Self::with_domain).
    pub fn with_diffusion_number(mut self, diffusion_number: f64) -> Self {
        self.time_step = diffusion_number * self.spacing * self.spacing / self.diffusivity;
        self
    }

    /// Builder pattern: set number of time steps
    pub fn with_time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = time_steps;
        self
    }

    /// Builder pattern: set the two plateau / boundary values
    pub fn with_boundary_values(mut self, left: f64, right: f64) -> Self {
        self.left_value = left;
        self.right_value = right;
        self
    }

    /// Explicit stability bound dx²/(2D)
    pub fn stability_limit(&self) -> f64 {
        self.spacing * self.spacing / (2.0 * self.diffusivity)
    }

    /// Stencil weight r = D·dt/dx²
    pub fn diffusion_number(&self) -> f64 {
        self.diffusivity * self.time_step / (self.spacing * self.spacing)
    }

    /// Simulated time nt·dt
    pub fn total_time(&self) -> f64 {
        self.time_steps as f64 * self.time_step
    }

    /// Build the grid these parameters describe
    pub fn grid(&self) -> Result<Grid, SimulationError> {
        Grid::new(self.length, self.spacing)
    }

    /// Fixed-step solver configuration matching `time_step` and `time_steps`
    ///
    /// Only the initial and final states are recorded; chain
    /// [`SolverConfiguration::with_recording`] to keep intermediate snapshots.
    pub fn solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration::fixed_step(self.time_step, self.time_steps)
            .with_recording(Recording::Endpoints)
    }

    /// Check every precondition of the explicit scheme
    ///
    /// # Errors
    ///
    /// - any non-finite scalar → [`SimulationError::NonFiniteParameter`]
    /// - `D ≤ 0` → [`SimulationError::NonPositiveDiffusivity`]
    /// - `Lx ≤ 0`, `dx ≤ 0`, fewer than 3 points → grid errors (see [`Grid::new`])
    /// - `dt ≤ 0` → [`SimulationError::NonPositiveTimeStep`]
    /// - `dt > dx²/(2D)` → [`SimulationError::UnstableTimeStep`]
    /// - `nt = 0` → [`SimulationError::InvalidConfiguration`]
    pub fn validate(&self) -> Result<(), SimulationError> {
        let scalars = [
            ("diffusivity", self.diffusivity),
            ("length", self.length),
            ("spacing", self.spacing),
            ("time_step", self.time_step),
            ("left_value", self.left_value),
            ("right_value", self.right_value),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(SimulationError::NonFiniteParameter { name, value });
            }
        }

        if self.diffusivity <= 0.0 {
            return Err(SimulationError::NonPositiveDiffusivity(self.diffusivity));
        }

        let grid = self.grid()?;
        if !grid.divides_evenly() {
            log::warn!(
                "Domain length {} is not a multiple of spacing {}: last point at x = {}",
                self.length,
                self.spacing,
                grid.last_coordinate()
            );
        }

        if self.time_step <= 0.0 {
            return Err(SimulationError::NonPositiveTimeStep(self.time_step));
        }
        solver::check_time_step(self.time_step, self.stability_limit())?;

        if self.time_steps == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "Time steps must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// =================================================================================================
// Step Diffusion Model
// =================================================================================================

/// Diffusion of a step profile between two fixed boundary values
///
/// Built from validated [`DiffusionParameters`]. Precomputes the grid and the
/// Laplacian weight `D/dx²` used in every rate evaluation.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::models::{DiffusionParameters, StepDiffusion};
/// use diffuse_rs::physics::PhysicalModel;
///
/// let model = StepDiffusion::new(DiffusionParameters::default()).unwrap();
///
/// assert_eq!(model.points(), 600);
/// assert_eq!(model.stability_limit(), Some(0.00125));
///
/// let initial = model.setup_initial_state();
/// assert_eq!(initial.left(), Some(500.0));
/// assert_eq!(initial.right(), Some(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct StepDiffusion {
    parameters: DiffusionParameters,
    grid: Grid,
    profile: InitialProfile,

    /// D/dx², precomputed
    laplacian_weight: f64,
}

impl StepDiffusion {
    /// Create the model, validating `parameters` first
    pub fn new(parameters: DiffusionParameters) -> Result<Self, SimulationError> {
        parameters.validate()?;
        let grid = parameters.grid()?;
        let profile =
            InitialProfile::step(grid.midpoint(), parameters.left_value, parameters.right_value);
        let laplacian_weight = parameters.diffusivity / (parameters.spacing * parameters.spacing);

        Ok(Self { parameters, grid, profile, laplacian_weight })
    }

    /// Replace the step with another initial profile
    ///
    /// The end-point values of the new profile become the boundary values.
    pub fn with_profile(mut self, profile: InitialProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Parameters the model was built from
    pub fn parameters(&self) -> &DiffusionParameters {
        &self.parameters
    }

    /// Spatial grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Initial profile
    pub fn profile(&self) -> &InitialProfile {
        &self.profile
    }

    /// Steady state with the current boundary values: linear in x
    ///
    /// ```text
    /// C∞(xᵢ) = C₀ + (C_last − C₀) · (xᵢ − x₀) / (x_last − x₀)
    /// ```
    pub fn linear_steady_state(&self) -> ConcentrationField {
        let initial = self.setup_initial_state();
        let left = initial[0];
        let right = initial[initial.len() - 1];

        let x_first = self.grid.coordinates()[0];
        let span = self.grid.last_coordinate() - x_first;

        ConcentrationField::from_vec(
            self.grid
                .coordinates()
                .iter()
                .map(|&x| left + (right - left) * (x - x_first) / span)
                .collect(),
        )
    }
}

impl PhysicalModel for StepDiffusion {
    fn points(&self) -> usize {
        self.grid.len()
    }

    /// dC/dt = D·(Cᵢ₋₁ − 2Cᵢ + Cᵢ₊₁)/dx² on the interior, 0 on both boundaries
    fn compute_physics(&self, state: &ConcentrationField) -> ConcentrationField {
        let concentration = state.as_slice();
        let n = concentration.len();
        let mut rate = ConcentrationField::zeros(n);

        if n >= Grid::MIN_POINTS {
            let interior = &mut rate.as_mut_slice()[1..n - 1];
            for (out, window) in interior.iter_mut().zip(concentration.windows(3)) {
                *out = self.laplacian_weight * (window[0] - 2.0 * window[1] + window[2]);
            }
        }

        rate
    }

    fn setup_initial_state(&self) -> ConcentrationField {
        self.profile.build(&self.grid)
    }

    fn name(&self) -> &str {
        "Step Diffusion (1D FTCS)"
    }

    fn stability_limit(&self) -> Option<f64> {
        Some(self.parameters.stability_limit())
    }

    fn diffusion_number(&self, dt: f64) -> Option<f64> {
        Some(self.parameters.diffusivity * dt / (self.parameters.spacing * self.parameters.spacing))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
