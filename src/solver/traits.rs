//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - Central enum [`SolverType`] defines how the time axis is described
//! - [`SolverConfiguration`] pairs it with the snapshot [`Recording`] policy
//! - [`SimulationResult`] carries the trajectory plus string metadata
//! - The [`Solver`] trait is the single entry point every method implements

use std::collections::HashMap;

use crate::error::SimulationError;
use crate::physics::ConcentrationField;
use crate::solver::Scenario;

// =================================================================================================
// Solver Type
// =================================================================================================

/// Description of the time axis
///
/// # Examples
///
/// ```rust
/// use diffuse_rs::solver::SolverType;
///
/// // dt derived from the total time
/// let by_total = SolverType::TimeEvolution { total_time: 6.25, time_steps: 5000 };
/// assert_eq!(by_total.time_step(), 0.00125);
///
/// // dt given directly
/// let by_step = SolverType::FixedStep { time_step: 0.00125, time_steps: 5000 };
/// assert!((by_step.total_time() - 6.25).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SolverType {
    /// Integrate over `total_time` in `time_steps` equal steps
    ///
    /// `dt = total_time / time_steps`
    TimeEvolution { total_time: f64, time_steps: usize },

    /// Take `time_steps` steps of exactly `time_step`
    FixedStep { time_step: f64, time_steps: usize },
}

impl SolverType {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            SolverType::TimeEvolution { .. } => "TimeEvolution",
            SolverType::FixedStep { .. } => "FixedStep",
        }
    }

    /// Time step dt
    pub fn time_step(&self) -> f64 {
        match self {
            SolverType::TimeEvolution { total_time, time_steps } => {
                total_time / *time_steps as f64
            }
            SolverType::FixedStep { time_step, .. } => *time_step,
        }
    }

    /// Number of steps nt
    pub fn time_steps(&self) -> usize {
        match self {
            SolverType::TimeEvolution { time_steps, .. }
            | SolverType::FixedStep { time_steps, .. } => *time_steps,
        }
    }

    /// Simulated time nt·dt
    pub fn total_time(&self) -> f64 {
        match self {
            SolverType::TimeEvolution { total_time, .. } => *total_time,
            SolverType::FixedStep { time_step, time_steps } => *time_step * *time_steps as f64,
        }
    }

    /// Validate that parameters are meaningful
    pub fn validate(&self) -> Result<(), SimulationError> {
        match self {
            SolverType::TimeEvolution { total_time, time_steps } => {
                if !total_time.is_finite() {
                    return Err(SimulationError::NonFiniteParameter {
                        name: "total_time",
                        value: *total_time,
                    });
                }
                if *total_time <= 0.0 {
                    return Err(SimulationError::InvalidConfiguration(
                        "Total time must be positive".to_string(),
                    ));
                }
                if *time_steps == 0 {
                    return Err(SimulationError::InvalidConfiguration(
                        "Time steps must be greater than 0".to_string(),
                    ));
                }
                Ok(())
            }
            SolverType::FixedStep { time_step, time_steps } => {
                if !time_step.is_finite() {
                    return Err(SimulationError::NonFiniteParameter {
                        name: "time_step",
                        value: *time_step,
                    });
                }
                if *time_step <= 0.0 {
                    return Err(SimulationError::NonPositiveTimeStep(*time_step));
                }
                if *time_steps == 0 {
                    return Err(SimulationError::InvalidConfiguration(
                        "Time steps must be greater than 0".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Recording
// =================================================================================================

/// Which states end up in [`SimulationResult::state_trajectory`]
///
/// The initial state and the final state are always stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Recording {
    /// Store every step (nt + 1 snapshots)
    #[default]
    EveryStep,

    /// Store every k-th step, plus the last one
    Every(usize),

    /// Store the initial and final states only
    Endpoints,
}

impl Recording {
    /// True if the state after `step` (1-based) of `total` must be stored
    pub fn records(&self, step: usize, total: usize) -> bool {
        if step == total {
            return true;
        }
        match self {
            Recording::EveryStep => true,
            Recording::Every(k) => step % k == 0,
            Recording::Endpoints => false,
        }
    }

    /// Number of snapshots (initial included) for `total` steps
    pub fn snapshot_count(&self, total: usize) -> usize {
        match self {
            Recording::EveryStep => total + 1,
            Recording::Every(k) => {
                let regular = total / k;
                let extra_last = usize::from(total % k != 0);
                1 + regular + extra_last
            }
            Recording::Endpoints => 2,
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        if let Recording::Every(0) = self {
            return Err(SimulationError::InvalidConfiguration(
                "Recording interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for numerical solver
///
/// # Examples
///
/// ```rust
/// use diffuse_rs::solver::{Recording, SolverConfiguration};
///
/// let config = SolverConfiguration::fixed_step(0.00125, 5000)
///     .with_recording(Recording::Every(500));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.time_steps(), 5000);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Type of solver and its parameters
    pub solver_type: SolverType,

    /// Snapshot policy
    pub recording: Recording,
}

impl SolverConfiguration {
    /// Create a new configuration with a given solver type
    pub fn new(solver_type: SolverType) -> Self {
        Self { solver_type, recording: Recording::default() }
    }

    /// Create a time evolution configuration
    pub fn time_evolution(total_time: f64, time_steps: usize) -> Self {
        Self::new(SolverType::TimeEvolution { total_time, time_steps })
    }

    /// Create a fixed time step configuration
    pub fn fixed_step(time_step: f64, time_steps: usize) -> Self {
        Self::new(SolverType::FixedStep { time_step, time_steps })
    }

    /// Builder pattern: set recording policy
    pub fn with_recording(mut self, recording: Recording) -> Self {
        self.recording = recording;
        self
    }

    /// Time step dt
    pub fn time_step(&self) -> f64 {
        self.solver_type.time_step()
    }

    /// Number of steps nt
    pub fn time_steps(&self) -> usize {
        self.solver_type.time_steps()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.solver_type.validate()?;
        self.recording.validate()
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Result of a simulation run
///
/// `time_points[k]` is the time of `state_trajectory[k]`. The first entry is
/// always the initial state at t = 0; `final_state` is the state after the
/// last step, recorded or not.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Times of the stored snapshots
    pub time_points: Vec<f64>,

    /// Stored snapshots
    pub state_trajectory: Vec<ConcentrationField>,

    /// State after the last step
    pub final_state: ConcentrationField,

    /// Diagnostics (solver name, dt, steps...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Create a result without metadata
    pub fn new(
        time_points: Vec<f64>,
        state_trajectory: Vec<ConcentrationField>,
        final_state: ConcentrationField,
    ) -> Self {
        Self { time_points, state_trajectory, final_state, metadata: HashMap::new() }
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.state_trajectory.len()
    }

    /// True when nothing was stored
    pub fn is_empty(&self) -> bool {
        self.state_trajectory.is_empty()
    }

    /// First stored state (t = 0)
    pub fn initial_state(&self) -> Option<&ConcentrationField> {
        self.state_trajectory.first()
    }

    /// Add one metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Numerical method applied to a [`Scenario`]
pub trait Solver {
    /// Integrate the scenario as described by `config`
    fn solve(
        &self,
        scenario: &Scenario,
        config: &SolverConfiguration,
    ) -> Result<SimulationResult, SimulationError>;

    /// Name of the method
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
