//! Numerical solvers
//!
//! This module provides traits and implementations for numerical solvers.
//! A numerical solver applies a numerical method to the equations provided
//! by a physical model within a specific scenario.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** ([`Scenario`]): WHAT to solve
//!    - Physical model (equations)
//!    - Domain boundaries (initial field, fixed end values)
//!
//! 2. **Configuration** ([`SolverConfiguration`]): HOW to solve
//!    - Time axis ([`SolverType`]: total time or fixed step, number of steps)
//!    - Snapshot policy ([`Recording`])
//!
//! 3. **Solver** ([`Solver`] trait): the numerical method
//!    - [`FtcsSolver`]: double-buffered three-point stencil, the production path
//!    - [`EulerSolver`]: generic method-of-lines forward Euler, used as reference
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │  Physical Model │  (equations)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐ ┌─────────────────┐
//! │ Scenario        │◄┤ Domain          │ ← WHAT to solve
//! │ (model + bounds)│ │ Boundaries      │
//! └────────┬────────┘ └─────────────────┘
//!          │
//! ┌────────▼─────────────┐
//! │ Solver Configuration │ ← HOW to solve
//! └────────┬─────────────┘
//!          │
//! ┌────────▼────────┐
//! │ Numerical Solver│ ← The method (FTCS, Euler)
//! └────────┬────────┘
//!          │
//! ┌────────▼────────────┐
//! │ Simulation Result   │ ← trajectory + metadata
//! └─────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use diffuse_rs::models::DiffusionParameters;
//! use diffuse_rs::solver::{FtcsSolver, Recording, Scenario, Solver};
//!
//! let parameters = DiffusionParameters::default().with_time_steps(100);
//! let scenario = Scenario::from_parameters(&parameters)?;
//! let config = parameters.solver_configuration().with_recording(Recording::Endpoints);
//!
//! let result = FtcsSolver::new().solve(&scenario, &config)?;
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.final_state.left(), Some(500.0));
//! # Ok::<(), diffuse_rs::error::SimulationError>(())
//! ```
//!
//! # Error Handling
//!
//! All solver methods return `Result<_, SimulationError>`. Preconditions
//! (configuration, scenario, stability) are checked before the first step;
//! NaN and infinity are checked on every stored state.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod boundary;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the stencil sweep off to Rayon is a numerical-execution
// concern, so it lives in the solver rather than in physics.
//
// Stored in an AtomicUsize so benchmarks and tests can change it at runtime.
// Relaxed ordering is enough: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior points above which the FTCS sweep switches to
/// parallel iteration.
///
/// Below roughly 1 000 points the overhead of Rayon's thread-pool dispatch
/// outweighs a five-flop stencil per point.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The FTCS sweep runs sequentially when the interior has fewer points than
/// this value, and on Rayon otherwise, but only when the crate is compiled
/// with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises [`ThresholdGuard`]s across test threads
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Guards are serialised through a lock so
/// concurrent tests never observe each other's threshold.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so restoring never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Recording, SimulationResult, Solver, SolverConfiguration, SolverType};

pub use boundary::DomainBoundaries;
pub use scenario::Scenario;

pub use methods::{EulerSolver, FtcsSolver, ftcs_step};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::SimulationError;
use crate::physics::ConcentrationField;

/// Relative slack on the stability bound, so `dt = dx²/(2D)` computed in a
/// different order still passes
const STABILITY_TOLERANCE: f64 = 1e-12;

/// Reject a time step above the explicit stability limit
pub(crate) fn check_time_step(dt: f64, limit: f64) -> Result<(), SimulationError> {
    if dt > limit * (1.0 + STABILITY_TOLERANCE) {
        return Err(SimulationError::UnstableTimeStep { dt, limit });
    }
    Ok(())
}

/// Validate a field for numerical issues
///
/// # Arguments
///
/// * `field` - State to validate
/// * `step` - Step that produced it (for error reporting)
pub(crate) fn check_finite(field: &ConcentrationField, step: usize) -> Result<(), SimulationError> {
    match field.first_non_finite() {
        None => Ok(()),
        Some((index, value)) if value.is_nan() => Err(SimulationError::NotANumber { step, index }),
        Some((index, _)) => Err(SimulationError::Overflow { step, index }),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
