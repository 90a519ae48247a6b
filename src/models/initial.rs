//! Spatial initial profiles
//!
//! Defines C(x, t=0) along the grid. The end-point values of the built
//! profile are also the Dirichlet values the boundaries keep for the whole
//! run.
//!
//! # Example
//!
//! ```rust
//! use diffuse_rs::models::InitialProfile;
//!
//! // Jump from 500 to 0 at x = 150, midpoint included on the left
//! let profile = InitialProfile::step(150.0, 500.0, 0.0);
//!
//! assert_eq!(profile.evaluate(0.0), 500.0);
//! assert_eq!(profile.evaluate(150.0), 500.0);
//! assert_eq!(profile.evaluate(150.5), 0.0);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::physics::{ConcentrationField, Grid};

/// Initial concentration profile C(x, 0)
///
/// # Types
///
/// - **Step**: one discontinuity; `left` for `x ≤ midpoint`, `right` beyond
/// - **Uniform**: same value everywhere
/// - **Custom**: user-defined function of x
#[derive(Clone)]
pub enum InitialProfile {
    /// Single jump at `midpoint`
    ///
    /// A grid point sitting exactly on `midpoint` takes the `left` value.
    Step {
        midpoint: f64,
        left: f64,
        right: f64,
    },

    /// Constant profile
    Uniform { value: f64 },

    /// Arbitrary profile C(x)
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl InitialProfile {
    /// Step profile jumping from `left` to `right` just after `midpoint`
    pub fn step(midpoint: f64, left: f64, right: f64) -> Self {
        Self::Step { midpoint, left, right }
    }

    /// Uniform profile
    pub fn uniform(value: f64) -> Self {
        Self::Uniform { value }
    }

    /// Custom profile from a closure
    ///
    /// ```rust
    /// use diffuse_rs::models::InitialProfile;
    ///
    /// let ramp = InitialProfile::custom(|x| 2.0 * x);
    /// assert_eq!(ramp.evaluate(3.0), 6.0);
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Profile value at position `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            InitialProfile::Step { midpoint, left, right } => {
                // `≤`, not `<`: the midpoint belongs to the left plateau
                if x <= *midpoint { *left } else { *right }
            }
            InitialProfile::Uniform { value } => *value,
            InitialProfile::Custom(f) => f(x),
        }
    }

    /// Evaluate at several positions
    pub fn evaluate_series(&self, positions: &[f64]) -> Vec<f64> {
        positions.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Sample the profile on every grid point
    pub fn build(&self, grid: &Grid) -> ConcentrationField {
        ConcentrationField::from_vec(self.evaluate_series(grid.coordinates()))
    }
}

impl fmt::Debug for InitialProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitialProfile::Step { midpoint, left, right } => f
                .debug_struct("Step")
                .field("midpoint", midpoint)
                .field("left", left)
                .field("right", right)
                .finish(),
            InitialProfile::Uniform { value } => {
                f.debug_struct("Uniform").field("value", value).finish()
            }
            InitialProfile::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
