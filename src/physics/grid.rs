//! Uniform one-dimensional grid
//!
//! The grid is half-open: `nx = ceil(Lx/dx)`
//! points `x_i = i·dx`, starting at 0 and staying strictly below `Lx`
//! (up to rounding of the point count itself).

use nalgebra::DVector;
use std::ops::Range;

use crate::error::SimulationError;

/// Evenly spaced coordinates over `[0, Lx)`
///
/// Immutable once built. The first and last points carry the Dirichlet
/// boundary values; everything in [`Grid::interior`] is updated by the
/// stepper.
///
/// # Example
///
/// ```rust
/// use diffuse_rs::physics::Grid;
///
/// let grid = Grid::new(300.0, 0.5).unwrap();
/// assert_eq!(grid.len(), 600);
/// assert_eq!(grid.coordinate(599), Some(299.5));
/// assert_eq!(grid.midpoint(), 150.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Domain length Lx
    length: f64,

    /// Spacing dx between consecutive points
    spacing: f64,

    /// x_i = i·dx for i in 0..nx
    coordinates: DVector<f64>,
}

impl Grid {
    /// Smallest grid that still has an interior point
    pub const MIN_POINTS: usize = 3;

    /// Largest grid accepted by [`Grid::new`]
    ///
    /// 2^28 points, i.e. 2 GiB per working buffer.
    pub const MAX_POINTS: usize = 1 << 28;

    /// Build the grid for a domain of length `length` with spacing `spacing`
    ///
    /// # Errors
    ///
    /// - [`SimulationError::NonFiniteParameter`] if either input is NaN or infinite
    /// - [`SimulationError::NonPositiveLength`] / [`SimulationError::NonPositiveSpacing`]
    /// - [`SimulationError::GridTooLarge`] if more than [`Grid::MAX_POINTS`] points result
    /// - [`SimulationError::DegenerateGrid`] if fewer than [`Grid::MIN_POINTS`] points result
    pub fn new(length: f64, spacing: f64) -> Result<Self, SimulationError> {
        if !length.is_finite() {
            return Err(SimulationError::NonFiniteParameter { name: "length", value: length });
        }
        if !spacing.is_finite() {
            return Err(SimulationError::NonFiniteParameter { name: "spacing", value: spacing });
        }
        if length <= 0.0 {
            return Err(SimulationError::NonPositiveLength(length));
        }
        if spacing <= 0.0 {
            return Err(SimulationError::NonPositiveSpacing(spacing));
        }

        // Checked on the float ratio: the cast to usize saturates
        let ratio = (length / spacing).ceil();
        if !ratio.is_finite() || ratio > Self::MAX_POINTS as f64 {
            return Err(SimulationError::GridTooLarge {
                length,
                spacing,
                max: Self::MAX_POINTS,
            });
        }

        let points = Self::point_count(length, spacing);
        if points < Self::MIN_POINTS {
            return Err(SimulationError::DegenerateGrid { points });
        }

        // Direct i·dx rather than accumulation keeps x_300 = 150.0 exact for dx = 0.5
        let coordinates = DVector::from_fn(points, |i, _| i as f64 * spacing);

        Ok(Self { length, spacing, coordinates })
    }

    /// Number of points `ceil(length / spacing)` a grid would have
    ///
    /// Inputs are assumed positive and finite. Ratios beyond `usize::MAX`
    /// saturate; [`Grid::new`] rejects anything above [`Grid::MAX_POINTS`] first.
    pub fn point_count(length: f64, spacing: f64) -> usize {
        (length / spacing).ceil() as usize
    }

    /// Number of grid points nx
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Grid spacing dx
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Domain length Lx
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Domain midpoint Lx/2, where the step initial condition jumps
    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.length
    }

    /// All coordinates, in increasing order
    pub fn coordinates(&self) -> &[f64] {
        self.coordinates.as_slice()
    }

    /// Coordinate of point `index`, if it exists
    pub fn coordinate(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    /// Index of the point at exactly `x`, if one exists
    pub fn index_of(&self, x: f64) -> Option<usize> {
        self.coordinates.iter().position(|&xi| xi == x)
    }

    /// Last coordinate x_{nx-1}
    pub fn last_coordinate(&self) -> f64 {
        self.coordinates[self.len() - 1]
    }

    /// Interior indices `1..nx-1`
    pub fn interior(&self) -> Range<usize> {
        1..self.len() - 1
    }

    /// True when Lx is an integer multiple of dx (last cell is full width)
    pub fn divides_evenly(&self) -> bool {
        (self.length / self.spacing).fract() == 0.0
    }
}
