//! Concentration field
//!
//! One value per grid point, stored in a `nalgebra::DVector<f64>`. The
//! arithmetic here is what the generic integrators need (`+`, `* f64`,
//! scaled in-place add); the FTCS stepper works on raw slices instead.

use nalgebra::DVector;
use std::fmt;

/// Concentration values C_i on the grid points
///
/// # Example
///
/// ```rust
/// use diffuse_rs::physics::ConcentrationField;
///
/// let field = ConcentrationField::from_vec(vec![500.0, 250.0, 0.0]);
/// assert_eq!(field.left(), Some(500.0));
/// assert_eq!(field.right(), Some(0.0));
/// assert_eq!(field.total(), 750.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationField {
    values: DVector<f64>,
}

impl ConcentrationField {
    // ======================================= constructors =======================================

    /// Wrap an existing vector
    pub fn new(values: DVector<f64>) -> Self {
        Self { values }
    }

    /// Create from a `Vec`
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self::new(DVector::from_vec(values))
    }

    /// Same value at every point
    pub fn uniform(size: usize, value: f64) -> Self {
        Self::new(DVector::from_element(size, value))
    }

    /// All zeros
    pub fn zeros(size: usize) -> Self {
        Self::new(DVector::zeros(size))
    }

    // ========================================== Queries ==========================================

    /// Number of points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Underlying vector
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    /// Values as a contiguous slice
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Mutable contiguous slice
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.values.as_mut_slice()
    }

    /// Value at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Value at the left boundary (index 0)
    pub fn left(&self) -> Option<f64> {
        self.as_slice().first().copied()
    }

    /// Value at the right boundary (index nx-1)
    pub fn right(&self) -> Option<f64> {
        self.as_slice().last().copied()
    }

    /// Discrete sum Σ C_i
    pub fn total(&self) -> f64 {
        self.values.sum()
    }

    /// Smallest value (+∞ when empty)
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value (-∞ when empty)
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// First index holding NaN or ±∞, with its value
    pub fn first_non_finite(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
    }

    /// Sup-norm distance max_i |C_i − other_i|
    ///
    /// # Panics
    ///
    /// Panics if the two fields have different lengths.
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        assert_eq!(self.len(), other.len(), "Field lengths must match");
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    // ======================================== Arithmetic =========================================

    /// self ← self + scale · rate, without allocating
    ///
    /// # Panics
    ///
    /// Panics if the two fields have different lengths.
    pub fn add_scaled(&mut self, rate: &Self, scale: f64) {
        assert_eq!(self.len(), rate.len(), "Field lengths must match");
        self.values.axpy(scale, &rate.values, 1.0);
    }

    /// Copy out as a `Vec` (plotting, export)
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Take the underlying vector
    pub fn into_inner(self) -> DVector<f64> {
        self.values
    }
}

impl From<Vec<f64>> for ConcentrationField {
    fn from(values: Vec<f64>) -> Self {
        Self::from_vec(values)
    }
}

impl std::ops::Index<usize> for ConcentrationField {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl std::ops::Add for ConcentrationField {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        assert_eq!(self.len(), rhs.len(), "Field lengths must match");
        self.values += rhs.values;
        self
    }
}

impl std::ops::Mul<f64> for ConcentrationField {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        self.values *= scalar;
        self
    }
}

impl std::ops::Mul<ConcentrationField> for f64 {
    type Output = ConcentrationField;

    fn mul(self, rhs: ConcentrationField) -> Self::Output {
        rhs * self
    }
}

impl fmt::Display for ConcentrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Field [0]");
        }
        write!(f, "Field [{}] in [{}, {}]", self.len(), self.min(), self.max())
    }
}

// ==================== Tests ====================
