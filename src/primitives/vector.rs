//! Vector type for one-dimensional numeric data.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{LinealError, Result};

use super::{frobenius, Matrix, DEFAULT_TOLERANCE};

/// A one-dimensional vector of `f64` entries.
///
/// Immutable after construction: every arithmetic operation returns a
/// new `Vector`. A vector always holds at least one entry.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Vector;
///
/// let v = Vector::from_slice(&[3.0, 4.0])?;
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.norm(), 5.0);
/// # Ok::<(), lineal::LinealError>(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawVector")]
pub struct Vector {
    entries: Vec<f64>,
    tolerance: f64,
}

/// Mirror of [`Vector`]'s serialized form, routed through the checked
/// constructor so deserialized values uphold the length invariant.
#[derive(Deserialize)]
struct RawVector {
    entries: Vec<f64>,
    tolerance: f64,
}

impl TryFrom<RawVector> for Vector {
    type Error = LinealError;

    fn try_from(raw: RawVector) -> Result<Self> {
        Ok(Vector::new(raw.entries)?.with_tolerance(raw.tolerance))
    }
}

impl Vector {
    /// Creates a new vector from its entries.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EmptyInput`] if `entries` is empty.
    pub fn new(entries: Vec<f64>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LinealError::EmptyInput);
        }
        Ok(Self {
            entries,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Creates a new vector by copying a slice.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EmptyInput`] if `entries` is empty.
    pub fn from_slice(entries: &[f64]) -> Result<Self> {
        Self::new(entries.to_vec())
    }

    /// Internal constructor for entries already known to be non-empty.
    pub(crate) fn from_parts(entries: Vec<f64>, tolerance: f64) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries, tolerance }
    }

    /// Overrides the comparison tolerance (defaults to
    /// [`DEFAULT_TOLERANCE`]).
    ///
    /// The left operand's tolerance decides in binary comparisons.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The comparison tolerance of this vector.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a vector holds at least one entry by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// Returns the entry at `index`, counting from the end for
    /// negative indices.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if the index falls
    /// outside the valid bounds after wraparound.
    pub fn get(&self, index: isize) -> Result<f64> {
        let len = self.entries.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved as usize >= len {
            return Err(LinealError::IndexOutOfRange { index, len });
        }
        Ok(self.entries[resolved as usize])
    }

    /// Iterates over the entries in order.
    ///
    /// The iterator is lazy, finite, and restartable by calling `iter`
    /// again; `.rev()` yields the entries backwards.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.entries.iter().copied()
    }

    /// Applies a function to every entry, returning a new vector.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Vector {
        Vector {
            entries: self.entries.iter().map(|&x| f(x)).collect(),
            tolerance: self.tolerance,
        }
    }

    /// Applies a function pairwise to two vectors of equal length.
    fn zip_with(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        self.check_same_len(other)?;
        let entries = self
            .entries
            .iter()
            .zip(other.entries.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Vector {
            entries,
            tolerance: self.tolerance,
        })
    }

    fn check_same_len(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinealError::DimensionMismatch {
                expected: self.len().to_string(),
                actual: other.len().to_string(),
            });
        }
        Ok(())
    }

    /// Element-wise sum of two vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the lengths differ.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Adds a scalar to every entry.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Vector {
        self.map(|x| x + scalar)
    }

    /// Element-wise difference, defined as `self + (-other)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the lengths differ.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.add(&other.negate())
    }

    /// Subtracts a scalar from every entry.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f64) -> Vector {
        self.map(|x| x - scalar)
    }

    /// Dot product: the sum of pairwise products.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(self
            .entries
            .iter()
            .zip(other.entries.iter())
            .map(|(&a, &b)| a * b)
            .sum())
    }

    /// Multiplies every entry by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Vector {
        self.map(|x| x * scalar)
    }

    /// Divides every entry by a scalar, as `mul_scalar(1.0 / scalar)`.
    ///
    /// Division by zero follows IEEE-754 semantics (infinities or NaN)
    /// and is not trapped.
    #[must_use]
    pub fn div_scalar(&self, scalar: f64) -> Vector {
        self.mul_scalar(1.0 / scalar)
    }

    /// Flips the sign of every entry.
    #[must_use]
    pub fn negate(&self) -> Vector {
        self.map(|x| -x)
    }

    /// Approximate equality within the tolerance of `self`.
    ///
    /// True iff every pair of corresponding entries differs by no more
    /// than the tolerance; stops at the first mismatching pair.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the lengths differ.
    pub fn approx_eq(&self, other: &Vector) -> Result<bool> {
        self.check_same_len(other)?;
        Ok(self
            .entries
            .iter()
            .zip(other.entries.iter())
            .all(|(&a, &b)| (a - b).abs() <= self.tolerance))
    }

    /// Euclidean norm: the square root of the sum of squared entries.
    #[must_use]
    pub fn norm(&self) -> f64 {
        frobenius(self.iter())
    }

    /// Whether the norm is within tolerance of zero.
    ///
    /// This is a tolerance check, not a strict-positivity check: a
    /// vector whose norm is positive but no greater than its tolerance
    /// still counts as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.norm() <= self.tolerance
    }

    /// Converts a length-1 vector to its single entry.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::NotScalarConvertible`] if the length is
    /// not exactly 1.
    pub fn to_scalar(&self) -> Result<f64> {
        if self.len() != 1 {
            return Err(LinealError::NotScalarConvertible {
                size: self.len().to_string(),
            });
        }
        Ok(self.entries[0])
    }

    /// Wraps the entries into a single-column matrix.
    #[must_use]
    pub fn to_column_matrix(&self) -> Matrix {
        Matrix::from_parts(self.entries.clone(), self.len(), 1, self.tolerance)
    }

    /// Wraps the entries into a single-row matrix.
    #[must_use]
    pub fn to_row_matrix(&self) -> Matrix {
        Matrix::from_parts(self.entries.clone(), 1, self.len(), self.tolerance)
    }

    /// Vector-matrix product, treating `self` as a row vector.
    ///
    /// Converts to a single-row matrix, multiplies, and flattens the
    /// single-row result back to a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IncompatibleDimensions`] if the length of
    /// `self` does not equal the matrix's row count.
    pub fn matmul(&self, matrix: &Matrix) -> Result<Vector> {
        self.to_row_matrix().matmul(matrix)?.as_vector()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

impl fmt::Debug for Vector {
    /// Renders as `Vector((e0, e1, ..., en))` with three decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector((")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.3}")?;
        }
        write!(f, "))")
    }
}

impl fmt::Display for Vector {
    /// Renders as `Vector(first, ..., last)[length]` with one decimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.entries[0];
        let last = self.entries[self.entries.len() - 1];
        write!(f, "Vector({first:.1}, ..., {last:.1})[{}]", self.len())
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
