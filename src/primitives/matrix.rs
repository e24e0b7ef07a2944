//! Matrix type for two-dimensional numeric data.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{LinealError, Result};

use super::{frobenius, Vector, DEFAULT_TOLERANCE};

/// An m-by-n matrix of `f64` entries, stored flat in row-major order.
///
/// Immutable after construction: every arithmetic operation returns a
/// new `Matrix`. A matrix always holds at least one entry, and every
/// row has the same number of columns.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.get(1, 0)?, 3.0);
/// # Ok::<(), lineal::LinealError>(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    tolerance: f64,
}

/// Mirror of [`Matrix`]'s serialized form, routed through the checked
/// constructor so deserialized values uphold the shape invariants.
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    tolerance: f64,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = LinealError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Ok(Matrix::from_vec(raw.rows, raw.cols, raw.data)?.with_tolerance(raw.tolerance))
    }
}

impl Matrix {
    /// Creates a matrix from rows of entries.
    ///
    /// The first row sets the column count; every other row must match
    /// it.
    ///
    /// # Errors
    ///
    /// - [`LinealError::RaggedRows`] if any row's length differs from
    ///   the first row's.
    /// - [`LinealError::EmptyInput`] if the total entry count is zero.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_cols = rows.first().map_or(0, Vec::len);
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != n_cols {
                return Err(LinealError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
        }
        let n_rows = rows.len();
        if n_rows * n_cols == 0 {
            return Err(LinealError::EmptyInput);
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Creates a matrix from columns of entries.
    ///
    /// Equivalent to [`from_rows`](Self::from_rows) followed by
    /// [`transpose`](Self::transpose).
    ///
    /// # Errors
    ///
    /// Same as [`from_rows`](Self::from_rows).
    pub fn from_columns(cols: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Self::from_rows(cols)?.transpose())
    }

    /// Creates a matrix from a flat row-major data vector.
    ///
    /// # Errors
    ///
    /// - [`LinealError::EmptyInput`] if `rows * cols` is zero.
    /// - [`LinealError::DimensionMismatch`] if the data length does not
    ///   equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows * cols == 0 {
            return Err(LinealError::EmptyInput);
        }
        if data.len() != rows * cols {
            return Err(LinealError::DimensionMismatch {
                expected: (rows * cols).to_string(),
                actual: data.len().to_string(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            tolerance: DEFAULT_TOLERANCE,
        })
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EmptyInput`] if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(rows, cols, vec![0.0; rows * cols])
    }

    /// Creates a matrix of ones.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EmptyInput`] if either dimension is zero.
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(rows, cols, vec![1.0; rows * cols])
    }

    /// Creates an n-by-n identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::EmptyInput`] if `n` is zero.
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Internal constructor for data already known to be a valid,
    /// non-empty `rows x cols` grid.
    pub(crate) fn from_parts(data: Vec<f64>, rows: usize, cols: usize, tolerance: f64) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        debug_assert!(!data.is_empty());
        Self {
            data,
            rows,
            cols,
            tolerance,
        }
    }

    /// Overrides the comparison tolerance (defaults to
    /// [`DEFAULT_TOLERANCE`](super::DEFAULT_TOLERANCE)).
    ///
    /// The left operand's tolerance decides in binary comparisons.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The comparison tolerance of this matrix.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Total number of entries (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix holds at least one entry by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The entries as a flat row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn dims(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }

    /// Returns the entry at (row, col). No index wraparound.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if either coordinate is
    /// out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows {
            return Err(LinealError::IndexOutOfRange {
                index: row as isize,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(LinealError::IndexOutOfRange {
                index: col as isize,
                len: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Returns the entry at a flat row-major index, counting from the
    /// end for negative indices.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if the index falls
    /// outside the total entry count after wraparound.
    pub fn get_flat(&self, index: isize) -> Result<f64> {
        let len = self.data.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved as usize >= len {
            return Err(LinealError::IndexOutOfRange { index, len });
        }
        Ok(self.data[resolved as usize])
    }

    /// Materializes one row as a Vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if `index` is past the
    /// last row.
    pub fn row(&self, index: usize) -> Result<Vector> {
        if index >= self.rows {
            return Err(LinealError::IndexOutOfRange {
                index: index as isize,
                len: self.rows,
            });
        }
        let start = index * self.cols;
        Ok(Vector::from_parts(
            self.data[start..start + self.cols].to_vec(),
            self.tolerance,
        ))
    }

    /// Materializes one column as a Vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IndexOutOfRange`] if `index` is past the
    /// last column.
    pub fn column(&self, index: usize) -> Result<Vector> {
        if index >= self.cols {
            return Err(LinealError::IndexOutOfRange {
                index: index as isize,
                len: self.cols,
            });
        }
        let entries = (0..self.rows)
            .map(|r| self.data[r * self.cols + index])
            .collect();
        Ok(Vector::from_parts(entries, self.tolerance))
    }

    /// Iterates over the rows as Vectors, materialized on demand.
    pub fn rows(&self) -> impl Iterator<Item = Vector> + '_ {
        self.data
            .chunks(self.cols)
            .map(move |chunk| Vector::from_parts(chunk.to_vec(), self.tolerance))
    }

    /// Iterates over the columns as Vectors, materialized on demand.
    ///
    /// Each column gathers one entry per row.
    pub fn columns(&self) -> impl Iterator<Item = Vector> + '_ {
        (0..self.cols).map(move |c| {
            let entries = (0..self.rows).map(|r| self.data[r * self.cols + c]).collect();
            Vector::from_parts(entries, self.tolerance)
        })
    }

    /// Iterates over all entries in flat row-major order.
    ///
    /// `.rev()` yields the reverse row-major traversal. The iterator is
    /// restartable by calling `iter` again.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.data.iter().copied()
    }

    /// Iterates over all entries in flat column-major order.
    ///
    /// `.rev()` yields the reverse column-major traversal. Together
    /// with [`iter`](Self::iter) this covers all four flat traversal
    /// orders.
    pub fn iter_col_major(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        (0..self.data.len()).map(move |k| {
            let (col, row) = (k / self.rows, k % self.rows);
            self.data[row * self.cols + col]
        })
    }

    /// Applies a function to every entry, returning a new matrix.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
            tolerance: self.tolerance,
        }
    }

    /// Applies a function pairwise to two matrices of equal shape.
    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        self.check_same_shape(other)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
            tolerance: self.tolerance,
        })
    }

    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinealError::DimensionMismatch {
                expected: self.dims(),
                actual: other.dims(),
            });
        }
        Ok(())
    }

    /// Element-wise sum of two matrices.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Adds a scalar to every entry.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Matrix {
        self.map(|x| x + scalar)
    }

    /// Element-wise difference, defined as `self + (-other)`.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.add(&other.negate())
    }

    /// Subtracts a scalar from every entry.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f64) -> Matrix {
        self.map(|x| x - scalar)
    }

    /// Multiplies every entry by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Matrix {
        self.map(|x| x * scalar)
    }

    /// Divides every entry by a scalar, as `mul_scalar(1.0 / scalar)`.
    ///
    /// Division by zero follows IEEE-754 semantics (infinities or NaN)
    /// and is not trapped.
    #[must_use]
    pub fn div_scalar(&self, scalar: f64) -> Matrix {
        self.mul_scalar(1.0 / scalar)
    }

    /// Flips the sign of every entry.
    #[must_use]
    pub fn negate(&self) -> Matrix {
        self.map(|x| -x)
    }

    /// Matrix-matrix product.
    ///
    /// The result's entry at (i, j) is the dot product of row i of
    /// `self` and column j of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IncompatibleDimensions`] unless the
    /// column count of `self` equals the row count of `other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(LinealError::IncompatibleDimensions {
                left: self.dims(),
                right: other.dims(),
            });
        }
        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }
        Ok(Self::from_parts(data, self.rows, other.cols, self.tolerance))
    }

    /// Matrix-vector product, treating the vector as a column.
    ///
    /// Converts the vector to a single-column matrix, multiplies, and
    /// flattens the single-column result back to a vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::IncompatibleDimensions`] unless the
    /// column count of `self` equals the vector's length.
    pub fn matvec(&self, vector: &Vector) -> Result<Vector> {
        self.matmul(&vector.to_column_matrix())?.as_vector()
    }

    /// Transposes the rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self::from_parts(data, self.cols, self.rows, self.tolerance)
    }

    /// Flattens a single-row or single-column matrix to a Vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::NotVectorConvertible`] unless one of the
    /// two dimensions is 1.
    pub fn as_vector(&self) -> Result<Vector> {
        if self.rows != 1 && self.cols != 1 {
            return Err(LinealError::NotVectorConvertible {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Vector::from_parts(self.data.clone(), self.tolerance))
    }

    /// Converts a 1x1 matrix to its single entry.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::NotScalarConvertible`] unless the shape
    /// is exactly 1x1.
    pub fn to_scalar(&self) -> Result<f64> {
        if self.rows != 1 || self.cols != 1 {
            return Err(LinealError::NotScalarConvertible { size: self.dims() });
        }
        Ok(self.data[0])
    }

    /// Approximate equality within the tolerance of `self`.
    ///
    /// True iff every pair of corresponding entries differs by no more
    /// than the tolerance; stops at the first mismatching pair.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::DimensionMismatch`] if the shapes differ.
    pub fn approx_eq(&self, other: &Matrix) -> Result<bool> {
        self.check_same_shape(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() <= self.tolerance))
    }

    /// Frobenius norm: the square root of the sum of squares over all
    /// entries.
    #[must_use]
    pub fn norm(&self) -> f64 {
        frobenius(self.iter())
    }

    /// Whether the norm is within tolerance of zero.
    ///
    /// This is a tolerance check, not a strict-positivity check: a
    /// matrix whose norm is positive but no greater than its tolerance
    /// still counts as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.norm() <= self.tolerance
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Debug for Matrix {
    /// Renders as `Matrix(((r0c0, r0c1,), (r1c0, r1c1,)))` with three
    /// decimals, each row an inner tuple with a trailing comma.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix((")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:.3}", self.data[r * self.cols + c])?;
            }
            write!(f, ",)")?;
        }
        write!(f, "))")
    }
}

impl fmt::Display for Matrix {
    /// Renders as `Matrix((first, ...), ..., (..., last))[m x n]` with
    /// one decimal, where first/last follow flat row-major order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.data[0];
        let last = self.data[self.data.len() - 1];
        write!(
            f,
            "Matrix(({first:.1}, ...), ..., (..., {last:.1}))[{}x{}]",
            self.rows, self.cols
        )
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
