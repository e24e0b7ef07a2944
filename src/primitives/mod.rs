//! Core value types (Vector, Matrix).
//!
//! Both types are immutable after construction: every arithmetic
//! operation returns a new value. The primary contract is the named,
//! `Result`-returning methods on each type; the `ops` submodule layers
//! `std::ops` operator sugar on top.

mod matrix;
mod ops;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

/// Default maximum difference allowed when comparing entries.
///
/// Both [`Vector`] and [`Matrix`] use this for approximate equality and
/// for the zero check, unless overridden per instance via
/// `with_tolerance`.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Square root of the sum of squares over a stream of entries.
///
/// The Euclidean norm for vectors and the Frobenius norm for matrices.
pub(crate) fn frobenius(entries: impl Iterator<Item = f64>) -> f64 {
    entries.map(|x| x * x).sum::<f64>().sqrt()
}
