//! Operator-overload sugar for [`Vector`] and [`Matrix`].
//!
//! The named methods on the types are the primary, `Result`-returning
//! contract; these `std::ops` impls forward to them for natural infix
//! syntax. Dimension errors panic with the underlying error message,
//! so code that must not panic should call the named methods instead.
//!
//! No `Add`/`Sub` impls exist between `Vector` and `Matrix`: the
//! disallowed cross-type combinations are compile errors.

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Matrix, Vector};

// ----------------------------------------------------------------------
// Element-wise value op value (panics on dimension mismatch)
// ----------------------------------------------------------------------

macro_rules! impl_elementwise {
    ($type:ty, $trait:ident, $method:ident, $named:ident) => {
        impl $trait for &$type {
            type Output = $type;

            fn $method(self, rhs: &$type) -> $type {
                <$type>::$named(self, rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl $trait for $type {
            type Output = $type;

            fn $method(self, rhs: $type) -> $type {
                <$type>::$named(&self, &rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }
    };
}

impl_elementwise!(Vector, Add, add, add);
impl_elementwise!(Vector, Sub, sub, sub);
impl_elementwise!(Matrix, Add, add, add);
impl_elementwise!(Matrix, Sub, sub, sub);

// ----------------------------------------------------------------------
// Value op scalar
// ----------------------------------------------------------------------

macro_rules! impl_scalar_rhs {
    ($type:ty, $trait:ident, $method:ident, $named:ident) => {
        impl $trait<f64> for &$type {
            type Output = $type;

            fn $method(self, rhs: f64) -> $type {
                self.$named(rhs)
            }
        }

        impl $trait<f64> for $type {
            type Output = $type;

            fn $method(self, rhs: f64) -> $type {
                self.$named(rhs)
            }
        }
    };
}

impl_scalar_rhs!(Vector, Add, add, add_scalar);
impl_scalar_rhs!(Vector, Sub, sub, sub_scalar);
impl_scalar_rhs!(Vector, Mul, mul, mul_scalar);
impl_scalar_rhs!(Vector, Div, div, div_scalar);
impl_scalar_rhs!(Matrix, Add, add, add_scalar);
impl_scalar_rhs!(Matrix, Sub, sub, sub_scalar);
impl_scalar_rhs!(Matrix, Mul, mul, mul_scalar);
impl_scalar_rhs!(Matrix, Div, div, div_scalar);

// ----------------------------------------------------------------------
// Scalar op value (the commutative/reflected forms)
// ----------------------------------------------------------------------

macro_rules! impl_scalar_lhs {
    ($type:ty) => {
        impl Add<&$type> for f64 {
            type Output = $type;

            fn add(self, rhs: &$type) -> $type {
                rhs.add_scalar(self)
            }
        }

        impl Add<$type> for f64 {
            type Output = $type;

            fn add(self, rhs: $type) -> $type {
                rhs.add_scalar(self)
            }
        }

        // scalar - value, as (-value) + scalar
        impl Sub<&$type> for f64 {
            type Output = $type;

            fn sub(self, rhs: &$type) -> $type {
                rhs.negate().add_scalar(self)
            }
        }

        impl Sub<$type> for f64 {
            type Output = $type;

            fn sub(self, rhs: $type) -> $type {
                rhs.negate().add_scalar(self)
            }
        }

        impl Mul<&$type> for f64 {
            type Output = $type;

            fn mul(self, rhs: &$type) -> $type {
                rhs.mul_scalar(self)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;

            fn mul(self, rhs: $type) -> $type {
                rhs.mul_scalar(self)
            }
        }
    };
}

impl_scalar_lhs!(Vector);
impl_scalar_lhs!(Matrix);

// ----------------------------------------------------------------------
// Negation
// ----------------------------------------------------------------------

macro_rules! impl_neg {
    ($type:ty) => {
        impl Neg for &$type {
            type Output = $type;

            fn neg(self) -> $type {
                self.negate()
            }
        }

        impl Neg for $type {
            type Output = $type;

            fn neg(self) -> $type {
                self.negate()
            }
        }
    };
}

impl_neg!(Vector);
impl_neg!(Matrix);

// ----------------------------------------------------------------------
// Products: dot, matrix-matrix, matrix-vector, vector-matrix
// ----------------------------------------------------------------------

impl Mul for &Vector {
    type Output = f64;

    /// Dot product. Panics on length mismatch.
    fn mul(self, rhs: &Vector) -> f64 {
        self.dot(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for Vector {
    type Output = f64;

    fn mul(self, rhs: Vector) -> f64 {
        self.dot(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// Matrix-matrix product. Panics on incompatible inner dimensions.
    fn mul(self, rhs: &Matrix) -> Matrix {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.matmul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<&Vector> for &Matrix {
    type Output = Vector;

    /// Matrix-vector product, the vector taken as a column.
    fn mul(self, rhs: &Vector) -> Vector {
        self.matvec(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        self.matvec(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<&Matrix> for &Vector {
    type Output = Vector;

    /// Vector-matrix product, the vector taken as a row.
    fn mul(self, rhs: &Matrix) -> Vector {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<Matrix> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Matrix) -> Vector {
        self.matmul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
