//! Lineal: small dense linear algebra in pure Rust.
//!
//! Lineal provides immutable [`Vector`] and [`Matrix`] value types
//! with arithmetic, transposition, norms, and shape conversions, plus
//! two small independent helpers: a simulated random data stream and
//! stateless averaging utilities.
//!
//! # Quick Start
//!
//! ```
//! use lineal::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let v = Vector::from_slice(&[5.0, 6.0])?;
//!
//! // Named, Result-returning operations...
//! let product = a.matvec(&v)?;
//! assert!(product.approx_eq(&Vector::from_slice(&[17.0, 39.0])?)?);
//!
//! // ...or operator sugar over references.
//! let doubled = &a * 2.0;
//! assert_eq!(doubled.get(1, 1)?, 8.0);
//! # Ok::<(), lineal::LinealError>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error enum and `Result` alias
//! - [`stats`]: Stateless averaging utilities
//! - [`stream`]: Simulated random data streams

pub mod error;
pub mod primitives;
pub mod stats;
pub mod stream;

pub use error::{LinealError, Result};
pub use primitives::{Matrix, Vector};

/// Glob-import convenience: `use lineal::prelude::*;`
pub mod prelude {
    pub use crate::error::{LinealError, Result};
    pub use crate::primitives::{Matrix, Vector, DEFAULT_TOLERANCE};
}
