//! Simulation of random streams of data.
//!
//! [`DataStream`] models an infinite stream of non-negative integers
//! drawn from a Gaussian-like distribution with mean 42 and standard
//! deviation 8. The left tail is clipped at zero, and one in a hundred
//! samples doubles, producing occasional outliers. Streams are
//! deterministic for a given seed.
//!
//! Independent of the vector/matrix core.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LinealError, Result};

/// Seed used by [`DataStream::new`], so examples are reproducible.
const DEFAULT_SEED: u64 = 87;

const MEAN: f64 = 42.0;
const STD_DEV: f64 = 8.0;

/// Default bounds for [`make_finite_stream`].
const DEFAULT_MIN: usize = 5;
const DEFAULT_MAX: usize = 15;

/// An infinite, seeded stream of simulated integer data.
///
/// # Examples
///
/// ```
/// use lineal::stream::DataStream;
///
/// let samples: Vec<u64> = DataStream::with_seed(42).take(3).collect();
/// let repeat: Vec<u64> = DataStream::with_seed(42).take(3).collect();
/// assert_eq!(samples, repeat);
/// ```
#[derive(Debug, Clone)]
pub struct DataStream {
    rng: StdRng,
}

impl DataStream {
    /// Creates a stream with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a stream with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One draw from N(mean, std) via the Box-Muller transform.
    fn sample_normal(&mut self) -> f64 {
        let u1: f64 = self.rng.gen_range(f64::MIN_POSITIVE..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        MEAN + STD_DEV * z
    }

    /// Draws a finite batch of samples.
    ///
    /// The batch length itself is random, chosen uniformly from
    /// `[min, max]`. Pass `min == max` for a fixed length.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::InvalidArgument`] if `max < min`.
    pub fn take_finite(&mut self, min: usize, max: usize) -> Result<Vec<u64>> {
        if max < min {
            return Err(LinealError::InvalidArgument {
                reason: "max must be at least min",
            });
        }
        let n = self.rng.gen_range(min..=max);
        Ok(self.by_ref().take(n).collect())
    }
}

impl Default for DataStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DataStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        // Truncate toward zero, clip the negative tail at 0.
        let mut number = self.sample_normal() as u64;
        if self.rng.gen_range(1..=100) == 1 {
            number *= 2;
        }
        Some(number)
    }
}

/// A finite batch from a default-seeded stream, between 5 and 15
/// samples long.
///
/// # Errors
///
/// Infallible in practice; shares [`DataStream::take_finite`]'s
/// signature.
pub fn make_finite_stream() -> Result<Vec<u64>> {
    DataStream::new().take_finite(DEFAULT_MIN, DEFAULT_MAX)
}
