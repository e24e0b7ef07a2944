//! Stateless averaging utilities.
//!
//! Numbers are rounded to the nearest whole number before averaging,
//! and every helper applies an optional scalar multiplier to the
//! result. The even/odd variants average only the matching subset of
//! the rounded values.
//!
//! Independent of the vector/matrix core.

use crate::error::{LinealError, Result};

/// Rounds every number to the nearest whole value.
fn round_all(numbers: &[f64]) -> Vec<i64> {
    numbers.iter().map(|n| n.round() as i64).collect()
}

/// Average of the given whole numbers, scaled by `scalar`.
fn scaled_average(numbers: &[i64], scalar: f64) -> Result<f64> {
    if numbers.is_empty() {
        return Err(LinealError::EmptyInput);
    }
    let sum: i64 = numbers.iter().sum();
    Ok(scalar * (sum as f64 / numbers.len() as f64))
}

/// The scaled average of all numbers in a slice.
///
/// Non-whole numbers are rounded before averaging.
///
/// # Errors
///
/// Returns [`LinealError::EmptyInput`] if `numbers` is empty.
///
/// # Examples
///
/// ```
/// use lineal::stats::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0], 1.0)?, 2.5);
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0], 2.0)?, 5.0);
/// # Ok::<(), lineal::LinealError>(())
/// ```
pub fn average(numbers: &[f64], scalar: f64) -> Result<f64> {
    scaled_average(&round_all(numbers), scalar)
}

/// The scaled average of the even numbers in a slice, after rounding.
///
/// # Errors
///
/// Returns [`LinealError::EmptyInput`] if no rounded number is even.
pub fn average_evens(numbers: &[f64], scalar: f64) -> Result<f64> {
    let evens: Vec<i64> = round_all(numbers)
        .into_iter()
        .filter(|n| n % 2 == 0)
        .collect();
    scaled_average(&evens, scalar)
}

/// The scaled average of the odd numbers in a slice, after rounding.
///
/// # Errors
///
/// Returns [`LinealError::EmptyInput`] if no rounded number is odd.
pub fn average_odds(numbers: &[f64], scalar: f64) -> Result<f64> {
    let odds: Vec<i64> = round_all(numbers)
        .into_iter()
        .filter(|n| n % 2 != 0)
        .collect();
    scaled_average(&odds, scalar)
}
