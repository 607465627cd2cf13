//! Elementary aggregates over numeric slices.
//!
//! All functions treat their input as read-only: nothing is reordered or
//! mutated in place, and [`median`] sorts a defensive copy. The only failure
//! mode is an empty input to [`average`] or [`median`], reported as
//! [`StatsError::InvalidArgument`] with a message naming the operation that
//! was refused. [`sum`] never fails: the empty sum is 0.
//!
//! # Semantics
//!
//! - **Sum**: left-to-right IEEE-754 accumulation from an additive
//!   identity of 0.
//! - **Average**: sum divided by count, with the empty case rejected
//!   *before* the division so it can never produce NaN.
//! - **Median**: middle element of an ascending numeric sort; for an even
//!   count, the mean of the two middle elements.

use thiserror::Error;

/// Approximation of π.
///
/// Deliberately low precision — a convenience value for calculations that
/// do not need `std::f64::consts::PI`. The rounded value is part of the
/// public contract and is not a candidate for "fixing".
pub const PI: f64 = 3.14;

/// Error type for invalid aggregate arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The input was empty where a non-empty sequence is required.
    #[error("{0}")]
    InvalidArgument(String),
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Computes the sum of all elements, left to right, starting from 0.
///
/// An empty slice is a valid input and yields `0.0` — unlike [`average`]
/// and [`median`], `sum` has no error case.
///
/// # Examples
/// ```
/// use statkit::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 4.0, 8.0, 16.0]), 31.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Computes the arithmetic mean: `sum(data) / data.len()`.
///
/// The empty case is rejected before the division is attempted, so this
/// function never returns NaN or infinity for an empty slice.
///
/// # Errors
/// Returns [`StatsError::InvalidArgument`] with the message
/// `"Array is empty; cannot compute average."` if `data` is empty.
///
/// # Examples
/// ```
/// use statkit::stats::average;
/// assert_eq!(average(&[1.0, 2.0, 4.0, 8.0, 16.0]).unwrap(), 6.2);
///
/// let err = average(&[]).unwrap_err();
/// assert_eq!(err.to_string(), "Array is empty; cannot compute average.");
/// ```
pub fn average(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::InvalidArgument(
            "Array is empty; cannot compute average.".to_string(),
        ));
    }
    Ok(sum(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Internally clones and sorts the data ascending under numeric total
/// order, then returns the middle element (or the average of the two
/// middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// Returns [`StatsError::InvalidArgument`] with the message
/// `"Array is empty; cannot compute median."` if `data` is empty.
///
/// # Examples
/// ```
/// use statkit::stats::median;
/// assert_eq!(median(&[1.0, 2.0, 4.0, 8.0, 16.0]).unwrap(), 4.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    if data.is_empty() {
        return Err(StatsError::InvalidArgument(
            "Array is empty; cannot compute median.".to_string(),
        ));
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if is_even(sorted.len()) {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Returns `true` if `n` is even. Selects the two-middle-average branch
/// in [`median`].
fn is_even(n: usize) -> bool {
    n % 2 == 0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- sum ---

    #[test]
    fn test_sum_basic() {
        assert_eq!(sum(&[1.0, 2.0, 4.0, 8.0, 16.0]), 31.0);
    }

    #[test]
    fn test_sum_empty() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sum_single_negative() {
        assert_eq!(sum(&[-1.0]), -1.0);
    }

    #[test]
    fn test_sum_negatives() {
        assert_eq!(sum(&[-1.0, -2.0]), -3.0);
    }

    // --- average ---

    #[test]
    fn test_average_basic() {
        assert_eq!(average(&[1.0, 2.0, 4.0, 8.0, 16.0]).unwrap(), 6.2);
    }

    #[test]
    fn test_average_single() {
        assert_eq!(average(&[1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_average_constant() {
        assert_eq!(average(&[2.0, 2.0, 2.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_average_inexact() {
        let avg = average(&[1.0, 2.0, 4.0]).unwrap();
        assert!((avg - 2.333).abs() < 1e-3, "expected ≈2.333, got {avg}");
    }

    #[test]
    fn test_average_empty_is_invalid_argument() {
        let err = average(&[]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Array is empty; cannot compute average.");
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 2.0, 4.0, 8.0, 16.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_median_even() {
        let med = median(&[1.0, 2.0]).unwrap();
        assert!((med - 1.5).abs() < 1e-15, "expected ≈1.5, got {med}");
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_median_unsorted_input() {
        assert_eq!(median(&[16.0, 1.0, 8.0, 2.0, 4.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_median_duplicates() {
        assert_eq!(median(&[3.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_does_not_reorder_caller_data() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = median(&data).unwrap();
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_empty_is_invalid_argument() {
        let err = median(&[]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "Array is empty; cannot compute median.");
    }

    // --- errors are distinguishable ---

    #[test]
    fn test_error_messages_name_the_operation() {
        assert_ne!(average(&[]).unwrap_err(), median(&[]).unwrap_err());
    }

    // --- PI ---

    #[test]
    fn test_pi_is_the_rounded_approximation() {
        assert_eq!(PI, 3.14);
        assert_ne!(PI, std::f64::consts::PI);
    }
}
