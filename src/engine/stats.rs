//! Descriptive statistics over float samples.

use super::ComputeError;

/// Arithmetic mean of `values`.
///
/// The emptiness check runs before the division, so an empty slice is a
/// validation failure rather than a `NaN`. A sum that overflows to infinity,
/// or a non-finite sample, yields [`ComputeError::NonFinite`].
pub fn mean(values: &[f64]) -> Result<f64, ComputeError> {
    if values.is_empty() {
        return Err(ComputeError::Empty);
    }

    let sum: f64 = values.iter().sum();
    let result = sum / values.len() as f64;
    if !result.is_finite() {
        return Err(ComputeError::NonFinite);
    }
    Ok(result)
}
