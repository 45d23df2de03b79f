//! Closed-form two-parameter least squares.
//!
//! With `x` = raw reading and `y` = reference value:
//!
//! ```text
//! slope  = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! offset = (Σy − slope·Σx) / n
//! ```
//!
//! The denominator vanishes when every raw reading is the same; that case is
//! rejected with an absolute threshold rather than a condition number.

use crate::domain::{Calibration, DataPoint};
use crate::error::CalibrationError;

/// Absolute threshold on `n·Σx² − (Σx)²` below which the fit is singular.
pub const DEGENERATE_EPS: f64 = 1e-10;

/// Fit `reference ≈ slope · raw + offset` over paired sequences.
pub fn fit_linear(raw: &[f64], reference: &[f64]) -> Result<Calibration, CalibrationError> {
    if raw.len() != reference.len() {
        return Err(CalibrationError::LengthMismatch {
            raw: raw.len(),
            reference: reference.len(),
        });
    }
    if raw.len() < 2 {
        return Err(CalibrationError::TooFewPoints { count: raw.len() });
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (&x, &y) in raw.iter().zip(reference) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let n = raw.len() as f64;
    let denom = n * sum_x2 - sum_x * sum_x;
    if denom.abs() < DEGENERATE_EPS {
        return Err(CalibrationError::Degenerate);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let offset = (sum_y - slope * sum_x) / n;
    Ok(Calibration::new(slope, offset))
}

/// Same as [`fit_linear`], over user-entered points.
pub fn fit_points(points: &[DataPoint]) -> Result<Calibration, CalibrationError> {
    let (raw, reference): (Vec<f64>, Vec<f64>) = points
        .iter()
        .map(|p| (p.raw_reading, p.reference_value))
        .unzip();
    fit_linear(&raw, &reference)
}
