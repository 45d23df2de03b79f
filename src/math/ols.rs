//! General least squares solver.
//!
//! The calibration model only needs the closed form in `regression`, but the
//! same fit can be phrased as a design-matrix problem:
//!
//! ```text
//! minimize Σ (y_i - (offset + slope · x_i))^2
//! ```
//!
//! Solving that through SVD gives an independent answer to check the closed
//! form against, and a way to score any candidate coefficients.

use nalgebra::{DMatrix, DVector};

use crate::domain::Calibration;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    for &tol in &[1e-12, 1e-10] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fit `reference ≈ slope · raw + offset` through the design matrix `[1, raw]`.
///
/// Returns `None` for mismatched lengths, fewer than two points, or a rank
/// deficient design (all raw readings equal).
pub fn fit_linear_svd(raw: &[f64], reference: &[f64]) -> Option<Calibration> {
    if raw.len() != reference.len() || raw.len() < 2 {
        return None;
    }

    let n = raw.len();
    let x = DMatrix::from_fn(n, 2, |row, col| if col == 0 { 1.0 } else { raw[row] });
    let y = DVector::from_column_slice(reference);

    let singular = x.clone().svd(false, false).singular_values;
    let max = singular.max();
    if max <= 0.0 || singular.min() / max < 1e-12 {
        return None;
    }

    let beta = solve_least_squares(&x, &y)?;
    Some(Calibration::new(beta[1], beta[0]))
}

/// Sum of squared residuals of `calibration` over the given points.
pub fn sum_squared_residuals(calibration: &Calibration, raw: &[f64], reference: &[f64]) -> f64 {
    raw.iter()
        .zip(reference)
        .map(|(&x, &y)| {
            let r = y - calibration.apply(x);
            r * r
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn svd_fit_rejects_identical_raw_readings() {
        assert!(fit_linear_svd(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(fit_linear_svd(&[1.0], &[1.0]).is_none());
    }

    #[test]
    fn residuals_vanish_on_exact_line() {
        let cal = Calibration::new(2.0, -1.0);
        let raw = [0.0, 1.0, 2.0, 3.0];
        let reference: Vec<f64> = raw.iter().map(|&x| cal.apply(x)).collect();
        assert_eq!(sum_squared_residuals(&cal, &raw, &reference), 0.0);
        assert!(sum_squared_residuals(&Calibration::new(2.0, 0.0), &raw, &reference) > 0.0);
    }
}
