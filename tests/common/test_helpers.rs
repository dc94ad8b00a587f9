//! Helper functions for integration tests

use lbm_rs::solver::{LatticeBoltzmannSolver, LatticeConfiguration};
use nalgebra::{DMatrix, DVector};

/// Assert that two per-site fields are close (within tolerance)
pub fn assert_fields_close(
    actual: &DVector<f64>,
    expected: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(actual.len(), expected.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let error = relative_error(a, e);
        assert!(
            error < tolerance,
            "{}: site {} is {} vs {} (relative error {}, tolerance {})",
            message, i, a, e, error, tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Density and velocity of a spatially uniform lattice after `steps` steps
/// with `omega = 1`
///
/// With full relaxation the populations equal the equilibrium, and a uniform
/// row streams onto itself, so every step maps
///
/// ```text
/// rho' = rho * (13/6 + 2u + 2u^2) * exp(epsilon)
/// u'   = (1 + 3u) / (13/6 + 2u + 2u^2)
/// ```
pub fn uniform_recurrence(rho: f64, u: f64, epsilon: f64, steps: usize) -> (f64, f64) {
    (0..steps).fold((rho, u), |(rho, u), _| {
        let growth = 13.0 / 6.0 + 2.0 * u + 2.0 * u * u;
        (rho * growth * epsilon.exp(), (1.0 + 3.0 * u) / growth)
    })
}

/// Populations with a distinct ramp per direction, all positive
pub fn ramp_distributions(nx: usize) -> DMatrix<f64> {
    DMatrix::from_fn(3, nx, |d, i| (d as f64 + 1.0) * 10.0 + i as f64)
}

/// Solver from the common scenario parameters, unit spacing
pub fn create_solver(nx: usize, nt: usize, omega: f64) -> LatticeBoltzmannSolver {
    LatticeBoltzmannSolver::with_configuration(LatticeConfiguration::new(nx, nt, omega))
        .expect("valid test configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_uniform_recurrence_first_step() {
        let (rho, u) = uniform_recurrence(1.0, 0.0, 0.0, 1);
        assert!((rho - 13.0 / 6.0).abs() < 1e-14);
        assert!((u - 6.0 / 13.0).abs() < 1e-14);
    }
}
