//! Regularized least-squares solve.
//!
//! Fits weights minimizing `‖XW − Y‖² + λ‖W‖²` via the normal equations
//! `(XᵀX + λI)W = XᵀY`. Each design row is a feature vector with an
//! appended bias term; Y has one column per screen axis. λ > 0 keeps the
//! system positive definite even when the feature set is rank-deficient
//! (near-duplicate gaze samples), so the solve cannot blow up on
//! degenerate calibration data.

use nalgebra::{Cholesky, DMatrix, DVector};

use gazekit_common::error::{GazekitError, GazekitResult};
use gazekit_model::{DataPoint, EyeFeatures, Point2D, FEATURE_LEN};

/// Design-row length: feature vector plus bias term.
pub const DESIGN_LEN: usize = FEATURE_LEN + 1;

/// Fitted ridge weights for both screen axes.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeWeights {
    wx: DVector<f64>,
    wy: DVector<f64>,
}

impl RidgeWeights {
    /// Apply the weights to a bias-augmented feature vector.
    pub fn predict(&self, features: &EyeFeatures) -> Point2D {
        let row = design_row(features);
        Point2D::new(row.dot(&self.wx), row.dot(&self.wy))
    }
}

/// Feature vector with the bias term appended.
fn design_row(features: &EyeFeatures) -> DVector<f64> {
    let mut row = features.feature_vector();
    row.push(1.0);
    DVector::from_vec(row)
}

/// Fit ridge weights over uniformly weighted samples.
pub fn fit(points: &[DataPoint], lambda: f64) -> GazekitResult<RidgeWeights> {
    fit_weighted(points, None, lambda)
}

/// Fit ridge weights with optional per-sample weights Ω, solving
/// `(XᵀΩX + λI)W = XᵀΩY`.
///
/// `sample_weights`, when given, must be one positive value per point.
pub fn fit_weighted(
    points: &[DataPoint],
    sample_weights: Option<&[f64]>,
    lambda: f64,
) -> GazekitResult<RidgeWeights> {
    if points.is_empty() {
        return Err(GazekitError::pipeline(
            "cannot fit regression on an empty training set",
        ));
    }
    if let Some(weights) = sample_weights {
        if weights.len() != points.len() {
            return Err(GazekitError::pipeline(format!(
                "sample weight count {} does not match point count {}",
                weights.len(),
                points.len()
            )));
        }
    }

    // Accumulate XᵀΩX and XᵀΩY directly; the design matrix itself is
    // never materialized. d = 121, so the Gram matrix stays small no
    // matter how many samples are retained.
    let mut gram = DMatrix::<f64>::zeros(DESIGN_LEN, DESIGN_LEN);
    let mut xty_x = DVector::<f64>::zeros(DESIGN_LEN);
    let mut xty_y = DVector::<f64>::zeros(DESIGN_LEN);

    for (i, point) in points.iter().enumerate() {
        let row = design_row(&point.features);
        let omega = sample_weights.map(|w| w[i]).unwrap_or(1.0);
        gram.ger(omega, &row, &row, 1.0);
        xty_x.axpy(omega * point.screen.x, &row, 1.0);
        xty_y.axpy(omega * point.screen.y, &row, 1.0);
    }

    for i in 0..DESIGN_LEN {
        gram[(i, i)] += lambda;
    }

    let wx;
    let wy;
    match Cholesky::new(gram.clone()) {
        Some(chol) => {
            wx = chol.solve(&xty_x);
            wy = chol.solve(&xty_y);
        }
        None => {
            // λ > 0 should make the system positive definite; reaching
            // this branch means severely ill-conditioned input. Fall
            // back to a full LU decomposition before giving up.
            let lu = gram.lu();
            wx = lu.solve(&xty_x).ok_or_else(|| {
                GazekitError::pipeline("ridge normal equations are singular")
            })?;
            wy = lu.solve(&xty_y).ok_or_else(|| {
                GazekitError::pipeline("ridge normal equations are singular")
            })?;
        }
    }

    Ok(RidgeWeights { wx, wy })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazekit_model::{EventSource, EyePatch, EyeRect, PATCH_LEN};

    // Deterministic pseudo-random pixel patches so the design matrix has
    // full column rank without pulling in an RNG dependency.
    fn lcg_patch(seed: &mut u64) -> Vec<f64> {
        (0..PATCH_LEN)
            .map(|_| {
                *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((*seed >> 33) as f64) / (u32::MAX as f64)
            })
            .collect()
    }

    fn synthetic_point(seed: &mut u64, timestamp_ms: f64) -> DataPoint {
        let left = EyePatch::new(
            EyeRect::new(100.0, 80.0, 20.0, 12.0),
            lcg_patch(seed),
        )
        .unwrap();
        let right = EyePatch::new(
            EyeRect::new(160.0, 82.0, 20.0, 12.0),
            lcg_patch(seed),
        )
        .unwrap();
        let features = EyeFeatures::new(left, right, 640, 480);

        // Known linear map: target = A·features + b, with A a sparse
        // two-row map and b a fixed offset.
        let v = features.feature_vector();
        let x = 400.0 * v[0] + 250.0 * v[40] - 120.0 * v[90] + 300.0;
        let y = -180.0 * v[5] + 90.0 * v[70] + 220.0 * v[110] + 150.0;

        DataPoint::new(
            features,
            Point2D::new(x, y),
            EventSource::Click,
            timestamp_ms,
        )
    }

    fn synthetic_set(n: usize) -> Vec<DataPoint> {
        let mut seed = 0x5eed_cafe_u64;
        (0..n)
            .map(|i| synthetic_point(&mut seed, i as f64 * 16.0))
            .collect()
    }

    #[test]
    fn test_fit_rejects_empty_set() {
        assert!(fit(&[], 1e-5).is_err());
    }

    #[test]
    fn test_fit_recovers_linear_map_as_lambda_vanishes() {
        let points = synthetic_set(300);
        let weights = fit(&points, 1e-8).unwrap();

        for point in points.iter().step_by(17) {
            let prediction = weights.predict(&point.features);
            assert!(
                (prediction.x - point.screen.x).abs() < 1e-3,
                "x: {} vs {}",
                prediction.x,
                point.screen.x
            );
            assert!(
                (prediction.y - point.screen.y).abs() < 1e-3,
                "y: {} vs {}",
                prediction.y,
                point.screen.y
            );
        }
    }

    #[test]
    fn test_predict_is_deterministic() {
        let points = synthetic_set(150);
        let weights = fit(&points, 1e-5).unwrap();
        let first = weights.predict(&points[3].features);
        for _ in 0..5 {
            assert_eq!(weights.predict(&points[3].features), first);
        }
    }

    #[test]
    fn test_rank_deficient_set_still_solves() {
        // Every sample identical: X has rank 1, XᵀX is singular, and
        // only the λI term keeps the system solvable.
        let mut seed = 42u64;
        let point = synthetic_point(&mut seed, 0.0);
        let points = vec![point.clone(); 10];
        let weights = fit(&points, 1e-5).unwrap();
        let prediction = weights.predict(&point.features);
        assert!((prediction.x - point.screen.x).abs() < 1.0);
        assert!((prediction.y - point.screen.y).abs() < 1.0);
    }

    #[test]
    fn test_weighted_fit_prefers_heavier_samples() {
        // Two contradictory clusters at the same features; the heavier
        // one should dominate the prediction.
        let mut seed = 7u64;
        let a = synthetic_point(&mut seed, 0.0);
        let mut b = a.clone();
        b.screen = Point2D::new(a.screen.x + 400.0, a.screen.y + 400.0);

        let points = vec![a.clone(), b.clone()];
        let weights = fit_weighted(&points, Some(&[1.0, 99.0]), 1e-5).unwrap();
        let prediction = weights.predict(&a.features);

        assert!((prediction.x - b.screen.x).abs() < (prediction.x - a.screen.x).abs());
        assert!((prediction.y - b.screen.y).abs() < (prediction.y - a.screen.y).abs());
    }

    #[test]
    fn test_weight_count_mismatch_is_an_error() {
        let points = synthetic_set(3);
        assert!(fit_weighted(&points, Some(&[1.0, 2.0]), 1e-5).is_err());
    }
}
