//! Synchronous ridge regressor with uniform sample weights.

use gazekit_model::{DataPoint, DataWindow, EyeFeatures, Point2D, TrainingSet};

use crate::ridge::{fit, RidgeWeights};
use crate::GazeRegressor;

/// Default bound on retained training points.
pub const DEFAULT_TRAINING_CAPACITY: usize = 700;

/// Default regularization parameter.
pub const DEFAULT_LAMBDA: f64 = 1e-5;

/// Online ridge regressor: every `add_data` appends to a bounded FIFO
/// training window and refits synchronously.
pub struct RidgeRegressor {
    lambda: f64,
    window: DataWindow<DataPoint>,
    weights: Option<RidgeWeights>,
}

impl RidgeRegressor {
    pub fn new(lambda: f64, training_capacity: usize) -> Self {
        Self {
            lambda,
            window: DataWindow::new(training_capacity),
            weights: None,
        }
    }

    /// Number of retained training points.
    pub fn training_len(&self) -> usize {
        self.window.len()
    }

    fn refit(&mut self) {
        if self.window.is_empty() {
            self.weights = None;
            return;
        }
        let points = self.window.to_vec();
        match fit(&points, self.lambda) {
            Ok(weights) => self.weights = Some(weights),
            Err(e) => {
                // Keep the previous fit; a degraded model beats a
                // corrupt one.
                tracing::warn!(error = %e, "Ridge refit failed; keeping previous weights");
            }
        }
    }
}

impl Default for RidgeRegressor {
    fn default() -> Self {
        Self::new(DEFAULT_LAMBDA, DEFAULT_TRAINING_CAPACITY)
    }
}

impl GazeRegressor for RidgeRegressor {
    fn name(&self) -> &str {
        "ridge"
    }

    fn add_data(&mut self, point: DataPoint) {
        self.window.push(point);
        self.refit();
    }

    fn predict(&self, features: &EyeFeatures) -> Option<Point2D> {
        self.weights.as_ref().map(|w| w.predict(features))
    }

    fn export_data(&self) -> TrainingSet {
        TrainingSet::from(self.window.to_vec())
    }

    fn import_data(&mut self, data: TrainingSet) {
        self.window.clear();
        for point in data.points {
            self.window.push(point);
        }
        self.refit();
    }

    fn reset(&mut self) {
        self.window.clear();
        self.weights = None;
    }
}
