//! Ridge regressor with recency- and event-type-weighted samples.
//!
//! Solves `(XᵀΩX + λI)W = XᵀΩY` where Ω is diagonal. The weight of a
//! sample is the product of an event-type multiplier (click-sourced
//! samples count more than move-sourced ones) and an exponential
//! half-life decay of its age relative to the newest retained sample.

use gazekit_model::{DataPoint, DataWindow, EventSource, EyeFeatures, Point2D, TrainingSet};

use crate::basic::{DEFAULT_LAMBDA, DEFAULT_TRAINING_CAPACITY};
use crate::ridge::{fit_weighted, RidgeWeights};
use crate::GazeRegressor;

/// How per-sample weights are fused from recency and event type.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightConfig {
    /// Age at which a sample's recency factor halves (ms).
    pub half_life_ms: f64,

    /// Multiplier for click-sourced samples.
    pub click_weight: f64,

    /// Multiplier for move-sourced samples.
    pub move_weight: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            half_life_ms: 30_000.0,
            click_weight: 2.0,
            move_weight: 1.0,
        }
    }
}

impl WeightConfig {
    /// Weight of a sample whose age is measured against `newest_ms`,
    /// the timestamp of the most recent retained sample.
    pub fn sample_weight(&self, point: &DataPoint, newest_ms: f64) -> f64 {
        let multiplier = match point.source {
            EventSource::Click => self.click_weight,
            EventSource::Move => self.move_weight,
        };
        let age_ms = (newest_ms - point.timestamp_ms).max(0.0);
        multiplier * 0.5_f64.powf(age_ms / self.half_life_ms)
    }
}

/// Online weighted ridge regressor.
pub struct WeightedRidgeRegressor {
    lambda: f64,
    config: WeightConfig,
    window: DataWindow<DataPoint>,
    weights: Option<RidgeWeights>,
}

impl WeightedRidgeRegressor {
    pub fn new(lambda: f64, training_capacity: usize, config: WeightConfig) -> Self {
        Self {
            lambda,
            config,
            window: DataWindow::new(training_capacity),
            weights: None,
        }
    }

    pub fn training_len(&self) -> usize {
        self.window.len()
    }

    fn refit(&mut self) {
        if self.window.is_empty() {
            self.weights = None;
            return;
        }
        let points = self.window.to_vec();
        // Ages are relative to the newest sample, so a refit is
        // deterministic for a given window regardless of wall time.
        let newest_ms = points
            .last()
            .map(|p| p.timestamp_ms)
            .unwrap_or_default();
        let omega: Vec<f64> = points
            .iter()
            .map(|p| self.config.sample_weight(p, newest_ms))
            .collect();
        match fit_weighted(&points, Some(&omega), self.lambda) {
            Ok(weights) => self.weights = Some(weights),
            Err(e) => {
                tracing::warn!(error = %e, "Weighted ridge refit failed; keeping previous weights");
            }
        }
    }
}

impl Default for WeightedRidgeRegressor {
    fn default() -> Self {
        Self::new(
            DEFAULT_LAMBDA,
            DEFAULT_TRAINING_CAPACITY,
            WeightConfig::default(),
        )
    }
}

impl GazeRegressor for WeightedRidgeRegressor {
    fn name(&self) -> &str {
        "weighted_ridge"
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
