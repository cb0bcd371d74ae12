//! Ridge regressor backed by the background solver actor.
//!
//! Identical math to [`crate::RidgeRegressor`], but the solve runs on
//! the worker task. `predict` applies the most recently completed
//! solve's weights even if a newer `add_data` has not finished
//! refitting — an explicit eventual-consistency contract, never a
//! blocking wait.

use gazekit_model::{DataPoint, DataWindow, EyeFeatures, Point2D, TrainingSet};

use crate::basic::{DEFAULT_LAMBDA, DEFAULT_TRAINING_CAPACITY};
use crate::worker::{SolveRequest, SolverHandle};
use crate::GazeRegressor;

pub struct ThreadedRidgeRegressor {
    handle: SolverHandle,
    // Local mirror of the worker's training window so data export never
    // has to round-trip through the channel.
    mirror: DataWindow<DataPoint>,
}

impl ThreadedRidgeRegressor {
    /// Spawn the solver worker. Must be called within a tokio runtime.
    pub fn new(lambda: f64, training_capacity: usize) -> Self {
        Self {
            handle: SolverHandle::spawn(lambda, training_capacity),
            mirror: DataWindow::new(training_capacity),
        }
    }

    pub fn training_len(&self) -> usize {
        self.mirror.len()
    }

    /// Predict through the worker channel, ordered behind every
    /// previously submitted add. Used for out-of-band predictions where
    /// the caller wants the freshest possible fit and can afford to
    /// await it; the real-time path uses [`GazeRegressor::predict`].
    pub async fn predict_in_order(&self, features: &EyeFeatures) -> Option<Point2D> {
        let (reply_tx, reply_rx) = tokio::sync::oneshot::channel();
        if !self.handle.submit(SolveRequest::Predict {
            features: features.clone(),
            reply: reply_tx,
        }) {
            return None;
        }
        // A dropped reply means the worker shut down mid-request.
        reply_rx.await.unwrap_or(None)
    }

    /// Stop the solver worker. Predictions keep returning the last
    /// published weights; adds become no-ops.
    pub fn stop_worker(&self) {
        self.handle.shutdown();
    }
}

impl Default for ThreadedRidgeRegressor {
    fn default() -> Self {
        Self::new(DEFAULT_LAMBDA, DEFAULT_TRAINING_CAPACITY)
    }
}

impl GazeRegressor for ThreadedRidgeRegressor {
    fn name(&self) -> &str {
        "threaded_ridge"
    }

    fn add_data(&mut self, point: DataPoint) {
        self.mirror.push(point.clone());
        self.handle.submit(SolveRequest::Add(point));
    }

    fn predict(&self, features: &EyeFeatures) -> Option<Point2D> {
        self.handle.latest_weights().map(|w| w.predict(features))
    }

    fn export_data(&self) -> TrainingSet {
        TrainingSet::from(self.mirror.to_vec())
    }

    fn import_data(&mut self, data: TrainingSet) {
        self.mirror.clear();
        for point in &data.points {
            self.mirror.push(point.clone());
        }
        self.handle.submit(SolveRequest::Import(data));
    }

    fn reset(&mut self) {
        self.mirror.clear();
        self.handle.submit(SolveRequest::Reset);
    }
}

impl Drop for ThreadedRidgeRegressor {
    fn drop(&mut self) {
        self.handle.shutdown();
    }
}
