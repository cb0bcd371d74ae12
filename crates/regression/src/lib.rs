//! GazeKit Regression
//!
//! Online regression models mapping eye features to screen coordinates.
//! All variants solve the same regularized least-squares problem
//! `W = (XᵀX + λI)⁻¹XᵀY`; they differ in how samples are weighted and
//! where the solve runs:
//!
//! - [`RidgeRegressor`] — uniform weights, synchronous refit on add
//! - [`WeightedRidgeRegressor`] — recency-decayed, event-type-weighted
//! - [`ThreadedRidgeRegressor`] — solve delegated to a background task;
//!   predictions use the last completed solve (eventual consistency)

pub mod basic;
pub mod ridge;
pub mod threaded;
pub mod weighted;
pub mod worker;

pub use basic::RidgeRegressor;
pub use ridge::RidgeWeights;
pub use threaded::ThreadedRidgeRegressor;
pub use weighted::{WeightConfig, WeightedRidgeRegressor};

use gazekit_model::{DataPoint, EyeFeatures, Point2D, TrainingSet};

/// A gaze regression model.
///
/// Implementations own their (bounded) training data. `predict` must be
/// deterministic for fixed model state and must return `None` rather
/// than fabricate a value from an empty training set.
pub trait GazeRegressor: Send {
    /// Model name as registered with the session.
    fn name(&self) -> &str;

    /// Ingest one training example. May refit synchronously or hand the
    /// work to a background context; either way it must not block on
    /// the solve completing.
    fn add_data(&mut self, point: DataPoint);

    /// Estimate the on-screen gaze position for the given features.
    /// Returns `None` while no fit exists.
    fn predict(&self, features: &EyeFeatures) -> Option<Point2D>;

    /// Export the retained training data, e.g. to seed another model.
    fn export_data(&self) -> TrainingSet;

    /// Replace the retained training data wholesale and refit.
    fn import_data(&mut self, data: TrainingSet);

    /// Drop all training data and fitted state.
    fn reset(&mut self);
}
