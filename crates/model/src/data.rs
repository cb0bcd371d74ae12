//! Training points, predictions, and calibration records.

use serde::{Deserialize, Serialize};

use crate::features::EyeFeatures;
use crate::point::Point2D;

/// The user interaction that produced a training example.
///
/// Regression variants may weight these differently: a click is
/// high-confidence ground truth (the cursor is presumed at the clicked
/// target), a move is weaker evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Click,
    Move,
}

/// One training example: eye features paired with the screen position
/// the user was presumed to be looking at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub features: EyeFeatures,

    /// Screen position of the generating event.
    pub screen: Point2D,

    /// What kind of event generated this example.
    pub source: EventSource,

    /// Milliseconds since session start when the example was recorded.
    pub timestamp_ms: f64,
}

impl DataPoint {
    pub fn new(
        features: EyeFeatures,
        screen: Point2D,
        source: EventSource,
        timestamp_ms: f64,
    ) -> Self {
        Self {
            features,
            screen,
            source,
            timestamp_ms,
        }
    }
}

/// One pipeline iteration's gaze estimate.
///
/// `x`/`y` are the smoothed coordinates handed to the listener. `all`
/// carries each active regressor's raw prediction when an ensemble is
/// running (first entry is the primary).
#[derive(Debug, Clone, PartialEq)]
pub struct GazePrediction {
    pub x: f64,
    pub y: f64,

    /// Features the estimate was computed from.
    pub features: EyeFeatures,

    /// Raw per-regressor predictions, primary first.
    pub all: Vec<Point2D>,
}

impl GazePrediction {
    /// The smoothed coordinates as a point.
    pub fn point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// The exportable training data of a regressor: every retained point
/// with its event source. This is the payload moved between regressors
/// when the active strategy is swapped or a secondary model is seeded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    pub points: Vec<DataPoint>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<DataPoint>> for TrainingSet {
    fn from(points: Vec<DataPoint>) -> Self {
        Self { points }
    }
}

/// The persisted `training_data` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time the record was written (ISO 8601).
    pub saved_at: String,

    /// The collected training data.
    pub training: TrainingSet,
}

impl CalibrationRecord {
    pub const SCHEMA_VERSION: &'static str = "1.0";

    pub fn new(saved_at: impl Into<String>, training: TrainingSet) -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION.to_string(),
            saved_at: saved_at.into(),
            training,
        }
    }
}
