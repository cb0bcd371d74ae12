//! Converts screen events into training examples.
//!
//! Events arrive from the embedding application's capture-level intake,
//! so they are observed regardless of application-level cancellation.
//! Clicks always produce a training example immediately — the cursor is
//! presumed at the clicked target. Moves are rate-limited to bound
//! training-set growth under continuous motion. Either way, an event
//! with no current eye features is silently dropped.

use gazekit_common::clock::RateController;
use gazekit_model::{DataPoint, EventSource, EyeFeatures, Point2D};

/// A screen interaction observed by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEvent {
    /// Screen position of the event in pixels.
    pub x: f64,
    pub y: f64,

    /// Click or move.
    pub source: EventSource,
}

impl ScreenEvent {
    pub fn click(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            source: EventSource::Click,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            source: EventSource::Move,
        }
    }
}

/// Stateful event-to-example converter.
pub struct EventRecorder {
    move_rate: RateController,
}

impl EventRecorder {
    pub fn new(move_tick_ms: f64) -> Self {
        Self {
            move_rate: RateController::new(move_tick_ms),
        }
    }

    /// Observe one event against the current eye-feature snapshot.
    /// Returns the training example to record, if any.
    pub fn observe(
        &mut self,
        event: &ScreenEvent,
        features: Option<&EyeFeatures>,
        now_ms: f64,
    ) -> Option<DataPoint> {
        let Some(features) = features else {
            tracing::debug!(source = ?event.source, "Dropping event with no eye features");
            return None;
        };

        match event.source {
            EventSource::Click => {}
            EventSource::Move => {
                if !self.move_rate.should_tick(now_ms) {
                    return None;
                }
            }
        }

        Some(DataPoint::new(
            features.clone(),
            Point2D::new(event.x, event.y),
            event.source,
            now_ms,
        ))
    }

    /// Forget rate-limiter state (e.g. on clear-data).
    pub fn reset(&mut self) {
        self.move_rate.reset();
    }
}
