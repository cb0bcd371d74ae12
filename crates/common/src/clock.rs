//! Clock and timing utilities for the gaze pipeline.
//!
//! The pipeline is anchored to a monotonic clock epoch recorded when the
//! session begins. Listener callbacks receive elapsed time relative to
//! that epoch, and the event recorder throttles move events against it.

use std::time::Instant;

/// A pipeline clock that provides monotonic timestamps relative to a
/// fixed epoch (the moment the session began).
#[derive(Debug, Clone)]
pub struct PipelineClock {
    /// The instant the session began.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl PipelineClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Milliseconds elapsed since the session began.
    pub fn elapsed_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1_000.0
    }

    /// Seconds elapsed since the session began.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }
}

/// Throttle for move-event sampling.
///
/// Clicks are always recorded; moves pass only when at least
/// `tick_interval_ms` has elapsed since the last recorded move. This
/// bounds training-set growth under continuous mouse motion.
#[derive(Debug)]
pub struct RateController {
    tick_interval_ms: f64,
    last_tick_ms: Option<f64>,
}

impl RateController {
    /// Create a controller with the given minimum interval between ticks.
    pub fn new(tick_interval_ms: f64) -> Self {
        Self {
            tick_interval_ms,
            last_tick_ms: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, now_ms: f64) -> bool {
        match self.last_tick_ms {
            None => {
                self.last_tick_ms = Some(now_ms);
                true
            }
            Some(last) if now_ms >= last + self.tick_interval_ms => {
                self.last_tick_ms = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    /// Minimum interval between ticks in milliseconds.
    pub fn interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    /// Forget the last tick so the next event passes unconditionally.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }
}
