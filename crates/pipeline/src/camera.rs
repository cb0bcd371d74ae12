//! Camera source capability.
//!
//! The pipeline owns exactly one camera for its Running lifetime and
//! releases it deterministically on `end()`. Sources are polled: the
//! scheduler sleeps briefly between polls and guards the wait with a
//! last-resort timeout.

use std::sync::{Arc, Mutex};

use gazekit_common::config::CameraDefaults;
use gazekit_common::error::{GazekitError, GazekitResult};
use gazekit_tracker::VideoFrame;

/// A live camera stream.
pub trait CameraSource: Send {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Poll for the next frame. `Ok(None)` means no frame is ready yet.
    fn next_frame(&mut self) -> GazekitResult<Option<VideoFrame>>;

    /// Release the underlying stream. Called exactly once by the
    /// pipeline when the session ends.
    fn release(&mut self);
}

/// Synthetic frame dimensions.
const SYNTH_WIDTH: u32 = 64;
const SYNTH_HEIGHT: u32 = 48;

/// Shared handle for steering a [`SyntheticCamera`]'s encoded gaze
/// target from outside the pipeline (tests, demos).
#[derive(Debug, Clone)]
pub struct SyntheticTarget(Arc<Mutex<(f64, f64)>>);

impl SyntheticTarget {
    /// Set the normalized target the camera encodes into its frames.
    pub fn set(&self, x_norm: f64, y_norm: f64) {
        let mut guard = self.0.lock().expect("target lock poisoned");
        *guard = (x_norm.clamp(0.0, 1.0), y_norm.clamp(0.0, 1.0));
    }

    fn get(&self) -> (f64, f64) {
        *self.0.lock().expect("target lock poisoned")
    }
}

/// Deterministic camera producing frames that encode a normalized gaze
/// target: the left half of the frame carries the x coordinate as luma,
/// the right half the y coordinate. Paired with the synthetic tracker
/// this yields eye features that are a known linear function of the
/// target, so an end-to-end run has learnable, verifiable behavior.
pub struct SyntheticCamera {
    target: SyntheticTarget,
    frame_index: u64,
    frame_interval_ms: f64,
    released: bool,
}

impl SyntheticCamera {
    /// Open a synthetic camera. The constraints are accepted as-is;
    /// synthetic frames always use a fixed internal resolution.
    pub fn open(_constraints: &CameraDefaults) -> GazekitResult<Self> {
        let target = SyntheticTarget(Arc::new(Mutex::new((0.5, 0.5))));
        Ok(Self {
            target,
            frame_index: 0,
            frame_interval_ms: 1000.0 / 60.0,
            released: false,
        })
    }

    /// Handle for steering the encoded target.
    pub fn target_handle(&self) -> SyntheticTarget {
        self.target.clone()
    }

    fn render(&self, x_norm: f64, y_norm: f64) -> VideoFrame {
        let left = (x_norm * 255.0).round() as u8;
        let right = (y_norm * 255.0).round() as u8;
        let mut pixels = vec![0u8; (SYNTH_WIDTH * SYNTH_HEIGHT) as usize];
        for y in 0..SYNTH_HEIGHT {
            for x in 0..SYNTH_WIDTH {
                pixels[(y * SYNTH_WIDTH + x) as usize] =
                    if x < SYNTH_WIDTH / 2 { left } else { right };
            }
        }
        let timestamp_ms = self.frame_index as f64 * self.frame_interval_ms;
        VideoFrame::new(SYNTH_WIDTH, SYNTH_HEIGHT, pixels, timestamp_ms)
            .expect("synthetic buffer matches dimensions")
    }
}

impl CameraSource for SyntheticCamera {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn next_frame(&mut self) -> GazekitResult<Option<VideoFrame>> {
        if self.released {
            return Err(GazekitError::media_access(
                "synthetic camera already released",
            ));
        }
        let (x_norm, y_norm) = self.target.get();
        let frame = self.render(x_norm, y_norm);
        self.frame_index += 1;
        Ok(Some(frame))
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_encode_target() {
        let mut camera = SyntheticCamera::open(&CameraDefaults::default()).unwrap();
        camera.target_handle().set(0.2, 0.8);
        let frame = camera.next_frame().unwrap().unwrap();
        assert_eq!(frame.luma(0, 0), (0.2f64 * 255.0).round() as u8);
        assert_eq!(
            frame.luma(SYNTH_WIDTH - 1, 0),
            (0.8f64 * 255.0).round() as u8
        );
    }

    #[test]
    fn test_release_stops_frames() {
        let mut camera = SyntheticCamera::open(&CameraDefaults::default()).unwrap();
        camera.release();
        assert!(camera.next_frame().is_err());
    }

    #[test]
    fn test_target_clamped() {
        let camera = SyntheticCamera::open(&CameraDefaults::default()).unwrap();
        let handle = camera.target_handle();
        handle.set(-1.0, 2.0);
        assert_eq!(handle.get(), (0.0, 1.0));
    }

    #[test]
    fn test_timestamps_advance() {
        let mut camera = SyntheticCamera::open(&CameraDefaults::default()).unwrap();
        let a = camera.next_frame().unwrap().unwrap();
        let b = camera.next_frame().unwrap().unwrap();
        assert!(b.timestamp_ms > a.timestamp_ms);
    }
}
