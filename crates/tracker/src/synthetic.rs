//! Deterministic synthetic tracker.
//!
//! Samples fixed eye regions from the frame and fills each patch with
//! the region's mean luma. Paired with a synthetic camera that encodes a
//! known gaze target into those regions, this gives tests and the CLI
//! demo an end-to-end pipeline with predictable behavior and no camera
//! or face-detection dependency.

use gazekit_common::error::GazekitResult;
use gazekit_model::{EyeFeatures, EyePatch, EyeRect};

use crate::{FaceTracker, VideoFrame};

/// Fraction of frame width where the left eye region starts.
const LEFT_EYE_X: f64 = 0.30;

/// Fraction of frame width where the right eye region starts.
const RIGHT_EYE_X: f64 = 0.55;

/// Fraction of frame height where both eye regions start.
const EYE_Y: f64 = 0.40;

/// Eye region size as fractions of the frame.
const EYE_W: f64 = 0.15;
const EYE_H: f64 = 0.10;

/// Tracker that reads synthetic eye regions from fixed frame locations.
#[derive(Debug, Default)]
pub struct SyntheticTracker {
    last_landmarks: Vec<[f64; 2]>,
}

impl SyntheticTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn eye_rect(frame: &VideoFrame, x_frac: f64) -> EyeRect {
        let w = frame.width as f64;
        let h = frame.height as f64;
        EyeRect::new(x_frac * w, EYE_Y * h, EYE_W * w, EYE_H * h)
    }

    fn eye_patch(frame: &VideoFrame, rect: EyeRect) -> EyePatch {
        let mean = frame.mean_luma(
            rect.x as u32,
            rect.y as u32,
            rect.width.max(1.0) as u32,
            rect.height.max(1.0) as u32,
        );
        EyePatch::uniform(rect, mean)
    }
}

impl FaceTracker for SyntheticTracker {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn extract(&mut self, frame: &VideoFrame) -> GazekitResult<Option<EyeFeatures>> {
        if frame.width == 0 || frame.height == 0 {
            return Ok(None);
        }

        let left_rect = Self::eye_rect(frame, LEFT_EYE_X);
        let right_rect = Self::eye_rect(frame, RIGHT_EYE_X);

        let left = Self::eye_patch(frame, left_rect);
        let right = Self::eye_patch(frame, right_rect);

        self.last_landmarks = vec![
            [
                left_rect.x + left_rect.width / 2.0,
                left_rect.y + left_rect.height / 2.0,
            ],
            [
                right_rect.x + right_rect.width / 2.0,
                right_rect.y + right_rect.height / 2.0,
            ],
        ];

        Ok(Some(EyeFeatures::new(
            left,
            right,
            frame.width,
            frame.height,
        )))
    }

    fn reset(&mut self) {
        self.last_landmarks.clear();
    }

    fn landmarks(&self) -> Vec<[f64; 2]> {
        self.last_landmarks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_halves(left_value: u8, right_value: u8) -> VideoFrame {
        let (w, h) = (64u32, 48u32);
        let mut pixels = vec![0u8; (w * h) as usize];
        for y in 0..h {
            for x in 0..w {
                pixels[(y * w + x) as usize] = if x < w / 2 { left_value } else { right_value };
            }
        }
        VideoFrame::new(w, h, pixels, 0.0).unwrap()
    }

    #[test]
    fn test_patches_reflect_frame_content() {
        let mut tracker = SyntheticTracker::new();
        let frame = frame_with_halves(51, 204);
        let features = tracker.extract(&frame).unwrap().unwrap();

        // Left eye region sits in the left half, right eye region in
        // the right half.
        assert!((features.left.pixels()[0] - 0.2).abs() < 0.05);
        assert!((features.right.pixels()[0] - 0.8).abs() < 0.05);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let mut tracker = SyntheticTracker::new();
        let frame = frame_with_halves(100, 150);
        let a = tracker.extract(&frame).unwrap().unwrap();
        let b = tracker.extract(&frame).unwrap().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_frame_yields_no_features() {
        let mut tracker = SyntheticTracker::new();
        let frame = VideoFrame::new(0, 0, Vec::new(), 0.0).unwrap();
        assert!(tracker.extract(&frame).unwrap().is_none());
    }

    #[test]
    fn test_landmarks_follow_extraction() {
        let mut tracker = SyntheticTracker::new();
        assert!(tracker.landmarks().is_empty());
        let frame = frame_with_halves(10, 20);
        tracker.extract(&frame).unwrap();
        assert_eq!(tracker.landmarks().len(), 2);
        tracker.reset();
        assert!(tracker.landmarks().is_empty());
    }
}
