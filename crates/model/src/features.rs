//! Per-frame eye feature types.
//!
//! A tracker reduces each video frame to two small grayscale eye patches
//! plus their bounding rectangles in video-image pixel coordinates. The
//! patches are resampled to a fixed 10×6 grid so every frame yields a
//! feature vector of constant length regardless of camera resolution.

use serde::{Deserialize, Serialize};

/// Width of a resampled eye patch in pixels.
pub const PATCH_WIDTH: usize = 10;

/// Height of a resampled eye patch in pixels.
pub const PATCH_HEIGHT: usize = 6;

/// Values per eye patch.
pub const PATCH_LEN: usize = PATCH_WIDTH * PATCH_HEIGHT;

/// Values in a full feature vector (both eyes).
pub const FEATURE_LEN: usize = 2 * PATCH_LEN;

/// Axis-aligned bounding rectangle in video-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EyeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl EyeRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// One eye: its bounding rectangle and a resampled grayscale patch.
///
/// Pixel values are normalized to `[0.0, 1.0]` and stored row-major,
/// exactly `PATCH_LEN` of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyePatch {
    pub rect: EyeRect,
    pixels: Vec<f64>,
}

impl EyePatch {
    /// Build a patch from exactly `PATCH_LEN` normalized pixel values.
    /// Returns `None` for any other length.
    pub fn new(rect: EyeRect, pixels: Vec<f64>) -> Option<Self> {
        if pixels.len() != PATCH_LEN {
            return None;
        }
        Some(Self { rect, pixels })
    }

    /// A patch filled with a single value. Handy for tests and synthetic
    /// trackers.
    pub fn uniform(rect: EyeRect, value: f64) -> Self {
        Self {
            rect,
            pixels: vec![value; PATCH_LEN],
        }
    }

    /// Normalized grayscale pixel values, row-major, `PATCH_LEN` long.
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }
}

/// Both eyes for one video frame, plus the frame dimensions they were
/// extracted from. Ephemeral: recomputed every iteration, never persisted
/// outside of training points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeFeatures {
    pub left: EyePatch,
    pub right: EyePatch,

    /// Width of the source frame in pixels.
    pub frame_width: u32,

    /// Height of the source frame in pixels.
    pub frame_height: u32,
}

impl EyeFeatures {
    pub fn new(left: EyePatch, right: EyePatch, frame_width: u32, frame_height: u32) -> Self {
        Self {
            left,
            right,
            frame_width,
            frame_height,
        }
    }

    /// Concatenated left+right patch values: the regression input,
    /// `FEATURE_LEN` long.
    pub fn feature_vector(&self) -> Vec<f64> {
        let mut v = Vec::with_capacity(FEATURE_LEN);
        v.extend_from_slice(self.left.pixels());
        v.extend_from_slice(self.right.pixels());
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features() -> EyeFeatures {
        let left = EyePatch::uniform(EyeRect::new(100.0, 80.0, 20.0, 12.0), 0.25);
        let right = EyePatch::uniform(EyeRect::new(160.0, 82.0, 20.0, 12.0), 0.75);
        EyeFeatures::new(left, right, 640, 480)
    }

    #[test]
    fn test_patch_rejects_wrong_length() {
        let rect = EyeRect::new(0.0, 0.0, 10.0, 6.0);
        assert!(EyePatch::new(rect, vec![0.0; PATCH_LEN]).is_some());
        assert!(EyePatch::new(rect, vec![0.0; PATCH_LEN - 1]).is_none());
        assert!(EyePatch::new(rect, Vec::new()).is_none());
    }

    #[test]
    fn test_feature_vector_layout() {
        let features = sample_features();
        let v = features.feature_vector();
        assert_eq!(v.len(), FEATURE_LEN);
        assert!(v[..PATCH_LEN].iter().all(|&p| (p - 0.25).abs() < 1e-12));
        assert!(v[PATCH_LEN..].iter().all(|&p| (p - 0.75).abs() < 1e-12));
    }

    #[test]
    fn test_rect_edges() {
        let rect = EyeRect::new(10.0, 20.0, 30.0, 15.0);
        assert!((rect.right() - 40.0).abs() < 1e-12);
        assert!((rect.bottom() - 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_features_serde_roundtrip() {
        let features = sample_features();
        let json = serde_json::to_string(&features).unwrap();
        let parsed: EyeFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(features, parsed);
    }
}
