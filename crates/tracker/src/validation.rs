//! Validation-box geometry for eye-position feedback.
//!
//! The validation box is a centered square sized as a fixed ratio of the
//! smaller video dimension. A frame is "valid" when both eyes' bounding
//! rectangles lie strictly inside the box on all four edges. This is a
//! pure per-frame derived signal for UI feedback only — it never affects
//! the regression pipeline.

use gazekit_model::EyeFeatures;

/// A centered square region, in the coordinate space it was computed
/// for (native video pixels or scaled preview pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationBox {
    pub top: f64,
    pub left: f64,
    pub size: f64,
}

impl ValidationBox {
    pub fn right(&self) -> f64 {
        self.left + self.size
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.size
    }
}

/// Validation box in native video coordinates.
pub fn native_box(video_width: f64, video_height: f64, ratio: f64) -> ValidationBox {
    let smaller = video_width.min(video_height);
    let size = smaller * ratio;
    ValidationBox {
        top: (video_height - size) / 2.0,
        left: (video_width - size) / 2.0,
        size,
    }
}

/// Validation box scaled and centered for a preview of the given
/// displayed size.
///
/// The scale factor follows the larger native dimension, so the box
/// keeps its proportions when the preview aspect ratio differs from the
/// camera's.
pub fn preview_box(
    video_width: f64,
    video_height: f64,
    preview_width: f64,
    preview_height: f64,
    ratio: f64,
) -> ValidationBox {
    let smaller = video_width.min(video_height);
    let scalar = if video_width >= video_height {
        preview_width / video_width
    } else {
        preview_height / video_height
    };
    let size = smaller * ratio * scalar;
    ValidationBox {
        top: (preview_height - size) / 2.0,
        left: (preview_width - size) / 2.0,
        size,
    }
}

/// Width and height ratios between the displayed preview and the native
/// camera resolution.
pub fn preview_scale_ratio(
    video_width: f64,
    video_height: f64,
    preview_width: f64,
    preview_height: f64,
) -> (f64, f64) {
    (preview_width / video_width, preview_height / video_height)
}

/// Whether both eyes lie strictly inside the native validation box on
/// all four edges.
pub fn eyes_within_box(features: &EyeFeatures, ratio: f64) -> bool {
    let bounds = native_box(
        features.frame_width as f64,
        features.frame_height as f64,
        ratio,
    );

    for rect in [&features.left.rect, &features.right.rect] {
        let inside_x = rect.x > bounds.left && rect.right() < bounds.right();
        let inside_y = rect.y > bounds.top && rect.bottom() < bounds.bottom();
        if !inside_x || !inside_y {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazekit_model::{EyePatch, EyeRect};

    fn features_with_eyes(left: EyeRect, right: EyeRect) -> EyeFeatures {
        EyeFeatures::new(
            EyePatch::uniform(left, 0.5),
            EyePatch::uniform(right, 0.5),
            640,
            480,
        )
    }

    #[test]
    fn test_native_box_is_centered_square() {
        let bounds = native_box(640.0, 480.0, 0.66);
        let expected = 480.0 * 0.66;
        assert!((bounds.size - expected).abs() < 1e-9);
        assert!((bounds.left - (640.0 - expected) / 2.0).abs() < 1e-9);
        assert!((bounds.top - (480.0 - expected) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_preview_box_scales_with_wider_preview() {
        let native = native_box(640.0, 480.0, 0.66);
        let preview = preview_box(640.0, 480.0, 320.0, 240.0, 0.66);
        assert!((preview.size - native.size * 0.5).abs() < 1e-9);
        assert!((preview.left - (320.0 - preview.size) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_preview_scale_ratio() {
        let (rw, rh) = preview_scale_ratio(640.0, 480.0, 320.0, 120.0);
        assert!((rw - 0.5).abs() < 1e-9);
        assert!((rh - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_centered_eyes_are_valid() {
        let features = features_with_eyes(
            EyeRect::new(280.0, 220.0, 30.0, 18.0),
            EyeRect::new(340.0, 220.0, 30.0, 18.0),
        );
        assert!(eyes_within_box(&features, 0.66));
    }

    #[test]
    fn test_eye_on_edge_is_invalid() {
        // Box for 640x480 @ 0.66: left edge at (640 - 316.8) / 2 = 161.6.
        let bounds = native_box(640.0, 480.0, 0.66);
        let features = features_with_eyes(
            EyeRect::new(bounds.left, 220.0, 30.0, 18.0),
            EyeRect::new(340.0, 220.0, 30.0, 18.0),
        );
        // Strictly inside means touching the edge fails.
        assert!(!eyes_within_box(&features, 0.66));
    }

    #[test]
    fn test_one_eye_outside_invalidates_both() {
        let features = features_with_eyes(
            EyeRect::new(280.0, 220.0, 30.0, 18.0),
            EyeRect::new(600.0, 220.0, 30.0, 18.0),
        );
        assert!(!eyes_within_box(&features, 0.66));
    }
}
