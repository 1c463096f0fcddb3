// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Landmark types consumed by the control engine.
//!
//! The pose model (an external collaborator) reports landmark positions
//! normalized to `[0, 1]` per axis. The engine scales them to pixel space
//! using the frame's dimensions before classification, matching how the
//! classifiers' thresholds are defined.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels (0 = top of frame).
    pub y: i32,
}

/// A landmark position normalized to `[0, 1]` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal position, 0.0 = left edge, 1.0 = right edge.
    pub x: f32,
    /// Vertical position, 0.0 = top edge, 1.0 = bottom edge.
    pub y: f32,
}

impl NormalizedPoint {
    /// Scale to pixel coordinates for a frame of the given dimensions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixels(self, width: u32, height: u32) -> Point {
        Point {
            x: (self.x * width as f32) as i32,
            y: (self.y * height as f32) as i32,
        }
    }
}

/// The body landmarks the control engine consumes, normalized to `[0, 1]`.
///
/// Coordinates are expected in the player's mirror view: the producer
/// flips the camera image horizontally (and swaps the shoulder labels)
/// before reporting, so that leaning left moves the landmarks left. For
/// producers that report raw camera coordinates, apply [`mirrored`]
/// first.
///
/// [`mirrored`]: NormalizedLandmarks::mirrored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmarks {
    /// Left shoulder, as seen in the mirror view.
    pub left_shoulder: NormalizedPoint,
    /// Right shoulder, as seen in the mirror view.
    pub right_shoulder: NormalizedPoint,
    /// The wrist watched for the start gesture.
    pub control_wrist: NormalizedPoint,
}

impl NormalizedLandmarks {
    /// Scale all landmarks to pixel space for a frame of the given
    /// dimensions.
    #[must_use]
    pub fn to_pixels(self, width: u32, height: u32) -> LandmarkFrame {
        LandmarkFrame {
            left_shoulder: self.left_shoulder.to_pixels(width, height),
            right_shoulder: self.right_shoulder.to_pixels(width, height),
            control_wrist: self.control_wrist.to_pixels(width, height),
            frame_width: width,
            frame_height: height,
        }
    }

    /// Flip horizontally and swap the shoulder labels.
    ///
    /// Converts raw camera coordinates into the mirror view the engine
    /// expects.
    #[must_use]
    pub fn mirrored(self) -> Self {
        let flip = |p: NormalizedPoint| NormalizedPoint { x: 1.0 - p.x, y: p.y };
        Self {
            left_shoulder: flip(self.right_shoulder),
            right_shoulder: flip(self.left_shoulder),
            control_wrist: flip(self.control_wrist),
        }
    }
}

/// Pixel-space landmark positions for one video frame.
///
/// Ephemeral: rebuilt every frame from the normalized landmarks and the
/// frame's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkFrame {
    /// Left shoulder in pixel coordinates.
    pub left_shoulder: Point,
    /// Right shoulder in pixel coordinates.
    pub right_shoulder: Point,
    /// Control wrist in pixel coordinates.
    pub control_wrist: Point,
    /// Frame width in pixels.
    pub frame_width: u32,
    /// Frame height in pixels.
    pub frame_height: u32,
}

impl LandmarkFrame {
    /// Current body height: the rounded midpoint of the two shoulder
    /// heights.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn body_height(&self) -> i32 {
        (f64::from(self.left_shoulder.y + self.right_shoulder.y) / 2.0).round() as i32
    }
}
