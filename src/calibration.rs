// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Neutral-height calibration.
//!
//! Captured once, at the moment the start gesture is accepted, and
//! immutable for the rest of the session. The neutral height anchors the
//! vertical band that separates standing from jumping and rolling.

/// Default half-height of the neutral band, in pixels.
pub const DEFAULT_THRESHOLD_PX: i32 = 55;

/// Offset added to the shoulder midpoint when calibrating, in pixels.
///
/// Biases the neutral height slightly below the shoulders so that small
/// upward shifts while standing do not read as jumps.
pub const NEUTRAL_OFFSET_PX: i32 = 10;

/// Calibrated vertical reference for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    /// Neutral body height in pixels.
    pub neutral_height: i32,
    /// Half-height of the neutral band in pixels.
    pub threshold_px: i32,
}

impl Calibration {
    /// Calibrate from the two shoulder heights, using the default band.
    #[must_use]
    pub fn from_shoulders(left_y: i32, right_y: i32) -> Self {
        Self::with_threshold(left_y, right_y, DEFAULT_THRESHOLD_PX)
    }

    /// Calibrate from the two shoulder heights with an explicit band.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn with_threshold(left_y: i32, right_y: i32, threshold_px: i32) -> Self {
        let neutral_height = (f64::from(left_y + right_y) / 2.0).round() as i32 + NEUTRAL_OFFSET_PX;
        Self {
            neutral_height,
            threshold_px,
        }
    }

    /// Whether a body height lies strictly inside the neutral band.
    #[must_use]
    pub const fn contains(&self, height: i32) -> bool {
        (height - self.neutral_height).abs() < self.threshold_px
    }

    /// Top of the neutral band (heights above this, i.e. smaller, read as
    /// raised).
    #[must_use]
    pub const fn upper_bound(&self) -> i32 {
        self.neutral_height - self.threshold_px
    }

    /// Bottom of the neutral band (heights below this, i.e. larger, read
    /// as lowered).
    #[must_use]
    pub const fn lower_bound(&self) -> i32 {
        self.neutral_height + self.threshold_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shoulders() {
        let cal = Calibration::from_shoulders(290, 290);
        assert_eq!(cal.neutral_height, 300);
        assert_eq!(cal.threshold_px, DEFAULT_THRESHOLD_PX);
    }

    #[test]
    fn test_midpoint_rounds() {
        // (291 + 290) / 2 = 290.5, rounds up
        let cal = Calibration::from_shoulders(291, 290);
        assert_eq!(cal.neutral_height, 291 + NEUTRAL_OFFSET_PX);
    }

    #[test]
    fn test_band_membership_is_strict() {
        let cal = Calibration {
            neutral_height: 300,
            threshold_px: 55,
        };
        assert!(cal.contains(300));
        assert!(cal.contains(354));
        assert!(cal.contains(246));
        // Exactly on the boundary is outside the band
        assert!(!cal.contains(355));
        assert!(!cal.contains(245));
    }

    #[test]
    fn test_band_bounds() {
        let cal = Calibration {
            neutral_height: 300,
            threshold_px: 55,
        };
        assert_eq!(cal.upper_bound(), 245);
        assert_eq!(cal.lower_bound(), 355);
    }
}
