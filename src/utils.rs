// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Utility helpers for the control engine

use std::time::Instant;

/// Frames-per-second counter over inter-frame wall time.
#[derive(Debug, Default)]
pub struct FpsCounter {
    last: Option<Instant>,
}

impl FpsCounter {
    /// Create a counter with no frames recorded.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Record a frame at `now` and return the instantaneous FPS.
    ///
    /// Returns `None` on the first tick and for a zero inter-frame
    /// interval.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        let last = self.last.replace(now)?;
        let dt = now.duration_since(last).as_secs_f64();
        if dt > 0.0 {
            Some((1.0 / dt).round() as u32)
        } else {
            None
        }
    }
}
