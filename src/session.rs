// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-session control engine.
//!
//! [`GameSession`] is the explicit context object for one play session:
//! phase, calibration, and the gate live here, and every per-frame call
//! takes the session by `&mut self`. No global state.

use std::time::Instant;

use crate::calibration::{Calibration, DEFAULT_THRESHOLD_PX};
use crate::classifier::{Lane, VerticalAction, classify_lane, classify_vertical, start_gesture};
use crate::emitter::Control;
use crate::gate::{ControlGate, GateConfig};
use crate::landmarks::LandmarkFrame;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the start gesture; no controls except `Start` are
    /// produced.
    AwaitingStart,
    /// Gesture control active. One-way: there is no pause or reset.
    Playing,
}

/// Control engine for one play session.
///
/// Drives the per-frame pipeline: start detection and calibration while
/// awaiting start, then classification and gating while playing. Frames
/// with no detection are skipped by simply not calling
/// [`process_frame`](Self::process_frame).
#[derive(Debug)]
pub struct GameSession {
    phase: SessionPhase,
    calibration: Option<Calibration>,
    gate: ControlGate,
    threshold_px: i32,
}

impl GameSession {
    /// Create a session awaiting its start gesture.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self {
            phase: SessionPhase::AwaitingStart,
            calibration: None,
            gate: ControlGate::new(config),
            threshold_px: DEFAULT_THRESHOLD_PX,
        }
    }

    /// Set the neutral-band half-height used when calibration fires.
    #[must_use]
    pub const fn with_threshold(mut self, threshold_px: i32) -> Self {
        self.threshold_px = threshold_px;
        self
    }

    /// Current session phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Calibration captured at start, if the session has started.
    #[must_use]
    pub const fn calibration(&self) -> Option<Calibration> {
        self.calibration
    }

    /// Current lane.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.gate.lane()
    }

    /// Current vertical-action state.
    #[must_use]
    pub const fn action(&self) -> VerticalAction {
        self.gate.action()
    }

    /// Process one frame's landmarks.
    ///
    /// Returns the controls accepted this frame, in emission order: the
    /// start control while awaiting start, otherwise at most one lane
    /// control followed by at most one vertical control.
    pub fn process_frame(&mut self, frame: &LandmarkFrame, now: Instant) -> Vec<Control> {
        match self.phase {
            SessionPhase::AwaitingStart => {
                if start_gesture(frame.control_wrist.y, frame.frame_height) {
                    self.calibration = Some(Calibration::with_threshold(
                        frame.left_shoulder.y,
                        frame.right_shoulder.y,
                        self.threshold_px,
                    ));
                    self.phase = SessionPhase::Playing;
                    return vec![Control::Start];
                }
                Vec::new()
            }
            SessionPhase::Playing => {
                // Calibration is always present once playing
                let Some(calibration) = self.calibration else {
                    return Vec::new();
                };

                let mut controls = Vec::new();

                let target = classify_lane(
                    frame.left_shoulder.x,
                    frame.right_shoulder.x,
                    frame.frame_width,
                );
                if let Some(control) = self.gate.apply_lane(target, now) {
                    controls.push(control);
                }

                let height = frame.body_height();
                let vertical = classify_vertical(height, &calibration);
                if let Some(control) =
                    self.gate
                        .apply_vertical(vertical, calibration.contains(height), now)
                {
                    controls.push(control);
                }

                controls
            }
        }
    }
}
