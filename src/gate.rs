// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Debounce/cooldown gate.
//!
//! Two independent control lines sit between the classifiers and the
//! emitter. The lane line steps at most one lane per accepted firing; the
//! action line fires only on a change of vertical state. Each line keeps
//! its own cooldown clock, stamped on acceptance, so a burst of identical
//! classifications collapses into a single event.

use std::time::{Duration, Instant};

use crate::classifier::{Lane, VerticalAction};
use crate::emitter::Control;

/// Minimum interval between accepted lane changes.
pub const LANE_COOLDOWN: Duration = Duration::from_millis(180);

/// Minimum interval between accepted vertical actions.
pub const ACTION_COOLDOWN: Duration = Duration::from_millis(50);

/// Tunable gate parameters.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pose_control::GateConfig;
///
/// let config = GateConfig::new()
///     .with_lane_cooldown(Duration::from_millis(250))
///     .with_action_cooldown(Duration::from_millis(80));
/// ```
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Minimum interval between accepted lane changes.
    pub lane_cooldown: Duration,
    /// Minimum interval between accepted vertical actions.
    pub action_cooldown: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            lane_cooldown: LANE_COOLDOWN,
            action_cooldown: ACTION_COOLDOWN,
        }
    }
}

impl GateConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lane-change cooldown.
    #[must_use]
    pub const fn with_lane_cooldown(mut self, cooldown: Duration) -> Self {
        self.lane_cooldown = cooldown;
        self
    }

    /// Set the vertical-action cooldown.
    #[must_use]
    pub const fn with_action_cooldown(mut self, cooldown: Duration) -> Self {
        self.action_cooldown = cooldown;
        self
    }
}

/// Stateful debounce/cooldown gate.
///
/// Owns the lane and vertical-action state for a session. Callers pass
/// the current instant into each transition so that time is under test
/// control.
#[derive(Debug)]
pub struct ControlGate {
    config: GateConfig,
    lane: Lane,
    action: VerticalAction,
    last_lane_change: Option<Instant>,
    last_action: Option<Instant>,
}

impl ControlGate {
    /// Create a gate in the middle lane with no action active.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            lane: Lane::default(),
            action: VerticalAction::default(),
            last_lane_change: None,
            last_action: None,
        }
    }

    /// Current lane.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.lane
    }

    /// Current vertical-action state.
    #[must_use]
    pub const fn action(&self) -> VerticalAction {
        self.action
    }

    /// Apply a lane classification.
    ///
    /// Fires only when `target` differs from the current lane and the lane
    /// cooldown has elapsed since the last accepted change. An accepted
    /// firing moves exactly one lane toward the target, stamps the clock,
    /// and returns the directional control to emit. A `None` target
    /// (ambiguous geometry) is a no-op.
    pub fn apply_lane(&mut self, target: Option<Lane>, now: Instant) -> Option<Control> {
        let target = target?;
        if target == self.lane {
            return None;
        }
        if !cooldown_elapsed(self.last_lane_change, self.config.lane_cooldown, now) {
            return None;
        }

        let next = self.lane.toward(target);
        let control = if next.index() > self.lane.index() {
            Control::LaneRight
        } else {
            Control::LaneLeft
        };
        self.lane = next;
        self.last_lane_change = Some(now);
        Some(control)
    }

    /// Apply a vertical classification.
    ///
    /// Fires only when `target` differs from the current action state and
    /// the action cooldown has elapsed; an accepted firing stamps the
    /// clock and returns the control to emit (`Neutral` transitions emit
    /// nothing). Independently of the cooldown, the state snaps back to
    /// `Neutral` whenever `in_neutral_band` is set — that reset neither
    /// stamps the clock nor emits.
    pub fn apply_vertical(
        &mut self,
        target: VerticalAction,
        in_neutral_band: bool,
        now: Instant,
    ) -> Option<Control> {
        let mut emitted = None;
        if target != self.action
            && cooldown_elapsed(self.last_action, self.config.action_cooldown, now)
        {
            emitted = match target {
                VerticalAction::Jump => Some(Control::Jump),
                VerticalAction::Roll => Some(Control::Roll),
                VerticalAction::Neutral => None,
            };
            self.action = target;
            self.last_action = Some(now);
        }

        if in_neutral_band {
            self.action = VerticalAction::Neutral;
        }
        emitted
    }
}

/// First-ever trigger always passes; afterwards the interval must be
/// strictly greater than the cooldown.
fn cooldown_elapsed(last: Option<Instant>, cooldown: Duration, now: Instant) -> bool {
    last.map_or(true, |t| now.duration_since(t) > cooldown)
}
