// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Pose Control Library
//!
//! Body-pose gesture control for auto-runner games, written in Rust.
//! Classifies per-frame pose landmarks into discrete, debounced
//! game-control events: lane changes, jumps, rolls, and the start
//! gesture.
//!
//! ## Features
//!
//! - **Deterministic** - Pure classification functions plus an explicit
//!   gate state machine; time is injected, so every decision is
//!   reproducible and unit-testable
//! - **Debounced** - Independent lane and action cooldowns collapse
//!   landmark jitter into single events; lane changes step one lane at a
//!   time
//! - **Self-calibrating** - The neutral body height is captured from the
//!   shoulders the moment the start gesture fires
//! - **Pluggable edges** - Pose models feed in as JSON Lines
//!   ([`FrameSample`]); key injection hangs off the [`ActionEmitter`]
//!   trait
//!
//! ## Quick Start (Library)
//!
//! ```rust
//! use std::time::Instant;
//! use pose_control::{Control, GameSession, GateConfig, LandmarkFrame, Point};
//!
//! let mut session = GameSession::new(GateConfig::default());
//!
//! // Wrist raised into the top third of a 480 px frame: start gesture
//! let frame = LandmarkFrame {
//!     left_shoulder: Point { x: 250, y: 290 },
//!     right_shoulder: Point { x: 390, y: 290 },
//!     control_wrist: Point { x: 500, y: 50 },
//!     frame_width: 640,
//!     frame_height: 480,
//! };
//! let controls = session.process_frame(&frame, Instant::now());
//! assert_eq!(controls, vec![Control::Start]);
//! ```
//!
//! ## CLI Usage
//!
//! The `pose-control` CLI drives a session from a landmark stream:
//!
//! ```bash
//! # Replay a recorded session
//! pose-control run --source session.jsonl
//!
//! # Stream from a live pose-model bridge on stdin
//! pose-bridge --camera 0 | pose-control run --source - --mirror
//!
//! # Classify without emitting key events
//! pose-control run --source session.jsonl --dry-run
//! ```
//!
//! Each input line is one frame:
//!
//! ```json
//! {"width":640,"height":480,"landmarks":{"left_shoulder":{"x":0.4,"y":0.6},"right_shoulder":{"x":0.6,"y":0.6},"control_wrist":{"x":0.7,"y":0.1}}}
//! ```
//!
//! A line without `landmarks` is a no-detection frame and leaves all
//! control state untouched.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`session`] | Per-session engine ([`GameSession`], [`SessionPhase`]) |
//! | [`classifier`] | Pure lane/vertical classification ([`Lane`], [`VerticalAction`]) |
//! | [`gate`] | Debounce/cooldown gate ([`ControlGate`], [`GateConfig`]) |
//! | [`calibration`] | Neutral-height calibration ([`Calibration`]) |
//! | [`landmarks`] | Landmark types ([`LandmarkFrame`], [`NormalizedLandmarks`]) |
//! | [`emitter`] | Control events and injection seam ([`Control`], [`ActionEmitter`]) |
//! | [`source`] | Landmark stream handling ([`Source`], [`SourceIterator`]) |
//! | [`error`] | Error types ([`ControlError`], [`Result`]) |
//!
//! ## License
//!
//! This project is dual-licensed under AGPL-3.0 for open-source use or an
//! enterprise license for commercial applications.

// Modules
pub mod calibration;
pub mod classifier;
pub mod cli;
pub mod emitter;
pub mod error;
pub mod gate;
pub mod landmarks;
pub mod session;
pub mod source;
pub mod utils;

// Re-export main types for convenience
pub use calibration::{Calibration, DEFAULT_THRESHOLD_PX, NEUTRAL_OFFSET_PX};
pub use classifier::{Lane, VerticalAction, classify_lane, classify_vertical, start_gesture};
pub use emitter::{ActionEmitter, ConsoleEmitter, Control, RecordingEmitter};
pub use error::{ControlError, Result};
pub use gate::{ACTION_COOLDOWN, ControlGate, GateConfig, LANE_COOLDOWN};
pub use landmarks::{LandmarkFrame, NormalizedLandmarks, NormalizedPoint, Point};
pub use session::{GameSession, SessionPhase};
pub use source::{FrameSample, Source, SourceIterator};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
