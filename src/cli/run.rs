// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::cli::args::RunArgs;
use crate::cli::logging::set_verbose;
use crate::emitter::{ActionEmitter, ConsoleEmitter, RecordingEmitter};
use crate::gate::GateConfig;
use crate::session::{GameSession, SessionPhase};
use crate::source::{Source, SourceIterator};
use crate::utils::FpsCounter;
use crate::{error, info, success, verbose};

/// Cooperative quit flag, polled once per frame.
static STOP: AtomicBool = AtomicBool::new(false);

/// Request the run loop to stop after the current frame.
pub fn request_stop() {
    STOP.store(true, Ordering::Relaxed);
}

fn stop_requested() -> bool {
    STOP.load(Ordering::Relaxed)
}

/// Drive one game session from a landmark stream.
pub fn run_session(args: &RunArgs) {
    set_verbose(args.verbose);

    if args.threshold <= 0 {
        error!("--threshold must be positive, got {}", args.threshold);
        process::exit(1);
    }

    let config = GateConfig::new()
        .with_lane_cooldown(Duration::from_millis(args.lane_cooldown_ms))
        .with_action_cooldown(Duration::from_millis(args.action_cooldown_ms));
    let mut session = GameSession::new(config).with_threshold(args.threshold);

    let source = Source::from(args.source.as_str());
    let iter = match SourceIterator::new(&source) {
        Ok(iter) => iter,
        Err(e) => {
            error!("Error opening source: {e}");
            process::exit(1);
        }
    };

    // Dry runs record controls instead of passing them to an injector
    let mut emitter: Box<dyn ActionEmitter> = if args.dry_run {
        Box::new(RecordingEmitter::new())
    } else {
        Box::new(ConsoleEmitter)
    };

    info!("pose-control {} 🚀 {}", crate::VERSION, args.source);
    info!("To start, raise a hand into the top third of the frame");

    let mut fps = FpsCounter::new();
    let mut frames: u64 = 0;
    let mut skipped: u64 = 0;
    let mut emitted: u64 = 0;
    let mut failed = false;

    for item in iter {
        if stop_requested() {
            break;
        }
        let sample = match item {
            Ok(sample) => sample,
            Err(e) => {
                error!("Error reading source: {e}");
                failed = true;
                break;
            }
        };
        frames += 1;
        let now = Instant::now();
        let fps_now = fps.tick(now);

        let Some(landmarks) = sample.landmarks else {
            // No detection: no-op frame
            skipped += 1;
            continue;
        };
        let landmarks = if args.mirror {
            landmarks.mirrored()
        } else {
            landmarks
        };
        let frame = landmarks.to_pixels(sample.width, sample.height);

        let was_awaiting = session.phase() == SessionPhase::AwaitingStart;
        let controls = session.process_frame(&frame, now);
        for control in &controls {
            emitter.press_and_release(*control);
        }
        emitted += controls.len() as u64;

        if was_awaiting && session.phase() == SessionPhase::Playing {
            if let Some(cal) = session.calibration() {
                info!(
                    "session started: neutral height {} px, band {}..{} px",
                    cal.neutral_height,
                    cal.upper_bound(),
                    cal.lower_bound()
                );
            }
        }

        let accepted = if controls.is_empty() {
            String::new()
        } else {
            let names: Vec<&str> = controls.iter().map(|c| c.as_str()).collect();
            format!(" -> {}", names.join(", "))
        };
        verbose!(
            "frame {}: {}x{} lane {} action {}{}, {} fps",
            frames,
            sample.width,
            sample.height,
            session.lane(),
            session.action(),
            accepted,
            fps_now.map_or_else(|| "?".to_string(), |f| f.to_string())
        );
    }

    if failed {
        process::exit(1);
    }
    success!("{frames} frames processed ({skipped} without detection), {emitted} controls emitted");
}
