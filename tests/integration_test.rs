// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Integration tests for the control engine

use std::io::Cursor;
use std::time::{Duration, Instant};

use pose_control::{
    ActionEmitter, Control, GameSession, GateConfig, Lane, LandmarkFrame, Point, RecordingEmitter,
    SessionPhase, SourceIterator, VerticalAction,
};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn frame(left: Point, right: Point, wrist: Point) -> LandmarkFrame {
    LandmarkFrame {
        left_shoulder: left,
        right_shoulder: right,
        control_wrist: wrist,
        frame_width: 640,
        frame_height: 480,
    }
}

#[test]
fn test_session_flow_start_lane_jump() {
    let mut session = GameSession::new(GateConfig::default());
    let t0 = Instant::now();

    // Wrist raised: start fires, calibration captured at shoulder height
    // 290 -> neutral 300
    let start = frame(
        Point { x: 250, y: 290 },
        Point { x: 390, y: 290 },
        Point { x: 500, y: 50 },
    );
    assert_eq!(session.process_frame(&start, t0), vec![Control::Start]);
    assert_eq!(session.phase(), SessionPhase::Playing);

    // Lean left: both shoulders left of center
    let lean_left = frame(
        Point { x: 100, y: 290 },
        Point { x: 240, y: 290 },
        Point { x: 150, y: 400 },
    );
    assert_eq!(
        session.process_frame(&lean_left, t0 + ms(200)),
        vec![Control::LaneLeft]
    );
    assert_eq!(session.lane(), Lane::Left);

    // Same lean, next frame: target equals current lane, nothing fires
    assert!(session.process_frame(&lean_left, t0 + ms(400)).is_empty());

    // Shoulders raised while still leaning left: jump
    let jump_left = frame(
        Point { x: 100, y: 200 },
        Point { x: 240, y: 200 },
        Point { x: 150, y: 350 },
    );
    assert_eq!(
        session.process_frame(&jump_left, t0 + ms(600)),
        vec![Control::Jump]
    );
    assert_eq!(session.action(), VerticalAction::Jump);

    // Back to neutral height: state resets without emission
    assert!(session.process_frame(&lean_left, t0 + ms(800)).is_empty());
    assert_eq!(session.action(), VerticalAction::Neutral);
}

#[test]
fn test_lane_cooldown_across_frames() {
    let mut session = GameSession::new(GateConfig::default());
    let t0 = Instant::now();

    let start = frame(
        Point { x: 250, y: 290 },
        Point { x: 390, y: 290 },
        Point { x: 500, y: 50 },
    );
    session.process_frame(&start, t0);

    // Lean all the way right: target lane is Right, two steps away
    // after an initial move left
    let lean_left = frame(
        Point { x: 100, y: 290 },
        Point { x: 240, y: 290 },
        Point { x: 150, y: 400 },
    );
    let lean_right = frame(
        Point { x: 400, y: 290 },
        Point { x: 550, y: 290 },
        Point { x: 450, y: 400 },
    );

    assert_eq!(
        session.process_frame(&lean_left, t0 + ms(200)),
        vec![Control::LaneLeft]
    );
    assert_eq!(session.lane(), Lane::Left);

    // 100 ms later: inside the lane cooldown, the right lean is ignored
    assert!(session.process_frame(&lean_right, t0 + ms(300)).is_empty());
    assert_eq!(session.lane(), Lane::Left);

    // Past the cooldown: one step per firing, Left -> Middle -> Right
    assert_eq!(
        session.process_frame(&lean_right, t0 + ms(450)),
        vec![Control::LaneRight]
    );
    assert_eq!(session.lane(), Lane::Middle);
    assert_eq!(
        session.process_frame(&lean_right, t0 + ms(700)),
        vec![Control::LaneRight]
    );
    assert_eq!(session.lane(), Lane::Right);
}

#[test]
fn test_replay_stream_drives_session() {
    // Four frames: no detection, start gesture, lean left, shoulders
    // raised (jump)
    let input = concat!(
        "{\"width\":640,\"height\":480}\n",
        "{\"width\":640,\"height\":480,\"landmarks\":{\
         \"left_shoulder\":{\"x\":0.4,\"y\":0.6},\
         \"right_shoulder\":{\"x\":0.6,\"y\":0.6},\
         \"control_wrist\":{\"x\":0.8,\"y\":0.1}}}\n",
        "{\"width\":640,\"height\":480,\"landmarks\":{\
         \"left_shoulder\":{\"x\":0.1,\"y\":0.6},\
         \"right_shoulder\":{\"x\":0.3,\"y\":0.6},\
         \"control_wrist\":{\"x\":0.2,\"y\":0.8}}}\n",
        "{\"width\":640,\"height\":480,\"landmarks\":{\
         \"left_shoulder\":{\"x\":0.1,\"y\":0.4},\
         \"right_shoulder\":{\"x\":0.3,\"y\":0.4},\
         \"control_wrist\":{\"x\":0.2,\"y\":0.7}}}\n",
    );

    let mut session = GameSession::new(GateConfig::default());
    let mut emitter = RecordingEmitter::new();
    let t0 = Instant::now();

    for (i, item) in SourceIterator::from_reader(Box::new(Cursor::new(input))).enumerate() {
        let sample = item.expect("well-formed replay line");
        let Some(landmarks) = sample.landmarks else {
            continue;
        };
        let frame = landmarks.to_pixels(sample.width, sample.height);
        let now = t0 + ms(200 * i as u64);
        for control in session.process_frame(&frame, now) {
            emitter.press_and_release(control);
        }
    }

    assert_eq!(
        emitter.controls(),
        &[Control::Start, Control::LaneLeft, Control::Jump]
    );
    assert_eq!(session.lane(), Lane::Left);
    assert_eq!(session.action(), VerticalAction::Jump);
}
