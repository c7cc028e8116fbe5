//! Camera flight over terrain: collision invariant under scripted input.

mod common;

use voxel_engine::sim::Key;
use voxel_engine::{Camera, Input, Session};

#[test]
fn camera_never_sinks_below_clearance() {
    let map = common::hills();
    let mut cam = Camera { x: 10.0, y: 10.0, height: 0.0, ..Camera::default() };
    let mut input = Input::default();
    let mut rng = 0xDEAD_BEEFu32;

    for step in 0..2000 {
        input.forward_back = (common::rand(&mut rng) * 6.0 - 3.0).round();
        input.left_right = common::rand(&mut rng) * 4.0 - 2.0;
        input.up_down = if common::rand(&mut rng) < 0.7 { -2.0 } else { 2.0 };
        let elapsed = common::rand(&mut rng) * 50.0;

        cam.advance(&input, elapsed, &map);

        let ground = map.altitude_at(cam.x, cam.y) as f64;
        assert!(cam.height >= ground + 10.0, "step {step}: {cam:?} over {ground}");
        assert!(cam.ground_clearance(&map) >= 0.0);
    }
}

#[test]
fn idle_advance_only_touches_height() {
    let map = common::hills();
    let start = Camera { x: 64.0, y: 0.0, height: 5.0, angle: 0.3, horizon: 77.0, ..Camera::default() };
    let mut cam = start;

    cam.advance(&Input::default(), 16.0, &map);

    assert_eq!(cam.angle, start.angle);
    assert_eq!(cam.horizon, start.horizon);
    assert_eq!((cam.x, cam.y), (start.x, start.y));
    assert_eq!(cam.height, map.altitude_at(64.0, 0.0) as f64 + 10.0);

    // already high enough: nothing changes at all
    let high = Camera { height: 1000.0, ..start };
    let mut cam = high;
    cam.advance(&Input::default(), 16.0, &map);
    assert_eq!(cam, high);
}

#[test]
fn session_flight_matches_manual_advance() {
    let (color, height) = common::hills_rgba();
    let mut session = Session::new(80, 60).unwrap();
    session.load_rgba(&color, &height, common::SIZE, common::SIZE).unwrap();

    let map = session.map().unwrap().clone();
    let mut cam = *session.camera();
    let mut input = Input::default();
    input.press(Key::Forward);
    input.press(Key::Left);

    session.key_down(87);
    session.key_down(37);

    let mut t = 0.0;
    session.tick(t).unwrap();
    cam.advance(&input, 0.0, &map);
    for _ in 0..30 {
        t += 16.0;
        session.tick(t).unwrap();
        cam.advance(&input, 16.0, &map);
    }

    assert_eq!(*session.camera(), cam);

    let expected = voxel_engine::render_frame(&cam, &map, 80, 60).unwrap();
    assert_eq!(*session.frame(), expected);
}
