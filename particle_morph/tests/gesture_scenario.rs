//! End-to-end: hand samples through selection, library lookup and blending.

use particle_morph::{BlendConfig, BlendEngine, Gesture, HandSample, ShapeKind, ShapeLibrary};
use rand::{rngs::StdRng, SeedableRng};

fn engine(count: usize, seed: u64) -> BlendEngine {
    let mut rng = StdRng::seed_from_u64(seed);
    BlendEngine::new(ShapeLibrary::generate_with(count, "I  LOVE  YOU", &mut rng), BlendConfig::default())
}

#[test]
fn absent_open_absent_pinch() {
    let mut e = engine(400, 7);
    let samples = [
        HandSample::absent(),
        HandSample::present(Gesture::OpenPalm, 0.0, [0.5, 0.5]),
        HandSample::absent(),
        HandSample::present(Gesture::Pinch, 0.3, [0.4, 0.6]),
    ];
    let expected = [ShapeKind::Idle, ShapeKind::OpenHand, ShapeKind::Idle, ShapeKind::Pinch];

    for (sample, want) in samples.iter().zip(expected) {
        let before = {
            let target = e.library().target(want).1;
            e.state().buffer().total_distance(target)
        };
        let kind = e.tick_sample(sample, 0.1).kind;
        assert_eq!(kind, want);

        let target = e.library().target(want).1;
        let after = e.state().buffer().total_distance(target);
        assert!(
            after < before || before == 0.0,
            "{:?}: distance went {} → {}", want, before, after
        );
    }
}

#[test]
fn holding_a_gesture_settles_on_its_shape() {
    let mut e = engine(300, 8);
    let victory = HandSample::present(Gesture::Victory, 0.0, [0.5, 0.5]);
    for _ in 0..240 {
        e.tick_sample(&victory, 1.0 / 60.0);
    }
    let target = e.library().target(ShapeKind::Victory).1;
    assert!(e.state().buffer().max_distance(target) < 1e-3);
}

#[test]
fn same_elapsed_time_lands_close_at_any_tick_rate() {
    let pinch = HandSample::present(Gesture::Pinch, 0.0, [0.5, 0.5]);
    let fist  = HandSample::present(Gesture::ClosedFist, 0.0, [0.5, 0.5]);
    let mut slow = engine(200, 9);
    let mut fast = engine(200, 9);
    for _ in 0..30  { slow.tick_sample(&pinch, 1.0 / 30.0); }
    for _ in 0..144 { fast.tick_sample(&pinch, 1.0 / 144.0); }

    let target = slow.library().target(ShapeKind::Pinch).1;
    let d_slow = slow.state().buffer().max_distance(target);
    let d_fast = fast.state().buffer().max_distance(target);
    // both are one second in: roughly e^-4 of the starting gap remains
    assert!((d_slow - d_fast).abs() < 0.1, "{} vs {}", d_slow, d_fast);

    for _ in 0..30  { slow.tick_sample(&fist, 1.0 / 30.0); }
    for _ in 0..144 { fast.tick_sample(&fist, 1.0 / 144.0); }
    assert!((slow.state().spin() - fast.state().spin()).abs() < 1e-3);
}

#[test]
fn closing_the_hand_after_it_was_away_does_not_restart_the_planet() {
    let mut e = engine(200, 11);
    let absent = HandSample::absent();
    for _ in 0..100 { e.tick_sample(&absent, 1.0 / 60.0); }
    let spin = e.state().spin();
    assert!(spin > 0.3);

    let fist = HandSample::present(Gesture::ClosedFist, 0.0, [0.5, 0.5]);
    let (kind, rotation) = {
        let f = e.tick_sample(&fist, 1.0 / 60.0);
        (f.kind, f.rotation)
    };
    assert_eq!(kind, ShapeKind::ClosedFist);
    assert!(rotation > spin);
    // already settled on the planet, and the target did not move
    assert_eq!(e.state().buffer().max_distance(e.library().idle()), 0.0);
}

#[test]
fn losing_the_hand_mid_gesture_returns_to_idle() {
    let mut e = engine(200, 10);
    let pinch = HandSample::present(Gesture::Pinch, 0.0, [0.5, 0.5]);
    for _ in 0..10 { e.tick_sample(&pinch, 0.05); }
    let f = e.tick_sample(&HandSample::absent(), 0.05);
    assert_eq!(f.kind, ShapeKind::Idle);
    assert!(f.rotation > 0.0);
}
