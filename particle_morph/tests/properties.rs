use particle_morph::{blend_factor, blend_toward, select_shape, Gesture, ShapeKind};
use proptest::prelude::*;

fn gesture() -> impl Strategy<Value = Gesture> {
    prop::sample::select(Gesture::ALL.to_vec())
}

proptest! {
    #[test]
    fn absent_hand_selects_idle(g in gesture()) {
        prop_assert_eq!(select_shape(g, false), ShapeKind::Idle);
    }

    #[test]
    fn selection_is_total(g in gesture(), present in any::<bool>()) {
        prop_assert!(ShapeKind::ALL.contains(&select_shape(g, present)));
    }

    #[test]
    fn blend_factor_stays_in_unit_range(rate in -10.0f32..10.0, dt in -1.0f32..2.0) {
        let a = blend_factor(rate, dt);
        prop_assert!((0.0..=1.0).contains(&a));
    }

    #[test]
    fn blend_never_overshoots(
        pairs in prop::collection::vec((-50.0f32..50.0, -50.0f32..50.0), 1..64),
        dt in 0.0f32..0.25,
    ) {
        let (mut cur, target): (Vec<f32>, Vec<f32>) = pairs.into_iter().unzip();
        let before = cur.clone();
        blend_toward(&mut cur, &target, blend_factor(4.0, dt));
        for ((c, b), t) in cur.iter().zip(&before).zip(&target) {
            prop_assert!((t - c).abs() <= (t - b).abs() + 1e-4);
            // stays between start and target
            let (lo, hi) = if b <= t { (*b, *t) } else { (*t, *b) };
            prop_assert!(*c >= lo - 1e-4 && *c <= hi + 1e-4);
        }
    }
}
