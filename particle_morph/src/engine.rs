//! The particle blend engine.
//!
//! Per tick, given the selected kind and elapsed seconds `dt`:
//!
//! 1. `alpha = clamp(blend_rate · dt, 0, 1)`
//! 2. every float of positions and colors: `cur += (target − cur) · alpha`
//! 3. on a change of target, remember the new kind; entering a planet kind
//!    zeroes the spin accumulator.  Idle and ClosedFist share one target,
//!    so moving between them is not a change.
//! 4. planet kinds accumulate `spin_rate · dt` (kept in `[0, 2π)`) and emit
//!    it as rotation; every other kind emits exactly zero
//!
//! Because `alpha` scales with elapsed time, the approach is an exponential
//! decay toward the target that behaves the same at 30 or 144 ticks per
//! second.  It never overshoots, and an exact match is a fixed point.

use std::f32::consts::TAU;

use particle_shapes::ParticleBuffer;
use tracing::debug;

use crate::hand::HandSample;
use crate::kind::ShapeKind;
use crate::library::ShapeLibrary;
use crate::selector::select_shape;

/// Blend speed, per second.
pub const BLEND_RATE: f32 = 4.0;
/// Planet spin, radians per second.
pub const SPIN_RATE:  f32 = 0.2;

// ════════════════════════════════════════════════════════════════════════════
// Blend primitives
// ════════════════════════════════════════════════════════════════════════════

/// `clamp(rate · dt, 0, 1)`; non-finite input blends nothing.
pub fn blend_factor(rate: f32, dt: f32) -> f32 {
    let alpha = rate * dt;
    if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) }
}

/// Move each element of `current` toward `target` by the fraction `alpha`.
pub fn blend_toward(current: &mut [f32], target: &[f32], alpha: f32) {
    for (c, t) in current.iter_mut().zip(target) {
        *c += (t - *c) * alpha;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// BlendConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendConfig {
    pub blend_rate: f32,
    pub spin_rate:  f32,
}

impl Default for BlendConfig {
    fn default() -> Self {
        BlendConfig { blend_rate: BLEND_RATE, spin_rate: SPIN_RATE }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AnimationState
// ════════════════════════════════════════════════════════════════════════════

/// The engine's mutable core: the rendered buffer, the spin accumulator,
/// and the kind targeted on the previous tick.
#[derive(Clone, Debug)]
pub struct AnimationState {
    buffer:   ParticleBuffer,
    spin:     f32,
    previous: ShapeKind,
}

impl AnimationState {
    /// Start settled on the Idle shape, unrotated.
    pub fn new(library: &ShapeLibrary) -> Self {
        AnimationState {
            buffer:   library.idle().clone(),
            spin:     0.0,
            previous: ShapeKind::Idle,
        }
    }

    pub fn buffer(&self)   -> &ParticleBuffer { &self.buffer }
    pub fn spin(&self)     -> f32             { self.spin }
    pub fn previous(&self) -> ShapeKind       { self.previous }
}

// ════════════════════════════════════════════════════════════════════════════
// Frame: what the renderer gets each tick
// ════════════════════════════════════════════════════════════════════════════

/// Read-only view of one tick's output.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub buffer:   &'a ParticleBuffer,
    /// Rotation about the vertical axis, radians.
    pub rotation: f32,
    /// The kind actually approached (after fallback).
    pub kind:     ShapeKind,
}

// ════════════════════════════════════════════════════════════════════════════
// BlendEngine
// ════════════════════════════════════════════════════════════════════════════

pub struct BlendEngine {
    library: ShapeLibrary,
    config:  BlendConfig,
    state:   AnimationState,
}

impl BlendEngine {
    pub fn new(library: ShapeLibrary, config: BlendConfig) -> Self {
        let state = AnimationState::new(&library);
        BlendEngine { library, config, state }
    }

    pub fn library(&self) -> &ShapeLibrary   { &self.library }
    pub fn config(&self)  -> BlendConfig     { self.config }
    pub fn state(&self)   -> &AnimationState { &self.state }

    /// Select from a hand sample, then [`BlendEngine::tick`].
    pub fn tick_sample(&mut self, sample: &HandSample, dt: f32) -> Frame<'_> {
        self.tick(select_shape(sample.gesture, sample.present), dt)
    }

    /// Advance one tick toward `kind`.  The live buffer is updated in place.
    pub fn tick(&mut self, kind: ShapeKind, dt: f32) -> Frame<'_> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let (kind, target) = self.library.target(kind);
        let state = &mut self.state;

        let alpha = blend_factor(self.config.blend_rate, dt);
        blend_toward(state.buffer.positions_mut(), target.positions(), alpha);
        blend_toward(state.buffer.colors_mut(),    target.colors(),    alpha);

        if !kind.same_target(state.previous) {
            debug!(from = state.previous.name(), to = kind.name(), "shape transition");
            if kind.is_planet() {
                state.spin = 0.0;
            }
        }
        state.previous = kind;

        let rotation = if kind.is_planet() {
            state.spin = (state.spin + self.config.spin_rate * dt).rem_euclid(TAU);
            state.spin
        } else {
            0.0
        };

        Frame { buffer: &state.buffer, rotation, kind }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use particle_shapes::ParticleBuffer;

    fn filled(count: usize, v: f32) -> ParticleBuffer {
        ParticleBuffer::new(vec![v; count * 3], vec![v.clamp(0.0, 1.0); count * 3]).unwrap()
    }

    /// Planet at 0, text at 0.5, heart at 1.0; fireworks absent.
    fn small_engine() -> BlendEngine {
        let lib = ShapeLibrary::new(filled(8, 0.0))
            .with_shape(ShapeKind::Victory, filled(8, 0.5)).unwrap()
            .with_shape(ShapeKind::Pinch,   filled(8, 1.0)).unwrap();
        BlendEngine::new(lib, BlendConfig::default())
    }

    #[test]
    fn blend_factor_clamps() {
        assert_eq!(blend_factor(4.0, 0.1), 0.4);
        assert_eq!(blend_factor(4.0, 1.0), 1.0);
        assert_eq!(blend_factor(4.0, -1.0), 0.0);
        assert_eq!(blend_factor(4.0, f32::NAN), 0.0);
    }

    #[test]
    fn blend_toward_moves_fraction_of_gap() {
        let mut cur = [0.0, 10.0, -4.0];
        blend_toward(&mut cur, &[1.0, 0.0, -4.0], 0.25);
        assert_eq!(cur, [0.25, 7.5, -4.0]);
    }

    #[test]
    fn starts_on_idle_buffer() {
        let e = small_engine();
        assert_eq!(e.state().buffer(), e.library().idle());
        assert_eq!(e.state().previous(), ShapeKind::Idle);
        assert_eq!(e.state().spin(), 0.0);
    }

    #[test]
    fn large_dt_snaps_to_target() {
        let mut e = small_engine();
        let f = e.tick(ShapeKind::Pinch, 5.0);
        assert_eq!(f.buffer, &filled(8, 1.0));
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut e = small_engine();
        let before = e.state().buffer().clone();
        e.tick(ShapeKind::Pinch, 0.0);
        assert_eq!(e.state().buffer(), &before);
    }

    #[test]
    fn equilibrium_is_a_fixed_point() {
        let mut e = small_engine();
        e.tick(ShapeKind::Pinch, 10.0);
        let settled = e.state().buffer().clone();
        for _ in 0..50 {
            e.tick(ShapeKind::Pinch, 1.0 / 60.0);
            assert_eq!(e.state().buffer(), &settled);
        }
    }

    #[test]
    fn converges_monotonically() {
        let mut e = small_engine();
        let target = filled(8, 1.0);
        let mut last = e.state().buffer().total_distance(&target);
        let mut ticks = 0;
        while e.state().buffer().max_distance(&target) > 1e-3 {
            e.tick(ShapeKind::Pinch, 1.0 / 60.0);
            let d = e.state().buffer().total_distance(&target);
            assert!(d < last, "tick {} did not approach: {} → {}", ticks, last, d);
            last = d;
            ticks += 1;
            assert!(ticks < 400, "no convergence after {} ticks", ticks);
        }
    }

    #[test]
    fn missing_kind_targets_idle() {
        let mut e = small_engine();
        e.tick(ShapeKind::Pinch, 10.0);
        let f = e.tick(ShapeKind::OpenHand, 10.0);
        assert_eq!(f.kind, ShapeKind::Idle);
        assert_eq!(f.buffer, &filled(8, 0.0));
    }

    #[test]
    fn non_planet_rotation_is_pinned_to_zero() {
        let mut e = small_engine();
        for _ in 0..30 { e.tick(ShapeKind::Idle, 0.05); }
        assert!(e.state().spin() > 0.0);
        for _ in 0..30 {
            assert_eq!(e.tick(ShapeKind::Pinch, 0.05).rotation, 0.0);
        }
    }

    #[test]
    fn planet_spins_at_spin_rate() {
        let mut e = small_engine();
        let mut r = 0.0;
        for _ in 0..10 { r = e.tick(ShapeKind::Idle, 0.1).rotation; }
        assert!((r - SPIN_RATE * 1.0).abs() < 1e-5);
    }

    #[test]
    fn reentering_planet_restarts_spin() {
        let mut e = small_engine();
        for _ in 0..20 { e.tick(ShapeKind::Idle, 0.1); }
        let before_leaving = e.state().spin();
        assert!(before_leaving > 0.3);

        e.tick(ShapeKind::Pinch, 0.1);
        e.tick(ShapeKind::Pinch, 0.1);
        let r = e.tick(ShapeKind::Idle, 0.1).rotation;
        assert!((r - SPIN_RATE * 0.1).abs() < 1e-6, "rotation {} kept stale spin", r);
    }

    #[test]
    fn absent_to_fist_keeps_spinning_on_the_same_planet() {
        let mut e = small_engine();
        e.tick(ShapeKind::Pinch, 0.1);
        for _ in 0..20 { e.tick(ShapeKind::Idle, 0.1); }
        let spin = e.state().spin();
        let before = e.state().buffer().max_distance(e.library().idle());

        let f = e.tick(ShapeKind::ClosedFist, 0.1);
        assert_eq!(f.kind, ShapeKind::ClosedFist);
        assert!((f.rotation - (spin + SPIN_RATE * 0.1)).abs() < 1e-5, "spin restarted: {}", f.rotation);
        assert!(e.state().buffer().max_distance(e.library().idle()) <= before);

        let r = e.tick(ShapeKind::Idle, 0.1).rotation;
        assert!((r - (spin + SPIN_RATE * 0.2)).abs() < 1e-5);
        assert_eq!(e.state().previous(), ShapeKind::Idle);
    }

    #[test]
    fn spin_keeps_advancing_in_long_sessions() {
        let mut e = small_engine();
        // a week of Idle in one step
        let spin = e.tick(ShapeKind::Idle, 700_000.0).rotation;
        assert!((0.0..TAU).contains(&spin));

        let mut r = spin;
        for _ in 0..600 { r = e.tick(ShapeKind::Idle, 1.0 / 60.0).rotation; }
        let advanced = (r - spin).rem_euclid(TAU);
        assert!((advanced - SPIN_RATE * 10.0).abs() < 1e-2, "advanced {} rad in 10 s", advanced);
    }

    #[test]
    fn buffer_is_updated_in_place() {
        let mut e = small_engine();
        let ptr = e.state().buffer().positions().as_ptr();
        for kind in ShapeKind::ALL { e.tick(kind, 0.016); }
        assert_eq!(e.state().buffer().positions().as_ptr(), ptr);
        assert_eq!(e.state().buffer().count(), 8);
    }
}
