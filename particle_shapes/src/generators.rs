//! Position generators.  Each returns an interleaved `3 × count` array.

use rand::Rng;

use crate::sampling::{jitter, put, random_in_sphere};

// ════════════════════════════════════════════════════════════════════════════
// Shape constants
// ════════════════════════════════════════════════════════════════════════════

/// Share of planet particles that form the body; the rest form the ring.
pub const PLANET_BODY_FRACTION: f32 = 0.7;
pub const PLANET_RADIUS:        f32 = 2.2;
pub const RING_INNER_RADIUS:    f32 = 3.0;
pub const RING_OUTER_RADIUS:    f32 = 5.5;
pub const RING_THICKNESS:       f32 = 0.15;
/// Ring tilt about the X axis, degrees.
pub const RING_TILT_DEG:        f32 = 25.0;

pub const HEART_SCALE:          f32 = 0.15;
pub const HEART_SPREAD:         f32 = 0.5;
pub const HEART_DEPTH:          f32 = 2.0;

pub const FIREWORK_RADIUS:      f32 = 8.0;

/// Radius of the neutral sphere used when another generator has nothing
/// to draw.
pub const SPHERE_RADIUS:        f32 = 3.0;

// ════════════════════════════════════════════════════════════════════════════
// Generators
// ════════════════════════════════════════════════════════════════════════════

/// Neutral filled sphere.
pub fn sphere<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut positions = vec![0.0; count * 3];
    for i in 0..count {
        put(&mut positions, i, random_in_sphere(rng, SPHERE_RADIUS));
    }
    positions
}

/// Filled planet with a tilted ring.
///
/// The first 70 % of particles sample the body uniformly by volume; the rest
/// sample an annulus on the XZ plane with a thin vertical jitter, then the
/// (y, z) pair is rotated by the ring tilt.
pub fn planet_with_ring<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut positions = vec![0.0; count * 3];
    let body = (count as f32 * PLANET_BODY_FRACTION).floor() as usize;

    for i in 0..body {
        put(&mut positions, i, random_in_sphere(rng, PLANET_RADIUS));
    }

    let (sin_tilt, cos_tilt) = RING_TILT_DEG.to_radians().sin_cos();
    for i in body..count {
        let theta = std::f32::consts::TAU * rng.random::<f32>();
        let r     = RING_INNER_RADIUS
                  + rng.random::<f32>() * (RING_OUTER_RADIUS - RING_INNER_RADIUS);
        let x     = r * theta.cos();
        let z0    = r * theta.sin();
        let y0    = jitter(rng, RING_THICKNESS);

        let y = y0 * cos_tilt - z0 * sin_tilt;
        let z = y0 * sin_tilt + z0 * cos_tilt;
        put(&mut positions, i, [x, y, z]);
    }
    positions
}

/// Point on the classic parametric heart curve for parameter `t`, unscaled.
///
/// ```text
/// x = 16 sin³t
/// y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t
/// ```
pub fn heart_curve(t: f32) -> (f32, f32) {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos()
          -  5.0 * (2.0 * t).cos()
          -  2.0 * (3.0 * t).cos()
          -        (4.0 * t).cos();
    (x, y)
}

/// Heart silhouette: a random curve parameter per particle, scaled, with
/// independent in-plane jitter and a separate depth jitter for volume.
pub fn heart<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut positions = vec![0.0; count * 3];
    for i in 0..count {
        let t = std::f32::consts::TAU * rng.random::<f32>();
        let (hx, hy) = heart_curve(t);
        let x = hx * HEART_SCALE + jitter(rng, HEART_SPREAD);
        let y = hy * HEART_SCALE + jitter(rng, HEART_SPREAD);
        let z = jitter(rng, HEART_DEPTH);
        put(&mut positions, i, [x, y, z]);
    }
    positions
}

/// Firework burst: the planet body's volume sampler at explosion radius.
pub fn fireworks<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut positions = vec![0.0; count * 3];
    for i in 0..count {
        put(&mut positions, i, random_in_sphere(rng, FIREWORK_RADIUS));
    }
    positions
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
