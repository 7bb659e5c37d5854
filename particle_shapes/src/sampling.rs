//! Random sampling primitives shared by the generators.

use std::f32::consts::TAU;

use rand::Rng;

/// Uniform-in-volume point inside a sphere of `radius` centred on the origin.
///
/// Azimuth is uniform, the polar angle is `acos` of a uniform value in
/// `[-1, 1]`, and the radius is `radius · cbrt(u)`.  Sampling the angles
/// uniformly instead would crowd the poles; sampling the radius linearly
/// would crowd the centre.
pub fn random_in_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> [f32; 3] {
    let theta = TAU * rng.random::<f32>();
    let phi   = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r     = rng.random::<f32>().cbrt() * radius;
    let sin_phi = phi.sin();
    [
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    ]
}

/// Uniform value in `[-spread/2, spread/2)`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * spread
}

/// Write `p` as particle `i` of an interleaved positions array.
#[inline]
pub(crate) fn put(positions: &mut [f32], i: usize, p: [f32; 3]) {
    positions[i * 3..i * 3 + 3].copy_from_slice(&p);
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
