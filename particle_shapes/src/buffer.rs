//! `ParticleBuffer`: the fixed-length position/color pair shared by every
//! shape and by the live animation state.

use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// ShapeError
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A positions or colors array does not hold `3 × count` floats.
    #[error("buffer length mismatch: expected {expected} floats, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

// ════════════════════════════════════════════════════════════════════════════
// ParticleBuffer
// ════════════════════════════════════════════════════════════════════════════

/// Interleaved positions (`x,y,z`) and colors (`r,g,b`) for `count` particles.
///
/// The two arrays always have the same length, a multiple of three.  The
/// length is fixed at construction: mutable access is by slice only, so
/// nothing downstream can grow or shrink a buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBuffer {
    positions: Vec<f32>,
    colors:    Vec<f32>,
}

impl ParticleBuffer {
    /// Pair a positions array with a colors array.
    ///
    /// Fails unless both have the same length and that length is a
    /// multiple of three.
    pub fn new(positions: Vec<f32>, colors: Vec<f32>) -> Result<Self, ShapeError> {
        let expected = positions.len() - positions.len() % 3;
        if positions.len() != expected {
            return Err(ShapeError::LengthMismatch { expected, actual: positions.len() });
        }
        if colors.len() != positions.len() {
            return Err(ShapeError::LengthMismatch {
                expected: positions.len(),
                actual:   colors.len(),
            });
        }
        Ok(ParticleBuffer { positions, colors })
    }

    /// Generators produce matching `3 × count` arrays by construction.
    pub(crate) fn from_generated(positions: Vec<f32>, colors: Vec<f32>) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(positions.len() % 3, 0);
        ParticleBuffer { positions, colors }
    }

    /// All-zero buffer (black particles at the origin).
    pub fn zeroed(count: usize) -> Self {
        ParticleBuffer {
            positions: vec![0.0; count * 3],
            colors:    vec![0.0; count * 3],
        }
    }

    /// Number of logical particles.
    pub fn count(&self) -> usize { self.positions.len() / 3 }

    /// Number of floats in each array (`3 × count`).
    pub fn len(&self) -> usize { self.positions.len() }

    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    pub fn positions(&self) -> &[f32] { &self.positions }
    pub fn colors(&self)    -> &[f32] { &self.colors }

    pub fn positions_mut(&mut self) -> &mut [f32] { &mut self.positions }
    pub fn colors_mut(&mut self)    -> &mut [f32] { &mut self.colors }

    /// Position of particle `i`.
    pub fn point(&self, i: usize) -> [f32; 3] {
        let p = &self.positions[i * 3..i * 3 + 3];
        [p[0], p[1], p[2]]
    }

    /// Color of particle `i`.
    pub fn color(&self, i: usize) -> [f32; 3] {
        let c = &self.colors[i * 3..i * 3 + 3];
        [c[0], c[1], c[2]]
    }

    /// Overwrite this buffer's contents in place with `other`'s.
    pub fn copy_from(&mut self, other: &ParticleBuffer) -> Result<(), ShapeError> {
        if other.len() != self.len() {
            return Err(ShapeError::LengthMismatch { expected: self.len(), actual: other.len() });
        }
        self.positions.copy_from_slice(&other.positions);
        self.colors.copy_from_slice(&other.colors);
        Ok(())
    }

    /// Largest per-float absolute difference to `other`, over both arrays.
    ///
    /// Buffers of different length are infinitely far apart.
    pub fn max_distance(&self, other: &ParticleBuffer) -> f32 {
        if other.len() != self.len() { return f32::INFINITY; }
        self.positions.iter().zip(&other.positions)
            .chain(self.colors.iter().zip(&other.colors))
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }

    /// Sum of per-float absolute differences to `other`, over both arrays.
    pub fn total_distance(&self, other: &ParticleBuffer) -> f64 {
        if other.len() != self.len() { return f64::INFINITY; }
        self.positions.iter().zip(&other.positions)
            .chain(self.colors.iter().zip(&other.colors))
            .map(|(a, b)| (*a as f64 - *b as f64).abs())
            .sum()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
