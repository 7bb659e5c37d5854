//! Precomputed target buffers, one per shape kind.

use std::collections::HashMap;

use particle_shapes::{ParticleBuffer, ShapeError};
use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::kind::ShapeKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A buffer's particle count differs from the library's.
    #[error("{kind:?} buffer rejected: {source}")]
    Buffer { kind: ShapeKind, source: ShapeError },
}

/// Read-only table from [`ShapeKind`] to its target buffer.
///
/// Idle is always present, and ClosedFist always shows that same buffer.
/// Lookups for any other kind that has no buffer resolve to Idle, so
/// [`ShapeLibrary::target`] never fails.
#[derive(Clone, Debug)]
pub struct ShapeLibrary {
    idle:   ParticleBuffer,
    others: HashMap<ShapeKind, ParticleBuffer>,
}

impl ShapeLibrary {
    /// Library holding only the Idle buffer.
    pub fn new(idle: ParticleBuffer) -> Self {
        ShapeLibrary { idle, others: HashMap::new() }
    }

    /// Generate every kind's buffer with the thread-local RNG.
    pub fn generate(count: usize, text: &str) -> Self {
        Self::generate_with(count, text, &mut rand::rng())
    }

    /// Generate every kind's buffer from `rng`.  The one planet is shared
    /// by Idle and ClosedFist.
    pub fn generate_with<R: Rng + ?Sized>(count: usize, text: &str, rng: &mut R) -> Self {
        let idle = ShapeKind::Idle.shape(text).build(count, rng);
        let mut others = HashMap::new();
        for kind in ShapeKind::ALL.into_iter().filter(|k| k.buffer_key() != ShapeKind::Idle) {
            others.insert(kind, kind.shape(text).build(count, rng));
        }
        info!(count, kinds = ShapeKind::ALL.len(), "shape library generated");
        ShapeLibrary { idle, others }
    }

    /// Add or replace the buffer for `kind`.  Inserting for ClosedFist
    /// replaces the shared planet.
    pub fn insert(&mut self, kind: ShapeKind, buffer: ParticleBuffer) -> Result<(), LibraryError> {
        if buffer.len() != self.idle.len() {
            return Err(LibraryError::Buffer {
                kind,
                source: ShapeError::LengthMismatch {
                    expected: self.idle.len(),
                    actual:   buffer.len(),
                },
            });
        }
        match kind.buffer_key() {
            ShapeKind::Idle => self.idle = buffer,
            key             => { self.others.insert(key, buffer); }
        }
        Ok(())
    }

    /// Builder form of [`ShapeLibrary::insert`].
    pub fn with_shape(mut self, kind: ShapeKind, buffer: ParticleBuffer) -> Result<Self, LibraryError> {
        self.insert(kind, buffer)?;
        Ok(self)
    }

    /// Particles per buffer.
    pub fn count(&self) -> usize { self.idle.count() }

    pub fn contains(&self, kind: ShapeKind) -> bool {
        match kind.buffer_key() {
            ShapeKind::Idle => true,
            key             => self.others.contains_key(&key),
        }
    }

    /// `kind` itself when it has a buffer, otherwise Idle.
    pub fn resolve(&self, kind: ShapeKind) -> ShapeKind {
        if self.contains(kind) { kind } else { ShapeKind::Idle }
    }

    /// Resolved kind and its buffer.
    pub fn target(&self, kind: ShapeKind) -> (ShapeKind, &ParticleBuffer) {
        if kind.buffer_key() == ShapeKind::Idle {
            return (kind, &self.idle);
        }
        match self.others.get(&kind) {
            Some(buffer) => (kind, buffer),
            None         => (ShapeKind::Idle, &self.idle),
        }
    }

    pub fn idle(&self) -> &ParticleBuffer { &self.idle }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn filled(count: usize, v: f32) -> ParticleBuffer {
        ParticleBuffer::new(vec![v; count * 3], vec![v.clamp(0.0, 1.0); count * 3]).unwrap()
    }

    #[test]
    fn generated_library_covers_every_kind_with_equal_counts() {
        let mut rng = StdRng::seed_from_u64(51);
        let lib = ShapeLibrary::generate_with(300, "HI", &mut rng);
        assert_eq!(lib.count(), 300);
        for kind in ShapeKind::ALL {
            assert!(lib.contains(kind));
            let (resolved, buf) = lib.target(kind);
            assert_eq!(resolved, kind);
            assert_eq!(buf.len(), 900);
        }
    }

    #[test]
    fn fist_shows_the_idle_planet() {
        let mut rng = StdRng::seed_from_u64(52);
        let lib = ShapeLibrary::generate_with(100, "HI", &mut rng);
        assert!(std::ptr::eq(lib.target(ShapeKind::Idle).1, lib.target(ShapeKind::ClosedFist).1));
        assert!(!lib.others.contains_key(&ShapeKind::ClosedFist));
    }

    #[test]
    fn inserting_for_fist_replaces_the_shared_planet() {
        let lib = ShapeLibrary::new(filled(3, 0.0))
            .with_shape(ShapeKind::ClosedFist, filled(3, 0.75)).unwrap();
        assert_eq!(lib.idle(), &filled(3, 0.75));
        assert_eq!(lib.target(ShapeKind::Idle).1, &filled(3, 0.75));
    }

    #[test]
    fn missing_kind_resolves_to_idle() {
        let lib = ShapeLibrary::new(filled(4, 1.0));
        for kind in ShapeKind::ALL {
            let (resolved, buf) = lib.target(kind);
            assert_eq!(buf, &filled(4, 1.0));
            if kind.is_planet() {
                assert_eq!(resolved, kind);
                assert_eq!(lib.resolve(kind), kind);
            } else {
                assert_eq!(resolved, ShapeKind::Idle);
                assert_eq!(lib.resolve(kind), ShapeKind::Idle);
            }
        }
    }

    #[test]
    fn insert_rejects_wrong_count() {
        let mut lib = ShapeLibrary::new(filled(4, 0.0));
        let err = lib.insert(ShapeKind::Pinch, filled(5, 0.0)).unwrap_err();
        assert_eq!(err, LibraryError::Buffer {
            kind:   ShapeKind::Pinch,
            source: ShapeError::LengthMismatch { expected: 12, actual: 15 },
        });
        assert!(!lib.contains(ShapeKind::Pinch));
    }

    #[test]
    fn insert_idle_replaces_default() {
        let lib = ShapeLibrary::new(filled(2, 0.0))
            .with_shape(ShapeKind::Idle, filled(2, 0.5)).unwrap()
            .with_shape(ShapeKind::Pinch, filled(2, 0.25)).unwrap();
        assert_eq!(lib.idle(), &filled(2, 0.5));
        assert_eq!(lib.target(ShapeKind::Pinch).1, &filled(2, 0.25));
    }
}
