//! `Shape`: a position generator paired with its palette.

use rand::Rng;

use crate::buffer::ParticleBuffer;
use crate::color::{generate_colors, Palette};
use crate::{generators, text};

/// One of the procedural shapes, ready to be built into a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape<'a> {
    PlanetRing,
    Fireworks,
    Heart,
    /// Glyph cloud spelling the given literal.
    Text(&'a str),
    /// Neutral fallback sphere.
    Sphere,
}

impl Shape<'_> {
    pub fn name(self) -> &'static str {
        match self {
            Shape::PlanetRing => "planet",
            Shape::Fireworks  => "fireworks",
            Shape::Heart      => "heart",
            Shape::Text(_)    => "text",
            Shape::Sphere     => "sphere",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Shape::PlanetRing | Shape::Sphere => Palette::Nebula,
            Shape::Fireworks                  => Palette::Fireworks,
            Shape::Heart                      => Palette::Heart,
            Shape::Text(_)                    => Palette::Text,
        }
    }

    /// Interleaved `3 × count` positions.
    pub fn positions<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Vec<f32> {
        match self {
            Shape::PlanetRing => generators::planet_with_ring(count, rng),
            Shape::Fireworks  => generators::fireworks(count, rng),
            Shape::Heart      => generators::heart(count, rng),
            Shape::Text(s)    => text::text_cloud(s, count, rng).positions,
            Shape::Sphere     => generators::sphere(count, rng),
        }
    }

    /// Positions and palette colors for `count` particles.
    pub fn build<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> ParticleBuffer {
        let positions = self.positions(count, rng);
        let colors    = generate_colors(self.palette(), count, rng);
        ParticleBuffer::from_generated(positions, colors)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
