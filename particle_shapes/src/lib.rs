//! # particle_shapes
//!
//! Procedural point clouds for the gesture particle field.  Every generator
//! emits exactly `count` points in the same interleaved layout, so any two
//! shapes can be blended element-by-element:
//!
//! ```text
//! positions = [x0, y0, z0, x1, y1, z1, …]   (3 × count)
//! colors    = [r0, g0, b0, r1, g1, b1, …]   (3 × count, each in 0‥1)
//! ```
//!
//! Point `i` of one shape has no geometric relation to point `i` of another;
//! index identity is the only correspondence.
//!
//! ## Quick start
//!
//! ```rust
//! use particle_shapes::Shape;
//!
//! let mut rng = rand::rng();
//! let planet = Shape::PlanetRing.build(1000, &mut rng);
//! let heart  = Shape::Heart.build(1000, &mut rng);
//! assert_eq!(planet.positions().len(), heart.positions().len());
//! ```

pub mod buffer;
pub mod color;
pub mod generators;
pub mod glyph;
pub mod sampling;
pub mod shape;
pub mod text;

pub use buffer::{ParticleBuffer, ShapeError};
pub use shape::Shape;

/// Particle count used by the live session unless configured otherwise.
pub const PARTICLE_COUNT: usize = 4000;
