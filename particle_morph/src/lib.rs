//! # particle_morph
//!
//! Turns a stream of hand samples into a continuously morphing particle
//! field.
//!
//! ```text
//! HandSample ──select_shape──▶ ShapeKind ──ShapeLibrary──▶ target buffer
//!                                                              │
//!                     BlendEngine::tick(kind, dt) ◀────────────┘
//!                         │
//!                         ▼
//!               live buffer + rotation ──▶ renderer
//! ```
//!
//! * [`select_shape`] is total: an absent hand or an unmapped gesture
//!   selects [`ShapeKind::Idle`].
//! * [`ShapeLibrary`] holds one precomputed buffer per kind, generated once
//!   and read-only afterwards; a kind without a buffer resolves to Idle.
//! * [`BlendEngine`] owns the only mutable state.  Each tick it pulls every
//!   float of the live buffer toward the target by `clamp(rate · dt, 0, 1)`
//!   and spins the planet shapes; every other shape is pinned facing
//!   forward.
//!
//! ## Quick start
//!
//! ```rust
//! use particle_morph::{BlendEngine, BlendConfig, Gesture, HandSample, ShapeLibrary};
//!
//! let library = ShapeLibrary::generate(500, "HI");
//! let mut engine = BlendEngine::new(library, BlendConfig::default());
//!
//! let sample = HandSample::present(Gesture::Pinch, 0.0, [0.5, 0.5]);
//! let frame = engine.tick_sample(&sample, 1.0 / 60.0);
//! assert_eq!(frame.rotation, 0.0);
//! ```

pub mod engine;
pub mod hand;
pub mod kind;
pub mod library;
pub mod selector;

pub use engine::{blend_factor, blend_toward, AnimationState, BlendConfig, BlendEngine, Frame};
pub use hand::{Gesture, HandSample};
pub use kind::ShapeKind;
pub use library::{LibraryError, ShapeLibrary};
pub use selector::select_shape;
