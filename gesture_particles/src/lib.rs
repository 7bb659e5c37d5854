//! # gesture_particles
//!
//! A hand-gesture driven particle field.  A landmark classifier turns each
//! video frame into a hand sample, the sample selects one of five
//! precomputed shapes, and a few thousand additive points morph toward it.
//!
//! ## Gesture → Shape mapping
//!
//! | Gesture | Shape | Motion |
//! |---|---|---|
//! | No hand / unrecognised | Planet with ring | Slow spin about Y |
//! | Closed fist | The same planet | Keeps spinning |
//! | Open palm | Firework burst | Fixed |
//! | Victory | Text glyph cloud | Fixed |
//! | Pinch | Heart | Fixed |
//!
//! ## Hand sources
//!
//! No camera or landmark model ships with this crate.  The default source
//! is a keyboard simulator that holds up synthetic hands and runs them
//! through the same classifier a tracker would feed.
//!
//! ### Simulation keyboard shortcuts
//!
//! | Key | Gesture |
//! |---|---|
//! | `1` | Closed fist |
//! | `2` | Open palm |
//! | `3` | Victory |
//! | `4` | Pinch |
//! | `0` | Hand leaves view |
//! | `←` / `→` | Tilt the hand |
//! | `Esc` / `Q` | Quit |

pub mod app;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod error;
pub mod gesture;
pub mod landmarks;
pub mod logging;
pub mod projector;
pub mod visualizer;
