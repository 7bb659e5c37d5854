//! Text glyph cloud.
//!
//! The string is rasterized to an offscreen bitmap, the bitmap is scanned on
//! a stride-2 grid for bright pixels, and particles are dealt to those
//! pixels cyclically (`i mod bright`), so sparse text still fills every
//! slot.  Each pixel maps to a centred plane with a little jitter against
//! banding and a shallow random depth.

use rand::Rng;
use tracing::{debug, warn};

use crate::generators;
use crate::glyph::{rasterize_text, Bitmap};
use crate::sampling::{jitter, put};

/// The literal shown for the victory gesture.
pub const DEFAULT_TEXT: &str = "I  LOVE  YOU";

pub const CANVAS_W:             usize = 512;
pub const CANVAS_H:             usize = 128;
/// Font cell size in pixels; glyphs stand five cells tall.
pub const GLYPH_CELL_PX:        usize = 10;
pub const SCAN_STRIDE:          usize = 2;
pub const BRIGHTNESS_THRESHOLD: u8    = 128;

/// World-space extent of the canvas.
pub const PLANE_WIDTH:          f32 = 14.0;
pub const PLANE_HEIGHT:         f32 = 3.5;
pub const PIXEL_JITTER:         f32 = 0.1;
pub const TEXT_DEPTH:           f32 = 0.5;

/// Result of building a text cloud.
#[derive(Clone, Debug)]
pub struct TextCloud {
    pub positions: Vec<f32>,
    /// Bright pixels found by the scan.
    pub bright_pixels: usize,
    /// True when the scan found nothing and a sphere was substituted.
    pub fell_back: bool,
}

/// Pixel coordinates on the stride grid brighter than the threshold,
/// in row-major order.
pub fn bright_pixels(bmp: &Bitmap) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in (0..bmp.height).step_by(SCAN_STRIDE) {
        for x in (0..bmp.width).step_by(SCAN_STRIDE) {
            if bmp.get(x, y) > BRIGHTNESS_THRESHOLD {
                out.push((x, y));
            }
        }
    }
    out
}

/// Build a `count`-particle cloud spelling `text`.
///
/// Falls back to [`generators::sphere`] when the rasterized text has no
/// bright pixels (empty string, only unsupported characters, …).
pub fn text_cloud<R: Rng + ?Sized>(text: &str, count: usize, rng: &mut R) -> TextCloud {
    let bmp    = rasterize_text(text, CANVAS_W, CANVAS_H, GLYPH_CELL_PX);
    let pixels = bright_pixels(&bmp);

    if pixels.is_empty() {
        warn!(text, "text rasterized to zero bright pixels, using sphere instead");
        return TextCloud {
            positions:     generators::sphere(count, rng),
            bright_pixels: 0,
            fell_back:     true,
        };
    }
    debug!(text, bright = pixels.len(), count, "text cloud rasterized");

    let mut positions = vec![0.0; count * 3];
    for i in 0..count {
        let (px, py) = pixels[i % pixels.len()];
        let x =  (px as f32 / CANVAS_W as f32 - 0.5) * PLANE_WIDTH;
        let y = -(py as f32 / CANVAS_H as f32 - 0.5) * PLANE_HEIGHT;
        put(&mut positions, i, [
            x + jitter(rng, PIXEL_JITTER),
            y + jitter(rng, PIXEL_JITTER),
            jitter(rng, TEXT_DEPTH),
        ]);
    }
    TextCloud { positions, bright_pixels: pixels.len(), fell_back: false }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
