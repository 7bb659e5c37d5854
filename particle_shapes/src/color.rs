//! Color generators.
//!
//! A palette pass picks each particle's base color (one hue, or one of a
//! few), then a second independent pass nudges every particle's lightness
//! for sparkle.  Output channels always stay in `0‥1`.

use rand::Rng;

use crate::sampling::{jitter, put};

// ════════════════════════════════════════════════════════════════════════════
// Rgb + HSL
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// From `0xRRGGBB`.
    pub fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >>  8) & 0xFF) as f32 / 255.0,
            b: ( hex        & 0xFF) as f32 / 255.0,
        }
    }

    /// `(hue, saturation, lightness)`, each in `0‥1`.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (min + max) / 2.0;
        if max == min {
            return (0.0, 0.0, l);
        }
        let delta = max - min;
        let s = if l <= 0.5 { delta / (max + min) } else { delta / (2.0 - max - min) };
        let h = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        (h / 6.0, s, l)
    }

    /// Hue wraps; saturation and lightness clamp.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Rgb { r: l, g: l, b: l };
        }
        let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let lo = 2.0 * l - hi;
        Rgb {
            r: hue_channel(lo, hi, h + 1.0 / 3.0),
            g: hue_channel(lo, hi, h),
            b: hue_channel(lo, hi, h - 1.0 / 3.0),
        }
    }

    /// Shift hue, saturation and lightness together.
    pub fn offset_hsl(self, dh: f32, ds: f32, dl: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Rgb::from_hsl(h + dh, s + ds, l + dl)
    }
}

fn hue_channel(lo: f32, hi: f32, mut t: f32) -> f32 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }
    let v = if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    };
    v.clamp(0.0, 1.0)
}

// ════════════════════════════════════════════════════════════════════════════
// Palettes
// ════════════════════════════════════════════════════════════════════════════

pub const NEBULA_HEX:    u32      = 0x00BFFF;
pub const FIREWORK_HEX:  [u32; 3] = [0xFF0000, 0x0000FF, 0xFFFF00];
pub const HEART_HEX:     u32      = 0xFF0055;
pub const TEXT_HEX:      u32      = 0xFF69B4;

/// Lightness spread of the nebula's per-particle variation.
pub const NEBULA_LIGHTNESS_SPREAD: f32 = 0.1;
/// Lightness spread of the sparkle pass applied to every palette.
pub const SPARKLE_SPREAD:          f32 = 0.2;

/// Color category of a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    /// One blue base, lightness varied per particle.
    Nebula,
    /// Red, blue or yellow, chosen per particle.
    Fireworks,
    Heart,
    Text,
}

impl Palette {
    pub fn name(self) -> &'static str {
        match self {
            Palette::Nebula    => "nebula",
            Palette::Fireworks => "fireworks",
            Palette::Heart     => "heart",
            Palette::Text      => "text",
        }
    }

    fn base<R: Rng + ?Sized>(self, rng: &mut R) -> Rgb {
        match self {
            Palette::Nebula => Rgb::from_hex(NEBULA_HEX)
                .offset_hsl(0.0, 0.0, jitter(rng, NEBULA_LIGHTNESS_SPREAD)),
            Palette::Fireworks => {
                Rgb::from_hex(FIREWORK_HEX[rng.random_range(0..FIREWORK_HEX.len())])
            }
            Palette::Heart => Rgb::from_hex(HEART_HEX),
            Palette::Text  => Rgb::from_hex(TEXT_HEX),
        }
    }
}

/// Interleaved `3 × count` color array for `palette`.
pub fn generate_colors<R: Rng + ?Sized>(palette: Palette, count: usize, rng: &mut R) -> Vec<f32> {
    let mut colors = vec![0.0; count * 3];
    for i in 0..count {
        let c = palette.base(rng)
            .offset_hsl(0.0, 0.0, jitter(rng, SPARKLE_SPREAD));
        put(&mut colors, i, [c.r, c.g, c.b]);
    }
    colors
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
