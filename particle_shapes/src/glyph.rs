//! Offscreen grayscale bitmap and a blocky 3×5 font.
//!
//! The text cloud rasterizes its string here instead of into any camera or
//! window surface.  Glyphs are drawn as solid `cell × cell` blocks, so the
//! stride-2 scan in [`crate::text`] always finds pixels inside each block.

// ════════════════════════════════════════════════════════════════════════════
// Bitmap
// ════════════════════════════════════════════════════════════════════════════

/// Single-channel 8-bit image, row-major.
#[derive(Clone, Debug)]
pub struct Bitmap {
    pub width:  usize,
    pub height: usize,
    pixels:     Vec<u8>,
}

impl Bitmap {
    /// Black bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Bitmap { width, height, pixels: vec![0; width * height] }
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height { self.pixels[y * self.width + x] } else { 0 }
    }

    /// Fill a rectangle given in signed coordinates, clipped to the bitmap.
    pub fn fill_rect(&mut self, x: isize, y: isize, w: usize, h: usize, value: u8) {
        let x0 = x.clamp(0, self.width  as isize) as usize;
        let y0 = y.clamp(0, self.height as isize) as usize;
        let x1 = (x + w as isize).clamp(0, self.width  as isize) as usize;
        let y1 = (y + h as isize).clamp(0, self.height as isize) as usize;
        if x1 <= x0 { return; }
        for row in y0..y1 {
            self.pixels[row * self.width + x0..row * self.width + x1].fill(value);
        }
    }

    /// Number of pixels strictly brighter than `threshold`.
    pub fn count_above(&self, threshold: u8) -> usize {
        self.pixels.iter().filter(|&&p| p > threshold).count()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Text rasterization
// ════════════════════════════════════════════════════════════════════════════

/// Glyph columns, including the one-column gap after each glyph.
const ADVANCE: usize = 4;
const GLYPH_ROWS: usize = 5;

/// Render `text` in white, centred horizontally and vertically, with each
/// font cell drawn as a `cell × cell` block.
///
/// Characters without a glyph still advance the pen but draw nothing.
/// Text wider than the bitmap is clipped at both edges.
pub fn rasterize_text(text: &str, width: usize, height: usize, cell: usize) -> Bitmap {
    let mut bmp = Bitmap::new(width, height);
    let n = text.chars().count();
    if n == 0 || cell == 0 { return bmp; }

    let text_w = (n * ADVANCE - 1) * cell;
    let text_h = GLYPH_ROWS * cell;
    let x0 = (width  as isize - text_w as isize) / 2;
    let y0 = (height as isize - text_h as isize) / 2;

    for (k, ch) in text.chars().enumerate() {
        let Some(rows) = char_glyph(ch) else { continue };
        let gx = x0 + (k * ADVANCE * cell) as isize;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..3usize {
                if bits & (1 << (2 - col)) != 0 {
                    bmp.fill_rect(
                        gx + (col * cell) as isize,
                        y0 + (row * cell) as isize,
                        cell, cell, 255,
                    );
                }
            }
        }
    }
    bmp
}

/// 3×5 glyph rows (bit 2 = left column), or `None` for unsupported chars.
pub fn char_glyph(c: char) -> Option<[u8; 5]> {
    let g = match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'g' | 'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'n' | 'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'p' | 'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'q' | 'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b110, 0b001, 0b010, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '<' => [0b001, 0b010, 0b100, 0b010, 0b001],
        ' ' => [0b000; 5],
        _   => return None,
    };
    Some(g)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut b = Bitmap::new(4, 4);
        b.fill_rect(-2, -2, 3, 3, 200);
        assert_eq!(b.count_above(0), 1);
        assert_eq!(b.get(0, 0), 200);
        b.fill_rect(3, 3, 10, 10, 90);
        assert_eq!(b.get(3, 3), 90);
        assert_eq!(b.get(9, 9), 0);
    }

    #[test]
    fn single_glyph_is_centred() {
        // "I" at cell 2 in a 10×14 bitmap: glyph is 6×10, origin (2, 2).
        let b = rasterize_text("I", 10, 14, 2);
        assert_eq!(b.get(2, 2), 255);
        assert_eq!(b.get(7, 2), 255);
        assert_eq!(b.get(1, 2), 0);
        assert_eq!(b.get(2, 4), 0); // stem only in the middle column
        assert_eq!(b.get(4, 4), 255);
    }

    #[test]
    fn lit_area_matches_glyph_bits() {
        // "L" has 7 lit cells.
        let b = rasterize_text("L", 64, 64, 4);
        assert_eq!(b.count_above(128), 7 * 16);
    }

    #[test]
    fn unsupported_and_blank_text_draw_nothing() {
        assert_eq!(rasterize_text("", 32, 32, 2).count_above(0), 0);
        assert_eq!(rasterize_text("   ", 32, 32, 2).count_above(0), 0);
        assert_eq!(rasterize_text("★♥", 32, 32, 2).count_above(0), 0);
    }

    #[test]
    fn every_letter_has_a_glyph() {
        for c in 'A'..='Z' {
            assert!(char_glyph(c).is_some(), "missing glyph for {}", c);
            assert_eq!(char_glyph(c), char_glyph(c.to_ascii_lowercase()));
        }
    }
}
