//! Software-rendered particle view using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                                                      │
//! │              additive particle field                 │
//! │           (perspective, camera at z = 8)             │
//! │                                                      │
//! ├──────────────────────────────────────────────────────┤
//! │  status: gesture · shape · fps                       │
//! │  key legend                                          │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Drawing goes through [`Canvas`], a plain pixel buffer that needs no
//! window, so it can be exercised headless.

use std::sync::mpsc::Sender;
use std::time::Duration;

use minifb::{Key, KeyRepeat, Window, WindowOptions};
use particle_shapes::glyph::char_glyph;
use particle_shapes::ParticleBuffer;

use crate::error::AppError;
use crate::gesture::{SimInput, SimKey};
use crate::projector::{Projector, CAMERA_Z};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const BG_COLOR:    u32   = 0xFF050505;
const STATUS_H:        usize = 34;
const STATUS_BG:       u32   = 0xFF0C0C14;
const STATUS_FG:       u32   = 0xFFEEEEEE;
const LEGEND_FG:       u32   = 0xFF777777;
const LABEL_SCALE:     usize = 2;
const GLYPH_ADVANCE:   usize = 4;
/// Peak per-particle contribution, so dense regions bloom instead of
/// clipping immediately.
const SPLAT_GAIN:      f32   = 0.55;
const SPLAT_KERNEL:    [[f32; 3]; 3] = [
    [0.25, 0.5, 0.25],
    [0.5,  1.0, 0.5 ],
    [0.25, 0.5, 0.25],
];

pub const LEGEND: &str = "1=fist  2=open  3=victory  4=pinch  0=away  </>=tilt  esc=quit";

// ════════════════════════════════════════════════════════════════════════════
// Canvas
// ════════════════════════════════════════════════════════════════════════════

pub struct Canvas {
    pub width:  usize,
    pub height: usize,
    pub buf:    Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, buf: vec![BG_COLOR; width * height] }
    }

    pub fn clear(&mut self) { self.buf.fill(BG_COLOR); }

    pub fn pixel(&self, x: usize, y: usize) -> u32 { self.buf[y * self.width + x] }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x] = color;
        }
    }

    /// Add `rgb` (each `0‥255`) to the pixel, saturating per channel.
    pub fn add_pixel(&mut self, x: isize, y: isize, rgb: [f32; 3]) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.buf[idx] = add_rgb(self.buf[idx], rgb);
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.buf[row * self.width + col] = color;
            }
        }
    }

    /// Soft additive dot centred on `(cx, cy)`.  `color` channels are `0‥1`.
    pub fn splat(&mut self, cx: f32, cy: f32, color: [f32; 3], intensity: f32) {
        let (px, py) = (cx.round() as isize, cy.round() as isize);
        let k = 255.0 * SPLAT_GAIN * intensity;
        for (dy, row) in SPLAT_KERNEL.iter().enumerate() {
            for (dx, &w) in row.iter().enumerate() {
                let s = k * w;
                self.add_pixel(
                    px + dx as isize - 1,
                    py + dy as isize - 1,
                    [color[0] * s, color[1] * s, color[2] * s],
                );
            }
        }
    }

    /// Draw every particle of `buffer` as seen through `proj` after turning
    /// the cloud by `rotation` about Y.
    pub fn draw_particles(&mut self, proj: &Projector, buffer: &ParticleBuffer, rotation: f32) {
        for i in 0..buffer.count() {
            if let Some(p) = proj.project(buffer.point(i), rotation) {
                // nearer particles read brighter, like size attenuation
                let intensity = (CAMERA_Z / p.depth).clamp(0.5, 1.5);
                self.splat(p.x, p.y, buffer.color(i), intensity);
            }
        }
    }

    /// 3×5 bitmap text, `scale` pixels per font pixel.  Unknown characters
    /// draw as a centre dot.
    pub fn draw_label(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        const DOT: [u8; 5] = [0b000, 0b000, 0b010, 0b000, 0b000];
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch).unwrap_or(DOT);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
            cx += GLYPH_ADVANCE * scale;
            if cx + GLYPH_ADVANCE * scale > self.width { break; }
        }
    }
}

fn add_rgb(dst: u32, rgb: [f32; 3]) -> u32 {
    let ch = |shift: u32, v: f32| {
        let cur = (dst >> shift) & 0xFF;
        (cur + v.max(0.0) as u32).min(255) << shift
    };
    0xFF000000 | ch(16, rgb[0]) | ch(8, rgb[1]) | ch(0, rgb[2])
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:    Window,
    canvas:    Canvas,
    projector: Projector,
    sim_tx:    Sender<SimInput>,
}

impl Visualizer {
    pub fn new(width: usize, height: usize, sim_tx: Sender<SimInput>) -> Result<Self, AppError> {
        let mut window = Window::new(
            "Gesture Particles",
            width, height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| AppError::Window(e.to_string()))?;

        window.limit_update_rate(Some(Duration::from_millis(16))); // ~60fps

        let field_h = height.saturating_sub(STATUS_H).max(1);
        Ok(Visualizer {
            window,
            canvas:    Canvas::new(width, height),
            projector: Projector::new(width, field_h),
            sim_tx,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll keyboard inputs and translate to SimInput events.  Returns false
    /// when the user asked to quit.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() { return false; }

        let one_shot = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);

        if one_shot(Key::Escape) || one_shot(Key::Q) {
            return false;
        }

        let bindings = [
            (Key::Key1,  SimKey::Fist),
            (Key::Key2,  SimKey::OpenPalm),
            (Key::Key3,  SimKey::Victory),
            (Key::Key4,  SimKey::Pinch),
            (Key::Key0,  SimKey::HandAway),
            (Key::Left,  SimKey::TiltLeft),
            (Key::Right, SimKey::TiltRight),
        ];
        for (key, sim) in bindings {
            if one_shot(key) {
                let _ = self.sim_tx.send(SimInput::KeyDown(sim));
            }
        }
        true
    }

    /// Render one frame.
    pub fn render(&mut self, buffer: &ParticleBuffer, rotation: f32, status: &str) -> Result<(), AppError> {
        let (w, h) = (self.canvas.width, self.canvas.height);
        self.canvas.clear();
        self.canvas.draw_particles(&self.projector, buffer, rotation);

        // ── Status bar ────────────────────────────────────────────────────
        let bar_y = h.saturating_sub(STATUS_H);
        self.canvas.fill_rect(0, bar_y, w, STATUS_H, STATUS_BG);
        self.canvas.draw_label(status, 10, bar_y + 5, LABEL_SCALE, STATUS_FG);
        self.canvas.draw_label(LEGEND, 10, bar_y + 20, LABEL_SCALE, LEGEND_FG);

        self.window
            .update_with_buffer(&self.canvas.buf, w, h)
            .map_err(|e| AppError::Window(e.to_string()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
