//! Top-level application state and run loop.
//!
//! `AppState` owns the blend engine and the most recent hand sample.  Each
//! frame the run loop drains the hand feed, advances the engine by the real
//! elapsed time, and hands the live buffer to the visualizer.

use std::sync::mpsc::{self, Sender};

use particle_morph::{BlendConfig, BlendEngine, HandSample, ShapeKind, ShapeLibrary};
use particle_shapes::text::DEFAULT_TEXT;
use particle_shapes::{ParticleBuffer, PARTICLE_COUNT};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::clock::FrameClock;
use crate::config::ConfigError;
use crate::error::AppError;
use crate::gesture::{spawn_hand_source, HandFeed, SimHandSource, SimInput};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub particle_count: usize,
    /// Blend speed, per second.
    pub blend_rate:     f32,
    /// Planet spin, radians per second.
    pub spin_rate:      f32,
    /// Literal shown by the victory gesture.
    pub text:           String,
    /// Fixed seed for the shape library; `None` draws from the thread RNG.
    pub seed:           Option<u64>,
    pub window_width:   usize,
    pub window_height:  usize,
    pub log_filter:     String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let blend = BlendConfig::default();
        AppConfig {
            particle_count: PARTICLE_COUNT,
            blend_rate:     blend.blend_rate,
            spin_rate:      blend.spin_rate,
            text:           DEFAULT_TEXT.to_string(),
            seed:           None,
            window_width:   960,
            window_height:  640,
            log_filter:     "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        for (name, value) in [("blend rate", self.blend_rate), ("spin rate", self.spin_rate)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(())
    }

    pub fn blend(&self) -> BlendConfig {
        BlendConfig { blend_rate: self.blend_rate, spin_rate: self.spin_rate }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    engine:   BlendEngine,
    sample:   HandSample,
    kind:     ShapeKind,
    rotation: f32,
}

impl AppState {
    /// Generate the shape library and start settled on Idle.
    pub fn new(cfg: &AppConfig) -> Self {
        let library = match cfg.seed {
            Some(seed) => ShapeLibrary::generate_with(
                cfg.particle_count, &cfg.text, &mut StdRng::seed_from_u64(seed),
            ),
            None => ShapeLibrary::generate(cfg.particle_count, &cfg.text),
        };
        AppState {
            engine:   BlendEngine::new(library, cfg.blend()),
            sample:   HandSample::absent(),
            kind:     ShapeKind::Idle,
            rotation: 0.0,
        }
    }

    /// Replace the current hand sample whole.
    pub fn handle_sample(&mut self, sample: HandSample) {
        self.sample = sample;
    }

    // ── Per-frame tick ────────────────────────────────────────────────────

    pub fn tick(&mut self, dt: f32) {
        let frame = self.engine.tick_sample(&self.sample, dt);
        self.kind     = frame.kind;
        self.rotation = frame.rotation;
    }

    pub fn status_line(&self, fps: f32) -> String {
        let hand = if self.sample.present { self.sample.gesture.name() } else { "no hand" };
        format!("hand: {}   shape: {}   fps: {:.0}", hand, self.kind.name(), fps)
    }

    // ── Accessors for the render loop ─────────────────────────────────────

    pub fn buffer(&self)   -> &ParticleBuffer { self.engine.state().buffer() }
    pub fn rotation(&self) -> f32             { self.rotation }
    pub fn kind(&self)     -> ShapeKind       { self.kind }
    pub fn sample(&self)   -> HandSample      { self.sample }
    pub fn engine(&self)   -> &BlendEngine    { &self.engine }
}

// ════════════════════════════════════════════════════════════════════════════
// Session startup
// ════════════════════════════════════════════════════════════════════════════

/// Build the window around the sim sender, then start the hand source that
/// listens to it.  If the window can't be built no thread has been started.
pub fn open_session<V, F>(make_window: F) -> Result<(V, HandFeed), AppError>
where
    F: FnOnce(Sender<SimInput>) -> Result<V, AppError>,
{
    let (sim_tx, sim_rx) = mpsc::channel();
    let window = make_window(sim_tx)?;
    let feed = spawn_hand_source(SimHandSource { rx: sim_rx })?;
    Ok((window, feed))
}

// ════════════════════════════════════════════════════════════════════════════
// run(): the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// Creates the visualizer and the simulated hand source, then drives the
/// sample/blend/render loop at ~60 fps until the window closes.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    cfg.validate()?;

    // ── Visualizer (owns the window and the sim input sender) ────────────
    let (mut vis, feed) = open_session(|sim_tx| {
        Visualizer::new(cfg.window_width, cfg.window_height, sim_tx)
    })?;

    // ── App state ─────────────────────────────────────────────────────────
    let mut app = AppState::new(&cfg);
    info!(
        particles = cfg.particle_count,
        blend_rate = cfg.blend_rate,
        spin_rate = cfg.spin_rate,
        "particle field ready"
    );

    // ── Main loop ─────────────────────────────────────────────────────────
    let mut clock = FrameClock::new();
    let result = loop {
        if !vis.is_open() || !vis.poll_input() { break Ok(()); }

        if let Some(sample) = feed.latest() {
            app.handle_sample(sample);
        }

        app.tick(clock.tick());

        let status = app.status_line(clock.fps());
        if let Err(e) = vis.render(app.buffer(), app.rotation(), &status) {
            break Err(e);
        }
    };

    // dropping the window drops the sim sender, which ends the source thread
    drop(vis);
    feed.shutdown()?;
    info!("shut down");
    result
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
