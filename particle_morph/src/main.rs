//! Headless trace of the blend engine.
//!
//! ```text
//! morph_trace [--dt SECONDS] [--ticks N] [--particles N] [gesture ...]
//! ```
//!
//! Each gesture (`absent`, `none`, `open`, `fist`, `victory`, `pinch`) is
//! held for `--ticks` ticks.  Default sequence: `absent open absent pinch`.

use particle_morph::{BlendConfig, BlendEngine, Gesture, HandSample, ShapeLibrary};
use particle_shapes::text::DEFAULT_TEXT;

const DEFAULT_DT:        f32   = 0.1;
const DEFAULT_TICKS:     usize = 1;
const DEFAULT_PARTICLES: usize = 1000;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(o)  => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║           Particle Morph Trace                       ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!("  particles {}  dt {}s  ticks/sample {}", opts.particles, opts.dt, opts.ticks);
    println!();

    let library = ShapeLibrary::generate(opts.particles, DEFAULT_TEXT);
    let mut engine = BlendEngine::new(library, BlendConfig::default());

    println!("  {:>4}  {:<12} {:<10} {:>12} {:>10}", "tick", "sample", "kind", "max dist", "rotation");
    println!("  {}", "─".repeat(52));

    let mut tick = 0;
    for (label, sample) in &opts.samples {
        for _ in 0..opts.ticks {
            tick += 1;
            let frame = engine.tick_sample(sample, opts.dt);
            let (kind, rotation) = (frame.kind, frame.rotation);
            let target = engine.library().target(kind).1;
            let dist = engine.state().buffer().max_distance(target);
            println!("  {:>4}  {:<12} {:<10} {:>12.5} {:>10.4}", tick, label, kind.name(), dist, rotation);
        }
    }
    println!();
}

struct Options {
    dt:        f32,
    ticks:     usize,
    particles: usize,
    samples:   Vec<(String, HandSample)>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        dt:        DEFAULT_DT,
        ticks:     DEFAULT_TICKS,
        particles: DEFAULT_PARTICLES,
        samples:   Vec::new(),
    };
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--dt" => opts.dt = value(&mut it, "--dt")?,
            "--ticks" => opts.ticks = value(&mut it, "--ticks")?,
            "--particles" => opts.particles = value(&mut it, "--particles")?,
            "absent" | "away" => opts.samples.push((arg.clone(), HandSample::absent())),
            other => match Gesture::parse(other) {
                Some(g) => opts.samples.push((g.name().to_string(), HandSample::present(g, 0.0, [0.5, 0.5]))),
                None    => return Err(format!("unknown gesture '{}'", other)),
            },
        }
    }
    if opts.samples.is_empty() {
        opts.samples = vec![
            ("absent".into(), HandSample::absent()),
            ("open palm".into(), HandSample::present(Gesture::OpenPalm, 0.0, [0.5, 0.5])),
            ("absent".into(), HandSample::absent()),
            ("pinch".into(), HandSample::present(Gesture::Pinch, 0.0, [0.5, 0.5])),
        ];
    }
    if opts.particles == 0 {
        return Err("--particles must be at least 1".into());
    }
    Ok(opts)
}

fn value<'a, T: std::str::FromStr>(
    it: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<T, String> {
    it.next()
        .ok_or_else(|| format!("{} needs a value", flag))?
        .parse()
        .map_err(|_| format!("{} got an invalid value", flag))
}
