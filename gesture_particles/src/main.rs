//! gesture_particles: interactive entry point.

use gesture_particles::app::run;
use gesture_particles::config::{parse_args, USAGE};
use gesture_particles::logging;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return;
    }

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Gesture Particles — hand-driven point cloud         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Mode: Keyboard simulation  (1 fist · 2 open · 3 victory · 4 pinch · 0 away)");
    println!();

    let cfg = match parse_args(&args) {
        Ok(cfg) => cfg,
        Err(e)  => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    logging::init(&cfg.log_filter);

    println!("  {} particles, victory text \"{}\"", cfg.particle_count, cfg.text);
    println!("  Opening visualizer window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
