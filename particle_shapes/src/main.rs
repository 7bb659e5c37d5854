//! Interactive terminal explorer for the procedural particle shapes.
//! Prints bounds, centroid and mean color, plus an ASCII density preview
//! of the XY projection.

use particle_shapes::color::{generate_colors, Palette};
use particle_shapes::{generators, text, PARTICLE_COUNT};
use std::io::{self, BufRead, Write};

const PREVIEW_W: usize = 64;
const PREVIEW_H: usize = 22;
const SHADES: &[u8] = b" .:-=+*#%@";

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║           Particle Shape Explorer                    ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let mut rng = rand::rng();

    loop {
        print_menu();
        let Some(choice) = read_line("Select a shape (1–5, or q to quit): ") else { break };

        if choice.trim().eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }

        let Some(count) = read_line(&format!("  Particles (default {}): ", PARTICLE_COUNT)) else { break };
        let count: usize = count.trim().parse().unwrap_or(PARTICLE_COUNT);
        let count = count.clamp(1, 200_000);

        let (name, positions, palette) = match choice.trim() {
            "1" => ("planet + ring", generators::planet_with_ring(count, &mut rng), Palette::Nebula),
            "2" => ("firework burst", generators::fireworks(count, &mut rng), Palette::Fireworks),
            "3" => {
                let Some(line) = read_line(&format!("  Text (default \"{}\"): ", text::DEFAULT_TEXT))
                else { break };
                let literal = if line.trim().is_empty() { text::DEFAULT_TEXT.to_string() }
                              else { line.trim_end_matches(['\r', '\n']).to_string() };
                let cloud = text::text_cloud(&literal, count, &mut rng);
                if cloud.fell_back {
                    println!("  ⚠  no bright pixels for \"{}\", showing fallback sphere", literal);
                } else {
                    println!("  {} bright pixels sampled", cloud.bright_pixels);
                }
                ("text glyph cloud", cloud.positions, Palette::Text)
            }
            "4" => ("heart", generators::heart(count, &mut rng), Palette::Heart),
            "5" => ("sphere", generators::sphere(count, &mut rng), Palette::Nebula),
            _   => { println!("  ⚠  Please enter 1–5 or q.\n"); continue; }
        };
        let colors = generate_colors(palette, count, &mut rng);

        let (min, max) = bounds(&positions);
        let centroid   = mean3(&positions);
        let mean_color = mean3(&colors);

        println!();
        println!("  ┌─ {} ({} particles, {} palette) ─", name, count, palette.name());
        println!("  │  min      : [{:7.2} {:7.2} {:7.2}]", min[0], min[1], min[2]);
        println!("  │  max      : [{:7.2} {:7.2} {:7.2}]", max[0], max[1], max[2]);
        println!("  │  centroid : [{:7.2} {:7.2} {:7.2}]", centroid[0], centroid[1], centroid[2]);
        println!("  │  mean rgb : [{:5.2} {:5.2} {:5.2}]", mean_color[0], mean_color[1], mean_color[2]);
        println!("  │");
        for row in preview(&positions, min, max) {
            println!("  │  {}", row);
        }
        println!("  └─");
        println!();
    }
}

fn print_menu() {
    let shapes = ["Planet + ring", "Firework burst", "Text glyph cloud", "Heart", "Sphere (fallback)"];
    println!("  ┌──────────────────────────────────────────────────────┐");
    for (i, s) in shapes.iter().enumerate() {
        println!("  │  {}. {:49} │", i + 1, s);
    }
    println!("  └──────────────────────────────────────────────────────┘");
    println!();
}

fn bounds(positions: &[f32]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for p in positions.chunks_exact(3) {
        for k in 0..3 {
            min[k] = min[k].min(p[k]);
            max[k] = max[k].max(p[k]);
        }
    }
    (min, max)
}

fn mean3(values: &[f32]) -> [f32; 3] {
    let n = (values.len() / 3).max(1) as f32;
    let mut sum = [0.0f32; 3];
    for v in values.chunks_exact(3) {
        for k in 0..3 { sum[k] += v[k]; }
    }
    [sum[0] / n, sum[1] / n, sum[2] / n]
}

/// XY density map, one shade per character cell, +Y up.
fn preview(positions: &[f32], min: [f32; 3], max: [f32; 3]) -> Vec<String> {
    let mut hist = vec![0usize; PREVIEW_W * PREVIEW_H];
    let sx = (max[0] - min[0]).max(1e-6);
    let sy = (max[1] - min[1]).max(1e-6);
    for p in positions.chunks_exact(3) {
        let cx = (((p[0] - min[0]) / sx) * (PREVIEW_W - 1) as f32) as usize;
        let cy = (((max[1] - p[1]) / sy) * (PREVIEW_H - 1) as f32) as usize;
        hist[cy.min(PREVIEW_H - 1) * PREVIEW_W + cx.min(PREVIEW_W - 1)] += 1;
    }
    let peak = hist.iter().copied().max().unwrap_or(0).max(1);
    hist.chunks(PREVIEW_W)
        .map(|row| row.iter()
            .map(|&c| {
                let level = (c * (SHADES.len() - 1)).div_ceil(peak);
                SHADES[level.min(SHADES.len() - 1)] as char
            })
            .collect())
        .collect()
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    next_line(&mut io::stdin().lock())
}

/// One line of input; `None` once the input is closed or unreadable.
fn next_line<B: BufRead>(input: &mut B) -> Option<String> {
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_)          => Some(buf),
    }
}
