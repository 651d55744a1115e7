//! `probe` command: render one hybrid frame and report a pixel.

use serde::Serialize;
use tiny_skia::Pixmap;

use polar_loom::{ColorMode, CppnParams, HybridPattern, Surface, render_hybrid, scene};

use super::common::{OutputFormat, fail, flag_value, parse_number, parse_size};

#[derive(Serialize)]
struct ProbeOutput {
    pattern: &'static str,
    color_mode: &'static str,
    frequency: f64,
    time: f64,
    x: u32,
    y: u32,
    rgba: [u8; 4],
    hex: String,
}

/// Execute the probe command.
pub fn cmd_probe(args: &[String]) {
    let mut params = CppnParams::default();
    let mut time = 0.0;
    let (mut width, mut height) = scene::HYBRID_CANVAS;
    let mut format = OutputFormat::Text;
    let mut coords: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" => {
                let name = flag_value(args, &mut i);
                params.pattern = HybridPattern::from_name(name).unwrap_or_else(|| {
                    fail(&format!("Unknown pattern: {}. Use 'formulas' to list available.", name))
                });
            }
            "-m" | "--mode" => {
                let name = flag_value(args, &mut i);
                params.color_mode = ColorMode::from_name(name).unwrap_or_else(|| {
                    fail(&format!("Unknown color mode: {}. Use grayscale, rainbow or rgb.", name))
                });
            }
            "-k" | "--frequency" => {
                params.frequency = parse_number(flag_value(args, &mut i), "frequency");
            }
            "-t" | "--time" => {
                time = parse_number(flag_value(args, &mut i), "time");
            }
            "--animate" => {
                params.animate = true;
            }
            "--size" => {
                let value = flag_value(args, &mut i);
                (width, height) = parse_size(value)
                    .unwrap_or_else(|| fail(&format!("invalid size: '{}'", value)));
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            arg if !arg.starts_with('-') || arg.parse::<f64>().is_ok() => {
                coords.push(arg);
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let [x, y] = coords.as_slice() else {
        eprintln!("Error: expected exactly two coordinates <x> <y>");
        print_usage();
        std::process::exit(1);
    };
    let (Ok(x), Ok(y)) = (x.parse::<u32>(), y.parse::<u32>()) else {
        fail(&format!("coordinates must be non-negative integers, got '{}' '{}'", x, y));
    };
    if x >= width || y >= height {
        fail(&format!("pixel ({}, {}) is outside the {}x{} canvas", x, y, width, height));
    }

    let Some(mut pixmap) = Pixmap::new(width, height) else {
        fail(&format!("cannot allocate a {}x{} canvas", width, height));
    };
    render_hybrid(&mut pixmap, &params, time);

    let Some(color) = Surface::pixel(&pixmap, x, y) else {
        fail(&format!("pixel ({}, {}) is outside the canvas", x, y));
    };

    match format {
        OutputFormat::Json => {
            let output = ProbeOutput {
                pattern: params.pattern.name(),
                color_mode: params.color_mode.name(),
                frequency: params.frequency,
                time,
                x,
                y,
                rgba: color.to_array(),
                hex: color.to_hex(),
            };
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => fail(&format!("Failed to serialize JSON: {}", e)),
            }
        }
        OutputFormat::Text => {
            println!(
                "{},{}: {} {} {} {} ({})",
                x, y, color.r, color.g, color.b, color.a, color.to_hex()
            );
        }
    }
}

fn print_usage() {
    eprintln!("Usage: polar-loom probe [options] <x> <y>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --pattern <name>    hybrid1, hybrid2, hybrid3 (default: hybrid1)");
    eprintln!("  -m, --mode <name>       grayscale, rainbow, rgb (default: rainbow)");
    eprintln!("  -k, --frequency <n>     Frequency (default: 5)");
    eprintln!("  -t, --time <secs>       Animation time (only used with --animate)");
    eprintln!("  --animate               Let time shift the pattern phase");
    eprintln!("  --size <WxH>            Canvas size (default: 400x400)");
    eprintln!("  --json                  Output JSON");
    eprintln!();
    eprintln!("Renders one full hybrid frame and prints the RGBA value at (x, y).");
}
