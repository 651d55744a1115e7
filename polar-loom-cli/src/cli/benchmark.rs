//! Benchmark command implementation.

use std::time::Instant;

use serde::Serialize;
use tiny_skia::Pixmap;

use polar_loom::{CppnParams, Formula, HybridPattern, PolarParams, Scene};

use super::common::{OutputFormat, fail, flag_value, parse_size};

/// Frame rate the benchmark pretends to animate at.
const SIMULATED_FPS: f64 = 60.0;

#[derive(Serialize)]
struct BenchmarkReport {
    scene: &'static str,
    variant: &'static str,
    width: u32,
    height: u32,
    frames: usize,
    total_ms: f64,
    avg_frame_ms: f64,
    fps: f64,
}

/// Execute the benchmark command.
pub fn cmd_benchmark(args: &[String]) {
    let mut kind = "hybrid";
    let mut variant: Option<&str> = None;
    let mut frames = 60_usize;
    let mut size: Option<(u32, u32)> = None;
    let mut format = OutputFormat::Text;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--frames" => {
                let value = flag_value(args, &mut i);
                frames = match value.parse() {
                    Ok(n) if n > 0 => n,
                    _ => fail(&format!("invalid frame count: '{}'", value)),
                };
            }
            "-f" | "--formula" | "-p" | "--pattern" => {
                variant = Some(flag_value(args, &mut i));
            }
            "--size" => {
                let value = flag_value(args, &mut i);
                size = Some(parse_size(value).unwrap_or_else(|| fail(&format!("invalid size: '{}'", value))));
            }
            "--json" => {
                format = OutputFormat::Json;
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "polar" | "hybrid" => {
                kind = if args[i] == "polar" { "polar" } else { "hybrid" };
            }
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let scene = build_scene(kind, variant);
    let (width, height) = size.unwrap_or_else(|| scene.default_canvas());

    let Some(mut pixmap) = Pixmap::new(width, height) else {
        fail(&format!("cannot allocate a {}x{} canvas", width, height));
    };

    if format == OutputFormat::Text {
        println!("Rendering {} frames of '{}' at {}x{}...", frames, scene.variant_name(), width, height);
    }

    let start = Instant::now();
    for frame in 0..frames {
        scene.render(&mut pixmap, frame as f64 / SIMULATED_FPS);
    }
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_frame_ms = total_ms / frames as f64;
    let report = BenchmarkReport {
        scene: scene.kind(),
        variant: scene.variant_name(),
        width,
        height,
        frames,
        total_ms,
        avg_frame_ms,
        fps: if avg_frame_ms > 0.0 { 1000.0 / avg_frame_ms } else { f64::INFINITY },
    };
    log::debug!("benchmark finished in {:?}", elapsed);

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&format!("Failed to serialize JSON: {}", e)),
        },
        OutputFormat::Text => {
            println!();
            println!("═══════════════════════════════════════════════");
            println!("  RUST BENCHMARK: {} {}", report.scene.to_uppercase(), report.variant.to_uppercase());
            println!("═══════════════════════════════════════════════");
            println!("  Canvas: {}x{}", report.width, report.height);
            println!("  Frames: {}", report.frames);
            println!("  Time: {:?}", elapsed);
            println!("  Time (ms): {:.2}", report.total_ms);
            println!("  Avg per frame: {:.3}ms", report.avg_frame_ms);
            println!("  Frames/sec: {:.1}", report.fps);
            println!("═══════════════════════════════════════════════");
        }
    }
}

/// Build an animated scene of the given kind.
fn build_scene(kind: &str, variant: Option<&str>) -> Scene {
    if kind == "polar" {
        let formula = match variant {
            Some(name) => Formula::from_name(name)
                .unwrap_or_else(|| fail(&format!("Unknown formula: {}", name))),
            None => Formula::Rose,
        };
        Scene::Polar(PolarParams { formula, animate: true, ..PolarParams::default() })
    } else {
        let pattern = match variant {
            Some(name) => HybridPattern::from_name(name)
                .unwrap_or_else(|| fail(&format!("Unknown pattern: {}", name))),
            None => HybridPattern::Hybrid1,
        };
        Scene::Hybrid(CppnParams { pattern, animate: true, ..CppnParams::default() })
    }
}

fn print_usage() {
    eprintln!("Usage: polar-loom benchmark [polar|hybrid] [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --frames <n>        Frames to render (default: 60)");
    eprintln!("  -f, --formula <name>    Polar formula (default: rose)");
    eprintln!("  -p, --pattern <name>    Hybrid pattern (default: hybrid1)");
    eprintln!("  --size <WxH>            Canvas size (default: scene canvas)");
    eprintln!("  --json                  Output results as JSON");
    eprintln!();
    eprintln!("Benchmarks full-frame rendering of an animated scene.");
}
