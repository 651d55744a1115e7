//! `trace` command: print the sampled points of a polar curve.

use serde::Serialize;

use polar_loom::{Formula, Point, PolarParams, sample_curve, scene};

use super::common::{OutputFormat, fail, flag_value, parse_number, parse_size};

/// JSON output for a traced curve.
#[derive(Serialize)]
struct TraceOutput {
    formula: &'static str,
    radius: f64,
    frequency: f64,
    rotation_degrees: f64,
    time: f64,
    center: Point,
    points: Vec<Point>,
}

/// Execute the trace command.
pub fn cmd_trace(args: &[String]) {
    let mut params = PolarParams::default();
    let mut time = 0.0;
    let (mut width, mut height) = scene::POLAR_CANVAS;
    let mut format = OutputFormat::Text;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--formula" => {
                let name = flag_value(args, &mut i);
                params.formula = Formula::from_name(name).unwrap_or_else(|| {
                    fail(&format!("Unknown formula: {}. Use 'formulas' to list available.", name))
                });
            }
            "-r" | "--radius" => {
                params.radius = parse_number(flag_value(args, &mut i), "radius");
            }
            "-k" | "--frequency" => {
                params.frequency = parse_number(flag_value(args, &mut i), "frequency");
            }
            "--rotation" => {
                let degrees = parse_number(flag_value(args, &mut i), "rotation");
                params.rotation = degrees.to_radians();
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
            unknown => {
                eprintln!("Unknown option: {}", unknown);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
    let points = sample_curve(&params, center, time);
    log::debug!("traced {} points of {}", points.len(), params.formula.name());

    match format {
        OutputFormat::Json => {
            let output = TraceOutput {
                formula: params.formula.name(),
                radius: params.radius,
                frequency: params.frequency,
                rotation_degrees: params.rotation.to_degrees(),
                time,
                center,
                points,
            };
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => fail(&format!("Failed to serialize JSON: {}", e)),
            }
        }
        OutputFormat::Text => {
            println!(
                "# {} a={} k={} rotation={:.1}° points={}",
                params.formula.name(),
                params.radius,
                params.frequency,
                params.rotation.to_degrees(),
                points.len()
            );
            for p in &points {
                println!("{:.3},{:.3}", p.x, p.y);
            }
        }
    }
}

fn print_usage() {
    eprintln!("Usage: polar-loom trace [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --formula <name>    rose, spiral, cardioid (default: rose)");
    eprintln!("  -r, --radius <n>        Amplitude in pixels (default: 150)");
    eprintln!("  -k, --frequency <n>     Frequency (default: 3)");
    eprintln!("  --rotation <deg>        Rotation in degrees (default: 0)");
    eprintln!("  -t, --time <secs>       Animation time (only used with --animate)");
    eprintln!("  --animate               Let time rotate the curve");
    eprintln!("  --size <WxH>            Canvas size, curve is centered (default: 500x500)");
    eprintln!("  --json                  Output JSON instead of x,y lines");
    eprintln!();
    eprintln!("Prints one point per degree of the curve.");
}
