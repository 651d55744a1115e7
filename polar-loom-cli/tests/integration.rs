//! Integration tests for polar-loom CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the polar-loom binary built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_polar-loom"))
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn formulas_command_lists_everything() {
    let output = run(&["formulas"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["rose", "spiral", "cardioid", "hybrid1", "hybrid2", "hybrid3", "grayscale", "rainbow", "rgb"] {
        assert!(stdout.contains(name), "Should list '{}'", name);
    }
}

#[test]
fn trace_rose_prints_one_point_per_degree() {
    let output = run(&["trace", "-f", "rose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with("# rose"), "unexpected header: {}", header);
    assert!(header.contains("points=361"));

    let points: Vec<&str> = lines.collect();
    assert_eq!(points.len(), 361);

    // r(0) = a, so a 3-petal rose starts on the +x axis and closes there
    assert_eq!(points[0], "400.000,250.000");
    assert_eq!(points[360], "400.000,250.000");
}

#[test]
fn trace_spiral_json_covers_two_turns() {
    let output = run(&["trace", "-f", "spiral", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["formula"], "spiral");
    assert_eq!(json["points"].as_array().map(|p| p.len()), Some(721));
    assert_eq!(json["center"]["x"], 250.0);

    // The spiral starts at the center
    assert_eq!(json["points"][0]["x"], 250.0);
    assert_eq!(json["points"][0]["y"], 250.0);
}

#[test]
fn trace_time_ignored_without_animate() {
    let still = run(&["trace", "-f", "cardioid", "-t", "3"]);
    let zero = run(&["trace", "-f", "cardioid"]);
    assert_eq!(still.stdout, zero.stdout);

    let animated = run(&["trace", "-f", "cardioid", "-t", "3", "--animate"]);
    assert_ne!(animated.stdout, zero.stdout);
}

#[test]
fn trace_unknown_formula_fails() {
    let output = run(&["trace", "-f", "lemniscate"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown formula"));
}

#[test]
fn probe_center_of_hybrid1_is_mid_gray() {
    let output = run(&["probe", "-p", "hybrid1", "-m", "grayscale", "-k", "5", "--json", "200", "200"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let rgba: Vec<u64> = json["rgba"]
        .as_array()
        .expect("rgba array")
        .iter()
        .filter_map(|v| v.as_u64())
        .collect();

    assert_eq!(rgba.len(), 4);
    assert!(rgba[0] == 127 || rgba[0] == 128, "got {:?}", rgba);
    assert_eq!(rgba[0], rgba[1]);
    assert_eq!(rgba[1], rgba[2]);
    assert_eq!(rgba[3], 255);
}

#[test]
fn probe_text_output() {
    let output = run(&["probe", "-m", "rgb", "10", "20"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("10,20: "), "unexpected output: {}", stdout);
    assert!(stdout.contains("(#"));
}

#[test]
fn probe_outside_canvas_fails() {
    let output = run(&["probe", "--size", "100x100", "100", "5"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside"));
}

#[test]
fn benchmark_command_reports_timing() {
    let output = run(&["benchmark", "hybrid", "-n", "3", "--size", "64x64"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BENCHMARK"), "Should show benchmark header");
    assert!(stdout.contains("Frames: 3"));
}

#[test]
fn benchmark_command_json() {
    let output = run(&["benchmark", "polar", "-f", "spiral", "-n", "2", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["scene"], "polar");
    assert_eq!(json["variant"], "spiral");
    assert_eq!(json["frames"], 2);
    assert_eq!(json["width"], 500);
}

#[test]
fn help_lists_commands() {
    let output = run(&["help"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    for command in ["formulas", "trace", "probe", "benchmark", "--config"] {
        assert!(stderr.contains(command), "help should mention '{}'", command);
    }
}

#[test]
fn missing_config_file_fails_before_tui() {
    let output = run(&["--config", "/definitely/not/here/polar-loom.yaml"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to read config file"));
}

#[test]
fn invalid_canvas_in_config_fails() {
    let path = std::env::temp_dir().join(format!("polar-loom-bad-canvas-{}.yaml", std::process::id()));
    std::fs::write(&path, "canvas:\n  polar: { width: 0, height: 500 }\n").expect("write temp config");

    let output = run(&["--config", path.to_str().expect("utf-8 path")]);
    let _ = std::fs::remove_file(&path);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid canvas size 0x500"));
}

#[test]
fn unknown_command_fails() {
    let output = run(&["fill"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command"));
}
