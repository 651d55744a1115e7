//! polar-loom - TUI and CLI for polar curves and hybrid patterns
//!
//! Usage:
//!   polar-loom                       Launch TUI
//!   polar-loom --config <file>       Launch TUI with a YAML config
//!   polar-loom formulas              List formulas, patterns and color modes
//!   polar-loom trace -f <formula>    Print sampled curve points
//!   polar-loom probe <x> <y>         Report one hybrid pixel
//!   polar-loom benchmark [kind]      Benchmark frame rendering

use std::env;

use env_logger::{Builder, Env};

mod cli;
mod config;
mod controls;
mod tui;

use cli::{cmd_benchmark, cmd_formulas, cmd_probe, cmd_trace};
use config::StudioConfig;

fn print_usage(program: &str) {
    eprintln!("polar-loom - polar curves and hybrid pixel patterns");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {}                        Launch TUI", program);
    eprintln!("  {} --config <file>        Launch TUI with a YAML config", program);
    eprintln!("  {} formulas               List formulas, patterns and color modes", program);
    eprintln!("  {} trace [options]        Print the sampled points of a curve", program);
    eprintln!("  {} probe [options] <x> <y>  Report the color of one hybrid pixel", program);
    eprintln!("  {} benchmark [polar|hybrid] [options]  Benchmark frame rendering", program);
    eprintln!("  {} help                   Show this message", program);
    eprintln!();
    eprintln!("Run '{} <command> --help' for command options.", program);
    eprintln!();
    eprintln!("TUI keys:");
    eprintln!("  ↑/↓ j/k      Select formula or pattern");
    eprintln!("  Tab          Focus next setting");
    eprintln!("  ←/→ h/l      Adjust setting ([ and ] for coarse steps)");
    eprintln!("  Space / a    Toggle animation");
    eprintln!("  c            Cycle stroke color / color mode");
    eprintln!("  v            Switch between polar and hybrid views");
    eprintln!("  0 / r        Reset the current view");
    eprintln!("  q / Esc      Quit");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for diagnostics.");
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("polar-loom");

    // Check for CLI subcommands
    if args.len() >= 2 {
        match args[1].as_str() {
            "formulas" => {
                cmd_formulas();
                return;
            }
            "trace" => {
                cmd_trace(&args[2..]);
                return;
            }
            "probe" => {
                cmd_probe(&args[2..]);
                return;
            }
            "benchmark" => {
                cmd_benchmark(&args[2..]);
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(program);
                return;
            }
            _ => {}
        }
    }

    // Launch TUI
    let config = match args.get(1).map(String::as_str) {
        None => StudioConfig::default(),
        Some("-c") | Some("--config") => {
            let Some(path) = args.get(2) else {
                eprintln!("Error: --config requires a file path");
                std::process::exit(1);
            };
            match StudioConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(unknown) => {
            eprintln!("Unknown command: {}", unknown);
            eprintln!();
            print_usage(program);
            std::process::exit(1);
        }
    };

    if let Err(e) = tui::run_tui(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
