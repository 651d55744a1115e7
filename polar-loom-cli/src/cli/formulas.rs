//! `formulas` command: list everything that can be drawn.

use polar_loom::{ColorMode, Formula, HybridPattern};

/// Execute the formulas command.
pub fn cmd_formulas() {
    println!("Polar formulas:");
    for formula in Formula::all() {
        println!("  {:<10} {}", formula.name(), formula.description());
    }

    println!();
    println!("Hybrid patterns:");
    for pattern in HybridPattern::all() {
        println!("  {:<10} {}", pattern.name(), pattern.description());
    }

    println!();
    println!("Color modes:");
    for mode in ColorMode::all() {
        println!("  {}", mode.name());
    }
}
