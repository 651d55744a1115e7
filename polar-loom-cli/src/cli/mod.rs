//! CLI command implementations.
//!
//! This module contains the implementations for the non-interactive
//! subcommands:
//! - `formulas` - List formulas, patterns and color modes
//! - `trace` - Print the sampled points of a polar curve
//! - `probe` - Render a hybrid frame and report one pixel
//! - `benchmark` - Time full-frame rendering

pub mod common;
pub mod formulas;
pub mod trace;
pub mod probe;
pub mod benchmark;

pub use formulas::cmd_formulas;
pub use trace::cmd_trace;
pub use probe::cmd_probe;
pub use benchmark::cmd_benchmark;
