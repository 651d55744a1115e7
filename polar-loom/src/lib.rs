//! # polar-loom
//!
//! Closed-form curve and pattern rendering.
//!
//! Two stateless renderers draw a full frame into a [`Surface`] from a
//! parameter record and an elapsed time:
//! - [`render_polar`] strokes a rose, spiral or cardioid as a polyline
//! - [`render_hybrid`] colors every pixel from a field that mixes the
//!   pixel's Cartesian and polar coordinates
//!
//! [`Animator`] supplies the times while a scene is animating.
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod animation;
pub mod color;
pub mod geometry;
pub mod hybrid;
pub mod polar;
pub mod scene;
pub mod surface;

// Re-export common types at crate root for convenience.
pub use animation::{AnimationClock, Animator, Frame};
pub use color::{Rgba8, hsl_to_rgb, parse_color};
pub use geometry::Point;
pub use hybrid::{ColorMode, CppnParams, HybridPattern, render_hybrid};
pub use polar::{Formula, PolarParams, render_polar, sample_curve};
pub use scene::Scene;
pub use surface::{StrokeStyle, Surface};
