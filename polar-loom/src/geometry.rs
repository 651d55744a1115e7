//! Core geometry types for polar-loom.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = small stack values are copied implicitly
//! - `PartialEq` = can compare with `==`

use serde::{Deserialize, Serialize};

/// A 2D point with x,y coordinates in surface pixels.
///
/// The y axis points down, as on every raster surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at radius `r` and angle `theta` (radians) from `center`.
    #[inline]
    pub fn from_polar(center: Point, r: f64, theta: f64) -> Self {
        Self::new(center.x + r * theta.cos(), center.y + r * theta.sin())
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are finite (test helper).
    #[cfg(test)]
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rigidly rotate this point by `angle` radians about `center`.
    pub fn rotate_about(&self, center: Point, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }
}
