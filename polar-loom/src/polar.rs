//! Polar curve renderer.
//!
//! Curves are defined in polar coordinates as r = f(θ) and drawn as a
//! polyline sampled every whole degree:
//!
//!   rose      r = a · cos(k·θ)
//!   spiral    r = a · (θ/10) · k
//!   cardioid  r = a · 0.5 · (1 + cos θ) · k
//!
//! When k is an integer the rose has k petals (k odd) or 2k petals (k even).
//! Non-integer k gives a curve that does not close; that is drawn as-is.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::color::{Rgba8, parse_color};
use crate::geometry::Point;
use crate::surface::{StrokeStyle, Surface};

/// Line width used when the requested width is zero, negative or NaN.
pub const FALLBACK_LINE_WIDTH: f64 = 2.0;

/// Available polar formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Formula {
    #[default]
    Rose,
    Spiral,
    Cardioid,
}

impl Formula {
    /// Get all available formulas.
    pub fn all() -> &'static [Formula] {
        &[Formula::Rose, Formula::Spiral, Formula::Cardioid]
    }

    /// Get formula name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Formula::Rose => "rose",
            Formula::Spiral => "spiral",
            Formula::Cardioid => "cardioid",
        }
    }

    /// One-line explanation for UI display.
    pub fn description(&self) -> &'static str {
        match self {
            Formula::Rose => "Rose curve: r = a × cos(k × θ) - petal patterns based on frequency",
            Formula::Spiral => "Spiral: r = a × θ - an expanding spiral",
            Formula::Cardioid => "Cardioid: r = a × (1 + cos(θ)) - a heart-shaped curve",
        }
    }

    /// Parse formula from string.
    pub fn from_name(name: &str) -> Option<Formula> {
        match name.trim().to_lowercase().as_str() {
            "rose" | "rhodonea" => Some(Formula::Rose),
            "spiral" | "archimedean" => Some(Formula::Spiral),
            "cardioid" | "heart" => Some(Formula::Cardioid),
            _ => None,
        }
    }

    /// Parse formula from string, falling back to the rose for unknown names.
    pub fn parse_lenient(name: &str) -> Formula {
        Formula::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown formula '{}', drawing a rose", name);
            Formula::Rose
        })
    }

    /// Angular extent of the curve in whole degrees.
    ///
    /// The spiral needs two full turns to show its growth.
    pub fn sweep_degrees(&self) -> u32 {
        match self {
            Formula::Spiral => 720,
            Formula::Rose | Formula::Cardioid => 360,
        }
    }

    /// Radius at angle `theta` (radians) for amplitude `a` and frequency `k`.
    #[inline]
    pub fn radius_at(&self, theta: f64, a: f64, k: f64) -> f64 {
        match self {
            Formula::Rose => a * (k * theta).cos(),
            Formula::Spiral => a * (theta / 10.0) * k,
            Formula::Cardioid => a * 0.5 * (1.0 + theta.cos()) * k,
        }
    }
}

impl From<String> for Formula {
    fn from(name: String) -> Self {
        Formula::parse_lenient(&name)
    }
}

impl From<Formula> for &'static str {
    fn from(formula: Formula) -> Self {
        formula.name()
    }
}

/// Parameters for one polar render.
///
/// Owned by the caller and replaced wholesale whenever a control changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolarParams {
    pub formula: Formula,
    /// Amplitude `a`, in pixels.
    pub radius: f64,
    /// Frequency `k`.
    pub frequency: f64,
    /// Static rotation in radians.
    pub rotation: f64,
    /// Stroke color as a CSS-style string.
    pub color: String,
    #[serde(alias = "lineWidth")]
    pub line_width: f64,
    pub animate: bool,
    #[serde(alias = "animationSpeed")]
    pub animation_speed: f64,
}

impl Default for PolarParams {
    fn default() -> Self {
        Self {
            formula: Formula::Rose,
            radius: 150.0,
            frequency: 3.0,
            rotation: 0.0,
            color: "#ffffff".to_string(),
            line_width: 2.0,
            animate: false,
            animation_speed: 1.0,
        }
    }
}

impl PolarParams {
    /// Stroke color, or opaque black (the canvas default) when unparsable.
    pub fn stroke_color(&self) -> Rgba8 {
        parse_color(&self.color).unwrap_or_else(|| {
            log::debug!("unparsable stroke color '{}', using black", self.color);
            Rgba8::BLACK
        })
    }

    /// Line width, with zero/negative/NaN replaced by the fallback width.
    pub fn stroke_width(&self) -> f64 {
        if self.line_width > 0.0 {
            self.line_width
        } else {
            FALLBACK_LINE_WIDTH
        }
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color(),
            width: self.stroke_width(),
        }
    }
}

/// Rotation actually applied to the curve at `time`.
///
/// Time only contributes while animating.
#[inline]
pub fn effective_rotation(params: &PolarParams, time: f64) -> f64 {
    params.rotation + if params.animate { time } else { 0.0 }
}

/// Sample the curve as a point sequence around `center`.
///
/// One point per whole degree from 0° to the formula's sweep, inclusive.
pub fn sample_curve(params: &PolarParams, center: Point, time: f64) -> Vec<Point> {
    let rotation = effective_rotation(params, time);
    let sweep = params.formula.sweep_degrees();

    (0..=sweep)
        .map(|i| {
            let theta = i as f64 * PI / 180.0;
            let r = params.formula.radius_at(theta, params.radius, params.frequency);
            Point::from_polar(center, r, theta + rotation)
        })
        .collect()
}

/// Render one polar frame: clear to black, stroke the curve.
pub fn render_polar<S: Surface + ?Sized>(surface: &mut S, params: &PolarParams, time: f64) {
    surface.clear(Rgba8::BLACK);
    let points = sample_curve(params, surface.center(), time);
    surface.stroke_polyline(&points, &params.stroke_style());
}
