//! Hybrid pattern generator.
//!
//! Every pixel is evaluated in two coordinate systems at once: its
//! normalized Cartesian position (nx, ny) in [-1, 1) and the polar form of
//! the same point (r, θ). A pattern mixes both into a scalar field in
//! [-1, 1], which the color mode then turns into a pixel.
//!
//! ## Rust Lesson #31: Data Parallelism with rayon
//!
//! `par_chunks_exact_mut` splits the pixel buffer into rows and hands each
//! row to a worker thread. Rows never overlap, so the borrow checker is
//! happy without any locking.

use std::f64::consts::PI;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::color::{Rgba8, clamped_byte, hsl_to_rgb};
use crate::surface::Surface;

/// Saturation used by the rainbow color mode.
pub const RAINBOW_SATURATION: f64 = 0.8;

/// Available hybrid patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum HybridPattern {
    #[default]
    Hybrid1,
    Hybrid2,
    Hybrid3,
    /// Field used for any pattern name outside the known set.
    Blend,
}

impl HybridPattern {
    /// Get all selectable patterns.
    pub fn all() -> &'static [HybridPattern] {
        &[HybridPattern::Hybrid1, HybridPattern::Hybrid2, HybridPattern::Hybrid3]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            HybridPattern::Hybrid1 => "hybrid1",
            HybridPattern::Hybrid2 => "hybrid2",
            HybridPattern::Hybrid3 => "hybrid3",
            HybridPattern::Blend => "blend",
        }
    }

    /// One-line explanation for UI display.
    pub fn description(&self) -> &'static str {
        match self {
            HybridPattern::Hybrid1 => "Cartesian sine waves with polar distance",
            HybridPattern::Hybrid2 => "Polar angle with Cartesian position",
            HybridPattern::Hybrid3 => "Complex hybrid using both systems",
            HybridPattern::Blend => "Plain Cartesian sine/cosine blend",
        }
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Option<HybridPattern> {
        match name.trim().to_lowercase().as_str() {
            "hybrid1" | "1" => Some(HybridPattern::Hybrid1),
            "hybrid2" | "2" => Some(HybridPattern::Hybrid2),
            "hybrid3" | "3" => Some(HybridPattern::Hybrid3),
            "blend" => Some(HybridPattern::Blend),
            _ => None,
        }
    }

    /// Parse pattern from string, falling back to the blend field.
    pub fn parse_lenient(name: &str) -> HybridPattern {
        HybridPattern::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown hybrid pattern '{}', using blend field", name);
            HybridPattern::Blend
        })
    }
}

impl From<String> for HybridPattern {
    fn from(name: String) -> Self {
        HybridPattern::parse_lenient(&name)
    }
}

impl From<HybridPattern> for &'static str {
    fn from(pattern: HybridPattern) -> Self {
        pattern.name()
    }
}

/// How a field value becomes a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ColorMode {
    Grayscale,
    #[default]
    Rainbow,
    Rgb,
}

impl ColorMode {
    pub fn all() -> &'static [ColorMode] {
        &[ColorMode::Grayscale, ColorMode::Rainbow, ColorMode::Rgb]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Grayscale => "grayscale",
            ColorMode::Rainbow => "rainbow",
            ColorMode::Rgb => "rgb",
        }
    }

    pub fn from_name(name: &str) -> Option<ColorMode> {
        match name.trim().to_lowercase().as_str() {
            "grayscale" | "greyscale" | "gray" | "grey" => Some(ColorMode::Grayscale),
            "rainbow" | "hsl" => Some(ColorMode::Rainbow),
            "rgb" => Some(ColorMode::Rgb),
            _ => None,
        }
    }

    /// Unknown modes color like `rgb`.
    pub fn parse_lenient(name: &str) -> ColorMode {
        ColorMode::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown color mode '{}', using rgb", name);
            ColorMode::Rgb
        })
    }

    /// The mode after this one, wrapping around.
    pub fn next(&self) -> ColorMode {
        match self {
            ColorMode::Grayscale => ColorMode::Rainbow,
            ColorMode::Rainbow => ColorMode::Rgb,
            ColorMode::Rgb => ColorMode::Grayscale,
        }
    }
}

impl From<String> for ColorMode {
    fn from(name: String) -> Self {
        ColorMode::parse_lenient(&name)
    }
}

impl From<ColorMode> for &'static str {
    fn from(mode: ColorMode) -> Self {
        mode.name()
    }
}

/// Parameters for one hybrid render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CppnParams {
    pub pattern: HybridPattern,
    pub frequency: f64,
    #[serde(alias = "colorMode")]
    pub color_mode: ColorMode,
    pub animate: bool,
    #[serde(alias = "animationSpeed")]
    pub animation_speed: f64,
}

impl Default for CppnParams {
    fn default() -> Self {
        Self {
            pattern: HybridPattern::Hybrid1,
            frequency: 5.0,
            color_mode: ColorMode::Rainbow,
            animate: false,
            animation_speed: 1.0,
        }
    }
}

impl CppnParams {
    /// Phase offset actually used at `time`: zero unless animating.
    #[inline]
    pub fn phase(&self, time: f64) -> f64 {
        if self.animate { time } else { 0.0 }
    }
}

/// One pixel's position in both coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub nx: f64,
    pub ny: f64,
    pub r: f64,
    pub theta: f64,
}

/// Normalize pixel `(x, y)` of a `width`×`height` grid.
#[inline]
pub fn normalize(x: u32, y: u32, width: u32, height: u32) -> Sample {
    let nx = (x as f64 / width as f64) * 2.0 - 1.0;
    let ny = (y as f64 / height as f64) * 2.0 - 1.0;
    Sample {
        nx,
        ny,
        r: (nx * nx + ny * ny).sqrt(),
        theta: ny.atan2(nx),
    }
}

/// Scalar field value in [-1, 1] for frequency `f` and phase `t`.
pub fn field_value(pattern: HybridPattern, s: &Sample, t: f64, f: f64) -> f64 {
    let Sample { nx, ny, r, theta } = *s;
    match pattern {
        HybridPattern::Hybrid1 => (nx * f + t).sin() * (ny * f).cos() * (r * 5.0).sin(),
        HybridPattern::Hybrid2 => (theta * f + r * 10.0).sin() * (nx * ny * 5.0 + t).cos(),
        HybridPattern::Hybrid3 => {
            (r * f * 5.0 + t).sin() * (theta * 3.0).cos() * (nx * ny * f).sin()
        }
        HybridPattern::Blend => (nx * f + t).sin() * (ny * f + t).cos(),
    }
}

/// Map a field value from [-1, 1] to a byte.
#[inline]
pub fn intensity(value: f64) -> u8 {
    ((value + 1.0) * 127.5).floor().clamp(0.0, 255.0) as u8
}

/// Color one sample according to `mode`.
pub fn shade(mode: ColorMode, intensity: u8, s: &Sample, t: f64) -> Rgba8 {
    match mode {
        ColorMode::Grayscale => Rgba8::opaque(intensity, intensity, intensity),
        ColorMode::Rainbow => {
            let hue = ((s.theta / PI) * 180.0 + s.r * 120.0 + t * 30.0).rem_euclid(360.0);
            let (r, g, b) = hsl_to_rgb(hue / 360.0, RAINBOW_SATURATION, intensity as f64 / 255.0);
            Rgba8::opaque(r, g, b)
        }
        ColorMode::Rgb => Rgba8::opaque(
            clamped_byte((s.theta + t).sin().abs() * 255.0),
            clamped_byte((s.r * 5.0 + t).cos().abs() * 255.0),
            intensity,
        ),
    }
}

/// Color of pixel `(x, y)` on a `width`×`height` surface at `time`.
pub fn pixel_color(params: &CppnParams, x: u32, y: u32, width: u32, height: u32, time: f64) -> Rgba8 {
    let t = params.phase(time);
    let s = normalize(x, y, width, height);
    let value = field_value(params.pattern, &s, t, params.frequency);
    shade(params.color_mode, intensity(value), &s, t)
}

/// Render one hybrid frame, overwriting every pixel.
pub fn render_hybrid<S: Surface + ?Sized>(surface: &mut S, params: &CppnParams, time: f64) {
    let width = surface.width();
    let height = surface.height();
    if width == 0 || height == 0 {
        return;
    }

    if let Some(data) = surface.rgba_mut() {
        let row_len = width as usize * 4;
        data.par_chunks_exact_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(4).enumerate() {
                    let c = pixel_color(params, x as u32, y as u32, width, height, time);
                    px.copy_from_slice(&c.to_array());
                }
            });
        return;
    }

    for y in 0..height {
        for x in 0..width {
            surface.set_pixel(x, y, pixel_color(params, x, y, width, height, time));
        }
    }
}
