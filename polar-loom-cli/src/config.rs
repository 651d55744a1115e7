//! Startup configuration.
//!
//! Config files are YAML. Every field is optional; anything left out takes
//! the built-in default, and numeric values are clamped to the control
//! ranges. The file is only ever read.
//!
//! ```yaml
//! start: hybrid
//! canvas:
//!   polar: { width: 500, height: 500 }
//!   hybrid: { width: 400, height: 400 }
//! polar:
//!   formula: cardioid
//!   frequency: 2
//!   color: "#4cc9f0"
//! hybrid:
//!   pattern: hybrid3
//!   colorMode: grayscale
//!   animate: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use polar_loom::{CppnParams, PolarParams, scene};

use crate::controls;

/// Largest canvas edge accepted from a config file.
pub const MAX_CANVAS_EDGE: u32 = 4096;

/// Error type for config loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Canvas { width: u32, height: u32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Parse(msg) => write!(f, "Failed to parse config YAML: {}", msg),
            ConfigError::Canvas { width, height } => write!(
                f,
                "Invalid canvas size {}x{} (each edge must be 1..={})",
                width, height, MAX_CANVAS_EDGE
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Which view the TUI opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Polar,
    #[serde(alias = "cppn")]
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ok = |edge: u32| (1..=MAX_CANVAS_EDGE).contains(&edge);
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::Canvas { width: self.width, height: self.height })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub polar: CanvasSize,
    #[serde(alias = "cppn")]
    pub hybrid: CanvasSize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            polar: CanvasSize::new(scene::POLAR_CANVAS),
            hybrid: CanvasSize::new(scene::HYBRID_CANVAS),
        }
    }
}

/// Everything the app starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub start: StartView,
    pub canvas: CanvasConfig,
    pub polar: PolarParams,
    #[serde(alias = "cppn")]
    pub hybrid: CppnParams,
}

impl StudioConfig {
    /// Load a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&content)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse, clamp and validate a config from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: StudioConfig = serde_yaml::from_str(content)?;
        config.sanitized()
    }

    /// Clamp numeric parameters to their control ranges and check the canvas.
    pub fn sanitized(mut self) -> Result<Self, ConfigError> {
        self.canvas.polar.validate()?;
        self.canvas.hybrid.validate()?;

        let polar = &mut self.polar;
        polar.frequency = controls::POLAR_FREQUENCY.clamp(polar.frequency);
        polar.line_width = controls::POLAR_LINE_WIDTH.clamp(polar.line_width);
        polar.animation_speed = controls::ANIMATION_SPEED.clamp(polar.animation_speed);
        if !(polar.radius > 0.0 && polar.radius.is_finite()) {
            log::warn!("polar radius {} is not a positive number, using default", polar.radius);
            polar.radius = PolarParams::default().radius;
        }
        if !polar.rotation.is_finite() {
            polar.rotation = 0.0;
        }

        let hybrid = &mut self.hybrid;
        hybrid.frequency = controls::HYBRID_FREQUENCY.clamp(hybrid.frequency);
        hybrid.animation_speed = controls::ANIMATION_SPEED.clamp(hybrid.animation_speed);

        Ok(self)
    }
}
