//! A scene pairs one parameter record with the renderer that draws it.

use crate::hybrid::{CppnParams, render_hybrid};
use crate::polar::{PolarParams, render_polar};
use crate::surface::Surface;

/// Default canvas size of the polar view, in pixels.
pub const POLAR_CANVAS: (u32, u32) = (500, 500);

/// Default canvas size of the hybrid view, in pixels.
pub const HYBRID_CANVAS: (u32, u32) = (400, 400);

#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Polar(PolarParams),
    Hybrid(CppnParams),
}

impl Scene {
    /// Short label for the scene kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Scene::Polar(_) => "polar",
            Scene::Hybrid(_) => "hybrid",
        }
    }

    /// Name of the selected formula or pattern.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Scene::Polar(p) => p.formula.name(),
            Scene::Hybrid(p) => p.pattern.name(),
        }
    }

    pub fn animate(&self) -> bool {
        match self {
            Scene::Polar(p) => p.animate,
            Scene::Hybrid(p) => p.animate,
        }
    }

    pub fn animation_speed(&self) -> f64 {
        match self {
            Scene::Polar(p) => p.animation_speed,
            Scene::Hybrid(p) => p.animation_speed,
        }
    }

    /// Default canvas size for this kind of scene.
    pub fn default_canvas(&self) -> (u32, u32) {
        match self {
            Scene::Polar(_) => POLAR_CANVAS,
            Scene::Hybrid(_) => HYBRID_CANVAS,
        }
    }

    /// Render one full frame at `time`.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, time: f64) {
        match self {
            Scene::Polar(p) => render_polar(surface, p, time),
            Scene::Hybrid(p) => render_hybrid(surface, p, time),
        }
    }
}

impl From<PolarParams> for Scene {
    fn from(params: PolarParams) -> Self {
        Scene::Polar(params)
    }
}

impl From<CppnParams> for Scene {
    fn from(params: CppnParams) -> Self {
        Scene::Hybrid(params)
    }
}
