//! Control ranges for the interactive parameters.
//!
//! The renderers accept any float; these bounds are what the controls
//! (and config loading) keep values inside.

/// A bounded, stepped numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    pub const fn new(label: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self { label, min, max, step }
    }

    /// Clamp into the range. NaN becomes the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Move `steps` steps from `value`, snapped to the step grid and clamped.
    pub fn step_by(&self, value: f64, steps: f64) -> f64 {
        let moved = self.clamp(value) + steps * self.step;
        let snapped = self.min + ((moved - self.min) / self.step).round() * self.step;
        // round away float noise like 0.30000000000000004
        self.clamp((snapped * 1e6).round() / 1e6)
    }
}

pub const POLAR_FREQUENCY: ControlRange = ControlRange::new("Frequency", 1.0, 10.0, 1.0);
pub const POLAR_ROTATION_DEGREES: ControlRange = ControlRange::new("Rotation", 0.0, 360.0, 15.0);
pub const POLAR_LINE_WIDTH: ControlRange = ControlRange::new("Line Width", 1.0, 5.0, 1.0);
pub const HYBRID_FREQUENCY: ControlRange = ControlRange::new("Frequency", 1.0, 10.0, 0.5);
pub const ANIMATION_SPEED: ControlRange = ControlRange::new("Speed", 0.1, 3.0, 0.1);

/// Stroke colors offered by the polar view, cycled with a key.
pub const STROKE_PALETTE: &[&str] = &[
    "#ffffff", // White
    "#ff4d6d", // Rose red
    "#ffd166", // Gold
    "#06d6a0", // Mint
    "#4cc9f0", // Sky blue
    "#9b5de5", // Lavender
];

/// The palette entry after `current`, or the first one if `current` is not in it.
pub fn next_stroke_color(current: &str) -> &'static str {
    let idx = STROKE_PALETTE
        .iter()
        .position(|c| c.eq_ignore_ascii_case(current.trim()));
    match idx {
        Some(i) => STROKE_PALETTE[(i + 1) % STROKE_PALETTE.len()],
        None => STROKE_PALETTE[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_handles_nan_and_bounds() {
        assert_eq!(POLAR_FREQUENCY.clamp(f64::NAN), 1.0);
        assert_eq!(POLAR_FREQUENCY.clamp(42.0), 10.0);
        assert_eq!(POLAR_FREQUENCY.clamp(-3.0), 1.0);
        assert_eq!(POLAR_FREQUENCY.clamp(4.0), 4.0);
    }

    #[test]
    fn step_snaps_to_grid() {
        assert_eq!(HYBRID_FREQUENCY.step_by(5.0, 1.0), 5.5);
        assert_eq!(HYBRID_FREQUENCY.step_by(5.2, 1.0), 5.5);
        assert_eq!(POLAR_ROTATION_DEGREES.step_by(0.0, 1.0), 15.0);
        assert_eq!(POLAR_ROTATION_DEGREES.step_by(350.0, 5.0), 360.0);
        assert_eq!(ANIMATION_SPEED.step_by(0.2, 1.0), 0.3);
        assert_eq!(ANIMATION_SPEED.step_by(0.1, -1.0), 0.1);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(next_stroke_color("#FFFFFF"), "#ff4d6d");
        assert_eq!(next_stroke_color("#9b5de5"), "#ffffff");
        assert_eq!(next_stroke_color("chartreuse"), "#ffffff");
    }
}
