//! Colors: straight RGBA8 pixels, HSL conversion and color string parsing.

use std::str::FromStr;

/// A straight (non-premultiplied) RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::opaque(255, 255, 255);

    /// Fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Hex form, `#rrggbb` (alpha omitted).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a CSS-style color string (`#fff`, `#ffffff`, `white`, `rgb(...)`).
///
/// Returns `None` when the string is not a color.
pub fn parse_color(text: &str) -> Option<Rgba8> {
    let c = svgtypes::Color::from_str(text.trim()).ok()?;
    Some(Rgba8 { r: c.red, g: c.green, b: c.blue, a: c.alpha })
}

/// Convert HSL to RGB.
///
/// `h`, `s` and `l` are all in `[0, 1]` (hue as a fraction of a full turn).
/// Hue offsets are wrapped into `[0, 1)` so a hue slightly outside the
/// range still lands on the color wheel.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    (to_byte(r), to_byte(g), to_byte(b))
}

/// Piecewise hue-to-channel interpolation.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Unit channel to byte, rounding to nearest with halves up. NaN maps to 0.
#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Store a float into a byte the way a clamped canvas buffer does: clamp to
/// [0, 255], round halves to even. NaN maps to 0.
///
/// Unrounded channels written straight to the pixel buffer go through this,
/// so 126.5 stores as 126, not the 127 `f64::round` gives.
#[inline]
pub(crate) fn clamped_byte(x: f64) -> u8 {
    x.round_ties_even().clamp(0.0, 255.0) as u8
}
