//! OKLCH and sRGB color types.
//!
//! This module provides the two ends of the conversion pipeline:
//!
//! - [`Oklch`]: a parsed `oklch(L C h)` value
//! - [`Rgb`]: an 8-bit sRGB triple with hex and `rgba()` renderings
//!
//! ## Conversion
//!
//! [`Oklch::to_rgb`] goes OKLCH → Oklab → LMS → linear sRGB → gamma-encoded
//! sRGB using Björn Ottosson's Oklab matrices. The constants below must stay
//! exactly as written; exported tokens are compared byte for byte against
//! previously generated JSON.
//!
//! ```
//! use tokencss::types::{Oklch, Rgb};
//!
//! let white = Oklch::new(1.0, 0.0, 0.0).to_rgb();
//! assert_eq!(white, Rgb::new(255, 255, 255));
//! assert_eq!(white.to_hex(), "#ffffff");
//! assert_eq!(white.to_rgba_string(), "rgba(255, 255, 255, 1)");
//! ```

use std::f64::consts::PI;
use std::fmt;

/// A color in the OKLCH space.
///
/// Only lightness is bounded. Chroma and hue pass through untouched: hue is
/// not wrapped into `[0, 360)` and chroma is not gamut-mapped, so
/// out-of-range values are only bounded by the final per-channel clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch {
    /// Perceptual lightness, 0.0 (black) to 1.0 (white).
    pub l: f64,
    /// Chroma, unbounded.
    pub c: f64,
    /// Hue in degrees, unnormalized.
    pub h: f64,
}

impl Oklch {
    /// Creates an OKLCH color, clamping lightness to `[0, 1]`.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            c,
            h,
        }
    }

    /// Returns the Oklab `(L, a, b)` coordinates of this color.
    pub fn to_oklab(&self) -> (f64, f64, f64) {
        let h_rad = self.h * PI / 180.0;
        (self.l, self.c * h_rad.cos(), self.c * h_rad.sin())
    }

    /// Converts to linear-light sRGB. Channels may fall outside `[0, 1]`.
    pub fn to_linear_srgb(&self) -> (f64, f64, f64) {
        let (l_ok, a, b) = self.to_oklab();

        // Oklab -> LMS (cube roots)
        let l_ = l_ok + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = l_ok - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = l_ok - 0.0894841775 * a - 1.291485548 * b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        (
            4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            -0.0041960863 * l - 0.7034186147 * m + 1.707614701 * s,
        )
    }

    /// Converts to 8-bit sRGB.
    ///
    /// Total over any finite input: every channel is gamma-encoded, clamped
    /// to `[0, 1]` and rounded to the nearest byte independently.
    pub fn to_rgb(&self) -> Rgb {
        let (r, g, b) = self.to_linear_srgb();
        Rgb::new(encode_channel(r), encode_channel(g), encode_channel(b))
    }
}

/// sRGB transfer function (linear light to gamma-encoded).
fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

fn encode_channel(linear: f64) -> u8 {
    // max/min rather than clamp: a NaN channel collapses to 0
    let encoded = linear_to_srgb(linear).max(0.0).min(1.0);
    (encoded * 255.0).round() as u8
}

/// An 8-bit sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, 1)` with a fixed opaque alpha.
    pub fn to_rgba_string(&self) -> String {
        format!("rgba({}, {}, {}, 1)", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Oklch> for Rgb {
    fn from(color: Oklch) -> Self {
        color.to_rgb()
    }
}
