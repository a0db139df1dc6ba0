//! Colour scales mapping samples to `rgb(r,g,b)` strings

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default phase-centre-variation domain, in millimetres
pub const PCV_DOMAIN: [f64; 2] = [-2.0, 2.0];

/// Default hue range the PCV domain is mapped onto, in degrees
pub const PCV_HUE_RANGE: [f64; 2] = [0.0, 255.0];

/// Linear map from a numeric domain onto a numeric range (no clamping)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    /// Create a new linear scale
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a value from the domain onto the range
    pub fn apply(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }
}

/// An RGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSL (hue in degrees, saturation and lightness in `[0, 1]`).
    /// Channels are rounded to the nearest integer.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;

        let channel = |h: f64| {
            let h = h.rem_euclid(360.0);
            let v = if h < 60.0 {
                m1 + (m2 - m1) * h / 60.0
            } else if h < 180.0 {
                m2
            } else if h < 240.0 {
                m1 + (m2 - m1) * (240.0 - h) / 60.0
            } else {
                m1
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(h + 120.0),
            g: channel(h),
            b: channel(h - 120.0),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Maps samples onto a hue wheel at fixed saturation and lightness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub hue: LinearScale,
    pub saturation: f64,
    pub lightness: f64,
}

impl ColorScale {
    /// Create a colour scale from a sample domain and a hue range in degrees
    pub fn new(domain: [f64; 2], hue_range: [f64; 2]) -> Self {
        Self {
            hue: LinearScale::new(domain, hue_range),
            saturation: 0.6,
            lightness: 0.5,
        }
    }

    /// Colour of a sample
    pub fn rgb(&self, value: f64) -> Rgb {
        Rgb::from_hsl(self.hue.apply(value), self.saturation, self.lightness)
    }

    /// Colour of a sample as an `rgb(r,g,b)` string
    pub fn css(&self, value: f64) -> String {
        self.rgb(value).to_string()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(PCV_DOMAIN, PCV_HUE_RANGE)
    }
}
