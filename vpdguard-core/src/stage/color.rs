//! VPD color ramp
//!
//! One piecewise color function drives both the status dot and every
//! heatmap cell, so the chart and the status text always agree. The ramp is
//! aligned with the five status categories:
//!
//! ```text
//!  vpd:   ... min-0.2 ........ min ...... optimal ...... max ........ max+0.4 ...
//!        purple | purple → blue-green | green, brightest at optimal | orange → red-orange | dark red
//! ```
//!
//! The channel formulas are a visual contract and are reproduced exactly,
//! including truncation of each channel towards zero (`floor`).

use core::fmt::{self, Write as _};

use heapless::String;

use super::StageRange;

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// Color below `min - 0.2`: mold and mildew territory
pub const DANGEROUSLY_LOW_COLOR: Rgb = Rgb::new(142, 68, 173);

/// Color above `max + 0.4`: severe plant stress
pub const DANGEROUSLY_HIGH_COLOR: Rgb = Rgb::new(139, 0, 0);

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, e.g. for pixel buffers
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String<7> {
        let mut s = String::new();
        // 7 bytes always fit
        let _ = write!(s, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        s
    }

    /// CSS `rgba(r, g, b, a)`, as a canvas fill style
    pub fn to_rgba(self, alpha: f64) -> String<32> {
        let mut s = String::new();
        let _ = write!(s, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha.clamp(0.0, 1.0));
        s
    }

    fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[inline]
fn channel(value: f64) -> u8 {
    libm::floor(value).clamp(0.0, 255.0) as u8
}

/// Color for a VPD reading against a stage window
pub fn color_for(vpd: f64, range: &StageRange) -> Rgb {
    let low = range.low_threshold();
    let high = range.high_threshold();

    if vpd < low {
        DANGEROUSLY_LOW_COLOR
    } else if vpd < range.min {
        let factor = (vpd - low) / range.low_band();
        Rgb::from_channels(
            142.0 - 90.0 * factor,
            68.0 + 84.0 * factor,
            173.0 + 46.0 * factor,
        )
    } else if vpd <= range.max {
        let distance = libm::fabs(vpd - range.optimal);
        let max_distance = range.max_distance();
        let intensity = if max_distance > 0.0 {
            (1.0 - distance / max_distance).max(0.0)
        } else {
            1.0
        };
        Rgb::from_channels(
            39.0 + 20.0 * (1.0 - intensity),
            174.0 + 80.0 * intensity,
            96.0 + 20.0 * (1.0 - intensity),
        )
    } else if vpd <= high {
        let factor = (vpd - range.max) / range.high_band();
        Rgb::from_channels(
            230.0 + 25.0 * factor,
            126.0 - 50.0 * factor,
            34.0 - 10.0 * factor,
        )
    } else {
        DANGEROUSLY_HIGH_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::GrowthStage;

    const VEG: StageRange = GrowthStage::Vegetative.range();

    #[test]
    fn constant_extremes() {
        assert_eq!(color_for(0.2, &VEG), DANGEROUSLY_LOW_COLOR);
        assert_eq!(color_for(0.5, &VEG), DANGEROUSLY_LOW_COLOR);
        assert_eq!(color_for(1.65, &VEG), DANGEROUSLY_HIGH_COLOR);
        assert_eq!(color_for(3.0, &VEG), DANGEROUSLY_HIGH_COLOR);
    }

    #[test]
    fn low_ramp() {
        assert_eq!(color_for(VEG.low_threshold(), &VEG), Rgb::new(142, 68, 173));
        assert_eq!(color_for(0.75, &VEG), Rgb::new(74, 130, 207));

        let seedling = GrowthStage::Seedling.range();
        assert_eq!(color_for(0.3, &seedling), Rgb::new(97, 110, 196));
    }

    #[test]
    fn optimal_peak_and_edges() {
        assert_eq!(color_for(1.0, &VEG), Rgb::new(39, 254, 96));
        assert_eq!(color_for(0.9, &VEG), Rgb::new(49, 214, 106));
        assert_eq!(color_for(0.8, &VEG), Rgb::new(59, 174, 116));

        let flowering = GrowthStage::Flowering.range();
        assert_eq!(color_for(1.25, &flowering), Rgb::new(39, 254, 96));
        assert_eq!(color_for(1.4, &flowering), Rgb::new(50, 206, 108));
    }

    #[test]
    fn high_ramp() {
        assert_eq!(color_for(1.3, &VEG), Rgb::new(236, 113, 31));
        assert_eq!(color_for(1.5, &VEG), Rgb::new(248, 88, 26));
    }

    #[test]
    fn css_renderings() {
        let c = Rgb::new(39, 254, 96);
        assert_eq!(c.to_hex().as_str(), "#27fe60");
        assert_eq!(c.to_rgba(0.7).as_str(), "rgba(39, 254, 96, 0.7)");
        assert_eq!(c.to_array(), [39, 254, 96]);
    }
}
