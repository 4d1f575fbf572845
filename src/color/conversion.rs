//! RGB to HSV conversion
//!
//! Uses the standard piecewise conversion directly on gamma-encoded sRGB
//! values (no linearization), which is what camera pipelines and most
//! imaging libraries mean by "HSV":
//! - hue from the max/min channel ordering, in degrees `[0, 360)`
//! - saturation `(max - min) / max`, or 0 when `max == 0`
//! - value `max / 255`

use palette::{FromColor, Hsv, Srgb};

use crate::constants::HUE_CIRCLE_DEGREES;

/// One pixel in HSV space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvSample {
    /// Hue in degrees, `[0, 360)`; 0 for achromatic pixels
    pub hue: f32,
    /// Saturation, `[0, 1]`
    pub saturation: f32,
    /// Value (brightness), `[0, 1]`
    pub value: f32,
}

/// Convert an 8-bit RGB triple to HSV
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> HsvSample {
    let srgb: Srgb<f32> = Srgb::<u8>::new(r, g, b).into_format();
    let hsv: Hsv = Hsv::from_color(srgb);

    HsvSample {
        hue: normalize_hue(hsv.hue.into_positive_degrees()),
        saturation: hsv.saturation.clamp(0.0, 1.0),
        value: hsv.value.clamp(0.0, 1.0),
    }
}

/// Fold any angle into `[0, 360)`.
///
/// Rounding in `f32` can land a tiny negative angle exactly on 360, which
/// is folded back to 0. Non-finite input maps to 0.
pub fn normalize_hue(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let hue = degrees.rem_euclid(HUE_CIRCLE_DEGREES);
    if hue >= HUE_CIRCLE_DEGREES {
        0.0
    } else {
        hue
    }
}
