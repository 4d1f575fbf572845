//! Region-level color statistics
//!
//! Reduces the pixels of an image (or a sub-region such as a detected face
//! box) to a fixed-size summary the classifier works from. One pass over
//! the region, O(width x height); callers that care about throughput
//! should downscale large photos before analysis.

use serde::{Deserialize, Serialize};

use crate::color::conversion::rgb_to_hsv;
use crate::color::normalize_hue;
use crate::constants::STATS_EPSILON;
use crate::error::{AnalysisError, Result};
use crate::frame::{FaceImage, Region};

/// Summary of one image region.
///
/// Every field is finite. Ranges: `mean_hue` in `[0, 360)`,
/// `mean_saturation`, `mean_value` and `darkness_index` in `[0, 1]`,
/// `value_std_dev` in `[0, 0.5]`, `redness_ratio` non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStatistics {
    /// Arithmetic mean of per-pixel hue, degrees
    pub mean_hue: f32,
    pub mean_saturation: f32,
    pub mean_value: f32,
    /// Population standard deviation of per-pixel value
    pub value_std_dev: f32,
    /// `mean(R) / (mean(G) + mean(B) + eps)`
    pub redness_ratio: f32,
    /// `1 - mean_value`
    pub darkness_index: f32,
    pub pixel_count: u64,
}

/// Running sums for one pass over a region
#[derive(Default)]
struct Accumulator {
    hue: f64,
    saturation: f64,
    value: f64,
    value_sq: f64,
    red: f64,
    green: f64,
    blue: f64,
    count: u64,
}

impl Accumulator {
    fn push(&mut self, [r, g, b]: [u8; 3]) {
        let hsv = rgb_to_hsv(r, g, b);
        let value = hsv.value as f64;

        self.hue += hsv.hue as f64;
        self.saturation += hsv.saturation as f64;
        self.value += value;
        self.value_sq += value * value;
        self.red += r as f64;
        self.green += g as f64;
        self.blue += b as f64;
        self.count += 1;
    }

    fn finish(self, epsilon: f64) -> ColorStatistics {
        let n = self.count as f64;
        let mean = |sum: f64| sum / n;

        let mean_value = mean(self.value).clamp(0.0, 1.0);
        let variance = (mean(self.value_sq) - mean_value * mean_value).max(0.0);
        let redness = mean(self.red) / (mean(self.green) + mean(self.blue) + epsilon);

        ColorStatistics {
            mean_hue: normalize_hue(mean(self.hue) as f32),
            mean_saturation: mean(self.saturation).clamp(0.0, 1.0) as f32,
            mean_value: mean_value as f32,
            value_std_dev: variance.sqrt() as f32,
            redness_ratio: redness as f32,
            darkness_index: (1.0 - mean_value) as f32,
            pixel_count: self.count,
        }
    }
}

/// Computes [`ColorStatistics`] from images
#[derive(Debug, Clone)]
pub struct StatisticsExtractor {
    epsilon: f64,
}

impl Default for StatisticsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsExtractor {
    /// Create an extractor with the default division guard
    pub fn new() -> Self {
        Self {
            epsilon: STATS_EPSILON,
        }
    }

    /// Create an extractor with a custom division guard
    ///
    /// # Errors
    ///
    /// `InvalidParameter` unless `epsilon` is finite and positive
    pub fn with_epsilon(epsilon: f64) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(AnalysisError::invalid_parameter("epsilon", epsilon));
        }
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Statistics over every pixel of the image
    pub fn extract(&self, image: &FaceImage<'_>) -> Result<ColorStatistics> {
        self.extract_region(image, image.bounds())
    }

    /// Statistics over a sub-region of the image.
    ///
    /// The region is clipped to the image first.
    ///
    /// # Errors
    ///
    /// `InvalidImage` if nothing of the region lies inside the image
    pub fn extract_region(&self, image: &FaceImage<'_>, region: Region) -> Result<ColorStatistics> {
        let clipped = region.clip_to(image.width(), image.height());
        if clipped.is_empty() {
            return Err(AnalysisError::invalid_image(format!(
                "region {:?} has no pixels inside {}x{} image",
                region,
                image.width(),
                image.height()
            )));
        }

        let mut acc = Accumulator::default();
        for pixel in image.pixels_in(clipped) {
            acc.push(pixel);
        }

        Ok(acc.finish(self.epsilon))
    }
}
