//! Color conversion and statistics module
//!
//! This module handles RGB to HSV conversion and the reduction of image
//! regions to summary statistics used for classification.

pub mod conversion;
pub mod statistics;

pub use conversion::{normalize_hue, rgb_to_hsv, HsvSample};
pub use statistics::{ColorStatistics, StatisticsExtractor};
