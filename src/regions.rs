//! Facial region analysis
//!
//! Splits a face-framed photo into fixed bands (forehead, cheeks, chin,
//! under-eyes) and classifies each on its own. The layout assumes the face
//! roughly fills the frame; callers with a detected face box should crop to
//! it first.

use serde::{Deserialize, Serialize};

use crate::color::{ColorStatistics, StatisticsExtractor};
use crate::constants::regions as layout;
use crate::diagnosis::{Classifier, DiagnosisResult};
use crate::error::Result;
use crate::frame::{FaceImage, Region};

/// Fixed facial bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacialRegion {
    Forehead,
    Cheeks,
    Chin,
    UnderEyes,
}

impl FacialRegion {
    pub const ALL: [FacialRegion; 4] = [
        FacialRegion::Forehead,
        FacialRegion::Cheeks,
        FacialRegion::Chin,
        FacialRegion::UnderEyes,
    ];

    /// `(rows, cols)` spans as fractions of the frame
    pub fn fractions(&self) -> ((f32, f32), (f32, f32)) {
        match self {
            FacialRegion::Forehead => (layout::FOREHEAD_ROWS, layout::FOREHEAD_COLS),
            FacialRegion::Cheeks => (layout::CHEEKS_ROWS, layout::CHEEKS_COLS),
            FacialRegion::Chin => (layout::CHIN_ROWS, layout::CHIN_COLS),
            FacialRegion::UnderEyes => (layout::UNDER_EYES_ROWS, layout::UNDER_EYES_COLS),
        }
    }

    /// Pixel rectangle of this band in a `width` x `height` frame
    pub fn bounds(&self, width: u32, height: u32) -> Region {
        let (rows, cols) = self.fractions();
        Region::from_fractions(width, height, rows, cols)
    }
}

/// Statistics and diagnosis for one facial band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionReport {
    pub region: FacialRegion,
    pub statistics: ColorStatistics,
    pub diagnosis: DiagnosisResult,
}

/// Analyze every facial band that has pixels.
///
/// Bands that collapse to nothing on very small images are skipped rather
/// than reported as errors.
pub fn analyze_regions(
    image: &FaceImage<'_>,
    extractor: &StatisticsExtractor,
    classifier: &dyn Classifier,
) -> Result<Vec<RegionReport>> {
    let mut reports = Vec::with_capacity(FacialRegion::ALL.len());

    for region in FacialRegion::ALL {
        let bounds = region.bounds(image.width(), image.height());
        if bounds.is_empty() {
            continue;
        }

        let statistics = extractor.extract_region(image, bounds)?;
        let diagnosis = classifier.classify(&statistics);
        reports.push(RegionReport {
            region,
            statistics,
            diagnosis,
        });
    }

    Ok(reports)
}
