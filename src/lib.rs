//! # Face Scan
//!
//! A Rust crate for screening facial photographs for visible health
//! indicators from color statistics.
//!
//! The analysis is a fixed, deterministic rule table, not a learned model:
//! - Convert the face (or a region of it) to HSV and summarize it
//! - Walk an ordered table of threshold rules, first match wins
//! - Report one label from {Jaundice, Cyanosis, Anemia, Inflammation,
//!   Fatigue, Normal, Inconclusive} with a rationale naming the thresholds
//!   that were crossed
//!
//! The core is pure and stateless: no I/O, no logging, no shared state.
//! Any number of analyses can run concurrently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use face_scan::{analyze_face, AnalysisConfig, FaceImage};
//! use face_scan::image_loader::load_image;
//! use std::path::Path;
//!
//! let rgb = load_image(Path::new("face.jpg"))?;
//! let image = FaceImage::from_rgb(&rgb)?;
//! let report = analyze_face(&image, &AnalysisConfig::default())?;
//! println!("{}: {}", report.diagnosis.label, report.diagnosis.rationale);
//! # Ok::<(), face_scan::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod constants;
pub mod diagnosis;
pub mod error;
pub mod frame;
pub mod image_loader;
pub mod regions;

pub use color::{ColorStatistics, StatisticsExtractor};
pub use config::{AnalysisConfig, HueBand, RegionConfig, ThresholdConfig};
pub use diagnosis::{Classifier, Confidence, Diagnosis, DiagnosisResult, RuleClassifier};
pub use error::{AnalysisError, Result};
pub use frame::{FaceImage, Region};
pub use regions::{FacialRegion, RegionReport};

/// Complete analysis of one photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceAnalysis {
    /// Whole-image statistics
    pub statistics: ColorStatistics,
    /// Classification of the whole image
    pub diagnosis: DiagnosisResult,
    /// Per-band reports; empty when region analysis is disabled
    pub regions: Vec<RegionReport>,
}

impl FaceAnalysis {
    /// Labels of bands that flag an indicator the whole-image result does not
    pub fn regional_findings(&self) -> Vec<(FacialRegion, Diagnosis)> {
        self.regions
            .iter()
            .filter(|r| r.diagnosis.label.is_indicator() && r.diagnosis.label != self.diagnosis.label)
            .map(|r| (r.region, r.diagnosis.label))
            .collect()
    }
}

/// Analyze a face image with the rule-based classifier.
///
/// # Errors
///
/// Returns `AnalysisError` if the configuration is invalid. Image shape
/// problems are caught earlier, when the [`FaceImage`] is built.
pub fn analyze_face(image: &FaceImage<'_>, config: &AnalysisConfig) -> Result<FaceAnalysis> {
    config.validate()?;
    let classifier = RuleClassifier::new(&config.thresholds);
    analyze_face_with(image, config, &classifier)
}

/// Analyze a face image with any [`Classifier`] implementation
pub fn analyze_face_with(
    image: &FaceImage<'_>,
    config: &AnalysisConfig,
    classifier: &dyn Classifier,
) -> Result<FaceAnalysis> {
    let extractor = StatisticsExtractor::with_epsilon(config.thresholds.epsilon)?;

    let statistics = extractor.extract(image)?;
    let diagnosis = classifier.classify(&statistics);

    let regions = if config.regions.enabled {
        regions::analyze_regions(image, &extractor, classifier)?
    } else {
        Vec::new()
    };

    Ok(FaceAnalysis {
        statistics,
        diagnosis,
        regions,
    })
}

/// Classify the whole image only, skipping region analysis
pub fn classify_image(image: &FaceImage<'_>, thresholds: &ThresholdConfig) -> Result<DiagnosisResult> {
    thresholds.validate()?;
    let extractor = StatisticsExtractor::with_epsilon(thresholds.epsilon)?;
    let statistics = extractor.extract(image)?;
    Ok(RuleClassifier::new(thresholds).classify(&statistics))
}
