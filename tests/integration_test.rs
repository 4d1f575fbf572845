//! Integration tests for the complete analyze_face pipeline
//!
//! These tests drive the public API with synthetic images:
//! - Image validation (extent, channel count, buffer length)
//! - Statistics extraction ranges
//! - Classification of uniform reference colors
//! - Determinism and rule priority
//! - File loading through the image loader

use face_scan::image_loader::load_image;
use face_scan::{
    analyze_face, analyze_face_with, classify_image, AnalysisConfig, AnalysisError,
    Classifier, ColorStatistics, Diagnosis, DiagnosisResult, FaceImage, HueBand,
    StatisticsExtractor, ThresholdConfig,
};
use image::{Rgb, RgbImage};

fn uniform(r: u8, g: u8, b: u8) -> RgbImage {
    RgbImage::from_pixel(32, 32, Rgb([r, g, b]))
}

fn classify(img: &RgbImage) -> DiagnosisResult {
    let view = FaceImage::from_rgb(img).unwrap();
    classify_image(&view, &ThresholdConfig::default()).unwrap()
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_zero_extent_image() {
    let result = FaceImage::new(0, 0, 3, &[]);
    assert!(matches!(result, Err(AnalysisError::InvalidImage { .. })));
}

#[test]
fn test_grayscale_buffer_is_unsupported() {
    let gray = vec![128u8; 16];
    let err = FaceImage::new(4, 4, 1, &gray).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedFormat { channels: 1 }));
    assert!(err.is_recoverable());
}

#[test]
fn test_alpha_buffer_is_unsupported() {
    let rgba = vec![128u8; 64];
    assert!(matches!(
        FaceImage::new(4, 4, 4, &rgba),
        Err(AnalysisError::UnsupportedFormat { channels: 4 })
    ));
}

#[test]
fn test_truncated_buffer() {
    let data = vec![0u8; 4 * 4 * 3 - 1];
    assert!(matches!(
        FaceImage::new(4, 4, 3, &data),
        Err(AnalysisError::InvalidImage { .. })
    ));
}

// ============================================================================
// Reference Color Tests
// ============================================================================

#[test]
fn test_uniform_yellow_is_jaundice() {
    // h = 50°, s = 0.8, v = 0.8
    let result = classify(&uniform(204, 177, 41));
    assert_eq!(result.label, Diagnosis::Jaundice);
}

#[test]
fn test_uniform_blue_is_cyanosis() {
    // h = 210°, s = 0.8, v = 0.6
    let result = classify(&uniform(31, 92, 153));
    assert_eq!(result.label, Diagnosis::Cyanosis);
}

#[test]
fn test_uniform_pale_gray_is_anemia() {
    // s ≈ 0.05, v ≈ 0.9
    let result = classify(&uniform(230, 230, 219));
    assert_eq!(result.label, Diagnosis::Anemia);
}

#[test]
fn test_all_black_resolves_without_error() {
    let result = classify(&uniform(0, 0, 0));
    assert!(matches!(
        result.label,
        Diagnosis::Fatigue | Diagnosis::Inconclusive
    ));
}

#[test]
fn test_all_white_resolves() {
    let result = classify(&uniform(255, 255, 255));
    assert_eq!(result.label, Diagnosis::Anemia);
}

#[test]
fn test_flushed_red_is_inflammation() {
    let result = classify(&uniform(220, 90, 95));
    assert_eq!(result.label, Diagnosis::Inflammation);
}

#[test]
fn test_healthy_skin_is_normal() {
    let result = classify(&uniform(224, 172, 140));
    assert_eq!(result.label, Diagnosis::Normal);
}

#[test]
fn test_saturated_green_is_inconclusive() {
    let result = classify(&uniform(0, 200, 0));
    assert_eq!(result.label, Diagnosis::Inconclusive);
}

// ============================================================================
// Pipeline Properties
// ============================================================================

#[test]
fn test_identical_bytes_identical_result() {
    let img = RgbImage::from_fn(40, 30, |x, y| {
        Rgb([(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8])
    });
    let bytes = img.as_raw().clone();

    let a = FaceImage::new(40, 30, 3, img.as_raw()).unwrap();
    let b = FaceImage::new(40, 30, 3, &bytes).unwrap();

    let config = AnalysisConfig::default();
    assert_eq!(
        analyze_face(&a, &config).unwrap(),
        analyze_face(&b, &config).unwrap()
    );
}

#[test]
fn test_first_match_wins_on_overlap() {
    // An orange-yellow face with a red cast: hue ≈ 42°, redness ≈ 1.09
    let img = uniform(230, 172, 40);
    let view = FaceImage::from_rgb(&img).unwrap();

    let mut config = AnalysisConfig::default();
    config.thresholds.inflammation.hue_band = HueBand::new(340.0, 50.0);
    config.thresholds.inflammation.min_redness_ratio = 1.0;

    let stats = StatisticsExtractor::new().extract(&view).unwrap();
    assert!(config.thresholds.inflammation.hue_band.contains(stats.mean_hue));
    assert!(stats.redness_ratio > 1.0);

    let report = analyze_face(&view, &config).unwrap();
    assert_eq!(report.diagnosis.label, Diagnosis::Jaundice);
}

#[test]
fn test_region_reports_are_included() {
    let img = uniform(224, 172, 140);
    let view = FaceImage::from_rgb(&img).unwrap();
    let report = analyze_face(&view, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.regions.len(), 4);
    assert!(report
        .regions
        .iter()
        .all(|r| r.diagnosis.label == Diagnosis::Normal));
}

/// Stand-in for a learned engine behind the same seam
struct AlwaysNormal;

impl Classifier for AlwaysNormal {
    fn name(&self) -> &str {
        "always-normal"
    }

    fn classify(&self, _stats: &ColorStatistics) -> DiagnosisResult {
        DiagnosisResult::new(Diagnosis::Normal, "fixed")
    }
}

#[test]
fn test_alternative_classifier_plugs_in() {
    let img = uniform(204, 177, 41);
    let view = FaceImage::from_rgb(&img).unwrap();
    let report = analyze_face_with(&view, &AnalysisConfig::default(), &AlwaysNormal).unwrap();

    assert_eq!(report.diagnosis.label, Diagnosis::Normal);
    assert!(report.regions.iter().all(|r| r.diagnosis.rationale == "fixed"));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_png_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blue_face.png");
    uniform(31, 92, 153).save(&path).unwrap();

    let rgb = load_image(&path).unwrap();
    let view = FaceImage::from_rgb(&rgb).unwrap();
    let report = analyze_face(&view, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.diagnosis.label, Diagnosis::Cyanosis);
}

#[test]
fn test_config_file_drives_classification() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strict.json");
    std::fs::write(
        &path,
        r#"{ "thresholds": { "jaundice": { "hue_band": { "start": 55.0, "end": 65.0 }, "min_saturation": 0.15, "min_value": 0.35 } } }"#,
    )
    .unwrap();

    let config = AnalysisConfig::from_json_file(&path).unwrap();
    let img = uniform(204, 177, 41);
    let view = FaceImage::from_rgb(&img).unwrap();

    let report = analyze_face(&view, &config).unwrap();
    assert_ne!(report.diagnosis.label, Diagnosis::Jaundice);
}
