//! Configuration structures for facial color screening.
//!
//! All classifier thresholds live in one [`ThresholdConfig`] that is handed
//! to the classifier at construction, so behavior is reproducible and never
//! depends on ambient state.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use face_scan::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("face_scan.json"))?;
//!
//! // Or use defaults
//! let config = AnalysisConfig::default();
//! # Ok::<(), face_scan::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`ThresholdConfig`]: hue bands and saturation/brightness limits per rule
//! - [`RegionConfig`]: per-region facial analysis

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    anemia, cyanosis, fatigue, inflammation, jaundice, normal, HUE_CIRCLE_DEGREES, STATS_EPSILON,
};
use crate::error::{AnalysisError, Result};

/// Complete analysis configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Classifier thresholds
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Per-region analysis settings
    #[serde(default)]
    pub regions: RegionConfig,
}

/// Closed hue interval in degrees.
///
/// When `start > end` the band wraps through 0 degrees, so
/// `HueBand { start: 340.0, end: 10.0 }` covers 340-360 and 0-10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueBand {
    pub start: f32,
    pub end: f32,
}

impl HueBand {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Check whether a hue in degrees falls inside the band
    pub fn contains(&self, hue: f32) -> bool {
        if self.wraps() {
            hue >= self.start || hue <= self.end
        } else {
            hue >= self.start && hue <= self.end
        }
    }
}

impl std::fmt::Display for HueBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}-{:.0}°", self.start, self.end)
    }
}

/// Thresholds for every classification rule.
///
/// Defaults are representative bands, not clinically calibrated values;
/// tune them through a config file rather than in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub jaundice: JaundiceThresholds,
    #[serde(default)]
    pub cyanosis: CyanosisThresholds,
    #[serde(default)]
    pub anemia: AnemiaThresholds,
    #[serde(default)]
    pub inflammation: InflammationThresholds,
    #[serde(default)]
    pub fatigue: FatigueThresholds,
    #[serde(default)]
    pub normal: NormalEnvelope,
    /// Division guard used by the statistics extractor
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_epsilon() -> f64 {
    STATS_EPSILON
}

/// Yellow skin: hue in band, saturated, not shadowed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JaundiceThresholds {
    pub hue_band: HueBand,
    pub min_saturation: f32,
    pub min_value: f32,
}

/// Blue/purple skin: hue in band, saturated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyanosisThresholds {
    pub hue_band: HueBand,
    pub min_saturation: f32,
}

/// Pale skin: low saturation on a well-lit photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnemiaThresholds {
    pub max_saturation: f32,
    pub min_value: f32,
}

/// Red skin: high redness ratio with hue in the red band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflammationThresholds {
    pub hue_band: HueBand,
    pub min_redness_ratio: f32,
}

/// Dull, dark skin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueThresholds {
    pub min_darkness_index: f32,
    pub max_saturation: f32,
}

/// Brightness/saturation envelope of a healthy, well-lit face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalEnvelope {
    pub min_value: f32,
    pub max_value: f32,
    pub min_saturation: f32,
    pub max_saturation: f32,
}

/// Per-region facial analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Also analyze forehead, cheeks, chin and under-eye bands
    pub enabled: bool,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for JaundiceThresholds {
    fn default() -> Self {
        Self {
            hue_band: HueBand::new(jaundice::HUE_START, jaundice::HUE_END),
            min_saturation: jaundice::MIN_SATURATION,
            min_value: jaundice::MIN_VALUE,
        }
    }
}

impl Default for CyanosisThresholds {
    fn default() -> Self {
        Self {
            hue_band: HueBand::new(cyanosis::HUE_START, cyanosis::HUE_END),
            min_saturation: cyanosis::MIN_SATURATION,
        }
    }
}

impl Default for AnemiaThresholds {
    fn default() -> Self {
        Self {
            max_saturation: anemia::MAX_SATURATION,
            min_value: anemia::MIN_VALUE,
        }
    }
}

impl Default for InflammationThresholds {
    fn default() -> Self {
        Self {
            hue_band: HueBand::new(inflammation::HUE_START, inflammation::HUE_END),
            min_redness_ratio: inflammation::MIN_REDNESS_RATIO,
        }
    }
}

impl Default for FatigueThresholds {
    fn default() -> Self {
        Self {
            min_darkness_index: fatigue::MIN_DARKNESS_INDEX,
            max_saturation: fatigue::MAX_SATURATION,
        }
    }
}

impl Default for NormalEnvelope {
    fn default() -> Self {
        Self {
            min_value: normal::MIN_VALUE,
            max_value: normal::MAX_VALUE,
            min_saturation: normal::MIN_SATURATION,
            max_saturation: normal::MAX_SATURATION,
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            jaundice: JaundiceThresholds::default(),
            cyanosis: CyanosisThresholds::default(),
            anemia: AnemiaThresholds::default(),
            inflammation: InflammationThresholds::default(),
            fatigue: FatigueThresholds::default(),
            normal: NormalEnvelope::default(),
            epsilon: STATS_EPSILON,
        }
    }
}

fn check_fraction(parameter: &str, value: f32) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AnalysisError::invalid_parameter(parameter, value))
    }
}

fn check_band(parameter: &str, band: HueBand) -> Result<()> {
    for (suffix, hue) in [("start", band.start), ("end", band.end)] {
        if !(hue.is_finite() && (0.0..=HUE_CIRCLE_DEGREES).contains(&hue)) {
            return Err(AnalysisError::invalid_parameter(
                format!("{parameter}.{suffix}"),
                hue,
            ));
        }
    }
    Ok(())
}

impl ThresholdConfig {
    /// Reject thresholds no image could ever meaningfully satisfy
    pub fn validate(&self) -> Result<()> {
        check_band("jaundice.hue_band", self.jaundice.hue_band)?;
        check_fraction("jaundice.min_saturation", self.jaundice.min_saturation)?;
        check_fraction("jaundice.min_value", self.jaundice.min_value)?;

        check_band("cyanosis.hue_band", self.cyanosis.hue_band)?;
        check_fraction("cyanosis.min_saturation", self.cyanosis.min_saturation)?;

        check_fraction("anemia.max_saturation", self.anemia.max_saturation)?;
        check_fraction("anemia.min_value", self.anemia.min_value)?;

        check_band("inflammation.hue_band", self.inflammation.hue_band)?;
        let ratio = self.inflammation.min_redness_ratio;
        if !(ratio.is_finite() && ratio >= 0.0) {
            return Err(AnalysisError::invalid_parameter(
                "inflammation.min_redness_ratio",
                ratio,
            ));
        }

        check_fraction("fatigue.min_darkness_index", self.fatigue.min_darkness_index)?;
        check_fraction("fatigue.max_saturation", self.fatigue.max_saturation)?;

        let env = &self.normal;
        check_fraction("normal.min_value", env.min_value)?;
        check_fraction("normal.max_value", env.max_value)?;
        check_fraction("normal.min_saturation", env.min_saturation)?;
        check_fraction("normal.max_saturation", env.max_saturation)?;
        if env.min_value > env.max_value {
            return Err(AnalysisError::invalid_parameter(
                "normal.min_value",
                format!("{} > max_value {}", env.min_value, env.max_value),
            ));
        }
        if env.min_saturation > env.max_saturation {
            return Err(AnalysisError::invalid_parameter(
                "normal.min_saturation",
                format!("{} > max_saturation {}", env.min_saturation, env.max_saturation),
            ));
        }

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(AnalysisError::invalid_parameter("epsilon", self.epsilon));
        }

        Ok(())
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }

    /// Load and validate configuration from a JSON file.
    ///
    /// Missing sections fall back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::config("Failed to parse configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
