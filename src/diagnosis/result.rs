//! Classification labels and results

use serde::{Deserialize, Serialize};

use crate::constants::scoring;

/// Closed set of screening outcomes.
///
/// `Inconclusive` is a legitimate result, returned when the statistics fall
/// outside every envelope (poor lighting, non-facial input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    Jaundice,
    Cyanosis,
    Anemia,
    Inflammation,
    Fatigue,
    Normal,
    Inconclusive,
}

/// How strongly a color signal is associated with its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 7] = [
        Diagnosis::Jaundice,
        Diagnosis::Cyanosis,
        Diagnosis::Anemia,
        Diagnosis::Inflammation,
        Diagnosis::Fatigue,
        Diagnosis::Normal,
        Diagnosis::Inconclusive,
    ];

    /// Human-readable condition name
    pub fn name(&self) -> &'static str {
        match self {
            Diagnosis::Jaundice => "Jaundice (Liver Issue)",
            Diagnosis::Cyanosis => "Cyanosis",
            Diagnosis::Anemia => "Anemia",
            Diagnosis::Inflammation => "Inflammation / Allergy",
            Diagnosis::Fatigue => "Fatigue / Stress",
            Diagnosis::Normal => "Normal",
            Diagnosis::Inconclusive => "Inconclusive",
        }
    }

    pub fn confidence(&self) -> Confidence {
        match self {
            Diagnosis::Jaundice | Diagnosis::Cyanosis | Diagnosis::Normal => Confidence::High,
            Diagnosis::Anemia | Diagnosis::Inflammation | Diagnosis::Fatigue => Confidence::Medium,
            Diagnosis::Inconclusive => Confidence::Low,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Diagnosis::Jaundice => "Consult a hepatologist for liver function tests",
            Diagnosis::Cyanosis => {
                "Seek immediate medical attention - possible respiratory or cardiac issue"
            }
            Diagnosis::Anemia => "Check hemoglobin levels; increase iron intake",
            Diagnosis::Inflammation => {
                "Avoid known triggers and allergens; consult a dermatologist"
            }
            Diagnosis::Fatigue => "Improve sleep quality; aim for 7-9 hours nightly",
            Diagnosis::Normal => "Maintain current healthy lifestyle",
            Diagnosis::Inconclusive => {
                "Retake the photo in even, natural lighting with the face filling the frame"
            }
        }
    }

    /// Points subtracted from a full health score
    pub fn penalty(&self) -> u8 {
        match self {
            Diagnosis::Jaundice => scoring::JAUNDICE_PENALTY,
            Diagnosis::Cyanosis => scoring::CYANOSIS_PENALTY,
            Diagnosis::Anemia => scoring::ANEMIA_PENALTY,
            Diagnosis::Inflammation => scoring::INFLAMMATION_PENALTY,
            Diagnosis::Fatigue => scoring::FATIGUE_PENALTY,
            Diagnosis::Normal | Diagnosis::Inconclusive => 0,
        }
    }

    /// True for labels that flag a visible health indicator
    pub fn is_indicator(&self) -> bool {
        !matches!(self, Diagnosis::Normal | Diagnosis::Inconclusive)
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        };
        f.write_str(s)
    }
}

/// Outcome of classifying one set of statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub label: Diagnosis,
    /// Which statistics crossed which thresholds
    pub rationale: String,
    pub confidence: Confidence,
    pub recommendation: String,
    /// 0-100, lower means a more serious indicator
    pub health_score: u8,
}

impl DiagnosisResult {
    pub fn new(label: Diagnosis, rationale: impl Into<String>) -> Self {
        Self {
            label,
            rationale: rationale.into(),
            confidence: label.confidence(),
            recommendation: label.recommendation().to_string(),
            health_score: scoring::FULL_SCORE.saturating_sub(label.penalty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_fields_follow_label() {
        let result = DiagnosisResult::new(Diagnosis::Cyanosis, "hue 210°");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.health_score, 65);
        assert!(result.recommendation.contains("medical attention"));
        assert_eq!(result.rationale, "hue 210°");
    }

    #[test]
    fn test_non_indicators_keep_full_score() {
        assert_eq!(DiagnosisResult::new(Diagnosis::Normal, "").health_score, 100);
        assert_eq!(DiagnosisResult::new(Diagnosis::Inconclusive, "").health_score, 100);
        assert!(!Diagnosis::Normal.is_indicator());
        assert!(!Diagnosis::Inconclusive.is_indicator());
        assert!(Diagnosis::Fatigue.is_indicator());
    }

    #[test]
    fn test_inconclusive_is_low_confidence() {
        assert_eq!(Diagnosis::Inconclusive.confidence(), Confidence::Low);
        assert!(Confidence::Low < Confidence::High);
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&Diagnosis::Anemia).unwrap();
        assert_eq!(json, "\"Anemia\"");

        let result = DiagnosisResult::new(Diagnosis::Jaundice, "yellow");
        let json = serde_json::to_string(&result).unwrap();
        let back: DiagnosisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
