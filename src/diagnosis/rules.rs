//! The ordered rule table
//!
//! Rules overlap in their raw ranges (a bright, pale yellow face can satisfy
//! both jaundice and anemia), so order is part of the semantics. The table
//! is built once from a [`ThresholdConfig`] and evaluated top to bottom;
//! the first rule that holds decides the label.
//!
//! | # | Rule         | Condition                                              |
//! |---|--------------|--------------------------------------------------------|
//! | 1 | Jaundice     | hue in yellow band, saturation > min, value > floor    |
//! | 2 | Cyanosis     | hue in blue band, saturation > min                     |
//! | 3 | Anemia       | saturation < max, value > min                          |
//! | 4 | Inflammation | redness ratio > min, hue in red band (wraps at 0)      |
//! | 5 | Fatigue      | darkness index > min, saturation < max                 |
//! | 6 | Normal       | value and saturation inside the healthy envelope       |
//! | 7 | Inconclusive | always                                                 |

use crate::color::ColorStatistics;
use crate::config::{
    AnemiaThresholds, CyanosisThresholds, FatigueThresholds, InflammationThresholds,
    JaundiceThresholds, NormalEnvelope, ThresholdConfig,
};
use crate::diagnosis::Diagnosis;

/// One entry of the rule table, carrying its own thresholds
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Jaundice(JaundiceThresholds),
    Cyanosis(CyanosisThresholds),
    Anemia(AnemiaThresholds),
    Inflammation(InflammationThresholds),
    Fatigue(FatigueThresholds),
    Normal(NormalEnvelope),
    /// Fallback; the envelope is only used to explain the miss
    Inconclusive(NormalEnvelope),
}

impl Rule {
    /// Build the rule table in priority order
    pub fn table(config: &ThresholdConfig) -> Vec<Rule> {
        vec![
            Rule::Jaundice(config.jaundice.clone()),
            Rule::Cyanosis(config.cyanosis.clone()),
            Rule::Anemia(config.anemia.clone()),
            Rule::Inflammation(config.inflammation.clone()),
            Rule::Fatigue(config.fatigue.clone()),
            Rule::Normal(config.normal.clone()),
            Rule::Inconclusive(config.normal.clone()),
        ]
    }

    pub fn label(&self) -> Diagnosis {
        match self {
            Rule::Jaundice(_) => Diagnosis::Jaundice,
            Rule::Cyanosis(_) => Diagnosis::Cyanosis,
            Rule::Anemia(_) => Diagnosis::Anemia,
            Rule::Inflammation(_) => Diagnosis::Inflammation,
            Rule::Fatigue(_) => Diagnosis::Fatigue,
            Rule::Normal(_) => Diagnosis::Normal,
            Rule::Inconclusive(_) => Diagnosis::Inconclusive,
        }
    }

    pub fn matches(&self, stats: &ColorStatistics) -> bool {
        let hue = stats.mean_hue;
        let sat = stats.mean_saturation;
        let val = stats.mean_value;

        match self {
            Rule::Jaundice(t) => {
                t.hue_band.contains(hue) && sat > t.min_saturation && val > t.min_value
            }
            Rule::Cyanosis(t) => t.hue_band.contains(hue) && sat > t.min_saturation,
            Rule::Anemia(t) => sat < t.max_saturation && val > t.min_value,
            Rule::Inflammation(t) => {
                stats.redness_ratio > t.min_redness_ratio && t.hue_band.contains(hue)
            }
            Rule::Fatigue(t) => {
                stats.darkness_index > t.min_darkness_index && sat < t.max_saturation
            }
            Rule::Normal(env) => in_envelope(env, stats),
            Rule::Inconclusive(_) => true,
        }
    }

    /// Explain the decision this rule makes for `stats`.
    ///
    /// Only meaningful when [`Rule::matches`] holds.
    pub fn rationale(&self, stats: &ColorStatistics) -> String {
        let hue = stats.mean_hue;
        let sat = stats.mean_saturation;
        let val = stats.mean_value;

        match self {
            Rule::Jaundice(t) => format!(
                "mean hue {:.1}° within yellow band {}, saturation {:.2} > {:.2}, value {:.2} > {:.2}",
                hue, t.hue_band, sat, t.min_saturation, val, t.min_value
            ),
            Rule::Cyanosis(t) => format!(
                "mean hue {:.1}° within blue band {}, saturation {:.2} > {:.2}",
                hue, t.hue_band, sat, t.min_saturation
            ),
            Rule::Anemia(t) => format!(
                "saturation {:.2} < {:.2} (pale) with value {:.2} > {:.2}",
                sat, t.max_saturation, val, t.min_value
            ),
            Rule::Inflammation(t) => format!(
                "redness ratio {:.2} > {:.2}, mean hue {:.1}° within red band {}",
                stats.redness_ratio, t.min_redness_ratio, hue, t.hue_band
            ),
            Rule::Fatigue(t) => format!(
                "darkness index {:.2} > {:.2}, saturation {:.2} < {:.2} (dull)",
                stats.darkness_index, t.min_darkness_index, sat, t.max_saturation
            ),
            Rule::Normal(env) => format!(
                "no indicator matched; value {:.2} within {:.2}-{:.2}, saturation {:.2} within {:.2}-{:.2}",
                val, env.min_value, env.max_value, sat, env.min_saturation, env.max_saturation
            ),
            Rule::Inconclusive(env) => format!(
                "no rule matched; hue {:.1}°, saturation {:.2}, value {:.2} outside healthy envelope (value {:.2}-{:.2}, saturation {:.2}-{:.2})",
                hue, sat, val, env.min_value, env.max_value, env.min_saturation, env.max_saturation
            ),
        }
    }
}

fn in_envelope(env: &NormalEnvelope, stats: &ColorStatistics) -> bool {
    (env.min_value..=env.max_value).contains(&stats.mean_value)
        && (env.min_saturation..=env.max_saturation).contains(&stats.mean_saturation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(hue: f32, saturation: f32, value: f32, redness_ratio: f32) -> ColorStatistics {
        ColorStatistics {
            mean_hue: hue,
            mean_saturation: saturation,
            mean_value: value,
            value_std_dev: 0.0,
            redness_ratio,
            darkness_index: 1.0 - value,
            pixel_count: 1,
        }
    }

    #[test]
    fn test_table_order() {
        let labels: Vec<Diagnosis> = Rule::table(&ThresholdConfig::default())
            .iter()
            .map(Rule::label)
            .collect();
        assert_eq!(labels, Diagnosis::ALL.to_vec());
    }

    #[test]
    fn test_jaundice_needs_brightness() {
        let rule = Rule::Jaundice(JaundiceThresholds::default());
        assert!(rule.matches(&stats(50.0, 0.8, 0.8, 0.9)));
        assert!(!rule.matches(&stats(50.0, 0.8, 0.2, 0.9)));
        assert!(!rule.matches(&stats(50.0, 0.1, 0.8, 0.9)));
    }

    #[test]
    fn test_anemia_excludes_dark_photos() {
        let rule = Rule::Anemia(AnemiaThresholds::default());
        assert!(rule.matches(&stats(0.0, 0.05, 0.9, 0.5)));
        assert!(!rule.matches(&stats(0.0, 0.05, 0.3, 0.5)));
    }

    #[test]
    fn test_inflammation_band_wraps() {
        let rule = Rule::Inflammation(InflammationThresholds::default());
        assert!(rule.matches(&stats(355.0, 0.6, 0.7, 1.4)));
        assert!(rule.matches(&stats(5.0, 0.6, 0.7, 1.4)));
        assert!(!rule.matches(&stats(30.0, 0.6, 0.7, 1.4)));
        assert!(!rule.matches(&stats(5.0, 0.6, 0.7, 0.5)));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let rule = Rule::Cyanosis(CyanosisThresholds::default());
        // Saturation exactly at the minimum does not count as "above"
        assert!(!rule.matches(&stats(210.0, 0.15, 0.6, 0.3)));
    }

    #[test]
    fn test_normal_envelope_is_inclusive() {
        let rule = Rule::Normal(NormalEnvelope::default());
        assert!(rule.matches(&stats(20.0, 0.10, 0.95, 0.8)));
        assert!(!rule.matches(&stats(20.0, 0.9, 0.8, 0.8)));
    }

    #[test]
    fn test_inconclusive_always_matches() {
        let rule = Rule::Inconclusive(NormalEnvelope::default());
        assert!(rule.matches(&stats(120.0, 1.0, 0.78, 0.0)));
    }

    #[test]
    fn test_rationale_names_thresholds() {
        let rule = Rule::Fatigue(FatigueThresholds::default());
        let text = rule.rationale(&stats(0.0, 0.0, 0.0, 0.0));
        assert!(text.contains("darkness index 1.00 > 0.60"));
        assert!(text.contains("saturation 0.00 < 0.35"));

        let rule = Rule::Jaundice(JaundiceThresholds::default());
        let text = rule.rationale(&stats(50.0, 0.8, 0.8, 0.9));
        assert!(text.contains("40-65°"));
    }
}
