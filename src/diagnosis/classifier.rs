//! Classifier seam and the rule-based implementation

use crate::color::ColorStatistics;
use crate::config::ThresholdConfig;
use crate::diagnosis::rules::Rule;
use crate::diagnosis::{Diagnosis, DiagnosisResult};
use crate::error::Result;

/// Anything that turns color statistics into exactly one diagnosis.
///
/// The rule table is one implementation; a learned model would be another,
/// and callers only depend on this trait.
pub trait Classifier: Send + Sync {
    /// Short identifier for reports
    fn name(&self) -> &str;

    /// Classify one set of statistics. Must be deterministic.
    fn classify(&self, stats: &ColorStatistics) -> DiagnosisResult;
}

/// First-match-wins evaluation of the ordered rule table
#[derive(Debug, Clone)]
pub struct RuleClassifier {
    rules: Vec<Rule>,
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default())
    }
}

impl RuleClassifier {
    /// Build a classifier from thresholds without validating them
    pub fn new(config: &ThresholdConfig) -> Self {
        Self {
            rules: Rule::table(config),
        }
    }

    /// Build a classifier after validating the thresholds
    pub fn try_new(config: &ThresholdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The rule table in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every label whose rule holds, in priority order.
    ///
    /// The first entry is always the label [`Classifier::classify`] returns;
    /// the rest are the overlaps it shadowed.
    pub fn matching_rules(&self, stats: &ColorStatistics) -> Vec<Diagnosis> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(stats))
            .map(Rule::label)
            .collect()
    }
}

impl Classifier for RuleClassifier {
    fn name(&self) -> &str {
        "rule-table"
    }

    fn classify(&self, stats: &ColorStatistics) -> DiagnosisResult {
        self.rules
            .iter()
            .find(|rule| rule.matches(stats))
            .map(|rule| DiagnosisResult::new(rule.label(), rule.rationale(stats)))
            // The table ends in an unconditional rule; this only guards a
            // hand-built empty table.
            .unwrap_or_else(|| DiagnosisResult::new(Diagnosis::Inconclusive, "no rules configured"))
    }
}
