//! Rule-based diagnosis module
//!
//! Maps [`crate::ColorStatistics`] to exactly one [`Diagnosis`] by walking
//! an ordered rule table, first match wins.

pub mod classifier;
pub mod result;
pub mod rules;

pub use classifier::{Classifier, RuleClassifier};
pub use result::{Confidence, Diagnosis, DiagnosisResult};
pub use rules::Rule;
