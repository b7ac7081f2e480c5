//! Rule-based NLU for the complaint intake engine
//!
//! Deterministic and reproducible: keyword/regex matching only, no ML. The
//! three concerns are independent and composable:
//! - intent classification over a fixed priority list
//! - entity extraction with fixed patterns
//! - platform detection via keyword lookup
//!
//! [`NluAnalyzer::analyze`] runs all three and derives the fraud branch.

pub mod classifier;
pub mod entities;
pub mod platform;

pub use classifier::{IntentClassifier, INTENT_PRIORITY};
pub use entities::EntityExtractor;
pub use platform::detect_platform;

use serde::{Deserialize, Serialize};

use cybersathi_core::{ExtractedEntities, FraudBranch, Intent, Platform};

/// Complete NLU result for one inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NluAnalysis {
    pub intent: Intent,
    pub platform: Platform,
    pub branch: FraudBranch,
    pub entities: ExtractedEntities,
}

/// Combines the classifier and extractor; built once, shared per process.
pub struct NluAnalyzer {
    classifier: IntentClassifier,
    extractor: EntityExtractor,
}

impl NluAnalyzer {
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
            extractor: EntityExtractor::new(),
        }
    }

    /// Run the full analysis: intent, platform, branch and entities.
    pub fn analyze(&self, text: &str) -> NluAnalysis {
        let intent = self.classifier.detect(text);
        let platform = detect_platform(text);
        let branch = FraudBranch::from_intent(intent);
        let entities = self.extractor.extract(text);
        NluAnalysis {
            intent,
            platform,
            branch,
            entities,
        }
    }
}

impl Default for NluAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn financial_fraud_analysis() {
        let analysis =
            NluAnalyzer::new().analyze("My money ₹10000 was deducted via UPI. UTR: 123456789012");
        assert_eq!(analysis.intent, Intent::FinancialFraud);
        assert_eq!(analysis.branch, FraudBranch::Financial);
        assert_eq!(analysis.entities.utr_number.as_deref(), Some("123456789012"));
        assert!(analysis.entities.amount.is_some());
    }

    #[test]
    fn social_media_fraud_analysis() {
        let analysis = NluAnalyzer::new().analyze("My facebook account was hacked yesterday");
        assert_eq!(analysis.intent, Intent::FacebookFraud);
        assert_eq!(analysis.platform, Platform::Facebook);
        assert_eq!(analysis.branch, FraudBranch::SocialMedia);
    }

    #[test]
    fn status_check_analysis() {
        let analysis = NluAnalyzer::new().analyze("Check status for CS-20241114-123456");
        assert_eq!(analysis.intent, Intent::CheckStatus);
        assert_eq!(
            analysis.entities.ticket_id.as_deref(),
            Some("CS-20241114-123456")
        );
    }
}
