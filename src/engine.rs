use crate::membership::{MembershipScores, linguistic_description};
use crate::rules::{
    FruitRule, LabelRule, default_fruit_rules, default_label_rules, unmatched_prior,
};
use crate::schema::{Detection, FuzzyAssessment};

/// The fuzzy membership engine.
///
/// Holds the ordered rule tables and turns a single detection into a
/// normalized membership distribution plus derived summary fields. Pure and
/// stateless: assessment depends only on the three scalar inputs, so one
/// engine can serve any number of concurrent callers.
pub struct FuzzyEngine {
    label_rules: Vec<LabelRule>,
    fruit_rules: Vec<FruitRule>,
}

impl FuzzyEngine {
    pub fn new() -> Self {
        Self {
            label_rules: default_label_rules(),
            fruit_rules: default_fruit_rules(),
        }
    }

    /// Build an engine with custom rule tables. Table order is priority
    /// order; the first matching rule wins.
    pub fn with_rules(label_rules: Vec<LabelRule>, fruit_rules: Vec<FruitRule>) -> Self {
        Self {
            label_rules,
            fruit_rules,
        }
    }

    pub fn label_rules(&self) -> &[LabelRule] {
        &self.label_rules
    }

    pub fn fruit_rules(&self) -> &[FruitRule] {
        &self.fruit_rules
    }

    /// Assess one detection. Never fails and never returns non-finite
    /// values: a zero weighted total (impossible with the default tables,
    /// reachable with all-zero custom factors) falls back to the uniform
    /// distribution with zero fuzzy confidence.
    pub fn assess(&self, confidence: f64, label: &str, fruit_type: &str) -> FuzzyAssessment {
        let base = match self.label_rules.iter().find(|rule| rule.matches(label)) {
            Some(rule) => rule.weigh(confidence),
            None => unmatched_prior(),
        };

        let adjusted = match self
            .fruit_rules
            .iter()
            .find(|rule| rule.matches(fruit_type))
        {
            Some(rule) => rule.apply(base),
            None => base,
        };

        let (scores, fuzzy_confidence) = match adjusted.normalized() {
            Some(normalized) => (normalized, normalized.separation()),
            None => (MembershipScores::uniform(), 0.0),
        };

        let dominant_state = scores.dominant();
        let description = linguistic_description(&scores, dominant_state);

        FuzzyAssessment {
            membership_scores: scores,
            dominant_state,
            fuzzy_confidence,
            linguistic_description: description,
        }
    }

    pub fn assess_detection(&self, detection: &Detection) -> FuzzyAssessment {
        self.assess(
            detection.confidence,
            &detection.label,
            &detection.detected_object,
        )
    }
}

impl Default for FuzzyEngine {
    fn default() -> Self {
        Self::new()
    }
}
