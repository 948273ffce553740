use crate::membership::{FreshnessState, MembershipScores};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The engine's verdict for a single detection.
///
/// `membership_scores` is normalized (sums to 1.0), `dominant_state` the
/// largest degree, `fuzzy_confidence` the normalized gap between the top two
/// degrees (a certainty proxy distinct from the detector's own confidence),
/// and `linguistic_description` the rendered hedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FuzzyAssessment {
    pub membership_scores: MembershipScores,
    pub dominant_state: FreshnessState,
    pub fuzzy_confidence: f64,
    pub linguistic_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_json() {
        let assessment = FuzzyAssessment {
            membership_scores: MembershipScores::new(1.0, 0.0, 0.0, 0.0),
            dominant_state: FreshnessState::Fresh,
            fuzzy_confidence: 1.0,
            linguistic_description: "Definitely fresh".to_string(),
        };

        let json = serde_json::to_string(&assessment).unwrap();
        let back: FuzzyAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(assessment, back);
    }

    #[test]
    fn json_schema_generates() {
        let schema = schemars::schema_for!(FuzzyAssessment);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("FuzzyAssessment"));
        assert!(json.contains("membership_scores"));
    }
}
