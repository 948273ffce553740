use crate::membership::FreshnessState;
use crate::schema::FuzzyAssessment;

/// Derive handling advice from an assessment.
///
/// The list is keyed on the dominant state, with two conditional extras: a
/// ripening-watch line for fresh fruit that already shows ripening
/// membership above 0.2, and a smoothie/baking line for ripening bananas.
/// Callers display and persist these strings verbatim.
pub fn recommendations(assessment: &FuzzyAssessment, fruit_type: &str) -> Vec<String> {
    let scores = &assessment.membership_scores;
    let mut recs = Vec::new();

    match assessment.dominant_state {
        FreshnessState::Fresh => {
            recs.push("Perfect for eating fresh".to_string());
            recs.push("Store in cool, dry place".to_string());
            if scores.ripening > 0.2 {
                recs.push("Monitor for ripening in coming days".to_string());
            }
        }
        FreshnessState::Ripening => {
            recs.push("Will be perfect in 1-2 days".to_string());
            recs.push("Keep at room temperature to continue ripening".to_string());
            if fruit_type.to_lowercase().contains("banana") {
                recs.push("Great for smoothies or baking".to_string());
            }
        }
        FreshnessState::Overripe => {
            recs.push("Use soon for cooking or smoothies".to_string());
            recs.push("Not ideal for fresh consumption".to_string());
            recs.push("Check for any soft spots".to_string());
        }
        FreshnessState::Spoiled => {
            recs.push("Consider discarding".to_string());
            recs.push("Not recommended for consumption".to_string());
        }
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipScores;

    fn assessment(scores: MembershipScores) -> FuzzyAssessment {
        let dominant = scores.dominant();
        FuzzyAssessment {
            membership_scores: scores,
            dominant_state: dominant,
            fuzzy_confidence: scores.separation(),
            linguistic_description: crate::membership::linguistic_description(&scores, dominant),
        }
    }

    #[test]
    fn fresh_base_recommendations() {
        let a = assessment(MembershipScores::new(0.9, 0.05, 0.03, 0.02));
        assert_eq!(
            recommendations(&a, "apple"),
            vec!["Perfect for eating fresh", "Store in cool, dry place"]
        );
    }

    #[test]
    fn fresh_with_notable_ripening_adds_watch_line() {
        let a = assessment(MembershipScores::new(0.6, 0.3, 0.06, 0.04));
        assert_eq!(
            recommendations(&a, "apple"),
            vec![
                "Perfect for eating fresh",
                "Store in cool, dry place",
                "Monitor for ripening in coming days"
            ]
        );
    }

    #[test]
    fn ripening_banana_gets_smoothie_line_in_order() {
        let a = assessment(MembershipScores::new(0.2, 0.6, 0.15, 0.05));
        assert_eq!(
            recommendations(&a, "banana"),
            vec![
                "Will be perfect in 1-2 days",
                "Keep at room temperature to continue ripening",
                "Great for smoothies or baking"
            ]
        );
        // Capitalized fruit names behave the same.
        assert_eq!(recommendations(&a, "Banana").len(), 3);
        assert_eq!(recommendations(&a, "apple").len(), 2);
    }

    #[test]
    fn overripe_recommendations() {
        let a = assessment(MembershipScores::new(0.1, 0.2, 0.6, 0.1));
        assert_eq!(
            recommendations(&a, "orange"),
            vec![
                "Use soon for cooking or smoothies",
                "Not ideal for fresh consumption",
                "Check for any soft spots"
            ]
        );
    }

    #[test]
    fn spoiled_recommendations() {
        let a = assessment(MembershipScores::new(0.05, 0.1, 0.15, 0.7));
        assert_eq!(
            recommendations(&a, "banana"),
            vec!["Consider discarding", "Not recommended for consumption"]
        );
    }
}
