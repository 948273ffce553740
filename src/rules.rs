use crate::membership::{FreshnessState, MembershipScores};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declarative mapping from classifier label text to a base membership
/// distribution.
///
/// Rules are evaluated in table order and the first match wins, so branch
/// priority is explicit rather than buried in fall-through conditionals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LabelRule {
    /// Identifier for this rule (e.g. "fresh", "rotten").
    pub id: String,
    /// Substring patterns; the rule matches when the label contains any of
    /// them. Case-sensitive, matching classifier label conventions like
    /// `apple_fresh` / `banana_rotten`.
    pub patterns: Vec<String>,
    /// The state that receives the detector confidence directly.
    pub primary: FreshnessState,
    /// Per-state factors applied to `max(0, 1 - confidence)` for the
    /// non-primary states. The factors need not sum to 1 with the primary
    /// term; normalization downstream corrects this.
    pub remainder: MembershipScores,
}

impl LabelRule {
    pub fn matches(&self, label: &str) -> bool {
        self.patterns.iter().any(|p| label.contains(p.as_str()))
    }

    /// Build the pre-normalization distribution for a matched label.
    pub fn weigh(&self, confidence: f64) -> MembershipScores {
        let remainder = (1.0 - confidence).max(0.0);
        let mut scores = MembershipScores::new(
            self.remainder.fresh * remainder,
            self.remainder.ripening * remainder,
            self.remainder.overripe * remainder,
            self.remainder.spoiled * remainder,
        );
        *scores.get_mut(self.primary) = confidence;
        scores
    }
}

/// A single multiplicative adjustment to one state's degree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
pub struct StateFactor {
    pub state: FreshnessState,
    pub factor: f64,
}

/// Fruit-specific multiplicative adjustment, matched case-insensitively
/// against the detected object name. First match wins, which keeps the
/// banana/apple/citrus adjustments mutually exclusive.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FruitRule {
    pub id: String,
    /// Case-insensitive substring patterns.
    pub patterns: Vec<String>,
    pub multipliers: Vec<StateFactor>,
}

impl FruitRule {
    pub fn matches(&self, fruit_type: &str) -> bool {
        let fruit = fruit_type.to_lowercase();
        self.patterns
            .iter()
            .any(|p| fruit.contains(&p.to_lowercase()))
    }

    pub fn apply(&self, mut scores: MembershipScores) -> MembershipScores {
        for adjustment in &self.multipliers {
            *scores.get_mut(adjustment.state) *= adjustment.factor;
        }
        scores
    }
}

/// Fixed prior for labels no rule recognizes. The detector confidence is
/// ignored entirely in this case.
pub fn unmatched_prior() -> MembershipScores {
    MembershipScores::new(0.3, 0.4, 0.2, 0.1)
}

/// Label rules in priority order.
pub fn default_label_rules() -> Vec<LabelRule> {
    vec![
        LabelRule {
            id: "fresh".to_string(),
            patterns: vec!["fresh".to_string()],
            primary: FreshnessState::Fresh,
            remainder: MembershipScores::new(0.0, 0.7, 0.2, 0.1),
        },
        LabelRule {
            id: "rotten".to_string(),
            patterns: vec!["rotten".to_string(), "spoiled".to_string()],
            primary: FreshnessState::Spoiled,
            remainder: MembershipScores::new(0.1, 0.3, 0.6, 0.0),
        },
    ]
}

/// Fruit adjustment rules in priority order.
pub fn default_fruit_rules() -> Vec<FruitRule> {
    vec![
        FruitRule {
            id: "banana".to_string(),
            patterns: vec!["banana".to_string()],
            multipliers: vec![
                StateFactor {
                    state: FreshnessState::Ripening,
                    factor: 1.2,
                },
                StateFactor {
                    state: FreshnessState::Overripe,
                    factor: 1.1,
                },
            ],
        },
        FruitRule {
            id: "apple".to_string(),
            patterns: vec!["apple".to_string()],
            multipliers: vec![
                StateFactor {
                    state: FreshnessState::Fresh,
                    factor: 1.1,
                },
                StateFactor {
                    state: FreshnessState::Spoiled,
                    factor: 0.9,
                },
            ],
        },
        FruitRule {
            id: "citrus".to_string(),
            patterns: vec!["orange".to_string(), "citrus".to_string()],
            multipliers: vec![StateFactor {
                state: FreshnessState::Overripe,
                factor: 1.1,
            }],
        },
    ]
}
