use freshsense::engine::FuzzyEngine;
use freshsense::membership::FreshnessState;
use freshsense::recommend::recommendations;

const TOLERANCE: f64 = 1e-9;

#[test]
fn confident_fresh_apple() {
    let engine = FuzzyEngine::new();
    let assessment = engine.assess(0.9, "fresh_apple", "Apple");

    // Fresh branch plus the apple adjustment keeps fresh dominant.
    assert_eq!(assessment.dominant_state, FreshnessState::Fresh);
    assert!(
        assessment.linguistic_description.starts_with("Definitely")
            || assessment.linguistic_description.starts_with("Mostly")
    );
    assert!((assessment.membership_scores.total() - 1.0).abs() < TOLERANCE);
}

#[test]
fn rotten_banana_is_spoiled() {
    let engine = FuzzyEngine::new();
    let assessment = engine.assess(0.85, "rotten_banana", "Banana");

    assert_eq!(assessment.dominant_state, FreshnessState::Spoiled);
    // The banana adjustment boosts ripening/overripe but cannot displace
    // a 0.85 spoiled weight.
    assert!(assessment.membership_scores.spoiled > 0.8);
}

#[test]
fn unknown_label_uses_prior() {
    let engine = FuzzyEngine::new();
    let assessment = engine.assess(0.5, "unknown", "Mystery");

    assert_eq!(assessment.dominant_state, FreshnessState::Ripening);
    // Peak is exactly 0.4, so the strict comparison picks the Between
    // wording over "Somewhat ripening".
    assert_eq!(assessment.linguistic_description, "Between ripening and fresh");
    assert!((assessment.membership_scores.ripening - 0.4).abs() < TOLERANCE);
    assert!((assessment.fuzzy_confidence - 0.25).abs() < TOLERANCE);
}

#[test]
fn fully_confident_fresh_orange() {
    let engine = FuzzyEngine::new();
    let assessment = engine.assess(1.0, "fresh", "Orange");

    // The citrus adjustment multiplies an overripe degree that is already
    // zero, so the distribution stays fully peaked.
    assert_eq!(assessment.membership_scores.fresh, 1.0);
    assert_eq!(assessment.membership_scores.overripe, 0.0);
    assert_eq!(assessment.fuzzy_confidence, 1.0);
    assert_eq!(assessment.linguistic_description, "Definitely fresh");
}

#[test]
fn ripening_banana_recommendations_in_order() {
    let engine = FuzzyEngine::new();
    // The unmatched prior plus the banana boost makes ripening dominant.
    let assessment = engine.assess(0.5, "unknown", "banana");
    assert_eq!(assessment.dominant_state, FreshnessState::Ripening);

    let recs = recommendations(&assessment, "banana");
    assert_eq!(
        recs,
        vec![
            "Will be perfect in 1-2 days",
            "Keep at room temperature to continue ripening",
            "Great for smoothies or baking",
        ]
    );
}

#[test]
fn normalization_invariant_over_input_grid() {
    let engine = FuzzyEngine::new();
    let labels = ["fresh_apple", "banana_rotten", "spoiled_orange", "unknown"];
    let fruits = ["apple", "Banana", "orange", "citrus hybrid", "durian"];

    for step in 0..=10 {
        let confidence = step as f64 / 10.0;
        for label in labels {
            for fruit in fruits {
                let assessment = engine.assess(confidence, label, fruit);
                let total = assessment.membership_scores.total();
                assert!(
                    (total - 1.0).abs() < TOLERANCE,
                    "{label}/{fruit}@{confidence}: total = {total}"
                );
                for state in FreshnessState::ALL {
                    let degree = assessment.membership_scores.get(state);
                    assert!((0.0..=1.0).contains(&degree));
                }
                assert!((0.0..=1.0).contains(&assessment.fuzzy_confidence));
            }
        }
    }
}

#[test]
fn identical_inputs_produce_identical_outputs() {
    let engine = FuzzyEngine::new();
    let a = engine.assess(0.675, "fresh_banana", "Banana");
    let b = engine.assess(0.675, "fresh_banana", "Banana");

    assert_eq!(a, b);
    assert_eq!(
        a.membership_scores.ripening.to_bits(),
        b.membership_scores.ripening.to_bits()
    );
}

#[test]
fn tie_break_prefers_earlier_state() {
    // With no label match and no fruit adjustment, equal degrees must
    // resolve fresh > ripening > overripe > spoiled.
    use freshsense::membership::MembershipScores;

    let tied = MembershipScores::uniform();
    assert_eq!(tied.dominant(), FreshnessState::Fresh);

    let pair = MembershipScores::new(0.1, 0.1, 0.4, 0.4);
    assert_eq!(pair.dominant(), FreshnessState::Overripe);
}
