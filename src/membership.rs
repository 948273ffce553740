use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The four freshness categories a detection can belong to.
///
/// The declaration order is significant: dominant-state selection and
/// ranking break exact ties in favor of the earlier state, so `ALL` is the
/// canonical iteration order everywhere scores are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessState {
    Fresh,
    Ripening,
    Overripe,
    Spoiled,
}

impl FreshnessState {
    pub const ALL: [FreshnessState; 4] = [
        FreshnessState::Fresh,
        FreshnessState::Ripening,
        FreshnessState::Overripe,
        FreshnessState::Spoiled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessState::Fresh => "fresh",
            FreshnessState::Ripening => "ripening",
            FreshnessState::Overripe => "overripe",
            FreshnessState::Spoiled => "spoiled",
        }
    }
}

impl fmt::Display for FreshnessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership degrees for each freshness category.
///
/// Degrees are partial and non-exclusive; after normalization they sum to
/// 1.0 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct MembershipScores {
    pub fresh: f64,
    pub ripening: f64,
    pub overripe: f64,
    pub spoiled: f64,
}

impl MembershipScores {
    pub fn new(fresh: f64, ripening: f64, overripe: f64, spoiled: f64) -> Self {
        Self {
            fresh,
            ripening,
            overripe,
            spoiled,
        }
    }

    /// The degenerate fallback distribution: 0.25 for every state.
    pub fn uniform() -> Self {
        Self::new(0.25, 0.25, 0.25, 0.25)
    }

    pub fn get(&self, state: FreshnessState) -> f64 {
        match state {
            FreshnessState::Fresh => self.fresh,
            FreshnessState::Ripening => self.ripening,
            FreshnessState::Overripe => self.overripe,
            FreshnessState::Spoiled => self.spoiled,
        }
    }

    pub fn get_mut(&mut self, state: FreshnessState) -> &mut f64 {
        match state {
            FreshnessState::Fresh => &mut self.fresh,
            FreshnessState::Ripening => &mut self.ripening,
            FreshnessState::Overripe => &mut self.overripe,
            FreshnessState::Spoiled => &mut self.spoiled,
        }
    }

    pub fn total(&self) -> f64 {
        self.fresh + self.ripening + self.overripe + self.spoiled
    }

    /// Scale every degree so the distribution sums to 1.0.
    ///
    /// Returns `None` when the total is not strictly positive; the caller
    /// decides the fallback policy instead of letting a division by zero
    /// propagate NaN through the result.
    pub fn normalized(&self) -> Option<Self> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }
        Some(Self::new(
            self.fresh / total,
            self.ripening / total,
            self.overripe / total,
            self.spoiled / total,
        ))
    }

    /// The state with the strictly largest degree; exact ties resolve to
    /// the earlier state in `FreshnessState::ALL`.
    pub fn dominant(&self) -> FreshnessState {
        let mut best = FreshnessState::ALL[0];
        for state in FreshnessState::ALL {
            if self.get(state) > self.get(best) {
                best = state;
            }
        }
        best
    }

    /// All four `(state, degree)` pairs sorted descending by degree.
    ///
    /// The sort is stable, so equal degrees keep `ALL` order.
    pub fn ranked(&self) -> [(FreshnessState, f64); 4] {
        let mut pairs = FreshnessState::ALL.map(|state| (state, self.get(state)));
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        pairs
    }

    /// Separation of the top two degrees: `(max - second) / max`.
    ///
    /// 1.0 means the runner-up has zero membership; near 0 means the top
    /// two states are nearly tied. NaN only when `max == 0`, which a
    /// normalized distribution cannot produce.
    pub fn separation(&self) -> f64 {
        let ranked = self.ranked();
        (ranked[0].1 - ranked[1].1) / ranked[0].1
    }
}

/// Render a natural-language hedge for how peaked the distribution is.
pub fn linguistic_description(scores: &MembershipScores, dominant: FreshnessState) -> String {
    let ranked = scores.ranked();
    let max = ranked[0].1;

    if max > 0.8 {
        format!("Definitely {}", dominant)
    } else if max > 0.6 {
        format!("Mostly {}", dominant)
    } else if max > 0.4 {
        format!("Somewhat {}", dominant)
    } else {
        format!("Between {} and {}", ranked[0].0, ranked[1].0)
    }
}
