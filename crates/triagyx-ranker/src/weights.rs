//! Weight vector for the composite drug score.
//! See ARCHITECTURE.md §4.3.

use serde::{Deserialize, Serialize};

/// The three outer weights of `drug_score`. Weights sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureWeights {
    /// Weight of the efficacy index
    pub efficacy: f64,
    /// Weight of the safety index
    pub safety: f64,
    /// Weight of the complexity-balance term
    pub complexity_balance: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            efficacy: 0.45,
            safety: 0.35,
            complexity_balance: 0.20,
        }
    }
}

impl FeatureWeights {
    /// Validate that all weights sum to ~1.0
    pub fn validate(&self) -> bool {
        let sum = self.efficacy + self.safety + self.complexity_balance;
        (sum - 1.0).abs() < 1e-6
    }

    /// Renormalise weights so they sum to 1.0
    pub fn normalise(&mut self) {
        let sum = self.efficacy + self.safety + self.complexity_balance;
        if sum > 0.0 {
            self.efficacy /= sum;
            self.safety /= sum;
            self.complexity_balance /= sum;
        }
    }
}
