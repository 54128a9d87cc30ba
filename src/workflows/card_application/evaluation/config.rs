use serde::{Deserialize, Serialize};

/// Thresholds applied by the card decision rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub high_income_threshold: u64,
    pub low_income_threshold: u64,
    pub auto_referral_max_age: u32,
    pub detailed_lookup_min_age: u32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            high_income_threshold: 100_000,
            low_income_threshold: 20_000,
            auto_referral_max_age: 20,
            detailed_lookup_min_age: 30,
        }
    }
}
