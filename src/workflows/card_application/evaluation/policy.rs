use serde::{Deserialize, Serialize};

/// Adjudication outcome for a card application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditCardApplicationDecision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl CreditCardApplicationDecision {
    pub fn summary(&self) -> &'static str {
        match self {
            CreditCardApplicationDecision::AutoAccepted => "application auto-accepted",
            CreditCardApplicationDecision::AutoDeclined => "application auto-declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred for manual review",
            CreditCardApplicationDecision::ReferredToHumanFraudRisk => {
                "referred for manual review: fraud risk"
            }
        }
    }

    pub fn is_referral(&self) -> bool {
        matches!(
            self,
            CreditCardApplicationDecision::ReferredToHuman
                | CreditCardApplicationDecision::ReferredToHumanFraudRisk
        )
    }
}

/// Rule that produced a decision, kept so referrals can be explained to reviewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    FraudRisk,
    HighIncome,
    LicenseExpired,
    ValidatorFailure,
    InvalidFrequentFlyerNumber,
    YoungApplicant,
    LowIncome,
    Fallback,
}

impl DecisionRule {
    pub fn decision(&self) -> CreditCardApplicationDecision {
        match self {
            DecisionRule::FraudRisk => CreditCardApplicationDecision::ReferredToHumanFraudRisk,
            DecisionRule::HighIncome => CreditCardApplicationDecision::AutoAccepted,
            DecisionRule::LowIncome => CreditCardApplicationDecision::AutoDeclined,
            DecisionRule::LicenseExpired
            | DecisionRule::ValidatorFailure
            | DecisionRule::InvalidFrequentFlyerNumber
            | DecisionRule::YoungApplicant
            | DecisionRule::Fallback => CreditCardApplicationDecision::ReferredToHuman,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            DecisionRule::FraudRisk => "fraud lookup flagged the application",
            DecisionRule::HighIncome => "gross income meets the auto-accept threshold",
            DecisionRule::LicenseExpired => "frequent flyer validator license has expired",
            DecisionRule::ValidatorFailure => "frequent flyer validator failed",
            DecisionRule::InvalidFrequentFlyerNumber => "frequent flyer number is invalid",
            DecisionRule::YoungApplicant => "applicant is at or below the referral age",
            DecisionRule::LowIncome => "gross income is below the decline threshold",
            DecisionRule::Fallback => "no automatic rule matched",
        }
    }
}
