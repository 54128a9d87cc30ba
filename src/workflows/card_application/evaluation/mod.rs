mod config;
mod policy;

pub use config::EvaluationConfig;
pub use policy::{CreditCardApplicationDecision, DecisionRule};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{CreditCardApplication, ValidationMode};
use super::fraud::FraudLookup;
use super::validator::{FrequentFlyerValidator, EXPIRED_LICENSE_KEY};

/// Evaluator applying the ordered card rules; the first matching rule decides.
///
/// The only state carried between calls is the count of validator lookups performed.
pub struct CreditCardApplicationEvaluator {
    validator: Arc<dyn FrequentFlyerValidator>,
    fraud_lookup: Option<Arc<dyn FraudLookup>>,
    config: EvaluationConfig,
    lookup_count: AtomicU64,
}

impl CreditCardApplicationEvaluator {
    pub fn new(validator: Arc<dyn FrequentFlyerValidator>) -> Self {
        Self {
            validator,
            fraud_lookup: None,
            config: EvaluationConfig::default(),
            lookup_count: AtomicU64::new(0),
        }
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    /// Build from optional collaborators, rejecting a missing validator up front.
    pub fn try_new(
        validator: Option<Arc<dyn FrequentFlyerValidator>>,
        fraud_lookup: Option<Arc<dyn FraudLookup>>,
    ) -> Result<Self, EvaluatorError> {
        let mut builder = Self::builder();
        builder.validator = validator;
        builder.fraud_lookup = fraud_lookup;
        builder.build()
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Number of validator lookups performed over the evaluator's lifetime.
    pub fn validator_lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::Relaxed)
    }

    pub fn evaluate(&self, application: &CreditCardApplication) -> CreditCardApplicationDecision {
        self.assess(application).decision
    }

    /// Evaluate and report which rule produced the decision.
    pub fn assess(&self, application: &CreditCardApplication) -> EvaluationOutcome {
        let rule = self.matching_rule(application);
        debug!(
            gross_annual_income = application.gross_annual_income,
            age = application.age,
            rule = ?rule,
            "card application evaluated"
        );

        EvaluationOutcome {
            decision: rule.decision(),
            rule,
        }
    }

    fn matching_rule(&self, application: &CreditCardApplication) -> DecisionRule {
        if let Some(fraud_lookup) = &self.fraud_lookup {
            if fraud_lookup.is_fraud_risk(application) {
                return DecisionRule::FraudRisk;
            }
        }

        if application.gross_annual_income >= self.config.high_income_threshold {
            return DecisionRule::HighIncome;
        }

        if self.validator.license_key() == EXPIRED_LICENSE_KEY {
            return DecisionRule::LicenseExpired;
        }

        let mode = ValidationMode::for_age(application.age, self.config.detailed_lookup_min_age);
        self.validator.set_validation_mode(mode);
        debug!(mode = mode.label(), "frequent flyer validation mode set");

        let lookup = match self
            .validator
            .is_valid(application.frequent_flyer_number())
        {
            Ok(lookup) => lookup,
            Err(err) => {
                warn!(error = %err, "frequent flyer validation failed; referring application");
                return DecisionRule::ValidatorFailure;
            }
        };

        if lookup.lookup_performed {
            self.lookup_count.fetch_add(1, Ordering::Relaxed);
        }

        if !lookup.is_valid {
            return DecisionRule::InvalidFrequentFlyerNumber;
        }

        if application.age <= self.config.auto_referral_max_age {
            return DecisionRule::YoungApplicant;
        }

        if application.gross_annual_income < self.config.low_income_threshold {
            return DecisionRule::LowIncome;
        }

        DecisionRule::Fallback
    }
}

/// Builder collecting the evaluator's collaborators.
#[derive(Default)]
pub struct EvaluatorBuilder {
    validator: Option<Arc<dyn FrequentFlyerValidator>>,
    fraud_lookup: Option<Arc<dyn FraudLookup>>,
    config: Option<EvaluationConfig>,
}

impl EvaluatorBuilder {
    pub fn validator(mut self, validator: Arc<dyn FrequentFlyerValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn fraud_lookup(mut self, fraud_lookup: Arc<dyn FraudLookup>) -> Self {
        self.fraud_lookup = Some(fraud_lookup);
        self
    }

    pub fn config(mut self, config: EvaluationConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<CreditCardApplicationEvaluator, EvaluatorError> {
        let validator = self.validator.ok_or(EvaluatorError::MissingValidator)?;

        Ok(CreditCardApplicationEvaluator {
            validator,
            fraud_lookup: self.fraud_lookup,
            config: self.config.unwrap_or_default(),
            lookup_count: AtomicU64::new(0),
        })
    }
}

/// Decision together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub decision: CreditCardApplicationDecision,
    pub rule: DecisionRule,
}

/// Error raised while assembling an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluatorError {
    #[error("invalid argument: a frequent flyer validator is required")]
    MissingValidator,
}
