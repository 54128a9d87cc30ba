//! Credit card application decisioning.
//!
//! An evaluator walks a fixed, ordered rule list against an in-memory application. It
//! consults two injected collaborators: a frequent flyer validator (required) and an
//! optional fraud screening strategy. Validator failures are absorbed into a manual
//! referral and never reach the caller.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{CreditCardApplication, ValidationMode};
pub use evaluation::{
    CreditCardApplicationDecision, CreditCardApplicationEvaluator, DecisionRule, EvaluationConfig,
    EvaluationOutcome, EvaluatorBuilder, EvaluatorError,
};
pub use fraud::FraudLookup;
pub use validator::{
    FrequentFlyerLookup, FrequentFlyerValidator, ValidatorError, EXPIRED_LICENSE_KEY,
};
