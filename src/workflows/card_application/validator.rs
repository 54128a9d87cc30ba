use serde::{Deserialize, Serialize};

use super::domain::ValidationMode;

/// License key reported by a validator whose vendor license has lapsed.
pub const EXPIRED_LICENSE_KEY: &str = "EXPIRED";

/// Outbound frequent flyer validation service (vendor SDK or remote adapter).
///
/// Implementors own their validation mode, so the setter takes `&self` and relies on
/// interior mutability; the evaluator shares the validator behind an `Arc`.
pub trait FrequentFlyerValidator: Send + Sync {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<FrequentFlyerLookup, ValidatorError>;
    fn license_key(&self) -> String;
    fn set_validation_mode(&self, mode: ValidationMode);
}

/// Result of a validity check, carrying whether a real lookup was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentFlyerLookup {
    pub is_valid: bool,
    pub lookup_performed: bool,
}

impl FrequentFlyerLookup {
    /// Answer produced by a lookup against the validator's backing store.
    pub fn performed(is_valid: bool) -> Self {
        Self {
            is_valid,
            lookup_performed: true,
        }
    }

    /// Answer produced without a lookup (cached or short-circuited by the validator).
    pub fn skipped(is_valid: bool) -> Self {
        Self {
            is_valid,
            lookup_performed: false,
        }
    }
}

/// Validator failure. Never surfaced by the evaluator; converted into a human referral.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("frequent flyer validator unavailable: {0}")]
    Unavailable(String),
    #[error("frequent flyer lookup failed: {0}")]
    Lookup(String),
}
