use super::domain::CreditCardApplication;

/// Pluggable fraud screening strategy consulted before any other rule.
pub trait FraudLookup: Send + Sync {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool;
}

impl<F> FraudLookup for F
where
    F: Fn(&CreditCardApplication) -> bool + Send + Sync,
{
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool {
        self(application)
    }
}
