use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::workflows::card_application::domain::{CreditCardApplication, ValidationMode};
use crate::workflows::card_application::fraud::FraudLookup;
use crate::workflows::card_application::validator::{
    FrequentFlyerLookup, FrequentFlyerValidator, ValidatorError,
};
use crate::workflows::card_application::CreditCardApplicationEvaluator;

type Responder = Box<dyn Fn(&str) -> Result<FrequentFlyerLookup, ValidatorError> + Send + Sync>;

/// Validator double answering from a script and recording every interaction.
pub(super) struct ScriptedValidator {
    responder: Responder,
    state: Mutex<ValidatorState>,
}

#[derive(Default)]
struct ValidatorState {
    license_key: String,
    scripted: VecDeque<Result<FrequentFlyerLookup, ValidatorError>>,
    mode: Option<ValidationMode>,
    mode_writes: usize,
    checked_numbers: Vec<String>,
    license_reads: usize,
}

impl ScriptedValidator {
    /// Live license, every number valid, every check a real lookup.
    pub(super) fn accepting() -> Self {
        Self::responding(|_| Ok(FrequentFlyerLookup::performed(true)))
    }

    pub(super) fn responding<F>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<FrequentFlyerLookup, ValidatorError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            state: Mutex::new(ValidatorState {
                license_key: "OK".to_string(),
                ..ValidatorState::default()
            }),
        }
    }

    pub(super) fn failing(error: ValidatorError) -> Self {
        Self::responding(move |_| Err(error.clone()))
    }

    pub(super) fn with_license_key(self, key: &str) -> Self {
        self.lock().license_key = key.to_string();
        self
    }

    /// Queue answers consumed before the responder is consulted.
    pub(super) fn with_sequence(
        self,
        answers: impl IntoIterator<Item = Result<FrequentFlyerLookup, ValidatorError>>,
    ) -> Self {
        self.lock().scripted.extend(answers);
        self
    }

    pub(super) fn mode(&self) -> Option<ValidationMode> {
        self.lock().mode
    }

    pub(super) fn mode_writes(&self) -> usize {
        self.lock().mode_writes
    }

    pub(super) fn checked_numbers(&self) -> Vec<String> {
        self.lock().checked_numbers.clone()
    }

    pub(super) fn license_reads(&self) -> usize {
        self.lock().license_reads
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ValidatorState> {
        self.state.lock().expect("validator mutex poisoned")
    }
}

impl FrequentFlyerValidator for ScriptedValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<FrequentFlyerLookup, ValidatorError> {
        let scripted = {
            let mut state = self.lock();
            state.checked_numbers.push(frequent_flyer_number.to_string());
            state.scripted.pop_front()
        };
        scripted.unwrap_or_else(|| (self.responder)(frequent_flyer_number))
    }

    fn license_key(&self) -> String {
        let mut state = self.lock();
        state.license_reads += 1;
        state.license_key.clone()
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        let mut state = self.lock();
        state.mode = Some(mode);
        state.mode_writes += 1;
    }
}

/// Fraud strategy returning a fixed verdict and counting consultations.
pub(super) struct RecordingFraudLookup {
    risky: bool,
    calls: AtomicUsize,
}

impl RecordingFraudLookup {
    pub(super) fn new(risky: bool) -> Self {
        Self {
            risky,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FraudLookup for RecordingFraudLookup {
    fn is_fraud_risk(&self, _application: &CreditCardApplication) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.risky
    }
}

pub(super) fn evaluator_with(validator: &Arc<ScriptedValidator>) -> CreditCardApplicationEvaluator {
    CreditCardApplicationEvaluator::new(validator.clone())
}

pub(super) fn application(
    gross_annual_income: u64,
    age: u32,
    frequent_flyer_number: Option<&str>,
) -> CreditCardApplication {
    CreditCardApplication {
        gross_annual_income,
        age,
        frequent_flyer_number: frequent_flyer_number.map(str::to_string),
    }
}
