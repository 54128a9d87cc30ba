use serde::{Deserialize, Serialize};

/// Applicant supplied snapshot evaluated by the card decision engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    pub gross_annual_income: u64,
    pub age: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_flyer_number: Option<String>,
}

impl CreditCardApplication {
    /// Frequent flyer number as handed to the validator; absent numbers become empty.
    pub fn frequent_flyer_number(&self) -> &str {
        self.frequent_flyer_number.as_deref().unwrap_or_default()
    }
}

/// Depth of the lookup the frequent flyer validator should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    Quick,
    Detailed,
}

impl ValidationMode {
    pub fn for_age(age: u32, detailed_min_age: u32) -> Self {
        if age >= detailed_min_age {
            Self::Detailed
        } else {
            Self::Quick
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValidationMode::Quick => "quick",
            ValidationMode::Detailed => "detailed",
        }
    }
}
