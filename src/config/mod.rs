use std::env;
use std::fmt;

use crate::workflows::card_application::EvaluationConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub evaluation: EvaluationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            high_income_threshold: env_number(
                "CARD_HIGH_INCOME_THRESHOLD",
                defaults.high_income_threshold,
            )?,
            low_income_threshold: env_number(
                "CARD_LOW_INCOME_THRESHOLD",
                defaults.low_income_threshold,
            )?,
            auto_referral_max_age: env_number(
                "CARD_AUTO_REFERRAL_MAX_AGE",
                defaults.auto_referral_max_age,
            )?,
            detailed_lookup_min_age: env_number(
                "CARD_DETAILED_LOOKUP_MIN_AGE",
                defaults.detailed_lookup_min_age,
            )?,
        };

        if evaluation.low_income_threshold > evaluation.high_income_threshold {
            return Err(ConfigError::InconsistentIncomeThresholds {
                low: evaluation.low_income_threshold,
                high: evaluation.high_income_threshold,
            });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            evaluation,
        })
    }
}

fn env_number<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { var: &'static str, value: String },
    InconsistentIncomeThresholds { low: u64, high: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{var} must be a non-negative integer (got '{value}')")
            }
            ConfigError::InconsistentIncomeThresholds { low, high } => write!(
                f,
                "CARD_LOW_INCOME_THRESHOLD ({low}) must not exceed CARD_HIGH_INCOME_THRESHOLD ({high})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
