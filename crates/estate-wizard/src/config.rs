//! Wizard configuration

use crate::error::WizardError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_DAYS_PER_YEAR: f64 = 365.25;

/// Tunables for context derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Age below which a child counts as a minor
    pub age_of_majority: u32,
    /// Year length used when converting a date of birth into an age
    pub days_per_year: f64,
}

impl WizardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With age of majority (19 in several provinces)
    #[inline]
    #[must_use]
    pub fn with_age_of_majority(mut self, age: u32) -> Self {
        self.age_of_majority = age;
        self
    }

    /// With year length in days
    ///
    /// A non-positive or non-finite length is ignored and the current value kept.
    #[must_use]
    pub fn with_days_per_year(mut self, days: f64) -> Self {
        if is_valid_year_length(days) {
            self.days_per_year = days;
        } else {
            tracing::warn!(days, kept = self.days_per_year, "ignoring invalid days_per_year");
        }
        self
    }

    /// Year length used for age arithmetic
    ///
    /// Falls back to 365.25 when the field was set directly to an unusable value.
    #[must_use]
    pub fn year_length(&self) -> f64 {
        if is_valid_year_length(self.days_per_year) {
            self.days_per_year
        } else {
            DEFAULT_DAYS_PER_YEAR
        }
    }

    /// Decode from TOML text and validate
    pub fn from_toml_str(text: &str) -> Result<Self, WizardError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, decode and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WizardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| WizardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject values that would make age calculation meaningless
    pub fn validate(&self) -> Result<(), WizardError> {
        if !is_valid_year_length(self.days_per_year) {
            return Err(WizardError::InvalidConfig(format!(
                "days_per_year must be positive, got {}",
                self.days_per_year
            )));
        }
        Ok(())
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            age_of_majority: 18,
            days_per_year: DEFAULT_DAYS_PER_YEAR,
        }
    }
}

fn is_valid_year_length(days: f64) -> bool {
    days.is_finite() && days > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = WizardConfig::from_toml_str("age_of_majority = 19").unwrap();
        assert_eq!(config.age_of_majority, 19);
        assert!((config.days_per_year - 365.25).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_positive_year_length() {
        let err = WizardConfig::from_toml_str("days_per_year = 0.0").unwrap_err();
        assert!(matches!(err, WizardError::InvalidConfig(_)));
    }

    #[test]
    fn builder_keeps_current_year_length_on_invalid_input() {
        let config = WizardConfig::new()
            .with_days_per_year(360.0)
            .with_days_per_year(0.0)
            .with_days_per_year(f64::NAN)
            .with_days_per_year(-1.0);
        assert!((config.days_per_year - 360.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn year_length_falls_back_for_direct_field_writes() {
        let config = WizardConfig {
            days_per_year: 0.0,
            ..WizardConfig::default()
        };
        assert!((config.year_length() - 365.25).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = WizardConfig::from_toml_str("age_of_majority = \"eighteen\"").unwrap_err();
        assert!(matches!(err, WizardError::ConfigParse(_)));
    }
}
