use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::utils::text::count_to_f64;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid coefficient for {field}: {value} is outside 0.0..=1.0")]
    InvalidCoefficient { field: &'static str, value: f64 },

    #[error("Invalid quantity '{0}': expected a count like 3 or a percentage like 50%")]
    InvalidQuantity(String),
}

/// Target case for the output characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseNormalization {
    /// First letter of every word uppercase, the rest lowercase
    Capitalized,
    Uppercase,
    Lowercase,
}

/// How letter case takes part in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterCasePolicy {
    /// Characters keep their case; mismatches are recorded per correct character
    #[default]
    CompareAsIs,
    /// Output characters are rewritten to the given case after classification
    NormalizeTo(CaseNormalization),
}

/// A threshold expressed either as an absolute count or as a fraction of a length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Count(usize),
    /// Fraction of the relevant length, `0.0..=1.0`
    Coefficient(f64),
}

impl Quantity {
    /// Percentage helper: `Quantity::percent(50.0)` is a coefficient of 0.5
    #[must_use]
    pub fn percent(percent: f64) -> Self {
        Self::Coefficient(percent / 100.0)
    }

    /// Does `actual` reach this quantity as a lower bound relative to `length`?
    #[must_use]
    pub fn is_reached_by(&self, actual: usize, length: usize) -> bool {
        match *self {
            Self::Count(required) => actual >= required,
            Self::Coefficient(c) => count_to_f64(actual) >= c * count_to_f64(length),
        }
    }

    /// Is `actual` above this quantity as an upper bound relative to `length`?
    #[must_use]
    pub fn is_exceeded_by(&self, actual: usize, length: usize) -> bool {
        match *self {
            Self::Count(allowed) => actual > allowed,
            Self::Coefficient(c) => count_to_f64(actual) > c * count_to_f64(length),
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        match *self {
            Self::Count(_) => Ok(()),
            Self::Coefficient(value) if (0.0..=1.0).contains(&value) => Ok(()),
            Self::Coefficient(value) => Err(ConfigError::InvalidCoefficient { field, value }),
        }
    }
}

impl FromStr for Quantity {
    type Err = ConfigError;

    /// Parses `"3"` as a count and `"50%"` as a coefficient of 0.5
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(percent) = trimmed.strip_suffix('%') {
            let value: f64 = percent
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidQuantity(s.to_string()))?;
            let quantity = Self::percent(value);
            quantity.validate("quantity")?;
            Ok(quantity)
        } else {
            trimmed
                .parse()
                .map(Self::Count)
                .map_err(|_| ConfigError::InvalidQuantity(s.to_string()))
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Coefficient(c) => write!(f, "{}%", c * 100.0),
        }
    }
}

/// Tunable inputs for a comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub letter_case: LetterCasePolicy,

    /// Minimum number of matched characters, relative to the exemplary length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_minimum_matched_chars: Option<Quantity>,

    /// Maximum number of unmatched compared characters, relative to the compared length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptable_maximum_wrong_chars: Option<Quantity>,
}

impl Configuration {
    #[must_use]
    pub fn with_letter_case(mut self, letter_case: LetterCasePolicy) -> Self {
        self.letter_case = letter_case;
        self
    }

    #[must_use]
    pub fn with_required_minimum_matched_chars(mut self, quantity: Quantity) -> Self {
        self.required_minimum_matched_chars = Some(quantity);
        self
    }

    #[must_use]
    pub fn with_acceptable_maximum_wrong_chars(mut self, quantity: Quantity) -> Self {
        self.acceptable_maximum_wrong_chars = Some(quantity);
        self
    }

    /// Check that coefficients are fractions
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCoefficient` when a coefficient lies outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(q) = &self.required_minimum_matched_chars {
            q.validate("required_minimum_matched_chars")?;
        }
        if let Some(q) = &self.acceptable_maximum_wrong_chars {
            q.validate("acceptable_maximum_wrong_chars")?;
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed JSON or
    /// `ConfigError::InvalidCoefficient` for out-of-range coefficients.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read, otherwise
    /// the errors of [`Configuration::from_json`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub(crate) fn normalization(&self) -> Option<CaseNormalization> {
        match self.letter_case {
            LetterCasePolicy::CompareAsIs => None,
            LetterCasePolicy::NormalizeTo(target) => Some(target),
        }
    }
}
