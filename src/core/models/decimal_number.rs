//! Decimal numbers that remember how they were written
//!
//! `1` and `1.0` have the same value but not the same precision, and are
//! therefore different decimal numbers.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::ParseError;

static DECIMAL_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("valid regex"));

/// A decimal value plus the number of decimals it was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecimalNumber {
    value: Decimal,
    number_of_decimals: u32,
}

impl DecimalNumber {
    /// Create a decimal number, rescaling the value to the given number of decimals
    #[must_use]
    pub fn new(value: Decimal, number_of_decimals: u32) -> Self {
        let mut value = value;
        value.rescale(number_of_decimals);
        Self {
            value,
            number_of_decimals,
        }
    }

    /// Parse a decimal number
    ///
    /// Surrounding whitespace is ignored. The number of decimals is the number
    /// of digits after the decimal point, zero when there is none.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        if !DECIMAL_NUMBER_PATTERN.is_match(trimmed) {
            return Err(ParseError::MalformedDecimalNumber(text.to_string()));
        }
        let number_of_decimals = trimmed
            .find('.')
            .map_or(0, |index| trimmed.len() - index - 1);
        let value = Decimal::from_str(trimmed)
            .map_err(|_| ParseError::MalformedDecimalNumber(text.to_string()))?;
        let number_of_decimals = u32::try_from(number_of_decimals)
            .map_err(|_| ParseError::MalformedDecimalNumber(text.to_string()))?;
        Ok(Self::new(value, number_of_decimals))
    }

    /// The exact value
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The value as a floating point number
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or_default()
    }

    /// Number of digits written after the decimal point
    #[must_use]
    pub const fn number_of_decimals(&self) -> u32 {
        self.number_of_decimals
    }
}

impl FromStr for DecimalNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
