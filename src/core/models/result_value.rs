//! Result values
//!
//! A result value keeps the text it was written as (`55`, `0.5`, `<1`).
//! Equality, hashing and ordering all go by that text.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Warning, WarningKind};

static RESULT_VALUE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<?\d+(\.\d+)?$").expect("valid regex"));

/// Precision a result value was reported with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Precision {
    /// Whole numbers
    One,
    /// Halves, e.g. `2.5`
    Half,
    /// Tenths or finer
    Tenth,
}

impl Precision {
    /// The finer of two precisions
    #[must_use]
    pub fn highest(self, other: Self) -> Self {
        self.max(other)
    }

    /// The finest precision over a collection of values, `One` when empty
    pub fn highest_of<'a>(values: impl IntoIterator<Item = &'a ResultValue>) -> Self {
        values
            .into_iter()
            .map(ResultValue::precision)
            .fold(Self::One, Self::highest)
    }

    /// Step size as text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Half => "0.5",
            Self::Tenth => "0.1",
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported result
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResultValue {
    text: String,
}

impl ResultValue {
    /// Wrap a result text as-is
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Parse a result value, reporting malformed text
    ///
    /// A malformed value is still returned so the poll keeps its shape; its
    /// nominal value is zero.
    #[must_use]
    pub fn parse(text: &str, line_number: usize) -> (Self, Option<Warning>) {
        let value = Self::new(text);
        if RESULT_VALUE_PATTERN.is_match(text) {
            (value, None)
        } else {
            let warning = Warning::new(
                line_number,
                WarningKind::MalformedResultValue {
                    value: text.to_string(),
                },
            );
            (value, Some(warning))
        }
    }

    /// Whether the text is a well-formed result value
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        RESULT_VALUE_PATTERN.is_match(&self.text)
    }

    /// The verbatim text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the value was reported as "less than"
    #[must_use]
    pub fn is_less_than(&self) -> bool {
        self.text.starts_with('<')
    }

    /// The number the value stands for, `0` for less-than or malformed values
    #[must_use]
    pub fn primitive_text(&self) -> &str {
        if self.is_less_than() || !self.is_well_formed() {
            "0"
        } else {
            &self.text
        }
    }

    /// The primitive text as an exact decimal
    #[must_use]
    pub fn nominal_value(&self) -> Decimal {
        Decimal::from_str(self.primitive_text()).unwrap_or_default()
    }

    /// Number of digits after the decimal point of the primitive text
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.primitive_text()
            .split_once('.')
            .map_or(0, |(_, fraction)| u32::try_from(fraction.len()).unwrap_or(u32::MAX))
    }

    /// Half a unit of the last reported digit
    #[must_use]
    pub fn rounding_error(&self) -> Decimal {
        Decimal::new(5, self.decimals().saturating_add(1).min(28))
    }

    /// The interval of true values that would be reported as this value
    ///
    /// Saturates at the bounds of [`Decimal`].
    #[must_use]
    pub fn rounding_interval(&self) -> (Decimal, Decimal) {
        let nominal = self.nominal_value();
        let error = self.rounding_error();
        (nominal.saturating_sub(error), nominal.saturating_add(error))
    }

    /// Reporting precision, derived from the primitive text
    #[must_use]
    pub fn precision(&self) -> Precision {
        match self.primitive_text().split_once('.') {
            Some((_, "5")) => Precision::Half,
            Some((_, "0")) | None => Precision::One,
            Some(_) => Precision::Tenth,
        }
    }
}

impl std::fmt::Display for ResultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
