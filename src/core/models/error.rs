//! Value parsing errors
//!
//! Raised by the value-type parsers. Line parsers never propagate these:
//! they convert each one into a [`Warning`](super::Warning) carrying the line
//! number and the metadata key that failed.

use thiserror::Error;

/// Errors that can occur when parsing a primitive ROPF value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is not a (signed) decimal number
    #[error("malformed decimal number: {0}")]
    MalformedDecimalNumber(String),

    /// Text is not an exact, minimal (`≥n`) or ranged (`a–b`) sample size
    #[error("malformed sample size: {0}")]
    MalformedSampleSize(String),

    /// Text has the shape of a day (`YYYY-MM-DD`) but isn't a valid day
    #[error("malformed date: {0}")]
    MalformedDate(String),

    /// Text is neither a valid day nor a valid month
    #[error("malformed date or month: {0}")]
    MalformedDateOrMonth(String),

    /// Text is neither a valid day, month nor year
    #[error("malformed date, month or year: {0}")]
    MalformedDateMonthOrYear(String),

    /// Text is not one of the scope codes
    #[error("unknown scope: {0}")]
    UnknownScope(String),

    /// Text is not one of the unit codes
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}
