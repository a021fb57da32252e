//! Parser warnings
//!
//! Malformed or incomplete input never aborts a parse. Every problem becomes
//! one [`Warning`], carrying the 1-based line number and the offending
//! token(s). Warnings order by line number first, so a `BTreeSet<Warning>`
//! is both deduplicated and ready to be reported.

use serde::Serialize;

use super::ParseError;

/// A diagnostic attached to a source line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Warning {
    /// 1-based line number
    pub line_number: usize,
    /// What went wrong
    #[serde(flatten)]
    pub kind: WarningKind,
}

/// The kinds of problems the parser reports
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// A result value isn't a (less-than) number
    MalformedResultValue {
        /// The verbatim value
        value: String,
    },
    /// A sample size isn't exact, minimal or a range
    MalformedSampleSize {
        /// The verbatim value
        value: String,
    },
    /// A metadata value should have been a decimal number
    MalformedDecimalNumber {
        /// Metadata key
        key: String,
        /// The verbatim value
        value: String,
    },
    /// A metadata value looks like a day but isn't one
    MalformedDate {
        /// Metadata key
        key: String,
        /// The verbatim value
        value: String,
    },
    /// A metadata value should have been a day or a month
    MalformedDateOrMonth {
        /// Metadata key
        key: String,
        /// The verbatim value
        value: String,
    },
    /// A metadata value should have been a day, a month or a year
    MalformedDateMonthOrYear {
        /// Metadata key
        key: String,
        /// The verbatim value
        value: String,
    },
    /// A metadata key that means nothing for this kind of line
    UnknownMetadataKey {
        /// Metadata key
        key: String,
    },
    /// A metadata value outside the allowed set of a field
    UnknownMetadataValue {
        /// Field name, e.g. "unit"
        field: String,
        /// The verbatim value
        value: String,
    },
    /// A scope code that doesn't exist
    UnknownScopeValue {
        /// The verbatim value
        value: String,
    },
    /// A result key that resolves to no electoral list or candidate
    UnknownElectoralListKey {
        /// The unresolved key
        key: String,
    },
    /// A single-valued metadata key was given again; only the first is kept
    SingleValueMetadataKeyOccurringMoreThanOnce {
        /// Metadata key
        key: String,
    },
    /// Neither a polling firm nor a commissioner was given
    PollingFirmAndCommissionerMissing,
    /// No fieldwork or publication date was given
    DatesMissing,
    /// No result pairs were given
    ResultsMissing,
    /// The results don't add up to 100 within the rounding error interval
    ResultValuesNotAddingUpWithinRoundingErrorInterval,
    /// The line matches none of the line formats
    UnrecognizedLineFormat,
}

impl Warning {
    /// Create a warning for a line
    #[must_use]
    pub const fn new(line_number: usize, kind: WarningKind) -> Self {
        Self { line_number, kind }
    }

    /// Convert a value parsing error for a metadata key into a warning
    #[must_use]
    pub fn from_parse_error(line_number: usize, key: &str, error: ParseError) -> Self {
        let key = key.to_string();
        let kind = match error {
            ParseError::MalformedDecimalNumber(value) => {
                WarningKind::MalformedDecimalNumber { key, value }
            },
            ParseError::MalformedSampleSize(value) => WarningKind::MalformedSampleSize { value },
            ParseError::MalformedDate(value) => WarningKind::MalformedDate { key, value },
            ParseError::MalformedDateOrMonth(value) => {
                WarningKind::MalformedDateOrMonth { key, value }
            },
            ParseError::MalformedDateMonthOrYear(value) => {
                WarningKind::MalformedDateMonthOrYear { key, value }
            },
            ParseError::UnknownScope(value) => WarningKind::UnknownScopeValue { value },
            ParseError::UnknownUnit(value) => WarningKind::UnknownMetadataValue {
                field: "unit".to_string(),
                value,
            },
        };
        Self::new(line_number, kind)
    }

    /// Short kebab-case name of the warning kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self.kind {
            WarningKind::MalformedResultValue { .. } => "malformed-result-value",
            WarningKind::MalformedSampleSize { .. } => "malformed-sample-size",
            WarningKind::MalformedDecimalNumber { .. } => "malformed-decimal-number",
            WarningKind::MalformedDate { .. } => "malformed-date",
            WarningKind::MalformedDateOrMonth { .. } => "malformed-date-or-month",
            WarningKind::MalformedDateMonthOrYear { .. } => "malformed-date-month-or-year",
            WarningKind::UnknownMetadataKey { .. } => "unknown-metadata-key",
            WarningKind::UnknownMetadataValue { .. } => "unknown-metadata-value",
            WarningKind::UnknownScopeValue { .. } => "unknown-scope-value",
            WarningKind::UnknownElectoralListKey { .. } => "unknown-electoral-list-key",
            WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce { .. } => {
                "single-value-metadata-key-occurring-more-than-once"
            },
            WarningKind::PollingFirmAndCommissionerMissing => {
                "polling-firm-and-commissioner-missing"
            },
            WarningKind::DatesMissing => "dates-missing",
            WarningKind::ResultsMissing => "results-missing",
            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval => {
                "result-values-not-adding-up-within-rounding-error-interval"
            },
            WarningKind::UnrecognizedLineFormat => "unrecognized-line-format",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self.line_number;
        match &self.kind {
            WarningKind::MalformedResultValue { value } => {
                write!(f, "Malformed result value (“{value}”) detected in line {line}.")
            },
            WarningKind::MalformedSampleSize { value } => {
                write!(f, "Malformed sample size (“{value}”) detected in line {line}.")
            },
            WarningKind::MalformedDecimalNumber { key, value } => write!(
                f,
                "Malformed decimal number (“{value}”) detected for metadata field “{key}” in line {line}."
            ),
            WarningKind::MalformedDate { key, value } => write!(
                f,
                "Malformed date (“{value}”) detected for metadata field “{key}” in line {line}."
            ),
            WarningKind::MalformedDateOrMonth { key, value } => write!(
                f,
                "Malformed date or month (“{value}”) detected for metadata field “{key}” in line {line}."
            ),
            WarningKind::MalformedDateMonthOrYear { key, value } => write!(
                f,
                "Malformed date, month or year (“{value}”) detected for metadata field “{key}” in line {line}."
            ),
            WarningKind::UnknownMetadataKey { key } => {
                write!(f, "Unknown metadata key (“{key}”) detected in line {line}.")
            },
            WarningKind::UnknownMetadataValue { field, value } => {
                write!(f, "Unknown {field} (“{value}”) detected in line {line}.")
            },
            WarningKind::UnknownScopeValue { value } => {
                write!(f, "Unknown scope (“{value}”) detected in line {line}.")
            },
            WarningKind::UnknownElectoralListKey { key } => {
                write!(f, "Unknown electoral list key (“{key}”) detected in line {line}.")
            },
            WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce { key } => write!(
                f,
                "Single value metadata key (“{key}”) occurring more than once in line {line}."
            ),
            WarningKind::PollingFirmAndCommissionerMissing => {
                write!(f, "Polling firm and commissioner missing in line {line}.")
            },
            WarningKind::DatesMissing => write!(f, "Dates missing in line {line}."),
            WarningKind::ResultsMissing => write!(f, "Results missing in line {line}."),
            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval => write!(
                f,
                "Result values in line {line} don’t add up within the rounding error interval."
            ),
            WarningKind::UnrecognizedLineFormat => {
                write!(f, "Unrecognized line format on line {line}.")
            },
        }
    }
}
