//! Sample sizes: exact, minimal (`≥1000`) or ranged (`1000–1200`)

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::ParseError;

const MINIMAL_PREFIX: char = '≥';
const RANGE_SEPARATOR: char = '–';

static SAMPLE_SIZE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(≥?[0-9]+|[0-9]+–[0-9]+)$").expect("valid regex"));

/// The number of respondents of a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SampleSize {
    /// Exactly this many respondents
    Exact {
        /// Number of respondents
        value: u32,
    },
    /// At least this many respondents
    Minimal {
        /// Lower bound
        value: u32,
    },
    /// Somewhere in this range
    Range {
        /// Lower bound
        low: u32,
        /// Upper bound
        high: u32,
    },
}

impl SampleSize {
    /// Parse a sample size
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedSampleSize(text.to_string());
        if !SAMPLE_SIZE_SHAPE.is_match(text) {
            return Err(malformed());
        }
        if let Some(rest) = text.strip_prefix(MINIMAL_PREFIX) {
            let value = rest.parse().map_err(|_| malformed())?;
            Ok(Self::Minimal { value })
        } else if let Some((low, high)) = text.split_once(RANGE_SEPARATOR) {
            let low = low.parse().map_err(|_| malformed())?;
            let high = high.parse().map_err(|_| malformed())?;
            Ok(Self::Range { low, high })
        } else {
            let value = text.parse().map_err(|_| malformed())?;
            Ok(Self::Exact { value })
        }
    }

    /// The smallest number of respondents the sample size allows
    #[must_use]
    pub const fn minimal_value(&self) -> u32 {
        match *self {
            Self::Exact { value } | Self::Minimal { value } => value,
            Self::Range { low, .. } => low,
        }
    }
}

impl FromStr for SampleSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SampleSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact { value } => write!(f, "{value}"),
            Self::Minimal { value } => write!(f, "{MINIMAL_PREFIX}{value}"),
            Self::Range { low, high } => write!(f, "{low}{RANGE_SEPARATOR}{high}"),
        }
    }
}
