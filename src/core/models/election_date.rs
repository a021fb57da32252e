//! Expected election dates, possibly qualified as approximate or a deadline

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{DateMonthOrYear, ParseError};

/// How firm an election date is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qualifier {
    /// The election happens on the date
    Exact,
    /// The election happens no later than the date (`≤`)
    Deadline,
    /// The election happens around the date (`≈`)
    Approximate,
    /// The election happens no later than around the date (`⪅`)
    ApproximateDeadline,
}

impl Qualifier {
    /// The glyph written in front of the date
    #[must_use]
    pub const fn glyph(&self) -> Option<char> {
        match self {
            Self::Exact => None,
            Self::Deadline => Some('≤'),
            Self::Approximate => Some('≈'),
            Self::ApproximateDeadline => Some('⪅'),
        }
    }

    /// Key of the term used when presenting the qualifier
    #[must_use]
    pub const fn term_key(&self) -> Option<&'static str> {
        match self {
            Self::Exact => None,
            Self::Deadline => Some("no-later-than"),
            Self::Approximate => Some("around"),
            Self::ApproximateDeadline => Some("no-later-than-around"),
        }
    }

    fn split(text: &str) -> (Self, &str) {
        for qualifier in [Self::Deadline, Self::Approximate, Self::ApproximateDeadline] {
            if let Some(rest) = qualifier.glyph().and_then(|glyph| text.strip_prefix(glyph)) {
                return (qualifier, rest);
            }
        }
        (Self::Exact, text)
    }
}

/// A day, month or year plus a qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElectionDate {
    date: DateMonthOrYear,
    qualifier: Qualifier,
}

impl ElectionDate {
    /// Create an election date
    #[must_use]
    pub const fn new(date: DateMonthOrYear, qualifier: Qualifier) -> Self {
        Self { date, qualifier }
    }

    /// Parse an optionally qualified day, month or year
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let (qualifier, rest) = Qualifier::split(text);
        Ok(Self::new(DateMonthOrYear::parse(rest)?, qualifier))
    }

    /// The calendar value without qualifier
    #[must_use]
    pub const fn date(&self) -> DateMonthOrYear {
        self.date
    }

    /// The qualifier
    #[must_use]
    pub const fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// The last day the election may take place on
    #[must_use]
    pub fn end_date(&self) -> chrono::NaiveDate {
        self.date.end()
    }
}

impl PartialOrd for ElectionDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ElectionDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.qualifier.cmp(&other.qualifier))
    }
}

impl FromStr for ElectionDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ElectionDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(glyph) = self.qualifier.glyph() {
            write!(f, "{glyph}")?;
        }
        write!(f, "{}", self.date)
    }
}

impl Serialize for ElectionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
