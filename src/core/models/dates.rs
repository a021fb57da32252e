//! Days, months and years as written in poll metadata
//!
//! Publication dates are a day or a month ([`DateOrMonth`]); fieldwork dates
//! may also be a whole year ([`DateMonthOrYear`]). Each value knows the first
//! and the last day it covers.

use std::cmp::Ordering;

use chrono::{Datelike, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use super::ParseError;

static DAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));
static MONTH_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("valid regex"));
static YEAR_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid regex"));

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Create a month, `None` when the month number is out of range
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    /// The month containing a day
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month number, 1 to 12
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The last day of the month
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first_day)
    }

    fn parse(text: &str) -> Option<Self> {
        let (year, month) = text.split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first_day.format("%Y-%m"))
    }
}

fn parse_day(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn first_day_of_year(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn last_day_of_year(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Granularity of a calendar value, finest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// A single day
    Day,
    /// A calendar month
    Month,
    /// A calendar year
    Year,
}

/// A day, a month or a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateMonthOrYear {
    /// A single day
    Day(NaiveDate),
    /// A calendar month
    Month(YearMonth),
    /// A calendar year
    Year(i32),
}

impl DateMonthOrYear {
    /// Parse `YYYY-MM-DD`, `YYYY-MM` or `YYYY`
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if DAY_SHAPE.is_match(text) {
            parse_day(text)
                .map(Self::Day)
                .ok_or_else(|| ParseError::MalformedDate(text.to_string()))
        } else if MONTH_SHAPE.is_match(text) {
            YearMonth::parse(text)
                .map(Self::Month)
                .ok_or_else(|| ParseError::MalformedDateOrMonth(text.to_string()))
        } else if YEAR_SHAPE.is_match(text) {
            text.parse()
                .map(Self::Year)
                .map_err(|_| ParseError::MalformedDateMonthOrYear(text.to_string()))
        } else {
            Err(ParseError::MalformedDateMonthOrYear(text.to_string()))
        }
    }

    /// The first day covered
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        match *self {
            Self::Day(date) => date,
            Self::Month(month) => month.first_day(),
            Self::Year(year) => first_day_of_year(year),
        }
    }

    /// The last day covered
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        match *self {
            Self::Day(date) => date,
            Self::Month(month) => month.last_day(),
            Self::Year(year) => last_day_of_year(year),
        }
    }

    /// Whether this is a day, a month or a year
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Day(_) => Granularity::Day,
            Self::Month(_) => Granularity::Month,
            Self::Year(_) => Granularity::Year,
        }
    }
}

impl PartialOrd for DateMonthOrYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateMonthOrYear {
    /// Orders by last day, then coarser values after finer ones
    fn cmp(&self, other: &Self) -> Ordering {
        self.end()
            .cmp(&other.end())
            .then_with(|| self.granularity().cmp(&other.granularity()))
    }
}

impl std::fmt::Display for DateMonthOrYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Month(month) => write!(f, "{month}"),
            Self::Year(year) => write!(f, "{year:04}"),
        }
    }
}

impl Serialize for DateMonthOrYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A day or a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateOrMonth {
    /// A single day
    Day(NaiveDate),
    /// A calendar month
    Month(YearMonth),
}

impl DateOrMonth {
    /// Parse `YYYY-MM-DD` or `YYYY-MM`
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if DAY_SHAPE.is_match(text) {
            parse_day(text)
                .map(Self::Day)
                .ok_or_else(|| ParseError::MalformedDate(text.to_string()))
        } else {
            MONTH_SHAPE
                .is_match(text)
                .then(|| YearMonth::parse(text))
                .flatten()
                .map(Self::Month)
                .ok_or_else(|| ParseError::MalformedDateOrMonth(text.to_string()))
        }
    }

    /// The first day covered
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        DateMonthOrYear::from(*self).start()
    }

    /// The last day covered
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        DateMonthOrYear::from(*self).end()
    }
}

impl From<DateOrMonth> for DateMonthOrYear {
    fn from(value: DateOrMonth) -> Self {
        match value {
            DateOrMonth::Day(date) => Self::Day(date),
            DateOrMonth::Month(month) => Self::Month(month),
        }
    }
}

impl PartialOrd for DateOrMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateOrMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        DateMonthOrYear::from(*self).cmp(&DateMonthOrYear::from(*other))
    }
}

impl std::fmt::Display for DateOrMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DateMonthOrYear::from(*self))
    }
}

impl Serialize for DateOrMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
