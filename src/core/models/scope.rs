//! Scope of a poll and unit of its results

use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::ParseError;

/// What election a poll is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// European Parliament election
    European,
    /// National parliamentary election
    National,
    /// First round of a presidential election
    PresidentialFirstRound,
}

impl Scope {
    /// The code used in poll files
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::European => "E",
            Self::National => "N",
            Self::PresidentialFirstRound => "P1",
        }
    }
}

impl FromStr for Scope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(Self::European),
            "N" => Ok(Self::National),
            "P1" => Ok(Self::PresidentialFirstRound),
            _ => Err(ParseError::UnknownScope(s.to_string())),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// What the result values count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    /// Share of the votes, in percent
    #[default]
    Percentages,
    /// Number of seats
    Seats,
}

impl Unit {
    /// The code used in poll files
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Percentages => "%",
            Self::Seats => "S",
        }
    }
}

impl FromStr for Unit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "%" => Ok(Self::Percentages),
            "S" => Ok(Self::Seats),
            _ => Err(ParseError::UnknownUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
