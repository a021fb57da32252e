//! Line classification
//!
//! Every line of a poll file is exactly one of six kinds. Each kind has its
//! own predicate, a plain regular expression match, so a caller can route a
//! line before committing to parse it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Key of an electoral list or candidate: an upper-case letter, then
/// upper-case letters, combining marks or digits
pub(crate) const KEY: &str = r"\p{Lu}[\p{Lu}\p{M}\d]*";
/// Metadata key after the marker glyph
pub(crate) const METADATA_KEY: &str = r"\p{Lu}+";
/// Electoral list id
pub(crate) const ELECTORAL_LIST_ID: &str = r"[A-Z]{2}\d{3,6}";
/// Candidate id
pub(crate) const CANDIDATE_ID: &str = r"[A-Z]{2}\d{4}[A-Z]";

/// Glyph in front of a metadata key
pub const METADATA_MARKER: char = '•';
/// Glyph in front of a comment
pub const COMMENT_MARKER: char = '‡';
/// Glyph in front of an alternative response scenario
pub const RESPONSE_SCENARIO_MARKER: char = '&';

fn key_set() -> String {
    format!(r"{KEY}(?:\+{KEY})*")
}

fn key_value() -> String {
    format!(r"(?:•{METADATA_KEY}|{}):.+?", key_set())
}

static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*‡.*$").expect("valid regex"));

static EMPTY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").expect("valid regex"));

static ELECTORAL_LIST_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*{KEY}:\s*{ELECTORAL_LIST_ID}(?:\s+•{METADATA_KEY}:.+?)+$"
    ))
    .expect("valid regex")
});

static CANDIDATE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*{KEY}:\s*{CANDIDATE_ID}(?:\s+•{METADATA_KEY}:.+?)+$"
    ))
    .expect("valid regex")
});

static OPINION_POLL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\s*•{METADATA_KEY}:.+?(?:\s+{})+$", key_value())).expect("valid regex")
});

static RESPONSE_SCENARIO_LINE: Lazy<Regex> = Lazy::new(|| {
    let key_value = key_value();
    Regex::new(&format!(r"^\s*&\s*(?:{key_value}(?:\s+{key_value})*)$")).expect("valid regex")
});

/// The kind of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Starts with `‡`
    Comment,
    /// Blank or whitespace only
    Empty,
    /// `KEY: ID •A: …` defining an electoral list
    ElectoralList,
    /// `KEY: ID •A: …` defining a candidate
    Candidate,
    /// Metadata markers followed by result pairs
    OpinionPoll,
    /// `&` followed by markers and result pairs, continuing the previous poll
    ResponseScenario,
}

impl LineKind {
    /// Classify a line, `None` when it matches no known format
    #[must_use]
    pub fn classify(line: &str) -> Option<Self> {
        if is_comment_line(line) {
            Some(Self::Comment)
        } else if is_empty_line(line) {
            Some(Self::Empty)
        } else if is_electoral_list_line(line) {
            Some(Self::ElectoralList)
        } else if is_candidate_line(line) {
            Some(Self::Candidate)
        } else if is_opinion_poll_line(line) {
            Some(Self::OpinionPoll)
        } else if is_response_scenario_line(line) {
            Some(Self::ResponseScenario)
        } else {
            None
        }
    }

    /// Human-readable name, as used in log messages
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Comment => "a comment line",
            Self::Empty => "an empty line",
            Self::ElectoralList => "an electoral list line",
            Self::Candidate => "a candidate line",
            Self::OpinionPoll => "an opinion poll line",
            Self::ResponseScenario => "a response scenario line",
        }
    }
}

/// Whether a line is a comment
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    COMMENT_LINE.is_match(line)
}

/// Whether a line is blank
#[must_use]
pub fn is_empty_line(line: &str) -> bool {
    EMPTY_LINE.is_match(line)
}

/// Whether a line defines an electoral list
#[must_use]
pub fn is_electoral_list_line(line: &str) -> bool {
    ELECTORAL_LIST_LINE.is_match(line)
}

/// Whether a line defines a candidate
#[must_use]
pub fn is_candidate_line(line: &str) -> bool {
    CANDIDATE_LINE.is_match(line)
}

/// Whether a line is an opinion poll
#[must_use]
pub fn is_opinion_poll_line(line: &str) -> bool {
    OPINION_POLL_LINE.is_match(line)
}

/// Whether a line is an alternative response scenario
#[must_use]
pub fn is_response_scenario_line(line: &str) -> bool {
    RESPONSE_SCENARIO_LINE.is_match(line)
}

/// A comment kept from the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentLine {
    /// 1-based line number
    pub line_number: usize,
    /// Text after the comment marker, leading whitespace stripped
    pub content: String,
}

impl CommentLine {
    /// Parse a comment line, `None` if the line isn't one
    #[must_use]
    pub fn parse(line: &str, line_number: usize) -> Option<Self> {
        let rest = line.trim_start().strip_prefix(COMMENT_MARKER)?;
        Some(Self {
            line_number,
            content: rest.trim_start().to_string(),
        })
    }
}
