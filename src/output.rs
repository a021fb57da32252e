//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::models::Warning;
use crate::core::services::{Counts, Statistics};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A warning as reported to the user
#[derive(Debug, Serialize)]
pub struct WarningEntry {
    /// 1-based line number
    pub line_number: usize,
    /// Kebab-case warning code
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
}

impl From<&Warning> for WarningEntry {
    fn from(warning: &Warning) -> Self {
        Self {
            line_number: warning.line_number,
            code: warning.code(),
            message: warning.to_string(),
        }
    }
}

/// Result of checking a poll file
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The file that was checked
    pub file: String,
    /// Whether the file parsed without warnings
    pub passed: bool,
    /// Number of distinct opinion polls
    pub opinion_polls: usize,
    /// Number of comment lines
    pub comment_lines: usize,
    /// Warnings, ordered by line number
    pub warnings: Vec<WarningEntry>,
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for warning in &self.warnings {
            println!("{}", warning.message);
        }
        if !self.warnings.is_empty() {
            println!();
        }
        println!(
            "{}: {} opinion poll(s), {} warning(s).",
            self.file,
            self.opinion_polls,
            self.warnings.len()
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Statistics of a poll file
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// The file that was summarized
    pub file: String,
    /// Poll, scenario and result counts
    pub statistics: Statistics,
    /// Lowest sample size over all polls
    pub lowest_sample_size: Option<u32>,
    /// Lowest effective sample size over all polls
    pub lowest_effective_sample_size: Option<u32>,
    /// Latest fieldwork end
    pub most_recent_date: Option<NaiveDate>,
    /// Number of distinct electoral list sets with a result
    pub electoral_list_sets: usize,
    /// Number of warnings found while parsing
    pub warnings: usize,
}

impl SummaryReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{}", self.file);
        println!("  {}", format_counts("Total", &self.statistics.total));
        if let Some(date) = self.most_recent_date {
            println!("  Most recent date: {date}");
        }
        if let Some(size) = self.lowest_sample_size {
            println!("  Lowest sample size: {size}");
        }
        if let Some(size) = self.lowest_effective_sample_size {
            println!("  Lowest effective sample size: {size}");
        }
        println!("  Electoral list sets: {}", self.electoral_list_sets);
        println!("  Warnings: {}", self.warnings);

        if !self.statistics.per_area.is_empty() {
            println!("\nPer area:");
            for (area, counts) in &self.statistics.per_area {
                println!("  {}", format_counts(area, counts));
            }
        }
        if !self.statistics.per_year.is_empty() {
            println!("\nPer year:");
            for (year, counts) in &self.statistics.per_year {
                println!("  {}", format_counts(&year.to_string(), counts));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn format_counts(label: &str, counts: &Counts) -> String {
    format!(
        "{label}: {} opinion poll(s), {} response scenario(s), {} result value(s)",
        counts.opinion_polls, counts.response_scenarios, counts.result_values
    )
}
