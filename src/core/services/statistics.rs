//! Statistics over a collection of opinion polls
//!
//! Counts polls, response scenarios and result values, in total, per area and
//! per year of the fieldwork end.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::core::models::{OpinionPoll, OpinionPolls};

/// Poll, scenario and result value counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Number of opinion polls
    pub opinion_polls: usize,
    /// Number of response scenarios, main scenarios included
    pub response_scenarios: usize,
    /// Number of result values over all scenarios
    pub result_values: usize,
}

impl Counts {
    fn add(&mut self, poll: &OpinionPoll) {
        self.opinion_polls += 1;
        self.response_scenarios += poll.number_of_response_scenarios();
        self.result_values += poll.number_of_result_values();
    }
}

/// Counts broken down by area and year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Counts over all polls
    pub total: Counts,
    /// Counts per area code, for polls with an area
    pub per_area: BTreeMap<String, Counts>,
    /// Counts per year of the end date, for polls with a date
    pub per_year: BTreeMap<i32, Counts>,
}

/// Compute the statistics of a collection of opinion polls
#[must_use]
pub fn statistics(polls: &OpinionPolls) -> Statistics {
    let mut result = Statistics::default();
    for poll in polls {
        result.total.add(poll);
        if let Some(area) = poll.area() {
            result.per_area.entry(area.to_string()).or_default().add(poll);
        }
        if let Some(end) = poll.end_date() {
            result.per_year.entry(end.year()).or_default().add(poll);
        }
    }
    result
}
