//! A deduplicated collection of opinion polls with queries over it

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use super::{ElectoralListSet, OpinionPoll};

/// Opinion polls parsed from one or more files
///
/// Structurally equal polls are kept once, at the position they first
/// occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OpinionPolls {
    polls: Vec<OpinionPoll>,
}

impl OpinionPolls {
    /// Collect opinion polls, dropping duplicates
    pub fn new(polls: impl IntoIterator<Item = OpinionPoll>) -> Self {
        let mut seen = HashSet::new();
        let polls = polls
            .into_iter()
            .filter(|poll| seen.insert(poll.clone()))
            .collect();
        Self { polls }
    }

    /// Number of distinct opinion polls
    #[must_use]
    pub fn len(&self) -> usize {
        self.polls.len()
    }

    /// Whether there are no opinion polls
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polls.is_empty()
    }

    /// The opinion polls in file order
    pub fn iter(&self) -> std::slice::Iter<'_, OpinionPoll> {
        self.polls.iter()
    }

    /// Whether a structurally equal poll is in the collection
    #[must_use]
    pub fn contains(&self, poll: &OpinionPoll) -> bool {
        self.polls.contains(poll)
    }

    /// Lowest minimal sample size over all polls
    #[must_use]
    pub fn lowest_sample_size(&self) -> Option<u32> {
        self.polls.iter().filter_map(OpinionPoll::sample_size_value).min()
    }

    /// Lowest effective sample size over all polls
    #[must_use]
    pub fn lowest_effective_sample_size(&self) -> Option<u32> {
        self.polls.iter().filter_map(OpinionPoll::effective_sample_size).min()
    }

    /// Lowest sample size of a polling firm, or of all polls if the firm has none
    #[must_use]
    pub fn lowest_sample_size_for(&self, polling_firm: &str) -> Option<u32> {
        self.by_polling_firm(polling_firm)
            .filter_map(OpinionPoll::sample_size_value)
            .min()
            .or_else(|| self.lowest_sample_size())
    }

    /// Lowest effective sample size of a polling firm, or of all polls if the firm has none
    #[must_use]
    pub fn lowest_effective_sample_size_for(&self, polling_firm: &str) -> Option<u32> {
        self.by_polling_firm(polling_firm)
            .filter_map(OpinionPoll::effective_sample_size)
            .min()
            .or_else(|| self.lowest_effective_sample_size())
    }

    fn by_polling_firm<'a>(
        &'a self,
        polling_firm: &'a str,
    ) -> impl Iterator<Item = &'a OpinionPoll> + 'a {
        self.polls
            .iter()
            .filter(move |poll| poll.polling_firm() == Some(polling_firm))
    }

    /// The latest end date of any poll
    #[must_use]
    pub fn most_recent_date(&self) -> Option<NaiveDate> {
        self.polls.iter().filter_map(OpinionPoll::end_date).max()
    }

    /// Number of polls ending on or after a date
    #[must_use]
    pub fn number_of_opinion_polls_since(&self, date: NaiveDate) -> usize {
        self.polls
            .iter()
            .filter_map(OpinionPoll::end_date)
            .filter(|end| *end >= date)
            .count()
    }

    /// Every set of electoral lists that has a result in some scenario
    #[must_use]
    pub fn electoral_list_sets(&self) -> BTreeSet<ElectoralListSet> {
        self.polls
            .iter()
            .flat_map(OpinionPoll::response_scenarios)
            .flat_map(|scenario| scenario.electoral_list_sets().cloned())
            .collect()
    }
}

impl FromIterator<OpinionPoll> for OpinionPolls {
    fn from_iter<I: IntoIterator<Item = OpinionPoll>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a OpinionPolls {
    type Item = &'a OpinionPoll;
    type IntoIter = std::slice::Iter<'a, OpinionPoll>;

    fn into_iter(self) -> Self::IntoIter {
        self.polls.iter()
    }
}

impl IntoIterator for OpinionPolls {
    type Item = OpinionPoll;
    type IntoIter = std::vec::IntoIter<OpinionPoll>;

    fn into_iter(self) -> Self::IntoIter {
        self.polls.into_iter()
    }
}
