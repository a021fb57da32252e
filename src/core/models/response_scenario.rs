//! Response scenarios
//!
//! A response scenario is one set of reported results, plus the metadata that
//! qualifies it: area, scope, sample size, excluded share and unit. Every
//! opinion poll has a main scenario and zero or more alternative ones.
//!
//! Scenarios are assembled with a [`ResponseScenarioBuilder`]. Building never
//! fails: whether the results add up is a separate query, so callers decide
//! what to do with a scenario that doesn't.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Candidate, DecimalNumber, ElectoralList, ResultValue, SampleSize, Scope, Unit};

/// A set of electoral lists sharing one result
pub type ElectoralListSet = BTreeSet<Arc<ElectoralList>>;

/// One set of results with its qualifying metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ResponseScenario {
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<Scope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_size: Option<SampleSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excluded: Option<DecimalNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
    #[serde(serialize_with = "serialize_electoral_list_results")]
    electoral_list_results: BTreeMap<ElectoralListSet, ResultValue>,
    #[serde(
        serialize_with = "serialize_candidate_results",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    candidate_results: BTreeMap<Arc<Candidate>, ResultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other: Option<ResultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    no_responses: Option<ResultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    other_and_no_responses: Option<ResultValue>,
    #[serde(skip)]
    verified_sum: Option<DecimalNumber>,
}

fn electoral_list_set_key(set: &ElectoralListSet) -> String {
    set.iter()
        .map(|list| list.id())
        .collect::<Vec<_>>()
        .join("+")
}

fn serialize_electoral_list_results<S: Serializer>(
    results: &BTreeMap<ElectoralListSet, ResultValue>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(results.len()))?;
    for (set, value) in results {
        map.serialize_entry(&electoral_list_set_key(set), value)?;
    }
    map.end()
}

fn serialize_candidate_results<S: Serializer>(
    results: &BTreeMap<Arc<Candidate>, ResultValue>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(results.len()))?;
    for (candidate, value) in results {
        map.serialize_entry(candidate.id(), value)?;
    }
    map.end()
}

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

impl ResponseScenario {
    /// Area code, e.g. a region of the country
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }

    /// Scope of the poll
    #[must_use]
    pub const fn scope(&self) -> Option<Scope> {
        self.scope
    }

    /// Sample size as reported
    #[must_use]
    pub const fn sample_size(&self) -> Option<SampleSize> {
        self.sample_size
    }

    /// Minimal value of the sample size
    #[must_use]
    pub fn sample_size_value(&self) -> Option<u32> {
        self.sample_size.map(|sample_size| sample_size.minimal_value())
    }

    /// Share of respondents excluded from the results, in percent
    #[must_use]
    pub const fn excluded(&self) -> Option<DecimalNumber> {
        self.excluded
    }

    /// Unit of the results as written; absent means percentages
    #[must_use]
    pub const fn unit(&self) -> Option<Unit> {
        self.unit
    }

    /// Result value for "other"
    #[must_use]
    pub const fn other(&self) -> Option<&ResultValue> {
        self.other.as_ref()
    }

    /// Result value for "no responses"
    #[must_use]
    pub const fn no_responses(&self) -> Option<&ResultValue> {
        self.no_responses.as_ref()
    }

    /// Result value for "other" and "no responses" combined
    #[must_use]
    pub const fn other_and_no_responses(&self) -> Option<&ResultValue> {
        self.other_and_no_responses.as_ref()
    }

    /// Externally verified sum of the results
    #[must_use]
    pub const fn verified_sum(&self) -> Option<DecimalNumber> {
        self.verified_sum
    }

    /// Results per set of electoral lists
    #[must_use]
    pub const fn electoral_list_results(&self) -> &BTreeMap<ElectoralListSet, ResultValue> {
        &self.electoral_list_results
    }

    /// Results per candidate
    #[must_use]
    pub const fn candidate_results(&self) -> &BTreeMap<Arc<Candidate>, ResultValue> {
        &self.candidate_results
    }

    /// The sets of electoral lists that have a result
    pub fn electoral_list_sets(&self) -> impl Iterator<Item = &ElectoralListSet> {
        self.electoral_list_results.keys()
    }

    /// The result for a set of electoral list ids, in any order
    #[must_use]
    pub fn result(&self, ids: &[&str]) -> Option<&ResultValue> {
        let wanted: BTreeSet<&str> = ids.iter().copied().collect();
        self.electoral_list_results
            .iter()
            .find(|(set, _)| set.iter().map(|list| list.id()).collect::<BTreeSet<_>>() == wanted)
            .map(|(_, value)| value)
    }

    /// The result for a candidate id
    #[must_use]
    pub fn candidate_result(&self, id: &str) -> Option<&ResultValue> {
        self.candidate_results
            .iter()
            .find(|(candidate, _)| candidate.id() == id)
            .map(|(_, value)| value)
    }

    /// All result values, electoral lists first
    pub fn results(&self) -> impl Iterator<Item = &ResultValue> {
        self.electoral_list_results
            .values()
            .chain(self.candidate_results.values())
    }

    /// Number of result values
    #[must_use]
    pub fn number_of_results(&self) -> usize {
        self.electoral_list_results.len() + self.candidate_results.len()
    }

    /// Whether any result was given
    #[must_use]
    pub fn has_results(&self) -> bool {
        self.number_of_results() > 0
    }

    /// Sample size corrected for the excluded share
    ///
    /// The minimal sample size when nothing was excluded, rounded to the
    /// nearest respondent otherwise.
    #[must_use]
    pub fn effective_sample_size(&self) -> Option<u32> {
        let sample_size = self.sample_size_value()?;
        let Some(excluded) = self.excluded else {
            return Some(sample_size);
        };
        let share = Decimal::ONE.checked_sub(excluded.value() / HUNDRED)?;
        Decimal::from(sample_size)
            .checked_mul(share)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    /// Factor that inflates the results to compensate for other and no responses
    ///
    /// Infinite when other and no responses leave nothing over.
    #[must_use]
    pub fn scale(&self) -> f64 {
        let left_out: Vec<&ResultValue> = [
            self.other.as_ref(),
            self.no_responses.as_ref(),
            self.other_and_no_responses.as_ref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if left_out.is_empty() {
            return 1.0;
        }
        left_out
            .iter()
            .try_fold(HUNDRED, |remaining, value| remaining.checked_sub(value.nominal_value()))
            .and_then(|remaining| HUNDRED.checked_div(remaining))
            .and_then(|scale| scale.to_f64())
            .unwrap_or(f64::INFINITY)
    }

    /// Exact sum of the results, other and no responses
    ///
    /// `None` when the sum overflows.
    #[must_use]
    pub fn sum(&self) -> Option<Decimal> {
        self.all_values()
            .map(ResultValue::nominal_value)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
    }

    fn all_values(&self) -> impl Iterator<Item = &ResultValue> {
        self.results().chain(
            [
                self.other.as_ref(),
                self.no_responses.as_ref(),
                self.other_and_no_responses.as_ref(),
            ]
            .into_iter()
            .flatten(),
        )
    }

    /// Whether the results add up to 100 within the rounding error interval
    ///
    /// Results may fall short of 100 unless "other" is reported, either on
    /// its own or combined with "no responses". With a verified sum the
    /// results must add up to exactly that sum instead. Seats are never
    /// checked.
    #[must_use]
    pub fn results_add_up(&self) -> bool {
        self.check_sum(false)
    }

    /// Like [`results_add_up`](Self::results_add_up), but never allowing results to fall short
    #[must_use]
    pub fn results_add_up_strictly(&self) -> bool {
        self.check_sum(true)
    }

    fn check_sum(&self, strictly: bool) -> bool {
        if self.unit == Some(Unit::Seats) {
            return true;
        }
        if let Some(verified_sum) = self.verified_sum {
            return self.sum() == Some(verified_sum.value());
        }
        let Some((low, high)) = self.all_values().map(ResultValue::rounding_interval).try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(low, high), (value_low, value_high)| {
                Some((low.checked_add(value_low)?, high.checked_add(value_high)?))
            },
        ) else {
            return false;
        };
        let not_above = low <= HUNDRED;
        let not_below = high >= HUNDRED;
        let may_be_below =
            !strictly && self.other.is_none() && self.other_and_no_responses.is_none();
        not_above && (not_below || may_be_below)
    }
}

/// Accumulates the fields of a [`ResponseScenario`]
#[derive(Debug, Clone, Default)]
pub struct ResponseScenarioBuilder {
    scenario: ResponseScenario,
}

impl ResponseScenarioBuilder {
    /// Start an empty scenario
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the area code
    pub fn set_area(&mut self, area: impl Into<String>) -> &mut Self {
        self.scenario.area = Some(area.into());
        self
    }

    /// Set the scope
    pub fn set_scope(&mut self, scope: Scope) -> &mut Self {
        self.scenario.scope = Some(scope);
        self
    }

    /// Set the sample size
    pub fn set_sample_size(&mut self, sample_size: SampleSize) -> &mut Self {
        self.scenario.sample_size = Some(sample_size);
        self
    }

    /// Set the excluded share
    pub fn set_excluded(&mut self, excluded: DecimalNumber) -> &mut Self {
        self.scenario.excluded = Some(excluded);
        self
    }

    /// Set the unit
    pub fn set_unit(&mut self, unit: Unit) -> &mut Self {
        self.scenario.unit = Some(unit);
        self
    }

    /// Set the result for "other"
    pub fn set_other(&mut self, other: ResultValue) -> &mut Self {
        self.scenario.other = Some(other);
        self
    }

    /// Set the result for "no responses"
    pub fn set_no_responses(&mut self, no_responses: ResultValue) -> &mut Self {
        self.scenario.no_responses = Some(no_responses);
        self
    }

    /// Set the combined result for "other" and "no responses"
    pub fn set_other_and_no_responses(&mut self, value: ResultValue) -> &mut Self {
        self.scenario.other_and_no_responses = Some(value);
        self
    }

    /// Set the verified sum
    pub fn set_verified_sum(&mut self, verified_sum: DecimalNumber) -> &mut Self {
        self.scenario.verified_sum = Some(verified_sum);
        self
    }

    /// Add the result of a set of electoral lists
    pub fn add_result(&mut self, lists: ElectoralListSet, value: ResultValue) -> &mut Self {
        self.scenario.electoral_list_results.insert(lists, value);
        self
    }

    /// Add the result of a candidate
    pub fn add_candidate_result(
        &mut self,
        candidate: Arc<Candidate>,
        value: ResultValue,
    ) -> &mut Self {
        self.scenario.candidate_results.insert(candidate, value);
        self
    }

    /// Whether an area was set
    #[must_use]
    pub const fn has_area(&self) -> bool {
        self.scenario.area.is_some()
    }

    /// Whether a scope was set
    #[must_use]
    pub const fn has_scope(&self) -> bool {
        self.scenario.scope.is_some()
    }

    /// Whether a sample size was set
    #[must_use]
    pub const fn has_sample_size(&self) -> bool {
        self.scenario.sample_size.is_some()
    }

    /// Whether an excluded share was set
    #[must_use]
    pub const fn has_excluded(&self) -> bool {
        self.scenario.excluded.is_some()
    }

    /// Whether a unit was set
    #[must_use]
    pub const fn has_unit(&self) -> bool {
        self.scenario.unit.is_some()
    }

    /// Whether "other" was set
    #[must_use]
    pub const fn has_other(&self) -> bool {
        self.scenario.other.is_some()
    }

    /// Whether "no responses" was set
    #[must_use]
    pub const fn has_no_responses(&self) -> bool {
        self.scenario.no_responses.is_some()
    }

    /// Whether the combined "other and no responses" was set
    #[must_use]
    pub const fn has_other_and_no_responses(&self) -> bool {
        self.scenario.other_and_no_responses.is_some()
    }

    /// Whether a verified sum was set
    #[must_use]
    pub const fn has_verified_sum(&self) -> bool {
        self.scenario.verified_sum.is_some()
    }

    /// Whether any result was added
    #[must_use]
    pub fn has_results(&self) -> bool {
        self.scenario.has_results()
    }

    /// See [`ResponseScenario::results_add_up`]
    #[must_use]
    pub fn results_add_up(&self) -> bool {
        self.scenario.results_add_up()
    }

    /// Fill in the qualifying metadata this scenario doesn't set from another one
    pub fn inherit_from(&mut self, main: &ResponseScenario) -> &mut Self {
        if self.scenario.area.is_none() {
            self.scenario.area.clone_from(&main.area);
        }
        if self.scenario.scope.is_none() {
            self.scenario.scope = main.scope;
        }
        if self.scenario.sample_size.is_none() {
            self.scenario.sample_size = main.sample_size;
        }
        if self.scenario.excluded.is_none() {
            self.scenario.excluded = main.excluded;
        }
        if self.scenario.unit.is_none() {
            self.scenario.unit = main.unit;
        }
        self
    }

    /// The scenario assembled so far
    #[must_use]
    pub const fn peek(&self) -> &ResponseScenario {
        &self.scenario
    }

    /// Finish the scenario
    #[must_use]
    pub fn build(self) -> ResponseScenario {
        self.scenario
    }
}
