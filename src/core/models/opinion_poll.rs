//! Opinion polls
//!
//! An opinion poll carries who ran it, when, and a main response scenario,
//! plus alternative scenarios attached by continuation lines. Equality is
//! structural over every field as written; inherited dates are only filled in
//! by the accessors.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::{
    DateMonthOrYear, DateOrMonth, DecimalNumber, ResponseScenario, ResponseScenarioBuilder,
    ResultValue, SampleSize, Scope,
};

/// A published opinion poll
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OpinionPoll {
    #[serde(skip_serializing_if = "Option::is_none")]
    polling_firm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    polling_firm_partner: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    commissioners: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fieldwork_start: Option<DateMonthOrYear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fieldwork_end: Option<DateMonthOrYear>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publication_date: Option<DateOrMonth>,
    main_response_scenario: ResponseScenario,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alternative_response_scenarios: Vec<ResponseScenario>,
}

impl OpinionPoll {
    /// Polling firm
    #[must_use]
    pub fn polling_firm(&self) -> Option<&str> {
        self.polling_firm.as_deref()
    }

    /// Partner of the polling firm
    #[must_use]
    pub fn polling_firm_partner(&self) -> Option<&str> {
        self.polling_firm_partner.as_deref()
    }

    /// Commissioners, in alphabetical order
    #[must_use]
    pub const fn commissioners(&self) -> &BTreeSet<String> {
        &self.commissioners
    }

    /// Whether a fieldwork start was given
    #[must_use]
    pub const fn has_fieldwork_start(&self) -> bool {
        self.fieldwork_start.is_some()
    }

    /// Whether a fieldwork end was given
    #[must_use]
    pub const fn has_fieldwork_end(&self) -> bool {
        self.fieldwork_end.is_some()
    }

    /// Publication date as given
    #[must_use]
    pub const fn publication_date(&self) -> Option<DateOrMonth> {
        self.publication_date
    }

    /// Start of the fieldwork, falling back to its end and then the publication date
    #[must_use]
    pub fn fieldwork_start(&self) -> Option<DateMonthOrYear> {
        self.fieldwork_start.or_else(|| self.fieldwork_end())
    }

    /// End of the fieldwork, falling back to the publication date
    #[must_use]
    pub fn fieldwork_end(&self) -> Option<DateMonthOrYear> {
        self.fieldwork_end
            .or_else(|| self.publication_date.map(DateMonthOrYear::from))
    }

    /// Last day of the fieldwork
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.fieldwork_end().map(|date| date.end())
    }

    /// The main response scenario
    #[must_use]
    pub const fn main_response_scenario(&self) -> &ResponseScenario {
        &self.main_response_scenario
    }

    /// Alternative response scenarios, in file order
    #[must_use]
    pub fn alternative_response_scenarios(&self) -> &[ResponseScenario] {
        &self.alternative_response_scenarios
    }

    /// The main scenario followed by the alternatives
    pub fn response_scenarios(&self) -> impl Iterator<Item = &ResponseScenario> {
        std::iter::once(&self.main_response_scenario)
            .chain(self.alternative_response_scenarios.iter())
    }

    /// Attach an alternative response scenario
    pub fn add_alternative_response_scenario(&mut self, scenario: ResponseScenario) {
        self.alternative_response_scenarios.push(scenario);
    }

    /// Number of response scenarios, the main one included
    #[must_use]
    pub fn number_of_response_scenarios(&self) -> usize {
        1 + self.alternative_response_scenarios.len()
    }

    /// Number of result values over all response scenarios
    #[must_use]
    pub fn number_of_result_values(&self) -> usize {
        self.response_scenarios()
            .map(ResponseScenario::number_of_results)
            .sum()
    }

    /// Area of the main scenario
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.main_response_scenario.area()
    }

    /// Scope of the main scenario
    #[must_use]
    pub const fn scope(&self) -> Option<Scope> {
        self.main_response_scenario.scope()
    }

    /// Sample size of the main scenario
    #[must_use]
    pub const fn sample_size(&self) -> Option<SampleSize> {
        self.main_response_scenario.sample_size()
    }

    /// Minimal sample size of the main scenario
    #[must_use]
    pub fn sample_size_value(&self) -> Option<u32> {
        self.main_response_scenario.sample_size_value()
    }

    /// Effective sample size of the main scenario
    #[must_use]
    pub fn effective_sample_size(&self) -> Option<u32> {
        self.main_response_scenario.effective_sample_size()
    }

    /// Excluded share of the main scenario
    #[must_use]
    pub const fn excluded(&self) -> Option<DecimalNumber> {
        self.main_response_scenario.excluded()
    }

    /// Result of the main scenario for a set of electoral list ids
    #[must_use]
    pub fn result(&self, ids: &[&str]) -> Option<&ResultValue> {
        self.main_response_scenario.result(ids)
    }
}

/// Accumulates the fields of an [`OpinionPoll`]
#[derive(Debug, Clone, Default)]
pub struct OpinionPollBuilder {
    polling_firm: Option<String>,
    polling_firm_partner: Option<String>,
    commissioners: BTreeSet<String>,
    fieldwork_start: Option<DateMonthOrYear>,
    fieldwork_end: Option<DateMonthOrYear>,
    publication_date: Option<DateOrMonth>,
    scenario: ResponseScenarioBuilder,
}

impl OpinionPollBuilder {
    /// Start an empty opinion poll
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the polling firm
    pub fn set_polling_firm(&mut self, polling_firm: impl Into<String>) -> &mut Self {
        self.polling_firm = Some(polling_firm.into());
        self
    }

    /// Set the partner of the polling firm
    pub fn set_polling_firm_partner(&mut self, partner: impl Into<String>) -> &mut Self {
        self.polling_firm_partner = Some(partner.into());
        self
    }

    /// Add a commissioner
    pub fn add_commissioner(&mut self, commissioner: impl Into<String>) -> &mut Self {
        self.commissioners.insert(commissioner.into());
        self
    }

    /// Set the start of the fieldwork
    pub fn set_fieldwork_start(&mut self, date: DateMonthOrYear) -> &mut Self {
        self.fieldwork_start = Some(date);
        self
    }

    /// Set the end of the fieldwork
    pub fn set_fieldwork_end(&mut self, date: DateMonthOrYear) -> &mut Self {
        self.fieldwork_end = Some(date);
        self
    }

    /// Set the publication date
    pub fn set_publication_date(&mut self, date: DateOrMonth) -> &mut Self {
        self.publication_date = Some(date);
        self
    }

    /// Whether a polling firm was set
    #[must_use]
    pub const fn has_polling_firm(&self) -> bool {
        self.polling_firm.is_some()
    }

    /// Whether a partner was set
    #[must_use]
    pub const fn has_polling_firm_partner(&self) -> bool {
        self.polling_firm_partner.is_some()
    }

    /// Whether any commissioner was added
    #[must_use]
    pub fn has_commissioners(&self) -> bool {
        !self.commissioners.is_empty()
    }

    /// Whether a polling firm or at least one commissioner was given
    #[must_use]
    pub fn has_polling_firm_or_commissioner(&self) -> bool {
        self.has_polling_firm() || self.has_commissioners()
    }

    /// Whether a fieldwork start was set
    #[must_use]
    pub const fn has_fieldwork_start(&self) -> bool {
        self.fieldwork_start.is_some()
    }

    /// Whether a fieldwork end was set
    #[must_use]
    pub const fn has_fieldwork_end(&self) -> bool {
        self.fieldwork_end.is_some()
    }

    /// Whether a publication date was set
    #[must_use]
    pub const fn has_publication_date(&self) -> bool {
        self.publication_date.is_some()
    }

    /// Whether any of the dates was set
    #[must_use]
    pub const fn has_dates(&self) -> bool {
        self.has_fieldwork_start() || self.has_fieldwork_end() || self.has_publication_date()
    }

    /// The builder of the main response scenario
    #[must_use]
    pub const fn scenario(&self) -> &ResponseScenarioBuilder {
        &self.scenario
    }

    /// The builder of the main response scenario, for setting its fields
    pub const fn scenario_mut(&mut self) -> &mut ResponseScenarioBuilder {
        &mut self.scenario
    }

    /// Whether the results of the main scenario add up
    #[must_use]
    pub fn results_add_up(&self) -> bool {
        self.scenario.results_add_up()
    }

    /// Finish the opinion poll, without alternative scenarios
    #[must_use]
    pub fn build(self) -> OpinionPoll {
        OpinionPoll {
            polling_firm: self.polling_firm,
            polling_firm_partner: self.polling_firm_partner,
            commissioners: self.commissioners,
            fieldwork_start: self.fieldwork_start,
            fieldwork_end: self.fieldwork_end,
            publication_date: self.publication_date,
            main_response_scenario: self.scenario.build(),
            alternative_response_scenarios: Vec::new(),
        }
    }
}
