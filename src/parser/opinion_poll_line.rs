//! Opinion poll lines
//!
//! `•PF: ACME •PD: 2021-07-27 •SS: 1000 A:55 B:45`
//!
//! Besides the response scenario markers an opinion poll line knows who ran
//! the poll (`•PF`, `•PFP`, `•C`) and when (`•FS`, `•FE`, `•PD`).

use super::keys::KeyResolver;
use super::metadata::{self, Block};
use super::scenario_markers;
use crate::core::models::{
    DateMonthOrYear, DateOrMonth, OpinionPollBuilder, ParseError, Warning, WarningKind,
};

/// Markers that may occur more than once
const REPEATABLE_MARKERS: &[&str] = &["C"];

/// An opinion poll line, parsed but not built yet
#[derive(Debug, Clone)]
pub struct OpinionPollLine {
    /// The opinion poll assembled from the line
    pub builder: OpinionPollBuilder,
    /// Problems found on the line
    pub warnings: Vec<Warning>,
}

impl OpinionPollLine {
    /// Parse an opinion poll line
    ///
    /// Missing firm, dates or results are reported here; whether the results
    /// add up is left to the caller.
    #[must_use]
    pub fn parse(line: &str, resolver: &KeyResolver<'_>, line_number: usize) -> Self {
        let (blocks, mut warnings) = metadata::dedup_single_valued(
            metadata::tokenize(line),
            REPEATABLE_MARKERS,
            line_number,
        );
        let mut builder = OpinionPollBuilder::new();
        for block in blocks {
            match block {
                Block::Marker { key, value } => {
                    apply_marker(&mut builder, &key, &value, line_number, &mut warnings);
                },
                Block::Result { keys, value } => scenario_markers::apply_result(
                    builder.scenario_mut(),
                    resolver,
                    &keys,
                    &value,
                    line_number,
                    &mut warnings,
                ),
            }
        }
        if !builder.has_polling_firm_or_commissioner() {
            warnings.push(Warning::new(
                line_number,
                WarningKind::PollingFirmAndCommissionerMissing,
            ));
        }
        if !builder.has_dates() {
            warnings.push(Warning::new(line_number, WarningKind::DatesMissing));
        }
        if !builder.scenario().has_results() {
            warnings.push(Warning::new(line_number, WarningKind::ResultsMissing));
        }
        Self { builder, warnings }
    }
}

fn apply_marker(
    builder: &mut OpinionPollBuilder,
    key: &str,
    value: &str,
    line_number: usize,
    warnings: &mut Vec<Warning>,
) {
    let parse_error = |error: ParseError| Warning::from_parse_error(line_number, key, error);
    match key {
        "PF" => {
            builder.set_polling_firm(value);
        },
        "PFP" => {
            builder.set_polling_firm_partner(value);
        },
        "C" => {
            builder.add_commissioner(value);
        },
        "FS" => match DateMonthOrYear::parse(value) {
            Ok(date) => {
                builder.set_fieldwork_start(date);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "FE" => match DateMonthOrYear::parse(value) {
            Ok(date) => {
                builder.set_fieldwork_end(date);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "PD" => match DateOrMonth::parse(value) {
            Ok(date) => {
                builder.set_publication_date(date);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        _ => {
            if !scenario_markers::apply_marker(
                builder.scenario_mut(),
                key,
                value,
                line_number,
                warnings,
            ) {
                warnings.push(Warning::new(
                    line_number,
                    WarningKind::UnknownMetadataKey {
                        key: key.to_string(),
                    },
                ));
            }
        },
    }
}
