//! Markers and result pairs shared by opinion poll and response scenario lines

use super::keys::{KeyResolver, ResultTarget};
use crate::core::models::{
    DecimalNumber, ParseError, ResponseScenarioBuilder, ResultValue, SampleSize, Scope, Unit,
    Warning, WarningKind,
};

fn duplicate(line_number: usize, key: &str) -> Warning {
    Warning::new(
        line_number,
        WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce {
            key: key.to_string(),
        },
    )
}

fn result_value(value: &str, line_number: usize, warnings: &mut Vec<Warning>) -> ResultValue {
    let (value, warning) = ResultValue::parse(value, line_number);
    warnings.extend(warning);
    value
}

/// Apply a response scenario marker
///
/// Returns `false` when `key` isn't a response scenario marker, leaving the
/// builder untouched.
pub fn apply_marker(
    builder: &mut ResponseScenarioBuilder,
    key: &str,
    value: &str,
    line_number: usize,
    warnings: &mut Vec<Warning>,
) -> bool {
    let parse_error = |error: ParseError| Warning::from_parse_error(line_number, key, error);
    match key {
        "A" => {
            builder.set_area(value);
        },
        "SC" => match value.parse::<Scope>() {
            Ok(scope) => {
                builder.set_scope(scope);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "SS" => match SampleSize::parse(value) {
            Ok(sample_size) => {
                builder.set_sample_size(sample_size);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "EX" => match DecimalNumber::parse(value) {
            Ok(excluded) => {
                builder.set_excluded(excluded);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "U" => match value.parse::<Unit>() {
            Ok(unit) => {
                builder.set_unit(unit);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "VS" => match DecimalNumber::parse(value) {
            Ok(verified_sum) => {
                builder.set_verified_sum(verified_sum);
            },
            Err(error) => warnings.push(parse_error(error)),
        },
        "O" | "N" if builder.has_other_and_no_responses() => {
            warnings.push(duplicate(line_number, key));
        },
        "ON" if builder.has_other() || builder.has_no_responses() => {
            warnings.push(duplicate(line_number, key));
        },
        "O" => {
            let other = result_value(value, line_number, warnings);
            builder.set_other(other);
        },
        "N" => {
            let no_responses = result_value(value, line_number, warnings);
            builder.set_no_responses(no_responses);
        },
        "ON" => {
            let other_and_no_responses = result_value(value, line_number, warnings);
            builder.set_other_and_no_responses(other_and_no_responses);
        },
        _ => return false,
    }
    true
}

/// Resolve a result pair and add it to the scenario
///
/// Pairs with unknown keys are dropped.
pub fn apply_result(
    builder: &mut ResponseScenarioBuilder,
    resolver: &KeyResolver<'_>,
    keys: &[String],
    value: &str,
    line_number: usize,
    warnings: &mut Vec<Warning>,
) {
    let value = result_value(value, line_number, warnings);
    match resolver.resolve(keys, line_number) {
        Ok(ResultTarget::ElectoralLists(lists)) => {
            builder.add_result(lists, value);
        },
        Ok(ResultTarget::Candidate(candidate)) => {
            builder.add_candidate_result(candidate, value);
        },
        Err(unknown) => warnings.extend(unknown),
    }
}
