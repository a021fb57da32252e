//! Tests for opinion poll and response scenario lines

use ropf::core::models::{
    DateMonthOrYear, DecimalNumber, SampleSize, Scope, Unit, Warning, WarningKind,
};
use ropf::parser::{KeyResolver, OpinionPollLine, ResponseScenarioLine};
use ropf::{KeyResolution, Registries};
use test_case::test_case;

fn parse(line: &str) -> OpinionPollLine {
    let registries = Registries::new();
    let resolver = KeyResolver::new(&registries, KeyResolution::Auto);
    OpinionPollLine::parse(line, &resolver, 1)
}

fn kinds(warnings: &[Warning]) -> Vec<WarningKind> {
    warnings.iter().map(|warning| warning.kind.clone()).collect()
}

#[test]
fn test_all_poll_metadata() {
    let parsed = parse(
        "•PF: ACME •PFP: Partner Co •C: Daily News •C: Evening Post •FS: 2021-07-20 \
         •FE: 2021-07-22 •PD: 2021-07-27 •A: North •SC: N •SS: 1000–1200 •EX: 12.5 •U: % \
         A:55 B:40 •O: 3 •N: 2",
    );
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
    let poll = parsed.builder.build();
    assert_eq!(poll.polling_firm(), Some("ACME"));
    assert_eq!(poll.polling_firm_partner(), Some("Partner Co"));
    assert_eq!(
        poll.commissioners().iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["Daily News", "Evening Post"]
    );
    assert_eq!(poll.fieldwork_start(), DateMonthOrYear::parse("2021-07-20").ok());
    assert_eq!(poll.fieldwork_end(), DateMonthOrYear::parse("2021-07-22").ok());
    assert_eq!(poll.area(), Some("North"));
    assert_eq!(poll.scope(), Some(Scope::National));
    assert_eq!(poll.sample_size(), Some(SampleSize::Range { low: 1000, high: 1200 }));
    assert_eq!(poll.excluded(), DecimalNumber::parse("12.5").ok());
    let scenario = poll.main_response_scenario();
    assert_eq!(scenario.unit(), Some(Unit::Percentages));
    assert_eq!(scenario.other().map(|value| value.text()), Some("3"));
    assert_eq!(scenario.no_responses().map(|value| value.text()), Some("2"));
    assert_eq!(scenario.number_of_results(), 2);
}

#[test]
fn test_missing_firm_dates_and_results() {
    let parsed = parse("•A: North •SS: 1000 •SC: N");
    assert_eq!(
        kinds(&parsed.warnings),
        vec![
            WarningKind::PollingFirmAndCommissionerMissing,
            WarningKind::DatesMissing,
            WarningKind::ResultsMissing,
        ]
    );
}

#[test]
fn test_commissioner_alone_is_enough() {
    let parsed = parse("•C: Daily News •PD: 2021-07 A:100");
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
}

#[test_case("•PF: ACME •PD: 2021-07-27 •XX: y A:100", WarningKind::UnknownMetadataKey { key: "XX".to_string() } ; "unknown key")]
#[test_case("•PF: ACME •PD: 2021-07-27 •SC: Q A:100", WarningKind::UnknownScopeValue { value: "Q".to_string() } ; "unknown scope")]
#[test_case("•PF: ACME •PD: 2021-07-27 •U: kg A:100", WarningKind::UnknownMetadataValue { field: "unit".to_string(), value: "kg".to_string() } ; "unknown unit")]
#[test_case("•PF: ACME •PD: 2021-07-27 •SS: many A:100", WarningKind::MalformedSampleSize { value: "many".to_string() } ; "malformed sample size")]
#[test_case("•PF: ACME •PD: 2021-07-27 •EX: lots A:100", WarningKind::MalformedDecimalNumber { key: "EX".to_string(), value: "lots".to_string() } ; "malformed excluded")]
#[test_case("•PF: ACME •PD: 2021-07-27 •FS: 2021-02-30 A:100", WarningKind::MalformedDate { key: "FS".to_string(), value: "2021-02-30".to_string() } ; "malformed day")]
#[test_case("•PF: ACME •PD: 2021-07-27 •FE: 2021-14 A:100", WarningKind::MalformedDateOrMonth { key: "FE".to_string(), value: "2021-14".to_string() } ; "malformed month")]
#[test_case("•PF: ACME •FE: 2021-07-22 •PD: 2021 A:100",WarningKind::MalformedDateOrMonth { key: "PD".to_string(), value: "2021".to_string() } ; "publication year")]
#[test_case("•PF: ACME •PD: 2021-07-27 •PF: Other A:100", WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce { key: "PF".to_string() } ; "repeated firm")]
fn test_single_warning(line: &str, expected: WarningKind) {
    assert_eq!(kinds(&parse(line).warnings), vec![expected]);
}

#[test]
fn test_other_and_no_responses_conflicts_with_other() {
    let parsed = parse("•PF: ACME •PD: 2021-07-27 A:90 •O: 5 •ON: 10");
    assert_eq!(
        kinds(&parsed.warnings),
        vec![WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce {
            key: "ON".to_string()
        }]
    );
    let poll = parsed.builder.build();
    assert!(poll.main_response_scenario().other_and_no_responses().is_none());
}

#[test]
fn test_no_responses_conflicts_with_other_and_no_responses() {
    let parsed = parse("•PF: ACME •PD: 2021-07-27 A:90 •ON: 10 •N: 5");
    assert_eq!(
        kinds(&parsed.warnings),
        vec![WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce {
            key: "N".to_string()
        }]
    );
}

#[test]
fn test_unknown_result_key_under_declared_resolution() {
    let registries = Registries::new();
    let mut resolver = KeyResolver::new(&registries, KeyResolution::Auto);
    resolver.declare_electoral_list("A", registries.electoral_list("AA001"));
    let parsed = OpinionPollLine::parse("•PF: ACME •PD: 2021-07-27 A:60 Z:40", &resolver, 9);
    assert_eq!(
        parsed.warnings,
        vec![Warning::new(
            9,
            WarningKind::UnknownElectoralListKey {
                key: "Z".to_string()
            }
        )]
    );
    let poll = parsed.builder.build();
    assert_eq!(poll.result(&["AA001"]).map(|value| value.text()), Some("60"));
    assert_eq!(poll.main_response_scenario().number_of_results(), 1);
}

#[test]
fn test_declared_candidate_results() {
    let registries = Registries::new();
    let mut resolver = KeyResolver::new(&registries, KeyResolution::Auto);
    resolver.declare_candidate("JD", registries.candidate("AA0001B"));
    resolver.declare_candidate("MM", registries.candidate("BB0002C"));
    let parsed = OpinionPollLine::parse("•PF: ACME •PD: 2021-07-27 JD:51 MM:49", &resolver, 1);
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
    let poll = parsed.builder.build();
    let scenario = poll.main_response_scenario();
    assert_eq!(scenario.candidate_result("AA0001B").map(|value| value.text()), Some("51"));
    assert_eq!(scenario.number_of_results(), 2);
}

// =============================================================================
// Response Scenario Lines
// =============================================================================

#[test]
fn test_response_scenario_line_results_and_markers() {
    let registries = Registries::new();
    let resolver = KeyResolver::new(&registries, KeyResolution::Auto);
    let parsed = ResponseScenarioLine::parse("& •A: South A:50 B:40 C:10", &resolver, 2);
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
    let scenario = parsed.builder.build();
    assert_eq!(scenario.area(), Some("South"));
    assert_eq!(scenario.result(&["C"]).map(|value| value.text()), Some("10"));
}

#[test]
fn test_response_scenario_line_without_results() {
    let registries = Registries::new();
    let resolver = KeyResolver::new(&registries, KeyResolution::Auto);
    let parsed = ResponseScenarioLine::parse("& •A: South", &resolver, 2);
    assert_eq!(kinds(&parsed.warnings), vec![WarningKind::ResultsMissing]);
}

#[test]
fn test_response_scenario_line_rejects_poll_markers() {
    let registries = Registries::new();
    let resolver = KeyResolver::new(&registries, KeyResolution::Auto);
    let parsed = ResponseScenarioLine::parse("& •PF: ACME A:100", &resolver, 2);
    assert_eq!(
        kinds(&parsed.warnings),
        vec![WarningKind::UnknownMetadataKey {
            key: "PF".to_string()
        }]
    );
}
