//! Tests for parsing whole poll files

use chrono::NaiveDate;
use ropf::core::models::{DateMonthOrYear, DateOrMonth, OpinionPolls, Warning, WarningKind};
use ropf::{KeyResolution, ParserConfig, Registries, RichOpinionPollsFile};

fn parse(lines: &[&str]) -> RichOpinionPollsFile {
    parse_with(lines, &ParserConfig::default())
}

fn parse_with(lines: &[&str], config: &ParserConfig) -> RichOpinionPollsFile {
    let registries = Registries::new();
    RichOpinionPollsFile::parse(lines, &registries, config)
}

fn warnings(file: &RichOpinionPollsFile) -> Vec<Warning> {
    file.warnings().iter().cloned().collect()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =============================================================================
// Opinion Polls
// =============================================================================

#[test]
fn test_single_poll_without_warnings() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A:55 B:45"]);
    assert!(file.is_clean(), "{:?}", file.warnings());
    assert_eq!(file.opinion_polls().len(), 1);

    let poll = file.opinion_polls().iter().next().unwrap();
    let published = DateOrMonth::Day(day(2021, 7, 27));
    assert_eq!(poll.polling_firm(), Some("ACME"));
    assert_eq!(poll.publication_date(), Some(published));
    assert_eq!(poll.fieldwork_start(), Some(DateMonthOrYear::from(published)));
    assert_eq!(poll.fieldwork_end(), Some(DateMonthOrYear::from(published)));
    assert_eq!(poll.result(&["A"]).map(|value| value.text()), Some("55"));
    assert_eq!(poll.result(&["B"]).map(|value| value.text()), Some("45"));
}

#[test]
fn test_malformed_result_value() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A:x B:45"]);
    assert_eq!(
        warnings(&file),
        vec![Warning::new(
            1,
            WarningKind::MalformedResultValue {
                value: "x".to_string()
            }
        )]
    );
    let poll = file.opinion_polls().iter().next().unwrap();
    assert_eq!(poll.result(&["A"]).map(|value| value.primitive_text()), Some("0"));
}

#[test]
fn test_results_not_adding_up() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A:97 B:0 C:0 •O: 0 •N: 0"]);
    assert_eq!(
        warnings(&file),
        vec![Warning::new(
            1,
            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval
        )]
    );
    // The poll is still kept
    assert_eq!(file.opinion_polls().len(), 1);
}

#[test]
fn test_results_adding_up_within_tolerance() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A:98 B:0 C:0 •O: 0 •N: 0"]);
    assert!(file.is_clean(), "{:?}", file.warnings());
}

#[test]
fn test_results_on_the_edge_of_tolerance() {
    let file = parse(&[
        "•PF: ACME •PD: 2021-07-27 A:60 B:41",
        "•PF: ACME •PD: 2021-07-28 A:99 •O: 0",
    ]);
    assert!(file.is_clean(), "{:?}", file.warnings());
    assert_eq!(file.opinion_polls().len(), 2);
}

#[test]
fn test_huge_result_values_do_not_abort_the_file() {
    let file = parse(&[
        "•PF: ACME •PD: 2021-07-27 A:79228162514264337593543950335 B:79228162514264337593543950335",
        "•PF: ACME •PD: 2021-07-28 A:55 B:45",
    ]);
    assert_eq!(
        warnings(&file),
        vec![Warning::new(
            1,
            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval
        )]
    );
    assert_eq!(file.opinion_polls().len(), 2);
}

#[test]
fn test_huge_excluded_share_gives_no_effective_sample_size() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 •SS: 1000 •EX: -79228162514264337593543950335 A:100"]);
    assert!(file.is_clean(), "{:?}", file.warnings());
    assert_eq!(file.opinion_polls().lowest_effective_sample_size(), None);
}

#[test]
fn test_combined_electoral_lists() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A+B:60 C:40"]);
    assert!(file.is_clean(), "{:?}", file.warnings());
    let poll = file.opinion_polls().iter().next().unwrap();
    assert_eq!(poll.result(&["B", "A"]).map(|value| value.text()), Some("60"));
}

#[test]
fn test_duplicate_polls_are_merged() {
    let file = parse(&[
        "•PF: ACME •PD: 2021-07-27 A:55 B:45",
        "•PF: ACME •PD: 2021-07-27 A:55 B:45",
        "•PF: ACME •PD: 2021-08-27 A:50 B:50",
    ]);
    assert_eq!(file.opinion_polls().len(), 2);
}

// =============================================================================
// Response Scenarios
// =============================================================================

#[test]
fn test_alternative_scenario_attaches_to_previous_poll() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A:55 B:45", "& A:50 B:40 C:10"]);
    assert!(file.is_clean(), "{:?}", file.warnings());
    assert_eq!(file.opinion_polls().len(), 1);

    let poll = file.opinion_polls().iter().next().unwrap();
    assert_eq!(poll.main_response_scenario().number_of_results(), 2);
    assert_eq!(poll.alternative_response_scenarios().len(), 1);
    let alternative = &poll.alternative_response_scenarios()[0];
    assert_eq!(alternative.result(&["A"]).map(|value| value.text()), Some("50"));
    assert_eq!(alternative.result(&["B"]).map(|value| value.text()), Some("40"));
    assert_eq!(alternative.result(&["C"]).map(|value| value.text()), Some("10"));
}

#[test]
fn test_alternative_scenario_without_poll() {
    let file = parse(&["& A:50 B:50"]);
    assert_eq!(
        warnings(&file),
        vec![Warning::new(1, WarningKind::UnrecognizedLineFormat)]
    );
    assert!(file.opinion_polls().is_empty());
}

#[test]
fn test_alternative_scenario_inherits_metadata() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 •A: North •SS: 1000 A:55 B:45", "& A:50 B:50"]);
    let poll = file.opinion_polls().iter().next().unwrap();
    let alternative = &poll.alternative_response_scenarios()[0];
    assert_eq!(alternative.area(), Some("North"));
    assert_eq!(alternative.sample_size_value(), Some(1000));
}

#[test]
fn test_inheritance_can_be_switched_off() {
    let config = ParserConfig {
        inherit_scenario_metadata: false,
        ..ParserConfig::default()
    };
    let file = parse_with(
        &["•PF: ACME •PD: 2021-07-27 •A: North A:55 B:45", "& A:50 B:50"],
        &config,
    );
    let poll = file.opinion_polls().iter().next().unwrap();
    assert_eq!(poll.alternative_response_scenarios()[0].area(), None);
}

#[test]
fn test_alternative_scenario_sum_is_checked() {
    let file = parse(&["•PF: ACME •PD: 2021-07-27 A:55 B:45", "& A:60 B:50"]);
    assert_eq!(
        warnings(&file),
        vec![Warning::new(
            2,
            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval
        )]
    );
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn test_declared_keys_resolve_to_ids() {
    let file = parse(&[
        "•PF: ACME •PD: 2021-07-27 A:55 B:45",
        "A: AA001 •A: AP •N: Alpha Party",
        "B: BB002 •A: BP •N: Beta Party",
    ]);
    assert!(file.is_clean(), "{:?}", file.warnings());
    let poll = file.opinion_polls().iter().next().unwrap();
    assert_eq!(poll.result(&["AA001"]).map(|value| value.text()), Some("55"));
    assert_eq!(poll.result(&["A"]), None);
}

#[test]
fn test_undeclared_key_is_reported() {
    let file = parse(&[
        "A: AA001 •A: AP",
        "•PF: ACME •PD: 2021-07-27 A:55 Z:45",
    ]);
    assert_eq!(
        warnings(&file),
        vec![Warning::new(
            2,
            WarningKind::UnknownElectoralListKey {
                key: "Z".to_string()
            }
        )]
    );
}

#[test]
fn test_registry_resolution_ignores_declarations() {
    let config = ParserConfig {
        key_resolution: KeyResolution::Registry,
        ..ParserConfig::default()
    };
    let file = parse_with(
        &["A: AA001 •A: AP", "•PF: ACME •PD: 2021-07-27 A:55 Z:45"],
        &config,
    );
    assert!(file.is_clean(), "{:?}", file.warnings());
    let poll = file.opinion_polls().iter().next().unwrap();
    assert_eq!(poll.result(&["Z"]).map(|value| value.text()), Some("45"));
}

#[test]
fn test_declared_resolution_without_declarations() {
    let config = ParserConfig {
        key_resolution: KeyResolution::Declared,
        ..ParserConfig::default()
    };
    let file = parse_with(&["•PF: ACME •PD: 2021-07-27 A:100"], &config);
    assert_eq!(
        warnings(&file),
        vec![
            Warning::new(
                1,
                WarningKind::UnknownElectoralListKey {
                    key: "A".to_string()
                }
            ),
            Warning::new(1, WarningKind::ResultsMissing),
        ]
    );
}

#[test]
fn test_declarations_fill_the_shared_registry() {
    let registries = Registries::new();
    let lines = ["A: AA001 •A: AP •N: Alpha Party"];
    let file = RichOpinionPollsFile::parse(&lines, &registries, &ParserConfig::default());
    assert!(file.is_clean());
    assert_eq!(
        registries.electoral_list("AA001").abbreviation().as_deref(),
        Some("AP")
    );
}

// =============================================================================
// Comments, Empty and Unrecognized Lines
// =============================================================================

#[test]
fn test_comments_are_kept_and_lines_numbered() {
    let file = parse(&[
        "‡ Source: Wikipedia",
        "",
        "•PF: ACME •PD: 2021-07-27 A:55 B:45",
        "this is not a poll",
    ]);
    assert_eq!(file.comment_lines().len(), 1);
    assert_eq!(file.comment_lines()[0].content, "Source: Wikipedia");
    assert_eq!(
        warnings(&file),
        vec![Warning::new(4, WarningKind::UnrecognizedLineFormat)]
    );
}

#[test]
fn test_warnings_are_ordered_by_line_number() {
    let file = parse(&[
        "•PF: ACME •PD: 2021-07-27 A:55 B:45",
        "garbage",
        "•PD: 2021-07-27 A:55 B:45",
        "more garbage",
    ]);
    let lines: Vec<usize> = file.warnings().iter().map(|warning| warning.line_number).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_parse_str_splits_lines() {
    let registries = Registries::new();
    let file = RichOpinionPollsFile::parse_str(
        "•PF: ACME •PD: 2021-07-27 A:55 B:45\n& A:50 B:50\n",
        &registries,
        &ParserConfig::default(),
    );
    assert!(file.is_clean());
    let (polls, warnings, comments) = file.into_parts();
    assert_eq!(polls.len(), 1);
    assert!(warnings.is_empty());
    assert!(comments.is_empty());
}

// =============================================================================
// Queries
// =============================================================================

fn sample() -> OpinionPolls {
    let (polls, _, _) = parse(&[
        "•PF: ACME •FE: 2021-07-20 •SS: 1000 •EX: 10 A:55 B:45",
        "•PF: ACME •FE: 2021-08-20 •SS: 800 A:50 B:50",
        "•PF: Other •FE: 2021-09 •SS: 1200 A:45 B:55",
    ])
    .into_parts();
    polls
}

#[test]
fn test_lowest_sample_sizes() {
    let polls = sample();
    assert_eq!(polls.lowest_sample_size(), Some(800));
    assert_eq!(polls.lowest_effective_sample_size(), Some(800));
    assert_eq!(polls.lowest_sample_size_for("ACME"), Some(800));
    assert_eq!(polls.lowest_sample_size_for("Other"), Some(1200));
}

#[test]
fn test_most_recent_date_and_counting() {
    let polls = sample();
    assert_eq!(polls.most_recent_date(), Some(day(2021, 9, 30)));
    assert_eq!(polls.number_of_opinion_polls_since(day(2021, 8, 1)), 2);
}
