//! Parsing a whole poll file
//!
//! Two passes over the lines. The first registers every electoral list and
//! candidate, so result keys resolve wherever the definitions sit in the
//! file. The second builds the opinion polls, attaches alternative scenarios
//! to the poll before them, and keeps the comments.

use std::collections::BTreeSet;

use log::debug;

use super::candidate_line::CandidateLine;
use super::electoral_list_line::ElectoralListLine;
use super::keys::KeyResolver;
use super::line::{CommentLine, LineKind};
use super::opinion_poll_line::OpinionPollLine;
use super::response_scenario_line::ResponseScenarioLine;
use crate::config::ParserConfig;
use crate::core::models::{OpinionPoll, OpinionPolls, Warning, WarningKind};
use crate::core::registry::Registries;

/// The content of a parsed poll file
#[derive(Debug, Clone, Default)]
pub struct RichOpinionPollsFile {
    opinion_polls: OpinionPolls,
    warnings: BTreeSet<Warning>,
    comment_lines: Vec<CommentLine>,
}

impl RichOpinionPollsFile {
    /// Parse the lines of a poll file
    ///
    /// Never fails: every problem becomes a warning and the rest of the file
    /// is still parsed.
    pub fn parse<S: AsRef<str>>(
        lines: &[S],
        registries: &Registries,
        config: &ParserConfig,
    ) -> Self {
        let classified: Vec<(usize, &str, Option<LineKind>)> = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.as_ref();
                (index + 1, line, LineKind::classify(line))
            })
            .collect();

        let mut warnings = BTreeSet::new();
        let mut resolver = KeyResolver::new(registries, config.key_resolution);
        for &(line_number, line, kind) in &classified {
            match kind {
                Some(LineKind::ElectoralList) => {
                    if let Some(parsed) = ElectoralListLine::parse(line, line_number) {
                        let list = parsed.update_electoral_list(registries);
                        resolver.declare_electoral_list(parsed.key, list);
                        warnings.extend(parsed.warnings);
                    }
                },
                Some(LineKind::Candidate) => {
                    if let Some(parsed) = CandidateLine::parse(line, line_number) {
                        let candidate = parsed.update_candidate(registries);
                        resolver.declare_candidate(parsed.key, candidate);
                        warnings.extend(parsed.warnings);
                    }
                },
                _ => {},
            }
        }
        debug!(
            "Resolving result keys in {:?} mode.",
            resolver.effective_mode()
        );

        let mut polls: Vec<OpinionPoll> = Vec::new();
        let mut comment_lines = Vec::new();
        for &(line_number, line, kind) in &classified {
            match kind {
                Some(kind) => debug!("Line {line_number} is recognized as {}.", kind.description()),
                None => debug!("Line {line_number} doesn't have a recognized line format."),
            }
            match kind {
                Some(LineKind::OpinionPoll) => {
                    let parsed = OpinionPollLine::parse(line, &resolver, line_number);
                    warnings.extend(parsed.warnings);
                    if !parsed.builder.results_add_up() {
                        warnings.insert(Warning::new(
                            line_number,
                            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval,
                        ));
                    }
                    polls.push(parsed.builder.build());
                },
                Some(LineKind::ResponseScenario) => {
                    let Some(poll) = polls.last_mut() else {
                        warnings.insert(Warning::new(line_number, WarningKind::UnrecognizedLineFormat));
                        continue;
                    };
                    let mut parsed = ResponseScenarioLine::parse(line, &resolver, line_number);
                    warnings.extend(parsed.warnings);
                    if config.inherit_scenario_metadata {
                        parsed.builder.inherit_from(poll.main_response_scenario());
                    }
                    if !parsed.builder.results_add_up() {
                        warnings.insert(Warning::new(
                            line_number,
                            WarningKind::ResultValuesNotAddingUpWithinRoundingErrorInterval,
                        ));
                    }
                    poll.add_alternative_response_scenario(parsed.builder.build());
                },
                Some(LineKind::Comment) => {
                    comment_lines.extend(CommentLine::parse(line, line_number));
                },
                Some(LineKind::Empty | LineKind::ElectoralList | LineKind::Candidate) => {},
                None => {
                    warnings.insert(Warning::new(line_number, WarningKind::UnrecognizedLineFormat));
                },
            }
        }

        Self {
            opinion_polls: OpinionPolls::new(polls),
            warnings,
            comment_lines,
        }
    }

    /// Parse the content of a poll file
    pub fn parse_str(content: &str, registries: &Registries, config: &ParserConfig) -> Self {
        let lines: Vec<&str> = content.lines().collect();
        Self::parse(&lines, registries, config)
    }

    /// The distinct opinion polls
    #[must_use]
    pub const fn opinion_polls(&self) -> &OpinionPolls {
        &self.opinion_polls
    }

    /// All warnings, ordered by line number
    #[must_use]
    pub const fn warnings(&self) -> &BTreeSet<Warning> {
        &self.warnings
    }

    /// Comment lines in file order
    #[must_use]
    pub fn comment_lines(&self) -> &[CommentLine] {
        &self.comment_lines
    }

    /// Whether the file parsed without warnings
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Split into opinion polls, warnings and comment lines
    #[must_use]
    pub fn into_parts(self) -> (OpinionPolls, BTreeSet<Warning>, Vec<CommentLine>) {
        (self.opinion_polls, self.warnings, self.comment_lines)
    }
}
