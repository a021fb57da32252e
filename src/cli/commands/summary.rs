//! Show statistics of a poll file

use std::path::Path;

use ropf::ParserConfig;
use ropf::core::services::statistics;
use ropf::output::{OutputMode, SummaryReport};

/// Parse a poll file and print its statistics
pub fn summary(path: &Path, config: &ParserConfig, mode: OutputMode) -> anyhow::Result<bool> {
    let parsed = super::parse_file(path, config)?;
    let polls = parsed.opinion_polls();

    let report = SummaryReport {
        file: path.display().to_string(),
        statistics: statistics(polls),
        lowest_sample_size: polls.lowest_sample_size(),
        lowest_effective_sample_size: polls.lowest_effective_sample_size(),
        most_recent_date: polls.most_recent_date(),
        electoral_list_sets: polls.electoral_list_sets().len(),
        warnings: parsed.warnings().len(),
    };

    report.render(mode);

    Ok(true)
}
