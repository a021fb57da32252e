//! Check a poll file for warnings

use std::path::Path;

use ropf::ParserConfig;
use ropf::output::{CheckReport, OutputMode, WarningEntry};

/// Parse a poll file and report its warnings; passes when there are none
pub fn check(path: &Path, config: &ParserConfig, mode: OutputMode) -> anyhow::Result<bool> {
    let parsed = super::parse_file(path, config)?;

    let report = CheckReport {
        file: path.display().to_string(),
        passed: parsed.is_clean(),
        opinion_polls: parsed.opinion_polls().len(),
        comment_lines: parsed.comment_lines().len(),
        warnings: parsed.warnings().iter().map(WarningEntry::from).collect(),
    };

    report.render(mode);

    Ok(report.passed)
}
