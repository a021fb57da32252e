//! Command implementations

mod check;
mod summary;

use std::fs;
use std::path::Path;

use anyhow::Context;
use ropf::{ParserConfig, Registries, RichOpinionPollsFile};

pub use check::check;
pub use summary::summary;

/// Read and parse a poll file with fresh registries
fn parse_file(path: &Path, config: &ParserConfig) -> anyhow::Result<RichOpinionPollsFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let registries = Registries::new();
    Ok(RichOpinionPollsFile::parse_str(&content, &registries, config))
}
