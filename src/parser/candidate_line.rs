//! Candidate definition lines: `JD: AA0001B •A: JD •N: John Doe`

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use super::line::{CANDIDATE_ID, KEY};
use super::metadata::{self, Block};
use crate::core::models::{Candidate, CandidateAttributes, Warning, WarningKind};
use crate::core::registry::Registries;

static KEY_AND_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<key>{KEY}):\s*(?P<id>{CANDIDATE_ID})(?P<rest>\s+•.+)$"
    ))
    .expect("valid regex")
});

/// A parsed candidate definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    /// Key used by result pairs in the same file
    pub key: String,
    /// Candidate id
    pub id: String,
    /// Attributes given on the line
    pub attributes: CandidateAttributes,
    /// Problems found on the line
    pub warnings: Vec<Warning>,
}

impl CandidateLine {
    /// Parse a candidate line, `None` if the line isn't one
    #[must_use]
    pub fn parse(line: &str, line_number: usize) -> Option<Self> {
        let captures = KEY_AND_ID.captures(line)?;
        let rest = captures.name("rest")?.as_str();
        let (blocks, mut warnings) =
            metadata::dedup_single_valued(metadata::tokenize(rest), &[], line_number);
        let mut attributes = CandidateAttributes::default();
        for block in blocks {
            let unknown_key = match block {
                Block::Marker { key, value } => match key.as_str() {
                    "A" => {
                        attributes.abbreviation = Some(value);
                        continue;
                    },
                    "N" => {
                        attributes.name = Some(value);
                        continue;
                    },
                    "R" => {
                        attributes.romanized_name = Some(value);
                        continue;
                    },
                    _ => key,
                },
                Block::Result { keys, .. } => keys.join("+"),
            };
            warnings.push(Warning::new(
                line_number,
                WarningKind::UnknownMetadataKey { key: unknown_key },
            ));
        }
        Some(Self {
            key: captures.name("key")?.as_str().to_string(),
            id: captures.name("id")?.as_str().to_string(),
            attributes,
            warnings,
        })
    }

    /// Store the attributes on the registered candidate and return it
    pub fn update_candidate(&self, registries: &Registries) -> Arc<Candidate> {
        let candidate = registries.candidate(&self.id);
        candidate.update(self.attributes.clone());
        candidate
    }
}
