//! Electoral list definition lines
//!
//! `A: AA001 •A: AP •N: Alpha Party •EN: Alpha Party •RU: Партия Альфа •RUR: Partiya Alfa`
//!
//! The key (`A`) is what result pairs in the same file refer to; the id
//! (`AA001`) identifies the electoral list across files.

use std::sync::Arc;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use super::line::{ELECTORAL_LIST_ID, KEY};
use super::metadata::{self, Block};
use crate::core::models::{ElectoralList, ElectoralListAttributes, Warning, WarningKind};
use crate::core::registry::Registries;

/// Ids shorter than this are provisional
const PERMANENT_ID_LENGTH: usize = 8;

static KEY_AND_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<key>{KEY}):\s*(?P<id>{ELECTORAL_LIST_ID})(?P<rest>\s+•.+)$"
    ))
    .expect("valid regex")
});

static LANGUAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<code>[A-Z]{2})(?P<romanized>R)?$").expect("valid regex"));

/// A parsed electoral list definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectoralListLine {
    /// Key used by result pairs in the same file
    pub key: String,
    /// Electoral list id
    pub id: String,
    /// Attributes given on the line
    pub attributes: ElectoralListAttributes,
    /// Problems found on the line
    pub warnings: Vec<Warning>,
}

impl ElectoralListLine {
    /// Parse an electoral list line, `None` if the line isn't one
    #[must_use]
    pub fn parse(line: &str, line_number: usize) -> Option<Self> {
        let captures = KEY_AND_ID.captures(line)?;
        let key = captures.name("key")?.as_str().to_string();
        let id = captures.name("id")?.as_str().to_string();
        if id.len() < PERMANENT_ID_LENGTH {
            warn!("Electoral list ID {id} on line {line_number} is a non-permanent electoral list ID.");
        }
        let rest = captures.name("rest")?.as_str();
        let (blocks, mut warnings) =
            metadata::dedup_single_valued(metadata::tokenize(rest), &[], line_number);
        let mut attributes = ElectoralListAttributes::default();
        for block in blocks {
            match block {
                Block::Marker { key, value } => {
                    if let Some(warning) = apply_marker(&mut attributes, &key, value, line_number) {
                        warnings.push(warning);
                    }
                },
                Block::Result { keys, .. } => warnings.push(Warning::new(
                    line_number,
                    WarningKind::UnknownMetadataKey { key: keys.join("+") },
                )),
            }
        }
        if attributes.abbreviation.is_none() {
            debug!("Electoral list {id} on line {line_number} has no abbreviation.");
        }
        Some(Self {
            key,
            id,
            attributes,
            warnings,
        })
    }

    /// Store the attributes on the registered electoral list and return it
    pub fn update_electoral_list(&self, registries: &Registries) -> Arc<ElectoralList> {
        let list = registries.electoral_list(&self.id);
        list.update(self.attributes.clone());
        list
    }
}

fn apply_marker(
    attributes: &mut ElectoralListAttributes,
    key: &str,
    value: String,
    line_number: usize,
) -> Option<Warning> {
    match key {
        "A" => attributes.abbreviation = Some(value),
        "R" => attributes.romanized_abbreviation = Some(value),
        "N" => attributes.default_name = Some(value),
        _ => {
            let Some(captures) = LANGUAGE_MARKER.captures(key) else {
                return Some(Warning::new(
                    line_number,
                    WarningKind::UnknownMetadataKey {
                        key: key.to_string(),
                    },
                ));
            };
            let code = captures["code"].to_lowercase();
            if captures.name("romanized").is_some() {
                attributes.romanized_names.insert(code, value);
            } else {
                attributes.names.insert(code, value);
            }
        },
    }
    None
}
