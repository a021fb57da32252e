//! Generic metadata grammar
//!
//! Splits a line into blocks: metadata markers (`•KEY: value`) and result
//! pairs (`A+B:value`). A block's value runs until the whitespace in front of
//! the next block's key. No key is rejected here: the line parsers decide
//! which markers mean something to them.

use std::collections::HashSet;

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::line::{KEY, METADATA_KEY};
use crate::core::models::{Warning, WarningKind};

static BLOCK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:^\s*|\s+)(?:•(?P<marker>{METADATA_KEY})|(?P<keys>{KEY}(?:\+{KEY})*)):"
    ))
    .expect("valid regex")
});

/// One block of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `•KEY: value`
    Marker {
        /// Metadata key without the marker glyph
        key: String,
        /// Trimmed value
        value: String,
    },
    /// `A+B:value`
    Result {
        /// Electoral list or candidate keys, in written order
        keys: Vec<String>,
        /// Trimmed value
        value: String,
    },
}

/// Split text into marker and result blocks
#[must_use]
pub fn tokenize(text: &str) -> Vec<Block> {
    let starts: Vec<_> = BLOCK_START.captures_iter(text).collect();
    let mut blocks = Vec::with_capacity(starts.len());
    for (index, captures) in starts.iter().enumerate() {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let value_end = starts
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let value = text[whole.end()..value_end].trim().to_string();
        if let Some(marker) = captures.name("marker") {
            trace!("Processing metadata field {}.", marker.as_str());
            blocks.push(Block::Marker {
                key: marker.as_str().to_string(),
                value,
            });
        } else if let Some(keys) = captures.name("keys") {
            trace!("Processing result key {}.", keys.as_str());
            blocks.push(Block::Result {
                keys: keys.as_str().split('+').map(ToString::to_string).collect(),
                value,
            });
        }
    }
    blocks
}

/// Keep the first occurrence of every single-valued marker
///
/// Markers listed in `repeatable` may occur any number of times. Later
/// occurrences of any other marker are dropped with a warning.
#[must_use]
pub fn dedup_single_valued(
    blocks: Vec<Block>,
    repeatable: &[&str],
    line_number: usize,
) -> (Vec<Block>, Vec<Warning>) {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    let mut kept = Vec::with_capacity(blocks.len());
    for block in blocks {
        if let Block::Marker { key, .. } = &block {
            if !repeatable.contains(&key.as_str()) && !seen.insert(key.clone()) {
                warnings.push(Warning::new(
                    line_number,
                    WarningKind::SingleValueMetadataKeyOccurringMoreThanOnce { key: key.clone() },
                ));
                continue;
            }
        }
        kept.push(block);
    }
    (kept, warnings)
}
