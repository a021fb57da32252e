//! Alternative response scenario lines: `& •SC: E A:50 B:40 C:10`

use super::keys::KeyResolver;
use super::line::RESPONSE_SCENARIO_MARKER;
use super::metadata::{self, Block};
use super::scenario_markers;
use crate::core::models::{ResponseScenarioBuilder, Warning, WarningKind};

/// A response scenario line, parsed but not built yet
#[derive(Debug, Clone)]
pub struct ResponseScenarioLine {
    /// The response scenario assembled from the line
    pub builder: ResponseScenarioBuilder,
    /// Problems found on the line
    pub warnings: Vec<Warning>,
}

impl ResponseScenarioLine {
    /// Parse a response scenario line
    #[must_use]
    pub fn parse(line: &str, resolver: &KeyResolver<'_>, line_number: usize) -> Self {
        let body = line
            .trim_start()
            .strip_prefix(RESPONSE_SCENARIO_MARKER)
            .unwrap_or(line);
        let (blocks, mut warnings) =
            metadata::dedup_single_valued(metadata::tokenize(body), &[], line_number);
        let mut builder = ResponseScenarioBuilder::new();
        for block in blocks {
            match block {
                Block::Marker { key, value } => {
                    if !scenario_markers::apply_marker(
                        &mut builder,
                        &key,
                        &value,
                        line_number,
                        &mut warnings,
                    ) {
                        warnings.push(Warning::new(
                            line_number,
                            WarningKind::UnknownMetadataKey { key },
                        ));
                    }
                },
                Block::Result { keys, value } => scenario_markers::apply_result(
                    &mut builder,
                    resolver,
                    &keys,
                    &value,
                    line_number,
                    &mut warnings,
                ),
            }
        }
        if !builder.has_results() {
            warnings.push(Warning::new(line_number, WarningKind::ResultsMissing));
        }
        Self { builder, warnings }
    }
}
