//! Parser configuration
//!
//! Read from an optional TOML file:
//!
//! ```toml
//! [parser]
//! key_resolution = "auto"
//! inherit_scenario_metadata = true
//! ```
//!
//! Missing keys take their defaults. The parser itself never reads files: the
//! binary loads the configuration and hands it over by reference.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// How result keys such as `A` or `A+B` are resolved to electoral lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyResolution {
    /// `declared` if the file declares electoral lists or candidates, `registry` otherwise
    #[default]
    Auto,
    /// Only keys declared in the same file are known
    Declared,
    /// Every key is an electoral list id, created on first use
    Registry,
}

/// Settings that change how a file is parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How result keys are resolved
    #[serde(default)]
    pub key_resolution: KeyResolution,
    /// Whether alternative scenarios inherit area, scope, sample size,
    /// excluded share and unit from the main scenario
    #[serde(default = "default_inherit_scenario_metadata")]
    pub inherit_scenario_metadata: bool,
}

const fn default_inherit_scenario_metadata() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            key_resolution: KeyResolution::default(),
            inherit_scenario_metadata: default_inherit_scenario_metadata(),
        }
    }
}

/// Layout of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    parser: ParserConfig,
}

impl ParserConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: ConfigFile = toml::from_str(content).context("invalid parser configuration")?;
        Ok(file.parser)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load a configuration file if one is given, the defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Serialize to TOML text, as it would appear in a configuration file
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        let file = ConfigFile {
            parser: self.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }
}
