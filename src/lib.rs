//! ropf - Parser and validator for Rich Opinion Poll Files
//!
//! This library turns the line-oriented ROPF text format into a validated,
//! queryable in-memory model of opinion polls, collecting line-level
//! warnings for every malformed or incomplete piece of input.

// Warn on all clippy lints in this crate
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod parser;

pub use crate::config::{KeyResolution, ParserConfig};
pub use crate::core::models::{OpinionPoll, ResponseScenario, Warning, WarningKind};
pub use crate::core::registry::Registries;
pub use crate::parser::RichOpinionPollsFile;
