//! Read-only services over parsed opinion polls
//!
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`statistics`] - Count polls, scenarios and results per area and year

pub mod statistics;

pub use statistics::{Counts, Statistics, statistics};
