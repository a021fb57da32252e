//! Domain models for ropf
//!
//! Pure data structures with no I/O dependencies.
//!
//! - Value types: [`DecimalNumber`], [`ResultValue`], [`SampleSize`],
//!   [`DateMonthOrYear`], [`DateOrMonth`], [`ElectionDate`], [`Scope`], [`Unit`]
//! - Entities: [`ElectoralList`], [`Candidate`], [`ElectoralListCombination`]
//! - Aggregates: [`ResponseScenario`], [`OpinionPoll`], [`OpinionPolls`]
//! - Diagnostics: [`Warning`]

mod candidate;
mod dates;
mod decimal_number;
mod election_date;
mod electoral_list;
mod error;
mod opinion_poll;
mod opinion_polls;
mod response_scenario;
mod result_value;
mod sample_size;
mod scope;
mod warning;

pub use candidate::{Candidate, CandidateAttributes};
pub use dates::{DateMonthOrYear, DateOrMonth, Granularity, YearMonth};
pub use decimal_number::DecimalNumber;
pub use election_date::{ElectionDate, Qualifier};
pub use electoral_list::{ElectoralList, ElectoralListAttributes, ElectoralListCombination};
pub use error::ParseError;
pub use opinion_poll::{OpinionPoll, OpinionPollBuilder};
pub use opinion_polls::OpinionPolls;
pub use response_scenario::{ElectoralListSet, ResponseScenario, ResponseScenarioBuilder};
pub use result_value::{Precision, ResultValue};
pub use sample_size::SampleSize;
pub use scope::{Scope, Unit};
pub use warning::{Warning, WarningKind};
