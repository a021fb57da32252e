//! Parser for Rich Opinion Poll Files
//!
//! A file is parsed line by line:
//!
//! - [`line`] classifies each line into one of six kinds
//! - [`metadata`] splits a line into markers and result pairs
//! - one parser per line kind validates what the markers mean
//! - [`RichOpinionPollsFile`] drives it all and collects the warnings
//!
//! Malformed input never aborts a parse. It becomes a
//! [`Warning`](crate::core::models::Warning) on the offending line.

mod candidate_line;
mod electoral_list_line;
mod file;
mod keys;
pub mod line;
pub mod metadata;
mod opinion_poll_line;
mod response_scenario_line;
mod scenario_markers;

pub use candidate_line::CandidateLine;
pub use electoral_list_line::ElectoralListLine;
pub use file::RichOpinionPollsFile;
pub use keys::{KeyResolver, ResultTarget};
pub use line::{CommentLine, LineKind};
pub use opinion_poll_line::OpinionPollLine;
pub use response_scenario_line::ResponseScenarioLine;
