//! Blank-line-delimited section model over a raw template buffer.

pub mod mutator;
pub mod splitter;
pub mod types;

pub use mutator::{append_to_section, merge_insights, SUMMARY_HEADING};
pub use splitter::{blocks, headings, section, section_body};
pub use types::{AppendOutcome, AppendResult, MergeReport, Placement};
