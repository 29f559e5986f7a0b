//! Placeholder token detection and reporting.
//!
//! Placeholders are literal stand-in strings the template author is
//! expected to replace before sharing (`ABC-123`, `package@version`).
//! The rule table is fixed configuration; warnings are derived per
//! scan and never persisted.

pub mod rules;
pub mod scanner;

pub use rules::{rule_by_id, PlaceholderRule, RULES};
pub use scanner::{action_text, scan, summary, PlaceholderWarning};
