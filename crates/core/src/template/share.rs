//! Preparing a section or document for copy/insert.

use crate::placeholder::scanner;
use crate::template::trimmer;
use serde::Serialize;

/// Result of preparing text for sharing. Ephemeral; returned to the
/// caller per call.
#[derive(Debug, Clone, Serialize)]
pub struct ShareInfo {
    /// The share-ready text.
    pub text: String,
    /// Whether any placeholder content was removed.
    pub was_trimmed: bool,
    /// Whether nothing shareable survived the trim.
    pub empty_after_trim: bool,
}

/// Trim placeholders out of `text` before it is shared.
///
/// Input with no placeholder token is returned byte-identical, so
/// sharing a clean document never reflows it.
pub fn prepare_share(text: &str) -> ShareInfo {
    if scanner::scan(text).is_empty() {
        return ShareInfo {
            text: text.to_string(),
            was_trimmed: false,
            empty_after_trim: text.trim().is_empty(),
        };
    }

    let trimmed = trimmer::trim_placeholders(text);
    let empty_after_trim = trimmed.trim().is_empty();
    ShareInfo { text: trimmed, was_trimmed: true, empty_after_trim }
}
