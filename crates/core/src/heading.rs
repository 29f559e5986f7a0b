//! Heading canonicalization for section-identity comparisons.
//!
//! Headings in this document format are bold-wrapped lines
//! (`**Summary**`). Normalization is used exclusively to compare
//! headings for equality; it never rewrites document content.

/// The markdown bold delimiter character used by heading lines.
pub const BOLD_MARKER: char = '*';

/// Canonicalize a heading line: strip every bold marker, trim, lowercase.
///
/// `normalize("**Summary**")`, `normalize("summary")` and
/// `normalize("  Summary  ")` all yield `"summary"`.
pub fn normalize(line: &str) -> String {
    line.replace(BOLD_MARKER, "").trim().to_lowercase()
}

/// Whether a line is a heading line: trimmed, wrapped in `**...**`,
/// with non-empty inner text.
pub fn is_heading(line: &str) -> bool {
    let t = line.trim();
    t.len() > 4 && t.starts_with("**") && t.ends_with("**") && !normalize(t).is_empty()
}
