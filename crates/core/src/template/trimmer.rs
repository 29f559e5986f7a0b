//! Removing placeholder lines and the sections they leave empty.

use crate::heading;
use crate::placeholder::rules::RULES;
use crate::section::splitter;
use regex::Regex;
use std::sync::LazyLock;

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Remove every line bearing a placeholder token, then drop sections
/// left heading-only.
///
/// 1. Lines whose trimmed content contains any rule token as a
///    substring are dropped.
/// 2. Runs of three-or-more newlines collapse to exactly two.
/// 3. Sections whose first line is a heading and whose remaining lines
///    are all blank are removed; non-heading content is always kept.
/// 4. Remaining sections re-join with blank-line separators and one
///    trailing newline. An empty result stays `""`.
///
/// Idempotent: trimming never introduces a placeholder token, so a
/// second pass is a no-op.
pub fn trim_placeholders(doc: &str) -> String {
    let kept: Vec<&str> = doc
        .lines()
        .filter(|line| {
            let t = line.trim();
            !RULES.iter().any(|rule| t.contains(rule.token))
        })
        .collect();

    let joined = kept.join("\n");
    let collapsed = BLANK_RUN.replace_all(&joined, "\n\n");

    let mut sections: Vec<&str> = Vec::new();
    for block in splitter::blocks(&collapsed) {
        let mut lines = block.lines();
        let first = lines.next().unwrap_or("");
        let heading_only = heading::is_heading(first) && lines.all(|l| l.trim().is_empty());
        if !heading_only {
            sections.push(block);
        }
    }

    if sections.is_empty() {
        return String::new();
    }
    let mut out = sections.join("\n\n").trim_end().to_string();
    out.push('\n');
    out
}
