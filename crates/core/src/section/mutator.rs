//! Appending content into named sections without disturbing the rest
//! of the document.

use crate::heading;
use crate::section::splitter;
use crate::section::types::{AppendOutcome, AppendResult, MergeReport, Placement};
use tracing::debug;

/// The section the insights merge targets.
pub const SUMMARY_HEADING: &str = "**Summary**";

/// Append `line` to the section named by `heading_line`, creating the
/// section when absent.
///
/// Policy:
/// 1. An empty or whitespace-only `line` is a no-op (`Unavailable`).
/// 2. An empty document becomes a single new section,
///    `heading\nline\n`.
/// 3. When a section with a matching normalized heading exists and its
///    body already contains `line` as a substring, the input document
///    is returned byte-identical (`Duplicate`); otherwise `line` is
///    appended to that section's body.
/// 4. When no section matches, a new `heading\nline` section is created
///    at `placement` (start or end of the document).
///
/// Any document that changes is re-joined with blank-line separators
/// and exactly one trailing newline.
pub fn append_to_section(
    doc: &str,
    heading_line: &str,
    line: &str,
    placement: Placement,
) -> AppendResult {
    if line.trim().is_empty() {
        return AppendResult { doc: doc.to_string(), outcome: AppendOutcome::Unavailable };
    }

    if doc.trim().is_empty() {
        debug!(heading = heading_line, "seeding empty document");
        return AppendResult {
            doc: format!("{}\n{line}\n", heading_line.trim()),
            outcome: AppendOutcome::Appended,
        };
    }

    let wanted = heading::normalize(heading_line);
    let mut rebuilt: Vec<String> = Vec::new();
    let mut found = false;

    for block in splitter::blocks(doc) {
        let first = block.lines().next().unwrap_or("");
        if !found && !wanted.is_empty() && heading::normalize(first) == wanted {
            found = true;
            let body = block.split_once('\n').map_or("", |(_, rest)| rest);
            if body.contains(line) {
                debug!(heading = heading_line, "line already present, leaving untouched");
                return AppendResult {
                    doc: doc.to_string(),
                    outcome: AppendOutcome::Duplicate,
                };
            }
            rebuilt.push(format!("{block}\n{line}"));
        } else {
            rebuilt.push(block.to_string());
        }
    }

    if !found {
        debug!(heading = heading_line, ?placement, "creating missing section");
        let fresh = format!("{}\n{line}", heading_line.trim());
        match placement {
            Placement::Start => rebuilt.insert(0, fresh),
            Placement::End => rebuilt.push(fresh),
        }
    }

    let mut out = rebuilt.join("\n\n").trim_end().to_string();
    out.push('\n');
    AppendResult { doc: out, outcome: AppendOutcome::Appended }
}

/// Merge free-form insight lines into the `**Summary**` section.
///
/// Each non-empty trimmed line of `insights` is appended idempotently.
/// A Summary section created by this flow is placed at the start of
/// the document, so the summary leads.
pub fn merge_insights(doc: &str, insights: &str) -> MergeReport {
    let mut current = doc.to_string();
    let mut appended = 0;
    let mut duplicates = 0;

    for line in insights.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let result = append_to_section(&current, SUMMARY_HEADING, line, Placement::Start);
        match result.outcome {
            AppendOutcome::Appended => {
                appended += 1;
                current = result.doc;
            }
            AppendOutcome::Duplicate => duplicates += 1,
            AppendOutcome::Unavailable => {}
        }
    }

    MergeReport { doc: current, appended, duplicates }
}
