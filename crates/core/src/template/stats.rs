//! Per-section statistics, derived on demand.

use crate::heading;
use crate::section::splitter;
use serde::Serialize;

/// Maximum preview length, in characters.
pub const PREVIEW_CHARS: usize = 60;

/// Word/character counts and a short preview for one section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStats {
    /// The heading line as written in the document.
    pub heading: String,
    /// Whitespace-separated words in the body.
    pub words: usize,
    /// Characters in the trimmed body.
    pub chars: usize,
    /// First non-empty body line, truncated.
    pub preview: String,
}

/// Statistics for every heading-led section, in document order.
/// Blocks without a heading first line are skipped.
pub fn section_stats(doc: &str) -> Vec<SectionStats> {
    splitter::blocks(doc)
        .into_iter()
        .filter_map(|block| {
            let first = block.lines().next()?;
            if !heading::is_heading(first) {
                return None;
            }
            let body = block.split_once('\n').map_or("", |(_, rest)| rest).trim();
            Some(SectionStats {
                heading: first.trim().to_string(),
                words: body.split_whitespace().count(),
                chars: body.chars().count(),
                preview: preview_of(body),
            })
        })
        .collect()
}

fn preview_of(body: &str) -> String {
    let line = body.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if line.chars().count() <= PREVIEW_CHARS {
        line.to_string()
    } else {
        let cut: String = line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    }
}
