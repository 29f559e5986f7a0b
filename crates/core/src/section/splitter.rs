//! Splitting a document into blocks and looking sections up by heading.

use crate::heading;
use regex::Regex;
use std::sync::LazyLock;

/// A run of two-or-more newlines separates blocks.
static BLOCK_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Split a document into blank-line-delimited blocks, in document
/// order. Blocks are trimmed; empty blocks are dropped.
pub fn blocks(doc: &str) -> Vec<&str> {
    BLOCK_SEPARATOR.split(doc).map(str::trim).filter(|b| !b.is_empty()).collect()
}

/// The full text of the section whose normalized heading equals the
/// normalized target, or `None` when no block matches.
///
/// On duplicate headings the earliest section in the document wins.
pub fn section<'a>(doc: &'a str, target: &str) -> Option<&'a str> {
    let wanted = heading::normalize(target);
    if wanted.is_empty() {
        return None;
    }
    blocks(doc).into_iter().find(|block| heading::normalize(first_line(block)) == wanted)
}

/// The body of a section: everything after its heading line, trimmed.
///
/// `Some("")` for a heading-only section, `None` when the section is
/// absent.
pub fn section_body<'a>(doc: &'a str, target: &str) -> Option<&'a str> {
    section(doc, target).map(|block| match block.split_once('\n') {
        Some((_, rest)) => rest.trim(),
        None => "",
    })
}

/// All heading lines in the document, in order. Blocks that do not
/// start with a heading line are skipped.
pub fn headings(doc: &str) -> Vec<&str> {
    blocks(doc)
        .into_iter()
        .map(first_line)
        .filter(|line| heading::is_heading(line))
        .map(str::trim)
        .collect()
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or("")
}
