//! Shared output formatting for reporting commands.

use prdraft_core::placeholder::PlaceholderWarning;
use prdraft_core::template::SectionStats;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// JSON envelope for `scan --json`.
#[derive(Serialize)]
pub struct ScanReport<'a> {
    pub warnings: &'a [PlaceholderWarning],
    pub summary: String,
    pub action: String,
}

/// Print a scan report as JSON.
pub fn print_scan_json(report: &ScanReport<'_>) {
    println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
}

#[derive(Tabled)]
struct WarningRow {
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "COUNT")]
    count: usize,
    #[tabled(rename = "EXAMPLE")]
    example: &'static str,
    #[tabled(rename = "GUIDANCE")]
    guidance: &'static str,
}

/// Print placeholder warnings as a table.
pub fn print_warnings_table(warnings: &[PlaceholderWarning]) {
    let rows: Vec<WarningRow> = warnings
        .iter()
        .map(|w| WarningRow {
            id: w.rule.id,
            count: w.count,
            example: w.rule.example,
            guidance: w.rule.guidance,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{table}");
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "SECTION")]
    heading: String,
    #[tabled(rename = "WORDS")]
    words: usize,
    #[tabled(rename = "CHARS")]
    chars: usize,
    #[tabled(rename = "PREVIEW")]
    preview: String,
}

/// Print section statistics as a table.
pub fn print_stats_table(stats: &[SectionStats]) {
    if stats.is_empty() {
        println!("(no sections found)");
        return;
    }
    let rows: Vec<StatsRow> = stats
        .iter()
        .map(|s| StatsRow {
            heading: s.heading.clone(),
            words: s.words,
            chars: s.chars,
            preview: s.preview.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    println!("{table}");
}

/// Print section statistics as JSON.
pub fn print_stats_json(stats: &[SectionStats]) {
    println!("{}", serde_json::to_string_pretty(stats).unwrap_or_default());
}
