use prdraft_core::placeholder::{action_text, scan, summary};
use std::path::Path;

use super::output::ScanReport;

pub fn run(config: Option<&Path>, file: &Path, json: bool, strict: bool) {
    super::setup("scan", config);
    let doc = super::read_doc("scan", file);

    let warnings = scan(&doc);

    if json {
        let report = ScanReport {
            warnings: &warnings,
            summary: summary(&warnings),
            action: action_text(&warnings),
        };
        super::output::print_scan_json(&report);
    } else if warnings.is_empty() {
        println!("OK   prdraft scan");
        println!("no unresolved placeholders in {}", file.display());
    } else {
        super::output::print_warnings_table(&warnings);
        println!();
        println!("{}", action_text(&warnings));
    }

    if strict && !warnings.is_empty() {
        std::process::exit(1);
    }
}
