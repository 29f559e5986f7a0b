use prdraft_core::section::{merge_insights, SUMMARY_HEADING};
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn run(config: Option<&Path>, file: &Path, insights: Option<&str>) {
    super::setup("merge", config);
    let doc = super::read_doc_or_empty("merge", file);

    let text = match insights {
        Some(s) => s.to_string(),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("FAIL prdraft merge");
                eprintln!("failed to read insights from stdin: {e}");
                std::process::exit(1);
            }
            buf
        }
    };

    let report = merge_insights(&doc, &text);

    if report.changed() {
        super::write_doc("merge", file, &report.doc);
        info!(file = %file.display(), appended = report.appended, "merged insights");
    }

    println!("OK   prdraft merge");
    println!("section: {SUMMARY_HEADING}");
    println!("appended: {}", report.appended);
    println!("duplicates: {}", report.duplicates);
}
