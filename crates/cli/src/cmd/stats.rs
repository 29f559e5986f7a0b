use prdraft_core::template::section_stats;
use std::path::Path;

pub fn run(config: Option<&Path>, file: &Path, json: bool) {
    super::setup("stats", config);
    let doc = super::read_doc("stats", file);

    let stats = section_stats(&doc);

    if json {
        super::output::print_stats_json(&stats);
    } else {
        super::output::print_stats_table(&stats);
    }
}
