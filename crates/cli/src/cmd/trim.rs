use prdraft_core::section::headings;
use prdraft_core::template::trim_placeholders;
use std::path::Path;
use tracing::info;

pub fn run(config: Option<&Path>, file: &Path, to_stdout: bool) {
    super::setup("trim", config);
    let doc = super::read_doc("trim", file);

    let trimmed = trim_placeholders(&doc);

    if to_stdout {
        print!("{trimmed}");
        return;
    }

    if trimmed == doc {
        println!("OK   prdraft trim");
        println!("nothing to trim");
        return;
    }

    super::write_doc("trim", file, &trimmed);
    info!(file = %file.display(), "trimmed placeholders");

    println!("OK   prdraft trim");
    println!("file: {}", file.display());
    println!("sections: {} -> {}", headings(&doc).len(), headings(&trimmed).len());
}
