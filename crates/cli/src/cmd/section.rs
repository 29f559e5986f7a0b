use prdraft_core::section::{section, section_body};
use std::path::Path;

pub fn run(config: Option<&Path>, file: &Path, heading: &str, body_only: bool) {
    super::setup("section", config);
    let doc = super::read_doc("section", file);

    let found =
        if body_only { section_body(&doc, heading) } else { section(&doc, heading) };

    match found {
        Some(text) => println!("{text}"),
        None => super::exit_section_not_found(heading, file, &doc),
    }
}
