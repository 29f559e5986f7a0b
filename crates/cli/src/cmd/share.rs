use prdraft_core::section::section;
use prdraft_core::template::prepare_share;
use std::path::Path;

pub fn run(config: Option<&Path>, file: &Path, heading: Option<&str>) {
    super::setup("share", config);
    let doc = super::read_doc("share", file);

    let text = match heading {
        Some(h) => match section(&doc, h) {
            Some(block) => block,
            None => super::exit_section_not_found(h, file, &doc),
        },
        None => doc.as_str(),
    };

    let info = prepare_share(text);

    if info.empty_after_trim {
        eprintln!("FAIL prdraft share");
        eprintln!("nothing shareable: only placeholder content remained");
        std::process::exit(1);
    }

    if info.was_trimmed {
        eprintln!("note: unresolved placeholders were removed before sharing");
    }

    // Share targets (clipboards, chat inputs) want a final newline.
    print!("{}", info.text);
    if !info.text.ends_with('\n') {
        println!();
    }
}
