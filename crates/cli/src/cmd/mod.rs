pub mod append;
pub mod completions;
pub mod doctor;
pub mod init;
pub mod merge;
pub mod output;
pub mod reset;
pub mod scan;
pub mod section;
pub mod share;
pub mod stats;
pub mod trim;

use prdraft_core::config::loader::{default_config_path, ConfigLoader};
use prdraft_core::config::types::ResolvedConfig;
use prdraft_core::template::DEFAULT_TEMPLATE;
use std::fs;
use std::path::Path;

/// Load the resolved config and wire logging up, or exit.
pub fn setup(cmd: &str, config: Option<&Path>) -> ResolvedConfig {
    let cfg = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL prdraft {cmd}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&cfg);
    cfg
}

/// The seed template: the configured override file when set, the
/// built-in default otherwise.
pub fn seed_template(cmd: &str, cfg: &ResolvedConfig) -> String {
    match &cfg.template_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("FAIL prdraft {cmd}");
                eprintln!("failed to read template override {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => DEFAULT_TEMPLATE.to_string(),
    }
}

/// Read the document file, or exit.
pub fn read_doc(cmd: &str, file: &Path) -> String {
    match fs::read_to_string(file) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("FAIL prdraft {cmd}");
            eprintln!("failed to read {}: {e}", file.display());
            eprintln!("Hint: `prdraft init {}` creates a fresh template.", file.display());
            std::process::exit(1);
        }
    }
}

/// Read the document file, treating a missing file as an empty
/// document (mutating commands may create it).
pub fn read_doc_or_empty(cmd: &str, file: &Path) -> String {
    if file.exists() {
        read_doc(cmd, file)
    } else {
        String::new()
    }
}

/// Write the document file, or exit.
pub fn write_doc(cmd: &str, file: &Path, doc: &str) {
    if let Err(e) = fs::write(file, doc) {
        eprintln!("FAIL prdraft {cmd}");
        eprintln!("failed to write {}: {e}", file.display());
        std::process::exit(1);
    }
}

/// "Section not found" recovery: list what is addressable, then exit.
pub fn exit_section_not_found(heading: &str, file: &Path, doc: &str) -> ! {
    eprintln!("Section not found: '{heading}'");
    let available = prdraft_core::section::headings(doc);
    if available.is_empty() {
        eprintln!("No sections in {}.", file.display());
    } else {
        eprintln!("Available sections in {}:", file.display());
        for h in available {
            eprintln!("  - {h}");
        }
    }
    std::process::exit(1);
}
