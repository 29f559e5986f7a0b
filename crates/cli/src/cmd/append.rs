use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use prdraft_core::section::{append_to_section, AppendOutcome, Placement};

use chrono::Local;
use regex::Regex;
use tracing::info;

pub fn run(config: Option<&Path>, file: &Path, heading: &str, line: &str, placement: Placement) {
    super::setup("append", config);
    let doc = super::read_doc_or_empty("append", file);

    let rendered = render_vars(line);
    let result = append_to_section(&doc, heading, &rendered, placement);

    match result.outcome {
        AppendOutcome::Appended => {
            super::write_doc("append", file, &result.doc);
            info!(file = %file.display(), heading, "appended line");
            println!("OK   prdraft append");
            println!("file: {}", file.display());
            println!("section: {heading}");
            println!("outcome: appended");
        }
        AppendOutcome::Duplicate => {
            println!("OK   prdraft append");
            println!("section: {heading}");
            println!("outcome: duplicate (section already contains this line)");
        }
        AppendOutcome::Unavailable => {
            eprintln!("FAIL prdraft append");
            eprintln!("nothing to append: the line is empty");
            std::process::exit(1);
        }
    }
}

static VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-zA-Z0-9_]+)\}\}").expect("var pattern is valid"));

fn render_vars(line: &str) -> String {
    let now = Local::now();
    let mut ctx: HashMap<&str, String> = HashMap::new();
    ctx.insert("date", now.format("%Y-%m-%d").to_string());
    ctx.insert("time", now.format("%H:%M").to_string());
    ctx.insert("datetime", now.to_rfc3339());

    VAR_PATTERN.replace_all(line, |caps: &regex::Captures<'_>| {
        let key = &caps[1];
        ctx.get(key).cloned().unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}
