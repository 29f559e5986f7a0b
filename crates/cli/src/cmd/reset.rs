use dialoguer::Confirm;
use std::path::Path;
use tracing::info;

pub fn run(config: Option<&Path>, file: &Path, yes: bool) {
    let cfg = super::setup("reset", config);

    if file.exists() && !yes {
        let prompt = format!("Overwrite {} with the seed template?", file.display());
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("aborted");
            return;
        }
    }

    let seed = super::seed_template("reset", &cfg);
    super::write_doc("reset", file, &seed);
    info!(file = %file.display(), "reset to seed template");

    println!("OK   prdraft reset");
    println!("file: {}", file.display());
}
