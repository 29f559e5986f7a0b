use prdraft_core::section::headings;
use std::path::Path;

pub fn run(config: Option<&Path>, file: &Path, force: bool) {
    let cfg = super::setup("init", config);

    if file.exists() && !force {
        eprintln!("FAIL prdraft init");
        eprintln!("refusing to overwrite {}; pass --force to replace it", file.display());
        std::process::exit(1);
    }

    let seed = super::seed_template("init", &cfg);
    super::write_doc("init", file, &seed);

    println!("OK   prdraft init");
    println!("file: {}", file.display());
    println!("sections: {}", headings(&seed).len());
}
