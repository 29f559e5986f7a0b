use prdraft_core::config::loader::{default_config_path, ConfigLoader};
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   prdraft doctor");
            match &rc.config_path {
                Some(p) => println!("config: {}", p.display()),
                None => println!(
                    "config: none found at {}, using defaults",
                    default_config_path().display()
                ),
            }
            match &rc.template_path {
                Some(p) => println!("template: {}", p.display()),
                None => println!("template: built-in default"),
            }
            println!("logging.level: {}", rc.logging.level);
            if let Some(ref file) = rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            println!("engine: prdraft-core v{}", prdraft_core::version());
        }
        Err(e) => {
            println!("FAIL prdraft doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
