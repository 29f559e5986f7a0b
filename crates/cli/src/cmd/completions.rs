use clap_complete::{generate, Shell};

pub fn run(shell: Shell, command: &mut clap::Command) {
    generate(shell, command, "prdraft", &mut std::io::stdout());
}
