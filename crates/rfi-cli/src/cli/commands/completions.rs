//! `rfi completions <shell>` – generate shell completions.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

pub fn run_completions(shell: Shell) {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
