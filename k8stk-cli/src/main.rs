//! Main entry point for the k8stk CLI.
//!
//! This is the command-line interface for editing kubeconfig files:
//! - `merge`: Merge several kubeconfig files into one
//! - `remove`: Remove a context and the entries it references
//! - `validate`: Check a kubeconfig file for consistency
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = k8stk::init_logger(cli.verbose, cli.quiet);
    let global = GlobalOptions::new(logger);

    let result = match cli.command {
        cli::Command::Merge(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
