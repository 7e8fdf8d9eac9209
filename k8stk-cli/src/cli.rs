//! CLI structure and command definitions.

use crate::commands::{CompletionsCommand, MergeCommand, RemoveCommand, ValidateCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for merging kubeconfig files and removing contexts.
#[derive(Parser)]
#[command(name = "k8stk")]
#[command(version, about = "Merge and edit kubeconfig files", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Merge multiple kubeconfig files
    Merge(MergeCommand),

    /// Remove a context from a kubeconfig file
    Remove(RemoveCommand),

    /// Validate a kubeconfig file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
