//! Remove command implementation.
//!
//! Removes a context from a kubeconfig file together with the cluster and
//! user it references, moving `current-context` when needed.

use crate::error::CliError;
use crate::utils::{load_document, write_document, GlobalOptions, OutputFormat};
use clap::{Args, ValueEnum};
use k8stk::{apply_plan, CascadePolicy, RemoveOptions, RemovePlan};
use std::path::PathBuf;

/// When the referenced cluster and user are removed with the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CascadeArg {
    /// Only when no other context still references them
    #[default]
    Unreferenced,
    /// Always, even if another context still references them
    Always,
}

impl From<CascadeArg> for CascadePolicy {
    fn from(arg: CascadeArg) -> Self {
        match arg {
            CascadeArg::Unreferenced => CascadePolicy::Unreferenced,
            CascadeArg::Always => CascadePolicy::Always,
        }
    }
}

/// Remove a context from a kubeconfig file.
#[derive(Args)]
pub struct RemoveCommand {
    /// File to write the edited document to (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// The context name to remove
    #[arg(short, long, value_name = "CONTEXT_NAME")]
    pub context: String,

    /// When to remove the context's cluster and user
    #[arg(long, value_enum, default_value_t = CascadeArg::Unreferenced)]
    pub cascade: CascadeArg,

    /// Show what would be removed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Kubeconfig file to edit
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut doc = load_document(&self.config)?;

        let options = RemoveOptions::new(self.context).with_cascade(self.cascade.into());
        let plan = RemovePlan::new(options).build_plan(&doc)?;

        for warning in &plan.warnings {
            global.logger.warn(warning);
        }

        if self.dry_run {
            if !global.quiet() {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
            }
            return Ok(());
        }

        apply_plan(&mut doc, &plan);
        global
            .logger
            .info(&format!("{} ({} action(s))", plan.description, plan.len()));

        write_document(&doc, self.output.as_ref(), self.format, global)
    }
}
