//! Command to validate a kubeconfig file.

use crate::error::CliError;
use crate::utils::{load_document, GlobalOptions};
use clap::Args;
use k8stk::KubeconfigValidator;
use std::path::PathBuf;

/// Validate a kubeconfig file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Kubeconfig file to validate
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let doc = load_document(&self.config)?;

        let issues = KubeconfigValidator::collect_issues(&doc);
        if issues.is_empty() {
            println!("Configuration is valid");
            return Ok(());
        }

        for issue in &issues {
            eprintln!("Validation error: {issue}");
        }
        Err(CliError::SemanticFailure(format!(
            "Configuration validation failed with {} issue(s)",
            issues.len()
        )))
    }
}
