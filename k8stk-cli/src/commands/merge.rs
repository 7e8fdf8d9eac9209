//! Merge command implementation.
//!
//! The first file is the base. Every later file is folded into it in
//! argument order, and colliding names are renamed with a numeric suffix.

use crate::error::CliError;
use crate::utils::{ensure_exists, write_document, GlobalOptions, OutputFormat};
use clap::Args;
use k8stk::{KubeconfigLoader, KubeconfigMerger, KubeconfigValidator, SourcedDocument};
use std::path::PathBuf;

/// Merge multiple kubeconfig files.
#[derive(Args)]
pub struct MergeCommand {
    /// File to write the merged document to (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Kubeconfig files to merge; the first one is the base
    #[arg(value_name = "CONFIG", num_args = 2.., required = true)]
    pub configs: Vec<PathBuf>,
}

impl MergeCommand {
    /// Execute the merge command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.configs.len() < 2 {
            return Err(CliError::InvalidArguments(
                "at least two files are required".to_string(),
            ));
        }
        for path in &self.configs {
            ensure_exists(path)?;
        }

        // Load everything before merging so a bad file aborts with no output
        let mut documents = KubeconfigLoader::load_all(self.configs.as_slice())?.into_iter();
        let base = documents.next().unwrap_or_default();
        let incomings: Vec<_> = self.configs[1..]
            .iter()
            .zip(documents)
            .map(|(path, doc)| SourcedDocument::new(path.display().to_string(), doc))
            .collect();

        let merger = KubeconfigMerger::new().with_logger(global.logger);
        let outcome = merger.merge(base, incomings);

        if global.verbose() {
            global.logger.info(&format!(
                "Merged {} file(s) with {} rename(s)",
                self.configs.len(),
                outcome.collisions.len()
            ));
            for issue in KubeconfigValidator::collect_issues(&outcome.document) {
                global.logger.warn(&format!("Merged document: {issue}"));
            }
        }

        write_document(
            &outcome.document,
            self.output.as_ref(),
            self.format,
            global,
        )
    }
}
