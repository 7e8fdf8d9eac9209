//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: global options,
//! the output format flag, and reading and writing documents.

use crate::error::CliError;
use clap::ValueEnum;
use k8stk::kubeconfig::codec;
use k8stk::{DocumentFormat, Kubeconfig, KubeconfigLoader, LogLevel, Logger};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Logger configured from `--verbose` and `--quiet`.
    pub logger: Logger,
}

impl GlobalOptions {
    /// Create global options around an initialized logger.
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// True when non-essential output should be suppressed.
    pub fn quiet(&self) -> bool {
        !self.logger.enabled(LogLevel::Normal)
    }

    /// True when verbose output is enabled.
    pub fn verbose(&self) -> bool {
        self.logger.enabled(LogLevel::Verbose)
    }
}

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML document
    #[default]
    Yaml,
    /// Pretty-printed JSON document
    Json,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => DocumentFormat::Yaml,
            OutputFormat::Json => DocumentFormat::Json,
        }
    }
}

/// Load a single kubeconfig document.
///
/// A missing file is reported as an invalid argument rather than a bare
/// I/O failure.
pub fn load_document(path: &Path) -> Result<Kubeconfig, CliError> {
    ensure_exists(path)?;
    Ok(KubeconfigLoader::load(path)?)
}

/// Reject an input path that does not exist as an invalid argument.
pub fn ensure_exists(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )))
    }
}

/// Write `doc` to `output`, or to stdout when no output file is given.
pub fn write_document(
    doc: &Kubeconfig,
    output: Option<&PathBuf>,
    format: OutputFormat,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    match output {
        Some(path) => {
            if !global.quiet() {
                eprintln!("Writing the output to {}", path.display());
            }
            KubeconfigLoader::write(doc, path, format.into())?;
        }
        None => {
            let text = codec::serialize(doc, format.into())?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
