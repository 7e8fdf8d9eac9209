//! Library exports for k8stk-cli.
//!
//! The CLI structure is exported so tests and tooling can inspect the
//! command definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
