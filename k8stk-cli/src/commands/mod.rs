//! CLI command implementations.
//!
//! - `merge`: Merge kubeconfig files, renaming colliding entries
//! - `remove`: Remove a context and the cluster and user it uses
//! - `validate`: Check a kubeconfig file for consistency
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod merge;
pub mod remove;
pub mod validate;

pub use completions::CompletionsCommand;
pub use merge::MergeCommand;
pub use remove::RemoveCommand;
pub use validate::ValidateCommand;
