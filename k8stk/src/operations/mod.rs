//! Document operations: merging and context removal.
//!
//! Merging folds documents together with [`KubeconfigMerger`], which runs a
//! [`CollisionResolver`] per incoming document. Removal follows a
//! plan-then-apply pattern: [`RemovePlan`] inspects the document and yields
//! an [`OperationPlan`], and [`apply_plan`] performs it. Planning never
//! mutates, which gives the CLI its dry-run mode and keeps failed removals
//! side-effect free.
//!
//! # Examples
//!
//! ```
//! use k8stk::kubeconfig::codec;
//! use k8stk::{remove_context, RemoveOptions};
//!
//! let mut doc = codec::parse(
//!     "clusters: [{name: c1}]\n\
//!      users: [{name: u1}]\n\
//!      contexts: [{name: only, context: {cluster: c1, user: u1}}]\n\
//!      current-context: only\n",
//! )
//! .unwrap();
//!
//! // The only context is current, so there is nothing left to promote.
//! assert!(remove_context(&mut doc, RemoveOptions::new("only")).is_err());
//! assert_eq!(doc.contexts.len(), 1);
//! ```

pub mod merge;
pub mod plan;
pub mod remove;
pub mod resolve;

#[cfg(test)]
mod proptests;

pub use merge::{KubeconfigMerger, MergeOutcome, SourcedDocument};
pub use plan::{OperationPlan, PlanAction};
pub use remove::{apply_plan, remove_context, CascadePolicy, RemoveOptions, RemovePlan};
pub use resolve::{Collision, CollisionResolver, EntityKind, ResolveReport};
