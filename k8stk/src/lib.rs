#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # k8stk
//!
//! A library for consolidating and editing kubeconfig documents.
//!
//! Two operations are provided on top of a shared document model:
//!
//! - **merge**: fold any number of kubeconfig documents into a base document,
//!   renaming colliding clusters, users and contexts while keeping every
//!   context reference valid.
//! - **remove**: drop a named context from a document, cascading removal of
//!   the cluster and user it pointed at and repairing `current-context`.
//!
//! ## Core Types
//!
//! - [`Kubeconfig`]: The in-memory document model
//! - [`KubeconfigMerger`] and [`CollisionResolver`]: Merge with collision resolution
//! - [`RemoveOptions`] and [`RemovePlan`]: Context removal
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use k8stk::kubeconfig::codec;
//! use k8stk::{KubeconfigMerger, SourcedDocument};
//!
//! let base = codec::parse(
//!     "clusters: [{name: c1, cluster: {server: 'https://a'}}]\n\
//!      users: [{name: u1}]\n\
//!      contexts: [{name: dev, context: {cluster: c1, user: u1}}]\n\
//!      current-context: dev\n",
//! )
//! .unwrap();
//! let incoming = base.clone();
//!
//! let outcome = KubeconfigMerger::new()
//!     .merge(base, vec![SourcedDocument::new("other.yaml", incoming)]);
//!
//! assert_eq!(outcome.document.context_names(), vec!["dev", "dev1"]);
//! assert_eq!(outcome.collisions.len(), 3);
//! ```

pub mod error;
pub mod kubeconfig;
pub mod logging;
pub mod operations;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use kubeconfig::{
    Cluster, ContextRef, DocumentFormat, Kubeconfig, KubeconfigLoader, KubeconfigValidator,
    NamedCluster, NamedContext, NamedUser, UserCredentials,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    apply_plan, remove_context, CascadePolicy, Collision, CollisionResolver, EntityKind,
    KubeconfigMerger, MergeOutcome, OperationPlan, PlanAction, RemoveOptions, RemovePlan,
    ResolveReport, SourcedDocument,
};
