//! Kubeconfig document model and codec.
//!
//! This module provides:
//! - The document schema shared by every operation ([`schema`])
//! - Parsing, serialization and file loading ([`codec`])
//! - Invariant checking ([`validator`])
//!
//! # Examples
//!
//! ```
//! use k8stk::kubeconfig::{codec, DocumentFormat, KubeconfigValidator};
//!
//! let doc = codec::parse(
//!     "apiVersion: v1\n\
//!      kind: Config\n\
//!      clusters: [{name: c1, cluster: {server: 'https://c1'}}]\n\
//!      users: [{name: u1, user: {}}]\n\
//!      contexts: [{name: dev, context: {cluster: c1, user: u1}}]\n\
//!      current-context: dev\n",
//! )
//! .unwrap();
//!
//! KubeconfigValidator::validate(&doc).unwrap();
//! let yaml = codec::serialize(&doc, DocumentFormat::Yaml).unwrap();
//! assert!(yaml.contains("current-context: dev"));
//! ```

pub mod codec;
pub mod schema;
pub mod validator;

pub use codec::{DocumentFormat, KubeconfigLoader};
pub use schema::{
    Cluster, ContextRef, Kubeconfig, NamedCluster, NamedContext, NamedUser, UserCredentials,
};
pub use validator::KubeconfigValidator;
