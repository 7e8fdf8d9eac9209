//! Merging several kubeconfig documents into one.
//!
//! The first document is the base and is never renamed. Every following
//! document is folded into the accumulated result in order, each with a
//! fresh [`CollisionResolver`], so a later document can collide with names
//! introduced by an earlier step.

use crate::kubeconfig::schema::Kubeconfig;
use crate::logging::Logger;
use crate::operations::resolve::{Collision, CollisionResolver, ResolveReport};

/// A document together with the name used for it in notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedDocument {
    /// Where the document came from, usually its file path.
    pub source: String,
    /// The parsed document.
    pub document: Kubeconfig,
}

impl SourcedDocument {
    /// Creates a sourced document.
    #[must_use]
    pub fn new(source: impl Into<String>, document: Kubeconfig) -> Self {
        Self {
            source: source.into(),
            document,
        }
    }
}

/// The result of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged document.
    pub document: Kubeconfig,
    /// Every collision resolved along the way, in order.
    pub collisions: Vec<Collision>,
}

/// Folds incoming documents into a base document.
///
/// # Examples
///
/// ```
/// use k8stk::{ContextRef, Kubeconfig, KubeconfigMerger, NamedContext, SourcedDocument};
///
/// let mut base = Kubeconfig::default();
/// base.contexts.push(NamedContext::new("dev", ContextRef::new("c", "u")));
/// base.current_context = "dev".to_string();
///
/// let mut other = Kubeconfig::default();
/// other.contexts.push(NamedContext::new("prod", ContextRef::new("c2", "u2")));
///
/// let outcome = KubeconfigMerger::new().merge(base, vec![SourcedDocument::new("b", other)]);
/// assert_eq!(outcome.document.context_names(), vec!["dev", "prod"]);
/// assert_eq!(outcome.document.current_context, "dev");
/// assert!(outcome.collisions.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KubeconfigMerger {
    logger: Option<Logger>,
}

impl KubeconfigMerger {
    /// Creates a merger that reports collisions only through its result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also emits a notice through `logger` for every collision.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Merge `incomings` into `base`, strictly in iteration order.
    pub fn merge(
        &self,
        base: Kubeconfig,
        incomings: impl IntoIterator<Item = SourcedDocument>,
    ) -> MergeOutcome {
        let mut document = base;
        let mut collisions = Vec::new();

        for incoming in incomings {
            let report = self.merge_into(&mut document, &incoming);
            collisions.extend(report.collisions);
        }

        MergeOutcome {
            document,
            collisions,
        }
    }

    /// Fold a single document into `base`.
    pub fn merge_into(&self, base: &mut Kubeconfig, incoming: &SourcedDocument) -> ResolveReport {
        let mut resolver = CollisionResolver::new(incoming.source.clone());
        if let Some(logger) = self.logger {
            resolver = resolver.with_logger(logger);
        }

        let report = resolver.resolve(base, &incoming.document);
        log::debug!(
            "merged {}: {} cluster(s), {} user(s), {} context(s), {} collision(s)",
            incoming.source,
            incoming.document.clusters.len(),
            incoming.document.users.len(),
            incoming.document.contexts.len(),
            report.collisions.len()
        );
        report
    }
}
