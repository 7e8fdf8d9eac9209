//! Name collision resolution for a single merge step.
//!
//! Folding an incoming document into a base appends its clusters, users and
//! contexts. Any incoming entry whose name is already taken in the base gets
//! a numeric suffix (`dev` becomes `dev1`, `dev2`, ...), and context
//! references are rewritten so they keep pointing at the renamed entries.
//!
//! Clusters and users are resolved before contexts: a context may reference
//! a renamed cluster even when the context name itself did not collide.

use crate::kubeconfig::schema::{Kubeconfig, NamedCluster, NamedContext, NamedUser};
use crate::logging::Logger;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// The collection an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A `clusters` entry.
    Cluster,
    /// A `users` entry.
    User,
    /// A `contexts` entry.
    Context,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cluster => write!(f, "cluster"),
            Self::User => write!(f, "user"),
            Self::Context => write!(f, "context"),
        }
    }
}

/// A detected name collision and the name it was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Which collection collided.
    pub kind: EntityKind,
    /// The incoming entry's name.
    pub original: String,
    /// The name the incoming entry was given.
    pub renamed: String,
    /// The document the incoming entry came from.
    pub source: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found a duplicate {} name. Renaming {} from file {} to {}.",
            self.kind, self.original, self.source, self.renamed
        )
    }
}

/// What a single resolve step did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Collisions in detection order: clusters, then users, then contexts.
    pub collisions: Vec<Collision>,
    /// Cluster rename table, original name to new name.
    pub cluster_renames: BTreeMap<String, String>,
    /// User rename table, original name to new name.
    pub user_renames: BTreeMap<String, String>,
    /// Context rename table, original name to new name.
    pub context_renames: BTreeMap<String, String>,
}

/// Entries addressed by a unique name within their collection.
trait Named: Clone {
    const KIND: EntityKind;

    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);
}

impl Named for NamedCluster {
    const KIND: EntityKind = EntityKind::Cluster;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for NamedUser {
    const KIND: EntityKind = EntityKind::User;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Named for NamedContext {
    const KIND: EntityKind = EntityKind::Context;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Resolves collisions between a base document and one incoming document.
///
/// The resolver owns the suffix counters for one merge step. It is consumed
/// by [`CollisionResolver::resolve`], so every incoming document starts
/// numbering from 1 again.
///
/// # Examples
///
/// ```
/// use k8stk::kubeconfig::codec;
/// use k8stk::CollisionResolver;
///
/// let mut base = codec::parse(
///     "clusters: [{name: c1}]\n\
///      users: [{name: u1}]\n\
///      contexts: [{name: dev, context: {cluster: c1, user: u1}}]\n",
/// )
/// .unwrap();
/// let incoming = base.clone();
///
/// let report = CollisionResolver::new("b.yaml").resolve(&mut base, &incoming);
///
/// assert_eq!(base.cluster_names(), vec!["c1", "c11"]);
/// assert_eq!(base.contexts[1].name, "dev1");
/// assert_eq!(base.contexts[1].context.cluster, "c11");
/// assert_eq!(report.collisions.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    source: String,
    logger: Option<Logger>,
    cluster_counter: u32,
    user_counter: u32,
    context_counter: u32,
}

impl CollisionResolver {
    /// Creates a resolver for the document identified by `source`.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            logger: None,
            cluster_counter: 0,
            user_counter: 0,
            context_counter: 0,
        }
    }

    /// Emits a warning through `logger` for every collision as it is found.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Appends the entries of `incoming` to `base`, renaming on collision.
    ///
    /// `base.current_context`, `api_version`, `kind` and `preferences` are
    /// left as they are. `incoming` is only read. References in incoming
    /// contexts that do not resolve are carried over unchanged, and no
    /// renamed entry is given a name such a reference points at.
    pub fn resolve(mut self, base: &mut Kubeconfig, incoming: &Kubeconfig) -> ResolveReport {
        let mut report = ResolveReport::default();

        let cluster_refs = incoming.contexts.iter().map(|c| c.context.cluster.as_str());
        report.cluster_renames = self.append_renamed(
            &mut base.clusters,
            &incoming.clusters,
            cluster_refs,
            &mut report.collisions,
            |_| {},
        );
        let user_refs = incoming.contexts.iter().map(|c| c.context.user.as_str());
        report.user_renames = self.append_renamed(
            &mut base.users,
            &incoming.users,
            user_refs,
            &mut report.collisions,
            |_| {},
        );

        let cluster_renames = &report.cluster_renames;
        let user_renames = &report.user_renames;
        report.context_renames = self.append_renamed(
            &mut base.contexts,
            &incoming.contexts,
            std::iter::empty(),
            &mut report.collisions,
            |entry: &mut NamedContext| {
                if let Some(renamed) = cluster_renames.get(&entry.context.cluster) {
                    entry.context.cluster.clone_from(renamed);
                }
                if let Some(renamed) = user_renames.get(&entry.context.user) {
                    entry.context.user.clone_from(renamed);
                }
            },
        );

        report
    }

    fn next_suffix(&mut self, kind: EntityKind) -> u32 {
        let counter = match kind {
            EntityKind::Cluster => &mut self.cluster_counter,
            EntityKind::User => &mut self.user_counter,
            EntityKind::Context => &mut self.context_counter,
        };
        *counter += 1;
        *counter
    }

    /// Appends one collection, returning its rename table.
    ///
    /// A new name is `original + counter`, drawing the counter until the
    /// candidate is neither taken in the base nor used by any incoming entry
    /// or `referenced` name. Only the first occurrence of an original name is
    /// recorded, so a document that repeats a name keeps its references on
    /// the first entry.
    fn append_renamed<'a, T: Named>(
        &mut self,
        base: &mut Vec<T>,
        incoming: &'a [T],
        referenced: impl Iterator<Item = &'a str>,
        collisions: &mut Vec<Collision>,
        mut rewrite: impl FnMut(&mut T),
    ) -> BTreeMap<String, String> {
        let mut taken: HashSet<String> = base.iter().map(|e| e.name().to_string()).collect();
        let reserved: HashSet<&str> = incoming
            .iter()
            .map(Named::name)
            .chain(referenced)
            .collect();
        let mut seen = HashSet::new();
        let mut renames = BTreeMap::new();

        for entry in incoming {
            let mut entry = entry.clone();
            let original = entry.name().to_string();
            let first_occurrence = seen.insert(original.clone());

            if taken.contains(&original) {
                let renamed = loop {
                    let candidate = format!("{original}{}", self.next_suffix(T::KIND));
                    if !taken.contains(&candidate) && !reserved.contains(candidate.as_str()) {
                        break candidate;
                    }
                };

                let collision = Collision {
                    kind: T::KIND,
                    original: original.clone(),
                    renamed: renamed.clone(),
                    source: self.source.clone(),
                };
                log::debug!("{collision}");
                if let Some(logger) = &self.logger {
                    logger.warn(&collision.to_string());
                }
                collisions.push(collision);

                if first_occurrence {
                    renames.insert(original, renamed.clone());
                }
                entry.set_name(renamed);
            }

            rewrite(&mut entry);
            taken.insert(entry.name().to_string());
            base.push(entry);
        }

        renames
    }
}
