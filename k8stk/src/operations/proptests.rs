//! Property-based tests for merging and removal.
//!
//! Documents are drawn from small name pools so collisions, suffix clashes
//! and shared references come up often.

use crate::error::Error;
use crate::kubeconfig::schema::{ContextRef, Kubeconfig, NamedCluster, NamedContext, NamedUser};
use crate::kubeconfig::validator::KubeconfigValidator;
use crate::operations::{
    remove_context, CascadePolicy, KubeconfigMerger, RemoveOptions, SourcedDocument,
};
use proptest::prelude::*;

const POOL: &[&str] = &["a", "b", "c", "a1", "a2", "b1"];

// Strategy for a non-empty set of distinct names
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(POOL, 1..=POOL.len())
        .prop_map(|names| names.into_iter().map(String::from).collect::<Vec<_>>())
}

// Strategy for a document that satisfies every invariant
fn document_strategy() -> impl Strategy<Value = Kubeconfig> {
    (names_strategy(), names_strategy(), names_strategy())
        .prop_flat_map(|(clusters, users, contexts)| {
            let refs = prop::collection::vec((0..clusters.len(), 0..users.len()), contexts.len());
            let current = 0..contexts.len();
            (Just(clusters), Just(users), Just(contexts), refs, current)
        })
        .prop_map(|(clusters, users, contexts, refs, current)| Kubeconfig {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            current_context: contexts[current].clone(),
            contexts: contexts
                .iter()
                .zip(&refs)
                .map(|(name, (c, u))| {
                    NamedContext::new(name.clone(), ContextRef::new(&clusters[*c], &users[*u]))
                })
                .collect(),
            clusters: clusters
                .iter()
                .map(|n| NamedCluster::new(n.clone(), format!("https://{n}")))
                .collect(),
            users: users.iter().map(|n| NamedUser::new(n.clone(), n, n)).collect(),
            ..Default::default()
        })
}

fn prefixed(doc: &Kubeconfig, prefix: &str) -> Kubeconfig {
    let mut out = doc.clone();
    for c in &mut out.clusters {
        c.name = format!("{prefix}{}", c.name);
    }
    for u in &mut out.users {
        u.name = format!("{prefix}{}", u.name);
    }
    for c in &mut out.contexts {
        c.name = format!("{prefix}{}", c.name);
        c.context.cluster = format!("{prefix}{}", c.context.cluster);
        c.context.user = format!("{prefix}{}", c.context.user);
    }
    out.current_context = format!("{prefix}{}", out.current_context);
    out
}

fn sourced(docs: Vec<Kubeconfig>) -> Vec<SourcedDocument> {
    docs.into_iter()
        .enumerate()
        .map(|(i, d)| SourcedDocument::new(format!("doc{i}.yaml"), d))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Names stay unique, references resolve and current-context is valid
    #[test]
    fn merge_preserves_invariants(
        base in document_strategy(),
        incomings in prop::collection::vec(document_strategy(), 1..4)
    ) {
        let outcome = KubeconfigMerger::new().merge(base, sourced(incomings));
        prop_assert!(KubeconfigValidator::validate(&outcome.document).is_ok());
    }

    // Every incoming entry is kept, renamed or not
    #[test]
    fn merge_keeps_every_entry(
        base in document_strategy(),
        incomings in prop::collection::vec(document_strategy(), 1..4)
    ) {
        let clusters = base.clusters.len() + incomings.iter().map(|d| d.clusters.len()).sum::<usize>();
        let users = base.users.len() + incomings.iter().map(|d| d.users.len()).sum::<usize>();
        let contexts = base.contexts.len() + incomings.iter().map(|d| d.contexts.len()).sum::<usize>();

        let outcome = KubeconfigMerger::new().merge(base, sourced(incomings));

        prop_assert_eq!(outcome.document.clusters.len(), clusters);
        prop_assert_eq!(outcome.document.users.len(), users);
        prop_assert_eq!(outcome.document.contexts.len(), contexts);
    }

    // The base is never renamed and its current-context never moves
    #[test]
    fn merge_leaves_base_untouched(
        base in document_strategy(),
        incoming in document_strategy()
    ) {
        let outcome = KubeconfigMerger::new().merge(base.clone(), sourced(vec![incoming]));
        let doc = outcome.document;

        prop_assert_eq!(&doc.clusters[..base.clusters.len()], &base.clusters[..]);
        prop_assert_eq!(&doc.users[..base.users.len()], &base.users[..]);
        prop_assert_eq!(&doc.contexts[..base.contexts.len()], &base.contexts[..]);
        prop_assert_eq!(doc.current_context, base.current_context);
    }

    // Disjoint documents merge without any renaming
    #[test]
    fn merge_without_overlap_is_verbatim(
        base in document_strategy(),
        other in document_strategy()
    ) {
        let incoming = prefixed(&other, "x-");
        let outcome = KubeconfigMerger::new().merge(base.clone(), sourced(vec![incoming.clone()]));

        prop_assert!(outcome.collisions.is_empty());
        prop_assert_eq!(&outcome.document.clusters[base.clusters.len()..], &incoming.clusters[..]);
        prop_assert_eq!(&outcome.document.users[base.users.len()..], &incoming.users[..]);
        prop_assert_eq!(&outcome.document.contexts[base.contexts.len()..], &incoming.contexts[..]);
    }

    // Argument order alone determines the result
    #[test]
    fn merge_is_deterministic_and_stepwise(
        a in document_strategy(),
        b in document_strategy(),
        c in document_strategy()
    ) {
        let merger = KubeconfigMerger::new();
        let incomings = sourced(vec![b, c]);

        let first = merger.merge(a.clone(), incomings.clone());
        let second = merger.merge(a.clone(), incomings.clone());
        prop_assert_eq!(&first, &second);

        let mut stepwise = a;
        for incoming in &incomings {
            merger.merge_into(&mut stepwise, incoming);
        }
        prop_assert_eq!(first.document, stepwise);
    }

    // Removal either succeeds with a valid document or changes nothing
    #[test]
    fn removal_preserves_invariants(
        doc in document_strategy(),
        pick in any::<prop::sample::Index>()
    ) {
        let target = doc.contexts[pick.index(doc.contexts.len())].name.clone();
        let mut edited = doc.clone();

        match remove_context(&mut edited, RemoveOptions::new(target.clone())) {
            Ok(_) => {
                prop_assert!(edited.context(&target).is_none());
                prop_assert!(KubeconfigValidator::validate(&edited).is_ok());
                prop_assert_eq!(edited.contexts.len(), doc.contexts.len() - 1);
            }
            Err(Error::EmptyResult { .. }) => {
                prop_assert_eq!(doc.contexts.len(), 1);
                prop_assert_eq!(edited, doc);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    // Unconditional cascade still never leaves a stale current-context
    #[test]
    fn removal_always_cascade_repairs_current(
        doc in document_strategy(),
        pick in any::<prop::sample::Index>()
    ) {
        let target = doc.contexts[pick.index(doc.contexts.len())].name.clone();
        let mut edited = doc.clone();
        let options = RemoveOptions::new(target).with_cascade(CascadePolicy::Always);

        if remove_context(&mut edited, options).is_ok() {
            prop_assert!(edited.context(&edited.current_context).is_some());
        }
    }

    // Removing an unknown context fails and changes nothing
    #[test]
    fn removal_of_absent_context_fails(doc in document_strategy()) {
        let mut edited = doc.clone();
        let result = remove_context(&mut edited, RemoveOptions::new("not-in-pool"));

        prop_assert!(matches!(result, Err(Error::ContextNotFound { .. })), "expected ContextNotFound, got {:?}", result);
        prop_assert_eq!(edited, doc);
    }
}
