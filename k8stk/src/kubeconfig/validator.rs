//! Document invariant checks.
//!
//! A well-formed document has unique names in every collection, contexts
//! whose cluster and user references resolve, and a `current-context` that
//! names an existing context. Merge and removal preserve these invariants
//! but do not require them of their input, so checking is a separate step.

use crate::error::{Error, Result};
use crate::kubeconfig::schema::Kubeconfig;
use std::collections::HashSet;

/// Validates kubeconfig documents.
///
/// # Examples
///
/// ```
/// use k8stk::{ContextRef, Kubeconfig, KubeconfigValidator, NamedContext};
///
/// let mut doc = Kubeconfig::default();
/// KubeconfigValidator::validate(&doc).unwrap();
///
/// doc.contexts.push(NamedContext::new("dev", ContextRef::new("missing", "missing")));
/// assert!(KubeconfigValidator::validate(&doc).is_err());
/// ```
pub struct KubeconfigValidator;

impl KubeconfigValidator {
    /// Validate a document, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] describing the first broken invariant.
    pub fn validate(doc: &Kubeconfig) -> Result<()> {
        match Self::collect_issues(doc).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collect every invariant violation in document order.
    #[must_use]
    pub fn collect_issues(doc: &Kubeconfig) -> Vec<Error> {
        let mut issues = Vec::new();

        Self::check_unique("clusters", doc.clusters.iter().map(|c| c.name.as_str()), &mut issues);
        Self::check_unique("users", doc.users.iter().map(|u| u.name.as_str()), &mut issues);
        Self::check_unique("contexts", doc.contexts.iter().map(|c| c.name.as_str()), &mut issues);

        for (i, entry) in doc.contexts.iter().enumerate() {
            if doc.cluster(&entry.context.cluster).is_none() {
                issues.push(Error::Validation {
                    field: format!("contexts[{i}].context.cluster"),
                    message: format!(
                        "context '{}' references unknown cluster '{}'",
                        entry.name, entry.context.cluster
                    ),
                });
            }
            if doc.user(&entry.context.user).is_none() {
                issues.push(Error::Validation {
                    field: format!("contexts[{i}].context.user"),
                    message: format!(
                        "context '{}' references unknown user '{}'",
                        entry.name, entry.context.user
                    ),
                });
            }
        }

        // An empty pointer is acceptable only when there is nothing to point at.
        let current = doc.current_context.as_str();
        if (current.is_empty() && !doc.contexts.is_empty())
            || (!current.is_empty() && doc.context(current).is_none())
        {
            issues.push(Error::Validation {
                field: "current-context".into(),
                message: format!("'{current}' does not name an existing context"),
            });
        }

        issues
    }

    fn check_unique<'a>(
        collection: &str,
        names: impl Iterator<Item = &'a str>,
        issues: &mut Vec<Error>,
    ) {
        let mut seen = HashSet::new();
        for (i, name) in names.enumerate() {
            if name.trim().is_empty() {
                issues.push(Error::Validation {
                    field: format!("{collection}[{i}].name"),
                    message: "Cannot be empty or only whitespace".into(),
                });
            } else if !seen.insert(name) {
                issues.push(Error::Validation {
                    field: format!("{collection}[{i}].name"),
                    message: format!("duplicate name '{name}'"),
                });
            }
        }
    }
}
