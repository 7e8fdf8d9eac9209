//! Context removal planning and application.
//!
//! Removing a context also removes the cluster and user it referenced and,
//! if it was the current context, promotes the first remaining context.
//! The plan is built from a read-only view of the document, so a failed
//! removal never leaves the document half-edited.

use crate::error::{Error, Result};
use crate::kubeconfig::schema::Kubeconfig;

use super::plan::{OperationPlan, PlanAction};

/// How the referenced cluster and user are cleaned up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadePolicy {
    /// Remove the cluster/user only when no remaining context references it.
    #[default]
    Unreferenced,
    /// Always remove the cluster/user, even if other contexts still use it.
    Always,
}

/// Options for a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Name of the context to remove.
    pub context: String,

    /// Cleanup policy for the referenced cluster and user.
    pub cascade: CascadePolicy,
}

impl RemoveOptions {
    /// Creates options for removing `context` with the default cascade policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use k8stk::{CascadePolicy, RemoveOptions};
    ///
    /// let options = RemoveOptions::new("dev");
    /// assert_eq!(options.cascade, CascadePolicy::Unreferenced);
    /// ```
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            cascade: CascadePolicy::default(),
        }
    }

    /// Sets the cascade policy.
    #[must_use]
    pub const fn with_cascade(mut self, cascade: CascadePolicy) -> Self {
        self.cascade = cascade;
        self
    }
}

/// A removal plan builder.
///
/// # Examples
///
/// ```
/// use k8stk::kubeconfig::codec;
/// use k8stk::{apply_plan, RemoveOptions, RemovePlan};
///
/// let mut doc = codec::parse(
///     "clusters: [{name: c1}, {name: c2}]\n\
///      users: [{name: u1}, {name: u2}]\n\
///      contexts:\n\
///      - {name: a, context: {cluster: c1, user: u1}}\n\
///      - {name: b, context: {cluster: c2, user: u2}}\n\
///      current-context: a\n",
/// )
/// .unwrap();
///
/// let plan = RemovePlan::new(RemoveOptions::new("a")).build_plan(&doc).unwrap();
/// assert_eq!(plan.len(), 4);
///
/// apply_plan(&mut doc, &plan);
/// assert_eq!(doc.current_context, "b");
/// assert_eq!(doc.cluster_names(), vec!["c2"]);
/// ```
pub struct RemovePlan {
    options: RemoveOptions,
}

impl RemovePlan {
    /// Creates a new removal plan builder.
    #[must_use]
    pub const fn new(options: RemoveOptions) -> Self {
        Self { options }
    }

    /// Build the plan against `doc` without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContextNotFound`] if no context has the target name,
    /// and [`Error::EmptyResult`] if the target is the current context and no
    /// other context would remain.
    pub fn build_plan(&self, doc: &Kubeconfig) -> Result<OperationPlan> {
        let target = self.options.context.as_str();
        let removed = doc.context(target).ok_or_else(|| Error::ContextNotFound {
            name: target.to_string(),
        })?;

        let remaining: Vec<_> = doc.contexts.iter().filter(|c| c.name != target).collect();

        // Check before emitting any action: a refused removal changes nothing.
        let promotion = if doc.current_context == target {
            let next = remaining.first().ok_or_else(|| Error::EmptyResult {
                name: target.to_string(),
            })?;
            Some(next.name.clone())
        } else {
            None
        };

        let mut plan = OperationPlan::new(format!("Remove context '{target}'"))
            .add_action(PlanAction::RemoveContext(target.to_string()));

        let cluster = removed.context.cluster.as_str();
        if doc.cluster(cluster).is_some() {
            let mut users_of = doc.contexts_using_cluster(cluster);
            users_of.retain(|name| *name != target);
            plan = self.cascade(plan, "cluster", cluster, &users_of, PlanAction::RemoveCluster);
        }

        let user = removed.context.user.as_str();
        if doc.user(user).is_some() {
            let mut users_of = doc.contexts_using_user(user);
            users_of.retain(|name| *name != target);
            plan = self.cascade(plan, "user", user, &users_of, PlanAction::RemoveUser);
        }

        if let Some(to) = promotion {
            plan = plan.add_action(PlanAction::SetCurrentContext {
                from: target.to_string(),
                to,
            });
        }

        log::debug!("{}: {} action(s)", plan.description, plan.len());
        Ok(plan)
    }

    /// Adds the removal of a referenced entry to `plan` per the cascade policy.
    fn cascade(
        &self,
        plan: OperationPlan,
        kind: &str,
        name: &str,
        still_used_by: &[&str],
        action: fn(String) -> PlanAction,
    ) -> OperationPlan {
        if still_used_by.is_empty() {
            return plan.add_action(action(name.to_string()));
        }

        let contexts = still_used_by.join("', '");
        match self.options.cascade {
            CascadePolicy::Unreferenced => plan.add_warning(format!(
                "Keeping {kind} '{name}': still referenced by context '{contexts}'"
            )),
            CascadePolicy::Always => plan
                .add_action(action(name.to_string()))
                .add_warning(format!(
                    "Removing {kind} '{name}' leaves context '{contexts}' with a dangling reference"
                )),
        }
    }
}

/// Apply a plan's actions to `doc` in order.
pub fn apply_plan(doc: &mut Kubeconfig, plan: &OperationPlan) {
    for action in &plan.actions {
        log::debug!("{}", action.description());
        match action {
            PlanAction::RemoveContext(name) => doc.contexts.retain(|c| &c.name != name),
            PlanAction::RemoveCluster(name) => doc.clusters.retain(|c| &c.name != name),
            PlanAction::RemoveUser(name) => doc.users.retain(|u| &u.name != name),
            PlanAction::SetCurrentContext { to, .. } => doc.current_context.clone_from(to),
        }
    }
}

/// Plan and apply a context removal in one step, returning the applied plan.
///
/// # Errors
///
/// Fails like [`RemovePlan::build_plan`]; `doc` is untouched on failure.
pub fn remove_context(doc: &mut Kubeconfig, options: RemoveOptions) -> Result<OperationPlan> {
    let plan = RemovePlan::new(options).build_plan(doc)?;
    apply_plan(doc, &plan);
    Ok(plan)
}
