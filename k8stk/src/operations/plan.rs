//! Plan types for document edits.
//!
//! A plan describes the edits an operation will make to a document without
//! making them, so callers can print a dry run or apply it afterwards.

/// A single edit to be applied to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Remove every context with this name.
    RemoveContext(String),

    /// Remove every cluster with this name.
    RemoveCluster(String),

    /// Remove every user with this name.
    RemoveUser(String),

    /// Point `current-context` at another context.
    SetCurrentContext {
        /// The previous value.
        from: String,
        /// The new value.
        to: String,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use k8stk::PlanAction;
    ///
    /// let action = PlanAction::RemoveCluster("c1".to_string());
    /// assert_eq!(action.description(), "Remove cluster 'c1'");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::RemoveContext(name) => format!("Remove context '{name}'"),
            Self::RemoveCluster(name) => format!("Remove cluster '{name}'"),
            Self::RemoveUser(name) => format!("Remove user '{name}'"),
            Self::SetCurrentContext { from, to } => {
                format!("Set current-context from '{from}' to '{to}'")
            }
        }
    }
}

/// A complete operation plan describing all edits to be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use k8stk::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Remove context 'dev'");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
