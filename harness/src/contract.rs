//! Search problem contract trait.

use std::fmt;
use std::hash::Hash;

/// One successor of a state: the action taken and the state it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S> {
    pub action: String,
    pub state: S,
}

impl<S> Successor<S> {
    #[must_use]
    pub fn new(action: impl Into<String>, state: S) -> Self {
        Self {
            action: action.into(),
            state,
        }
    }
}

/// Trait for problems the generic search loop can explore.
///
/// # Contract
///
/// - `successors` must be deterministic: the same state yields the same
///   successors in the same order. Exploration order, and therefore every
///   report digest, depends on it.
/// - `is_goal` must not depend on anything but the state.
/// - States are rendered with `Display` in reports and diagrams.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + fmt::Display + 'static;

    /// Stable identifier recorded in reports.
    fn problem_id(&self) -> &str;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Enumerate the actions available from `state` and where they lead.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State>>;

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;
}
