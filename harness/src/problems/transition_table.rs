//! `TransitionTable`: a problem given as an explicit list of transitions.

use std::collections::{BTreeMap, BTreeSet};

use crate::contract::{SearchProblem, Successor};

/// A search problem over string states defined by a transition table.
///
/// Successors are returned in the order their transitions were added.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    problem_id: String,
    initial: String,
    goals: BTreeSet<String>,
    transitions: BTreeMap<String, Vec<Successor<String>>>,
}

impl TransitionTable {
    #[must_use]
    pub fn new(problem_id: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            problem_id: problem_id.into(),
            initial: initial.into(),
            goals: BTreeSet::new(),
            transitions: BTreeMap::new(),
        }
    }

    /// Add a transition `from --action--> to`.
    #[must_use]
    pub fn with_transition(
        mut self,
        from: impl Into<String>,
        action: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.transitions
            .entry(from.into())
            .or_default()
            .push(Successor::new(action, to.into()));
        self
    }

    /// Mark `state` as a goal.
    #[must_use]
    pub fn with_goal(mut self, state: impl Into<String>) -> Self {
        self.goals.insert(state.into());
        self
    }
}

impl SearchProblem for TransitionTable {
    type State = String;

    fn problem_id(&self) -> &str {
        &self.problem_id
    }

    fn initial_state(&self) -> String {
        self.initial.clone()
    }

    fn successors(&self, state: &String) -> Vec<Successor<String>> {
        self.transitions.get(state).cloned().unwrap_or_default()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }
}
