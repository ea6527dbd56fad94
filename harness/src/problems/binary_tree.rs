//! `BinaryTreeProblem`: an implicit complete binary tree over `0..size`.
//!
//! State `n` has children `2n + 1` ("left") and `2n + 2` ("right") while they
//! stay below `size`. Useful for sizing benchmarks without building a table.

use crate::contract::{SearchProblem, Successor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryTreeProblem {
    pub size: u32,
    pub target: u32,
}

impl BinaryTreeProblem {
    #[must_use]
    pub fn new(size: u32, target: u32) -> Self {
        Self { size, target }
    }
}

impl SearchProblem for BinaryTreeProblem {
    type State = u32;

    #[allow(clippy::unnecessary_literal_bound)]
    fn problem_id(&self) -> &str {
        "binary_tree"
    }

    fn initial_state(&self) -> u32 {
        0
    }

    fn successors(&self, state: &u32) -> Vec<Successor<u32>> {
        let Some(left) = state.checked_mul(2).and_then(|n| n.checked_add(1)) else {
            return Vec::new();
        };
        [("left", Some(left)), ("right", left.checked_add(1))]
            .into_iter()
            .filter_map(|(action, child)| child.map(|c| (action, c)))
            .filter(|&(_, child)| child < self.size)
            .map(|(action, child)| Successor::new(action, child))
            .collect()
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.target
    }
}
