//! Root-to-goal path reconstruction.

use std::rc::Rc;

use crate::node::NodeRef;

/// Reconstruct the path from the root to `goal` by following parent links.
///
/// The result is ordered root first, goal last, and has `goal.depth() + 1`
/// elements. For every adjacent pair `(a, b)`, `b.parent()` is `a`.
///
/// The walk is an explicit loop. A parent chain that loops back on itself
/// cannot be built through [`crate::node::Node`]'s constructors; if one existed
/// this would not terminate.
#[must_use]
pub fn reconstruct_path<S>(goal: &NodeRef<S>) -> Vec<NodeRef<S>> {
    let mut path = vec![Rc::clone(goal)];
    let mut cursor = goal;

    while let Some(parent) = cursor.parent() {
        path.push(Rc::clone(parent));
        cursor = parent;
    }

    path.reverse();
    path
}

/// Actions taken along the path from the root to `goal`, in order.
///
/// The root contributes nothing; a non-root node without an action label
/// contributes an empty string.
#[must_use]
pub fn path_actions<S>(goal: &NodeRef<S>) -> Vec<String> {
    let mut actions: Vec<String> = goal
        .ancestors()
        .filter(|n| !n.is_root())
        .map(|n| n.action().unwrap_or_default().to_string())
        .collect();
    actions.reverse();
    actions
}
