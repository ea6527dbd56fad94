//! Immutable search nodes linked to their parents.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared handle to a node. Children hold one of these to their parent.
pub type NodeRef<S> = Rc<Node<S>>;

/// Process-wide counter backing [`NodeId`] allocation.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity key of a node.
///
/// Assigned monotonically at construction, so a parent always has a smaller
/// id than any of its children. Two nodes with equal states still carry
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable node in the search tree.
///
/// Built once at expansion time and never mutated. A node does not own its
/// parent exclusively: siblings share it through [`NodeRef`]. There is no
/// child-to-parent back edge other than `parent`, so ancestor chains are
/// acyclic by construction.
pub struct Node<S> {
    id: NodeId,
    action: Option<String>,
    state: S,
    parent: Option<NodeRef<S>>,
    depth: u32,
}

impl<S> Node<S> {
    /// Construct a node from its raw parts.
    ///
    /// By convention a node without a parent has no action. This is not
    /// enforced; traversals only look at `parent` to detect the root.
    #[must_use]
    pub fn new(action: Option<String>, state: S, parent: Option<NodeRef<S>>) -> NodeRef<S> {
        let depth = parent.as_ref().map_or(0, |p| p.depth.saturating_add(1));
        Rc::new(Self {
            id: NodeId::next(),
            action,
            state,
            parent,
            depth,
        })
    }

    /// Construct a root node (no action, no parent).
    #[must_use]
    pub fn root(state: S) -> NodeRef<S> {
        Self::new(None, state, None)
    }

    /// Construct a child of `parent` reached by `action`.
    #[must_use]
    pub fn child(parent: &NodeRef<S>, action: impl Into<String>, state: S) -> NodeRef<S> {
        Self::new(Some(action.into()), state, Some(Rc::clone(parent)))
    }

    /// Identity key, unique within the process.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The action that produced this node. `None` for the root.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// The state this node holds.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from. `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&NodeRef<S>> {
        self.parent.as_ref()
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate from this node up to and including the root.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'_, S> {
        Ancestors { next: Some(self) }
    }
}

impl<S> PartialEq for Node<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for Node<S> {}

impl<S> Hash for Node<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S: fmt::Debug> fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("state", &self.state)
            .field("parent", &self.parent.as_ref().map(|p| p.id))
            .field("depth", &self.depth)
            .finish()
    }
}

impl<S> Drop for Node<S> {
    // Unlink uniquely-owned ancestors one at a time so a deep chain does not
    // recurse once per level.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            match Rc::try_unwrap(parent) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a, S> {
    next: Option<&'a Node<S>>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a Node<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
