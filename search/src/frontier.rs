//! Frontier containers: the only axis of variation between DFS and BFS.
//!
//! A generic search loop removes nodes from a [`Frontier`], expands them, and
//! adds the successors back. Swapping [`StackFrontier`] for [`QueueFrontier`]
//! switches the exploration order from depth-first to breadth-first without
//! touching the loop.
//!
//! Membership is by state value and is a linear scan. No index is kept, so
//! `has_state` is O(n) in the frontier size.

use std::collections::VecDeque;

use crate::error::FrontierError;
use crate::node::NodeRef;

/// Capability shared by every frontier ordering.
pub trait Frontier<S: PartialEq> {
    /// Insert a node. Always succeeds.
    fn add(&mut self, node: NodeRef<S>);

    /// Remove one node according to the ordering policy.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] when the frontier holds no nodes.
    fn remove(&mut self) -> Result<NodeRef<S>, FrontierError>;

    /// Number of nodes currently held.
    fn len(&self) -> usize;

    /// `true` iff no nodes are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` iff some held node's state equals `state`.
    fn has_state(&self, state: &S) -> bool;

    /// Which ordering this frontier implements.
    fn kind(&self) -> FrontierKind;

    /// Largest number of nodes held at any one time.
    fn high_water(&self) -> usize;
}

/// The available frontier orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FrontierKind {
    /// Last-in-first-out. Depth-first exploration.
    Stack,
    /// First-in-first-out. Breadth-first exploration.
    Queue,
}

impl FrontierKind {
    /// Build an empty frontier of this kind.
    #[must_use]
    pub fn new_frontier<S: PartialEq + 'static>(self) -> Box<dyn Frontier<S>> {
        match self {
            Self::Stack => Box::new(StackFrontier::new()),
            Self::Queue => Box::new(QueueFrontier::new()),
        }
    }

    /// Stable lowercase name (`"stack"` / `"queue"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    /// Parse a kind name. Accepts `"dfs"` and `"bfs"` as aliases.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "stack" | "dfs" => Some(Self::Stack),
            "queue" | "bfs" => Some(Self::Queue),
            _ => None,
        }
    }
}

/// LIFO frontier: `remove` returns the most recently added node.
pub struct StackFrontier<S> {
    nodes: Vec<NodeRef<S>>,
    high_water: usize,
}

impl<S> StackFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            high_water: 0,
        }
    }

    /// Held nodes, bottom of the stack first.
    pub fn iter(&self) -> impl Iterator<Item = &NodeRef<S>> {
        self.nodes.iter()
    }
}

impl<S> Default for StackFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PartialEq> Frontier<S> for StackFrontier<S> {
    fn add(&mut self, node: NodeRef<S>) {
        self.nodes.push(node);
        self.high_water = self.high_water.max(self.nodes.len());
    }

    fn remove(&mut self) -> Result<NodeRef<S>, FrontierError> {
        self.nodes.pop().ok_or(FrontierError::Empty {
            kind: FrontierKind::Stack,
        })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn has_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|n| n.state() == state)
    }

    fn kind(&self) -> FrontierKind {
        FrontierKind::Stack
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// FIFO frontier: `remove` returns the earliest added node still present.
pub struct QueueFrontier<S> {
    nodes: VecDeque<NodeRef<S>>,
    high_water: usize,
}

impl<S> QueueFrontier<S> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: VecDeque::new(),
            high_water: 0,
        }
    }

    /// Held nodes, next-to-remove first.
    pub fn iter(&self) -> impl Iterator<Item = &NodeRef<S>> {
        self.nodes.iter()
    }
}

impl<S> Default for QueueFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PartialEq> Frontier<S> for QueueFrontier<S> {
    fn add(&mut self, node: NodeRef<S>) {
        self.nodes.push_back(node);
        self.high_water = self.high_water.max(self.nodes.len());
    }

    fn remove(&mut self) -> Result<NodeRef<S>, FrontierError> {
        self.nodes.pop_front().ok_or(FrontierError::Empty {
            kind: FrontierKind::Queue,
        })
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn has_state(&self, state: &S) -> bool {
        self.nodes.iter().any(|n| n.state() == state)
    }

    fn kind(&self) -> FrontierKind {
        FrontierKind::Queue
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}
