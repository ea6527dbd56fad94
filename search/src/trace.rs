//! Explored-tree extraction.
//!
//! [`trace`] collects every ancestor of a goal node together with the
//! parent→child edges between them. [`TreeTracer`] does the same across many
//! nodes at once, visiting each shared ancestor exactly once.
//!
//! Deduplication is keyed by [`NodeId`], never by state: two nodes with equal
//! states are distinct tree positions.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::node::{NodeId, NodeRef};

/// A parent→child relation between two traced nodes.
pub struct Edge<S> {
    pub source: NodeRef<S>,
    pub dest: NodeRef<S>,
}

impl<S> Edge<S> {
    /// Identity key `(source id, dest id)`.
    #[must_use]
    pub fn key(&self) -> (NodeId, NodeId) {
        (self.source.id(), self.dest.id())
    }
}

impl<S> Clone for Edge<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            dest: Rc::clone(&self.dest),
        }
    }
}

impl<S> PartialEq for Edge<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Edge<S> {}

impl<S> std::fmt::Debug for Edge<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({} -> {})", self.source.id(), self.dest.id())
    }
}

/// The node-set and edge-set reachable by walking ancestor links.
///
/// Nodes iterate in ascending [`NodeId`] order, so the root comes first.
/// Edges iterate in ascending `(source, dest)` id order.
pub struct ExploredTree<S> {
    nodes: BTreeMap<NodeId, NodeRef<S>>,
    edges: BTreeMap<(NodeId, NodeId), Edge<S>>,
}

impl<S> ExploredTree<S> {
    /// Traced nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeRef<S>> {
        self.nodes.values()
    }

    /// Parent→child edges in ascending `(source, dest)` order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<S>> {
        self.edges.values()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[must_use]
    pub fn contains_edge(&self, source: NodeId, dest: NodeId) -> bool {
        self.edges.contains_key(&(source, dest))
    }

    /// The traced node without a parent, if any node was traced.
    #[must_use]
    pub fn root(&self) -> Option<&NodeRef<S>> {
        self.nodes.values().find(|n| n.is_root())
    }

    /// Whether nothing was traced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S> std::fmt::Debug for ExploredTree<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExploredTree")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("edges", &self.edges.values().collect::<Vec<_>>())
            .finish()
    }
}

/// Accumulates the ancestor closure of any number of nodes.
pub struct TreeTracer<S> {
    nodes: BTreeMap<NodeId, NodeRef<S>>,
    edges: BTreeMap<(NodeId, NodeId), Edge<S>>,
}

impl<S> TreeTracer<S> {
    /// Create a new empty tracer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Add `node` and its ancestors.
    ///
    /// The walk stops at the first node already visited: everything above it
    /// was recorded by an earlier call.
    pub fn visit(&mut self, node: &NodeRef<S>) {
        let mut cursor = Rc::clone(node);
        loop {
            if self.nodes.contains_key(&cursor.id()) {
                return;
            }
            self.nodes.insert(cursor.id(), Rc::clone(&cursor));

            let Some(parent) = cursor.parent().map(Rc::clone) else {
                return;
            };
            let edge = Edge {
                source: Rc::clone(&parent),
                dest: cursor,
            };
            self.edges.insert(edge.key(), edge);
            cursor = parent;
        }
    }

    /// Number of distinct nodes visited so far.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn finish(self) -> ExploredTree<S> {
        ExploredTree {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

impl<S> Default for TreeTracer<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Trace the ancestor chain of `goal`.
///
/// The node-set has `goal.depth() + 1` entries and the edge-set `goal.depth()`.
/// The result depends only on `goal`'s ancestors, never on siblings.
#[must_use]
pub fn trace<S>(goal: &NodeRef<S>) -> ExploredTree<S> {
    let mut tracer = TreeTracer::new();
    tracer.visit(goal);
    tracer.finish()
}

/// Trace the union of several ancestor chains.
#[must_use]
pub fn trace_all<'a, S: 'a>(nodes: impl IntoIterator<Item = &'a NodeRef<S>>) -> ExploredTree<S> {
    let mut tracer = TreeTracer::new();
    for node in nodes {
        tracer.visit(node);
    }
    tracer.finish()
}
