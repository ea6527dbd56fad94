//! Plain directed-graph records for single-source shortest-path problems.
//!
//! Passive data holders; no algorithm is attached.

use std::fmt;

/// A weighted directed edge `tail -> head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub tail: u32,
    pub head: u32,
    pub weight: i64,
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge(tail={}, head={}, weight={})",
            self.tail, self.head, self.weight
        )
    }
}

/// A directed graph given as a node list and an edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    pub nodes: Vec<u32>,
    pub edges: Vec<WeightedEdge>,
}

impl DirectedGraph {
    #[must_use]
    pub fn new(nodes: Vec<u32>, edges: Vec<WeightedEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Edges leaving `tail`, in declaration order.
    pub fn outgoing(&self, tail: u32) -> impl Iterator<Item = &WeightedEdge> {
        self.edges.iter().filter(move |e| e.tail == tail)
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(nodes={:?}, edges=[", self.nodes)?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str("])")
    }
}
