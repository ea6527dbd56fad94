//! Lodestar Search: the search-node and frontier core for uninformed search.
//!
//! A search problem is a tree of states joined by actions. Client code drives
//! a loop that removes a node from a [`frontier::Frontier`], expands it into
//! children that point back at it, and adds those children to the frontier.
//! Once a goal node comes out, [`path::reconstruct_path`] and
//! [`trace::trace`] recover the solution and the explored tree.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestar_search  ←  lodestar_harness
//! (nodes, frontier)    (search loop, report, diagram)
//! ```
//!
//! # Key types
//!
//! - [`Node`]: immutable node with a shared parent link
//! - [`StackFrontier`] / [`QueueFrontier`]: LIFO (DFS) and FIFO (BFS) orderings
//! - [`ExploredTree`]: deduplicated node-set and edge-set from [`trace::TreeTracer`]
//! - [`sssp::DirectedGraph`]: passive weighted digraph record
//!
//! Everything here is single-threaded: nodes are `Rc`-linked and no frontier
//! is safe for concurrent mutation.

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod sssp;
pub mod trace;

pub use error::FrontierError;
pub use frontier::{Frontier, FrontierKind, QueueFrontier, StackFrontier};
pub use node::{Node, NodeId, NodeRef};
pub use path::{path_actions, reconstruct_path};
pub use trace::{trace, trace_all, Edge, ExploredTree, TreeTracer};
