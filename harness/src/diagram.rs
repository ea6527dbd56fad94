//! Explored tree → Graphviz DOT diagram.
//!
//! Each tree node becomes a `record` node labelled with its state. A node
//! produced by a non-empty action gets an extra action node in between, so
//! an edge `parent -> child` is drawn as `parent -> child_action -> child`.
//!
//! Node names are `n<ordinal>` where the ordinal is the node's position in
//! [`ExploredTree::nodes`] (ascending id). Ids themselves are process-local and
//! never appear in the output, which keeps the text identical across runs.
//!
//! Only DOT source is produced. Layout and image encoding are left to
//! Graphviz.

use std::collections::HashMap;
use std::fmt;

use lodestar_search::{ExploredTree, NodeId};

use crate::digest::{content_digest, DOMAIN_DIAGRAM};

/// Graph layout direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rankdir {
    #[default]
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl Rankdir {
    /// Graphviz attribute value (`"TB"`, `"BT"`, `"LR"`, `"RL"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::BottomToTop => "BT",
            Self::LeftToRight => "LR",
            Self::RightToLeft => "RL",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TB" => Some(Self::TopToBottom),
            "BT" => Some(Self::BottomToTop),
            "LR" => Some(Self::LeftToRight),
            "RL" => Some(Self::RightToLeft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// A traced search node.
    Record,
    /// An action label between a parent and its child.
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub name: String,
    pub label: String,
    pub shape: NodeShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
}

/// A renderable diagram. `Display` writes DOT source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub rankdir: Rankdir,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    /// DOT source text.
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.to_string()
    }

    /// Digest of the DOT source.
    #[must_use]
    pub fn digest(&self) -> String {
        content_digest(DOMAIN_DIAGRAM, self.to_dot().as_bytes())
    }

    /// Number of action nodes.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.shape == NodeShape::Action)
            .count()
    }
}

/// Build a diagram from a traced tree.
#[must_use]
pub fn render_diagram<S: fmt::Display>(tree: &ExploredTree<S>, rankdir: Rankdir) -> Diagram {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut names: HashMap<NodeId, String> = HashMap::new();
    // Where an edge into each tree node lands: its action node, or the node
    // itself when it has no action.
    let mut entry: HashMap<NodeId, String> = HashMap::new();

    for (ordinal, node) in tree.nodes().enumerate() {
        let name = format!("n{ordinal}");
        names.insert(node.id(), name.clone());
        nodes.push(DiagramNode {
            name: name.clone(),
            label: format!("{{ {} }}", escape_record(&node.state().to_string())),
            shape: NodeShape::Record,
        });

        match node.action().filter(|a| !a.is_empty()) {
            Some(action) => {
                let action_name = format!("{name}_action");
                nodes.push(DiagramNode {
                    name: action_name.clone(),
                    label: action.to_string(),
                    shape: NodeShape::Action,
                });
                edges.push(DiagramEdge {
                    from: action_name.clone(),
                    to: name,
                });
                entry.insert(node.id(), action_name);
            }
            None => {
                entry.insert(node.id(), name);
            }
        }
    }

    for edge in tree.edges() {
        let (Some(from), Some(to)) = (names.get(&edge.source.id()), entry.get(&edge.dest.id()))
        else {
            continue;
        };
        edges.push(DiagramEdge {
            from: from.clone(),
            to: to.clone(),
        });
    }

    Diagram {
        rankdir,
        nodes,
        edges,
    }
}

/// Escape characters that are structural inside a `record` label.
fn escape_record(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a value for a double-quoted DOT string.
///
/// Backslashes that already escape a record character are kept as-is.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\\' => match chars.peek() {
                Some('{' | '}' | '|' | '<' | '>') => out.push('\\'),
                _ => out.push_str("\\\\"),
            },
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, "  graph [rankdir={}];", self.rankdir.as_str())?;
        for node in &self.nodes {
            match node.shape {
                NodeShape::Record => writeln!(
                    f,
                    "  {} [label={}, shape=record];",
                    node.name,
                    quote(&node.label)
                )?,
                NodeShape::Action => {
                    writeln!(f, "  {} [label={}];", node.name, quote(&node.label))?;
                }
            }
        }
        for edge in &self.edges {
            writeln!(f, "  {} -> {};", edge.from, edge.to)?;
        }
        writeln!(f, "}}")
    }
}
