use crate::artifacts::log::commit_chain::CommitChain;
use std::fmt::Write;

/// A node of the rendered graph, keyed by its 1-based position in the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: usize,
    pub label: String,
}

/// Parent → child edge between two node ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

/// Nodes and edges derived from a commit chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl CommitGraph {
    /// One node per commit, one edge per parent that is itself in the chain
    ///
    /// A parent dropped by the date filter gets no node, and the edge to it is
    /// left out.
    pub fn from_chain(chain: &CommitChain) -> Self {
        let mut graph = CommitGraph::default();

        for (index, commit) in chain.iter().enumerate() {
            let id = index + 1;
            graph.nodes.push(Node {
                id,
                label: format!("Commit {id}\n{}", commit.oid().to_short_oid()),
            });

            let Some(parent) = commit.parent() else {
                continue;
            };

            match chain.position(parent) {
                Some(parent_id) => graph.edges.push(Edge {
                    from: parent_id,
                    to: id,
                }),
                None if chain.was_traversed(parent) => {
                    tracing::debug!(%parent, child = id, "parent filtered out, edge dropped");
                }
                None => {}
            }
        }

        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Graphviz DOT source for this graph
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph {\n");

        for node in &self.nodes {
            // writing into a String cannot fail
            let _ = writeln!(dot, "\t{} [label=\"{}\"]", node.id, escape_label(&node.label));
        }
        for edge in &self.edges {
            let _ = writeln!(dot, "\t{} -> {}", edge.from, edge.to);
        }

        dot.push_str("}\n");
        dot
    }
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
