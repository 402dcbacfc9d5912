// Pipeline graph model - nodes and directed edges as submitted by a client
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

/// A directed edge. Endpoints are plain identifiers and do not have to
/// name a declared [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// One submitted graph: an ordered node sequence and an ordered edge sequence.
///
/// Duplicate nodes, duplicate edges, self-loops and dangling endpoints are
/// all kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Pipeline {
    #[inline]
    #[must_use]
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    #[inline]
    #[must_use]
    pub fn with_node(mut self, id: impl Into<String>) -> Self {
        self.nodes.push(Node::new(id));
        self
    }

    #[inline]
    #[must_use]
    pub fn with_edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(Edge::new(source, target));
        self
    }

    /// Number of submitted node records, duplicates included.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of submitted edge records, duplicates included.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_duplicates() {
        let pipeline = Pipeline::default()
            .with_node("a")
            .with_node("a")
            .with_edge("a", "b")
            .with_edge("a", "b");

        assert_eq!(pipeline.num_nodes(), 2);
        assert_eq!(pipeline.num_edges(), 2);
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "nodes": [{"id": "a", "type": "input"}, {"id": "b"}],
            "edges": [{"source": "a", "target": "b", "id": "e1"}]
        }"#;
        let pipeline: Pipeline = serde_json::from_str(json).unwrap();

        assert_eq!(
            pipeline,
            Pipeline::new(
                vec![Node::new("a"), Node::new("b")],
                vec![Edge::new("a", "b")],
            )
        );
    }
}
