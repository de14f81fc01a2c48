//! The road network store: nodes, edges, and the adjacency projection.
//!
//! Every mutation updates the adjacency projection in the same call, so a
//! query can never observe a projection that is out of sync with the edge
//! list. A full rebuild runs only after bulk snapshot loads.

use std::collections::HashMap;

use log::debug;

use crate::core::error::{Error, Result};
use crate::core::model::{Edge, Node, NodeId, TagStore};
use crate::core::validate;

/// In-memory road network: node list, edge list, display tags, and the
/// derived id → neighbor-list adjacency projection.
///
/// Node order and per-node neighbor order are insertion order, which keeps
/// traversal results deterministic for a given construction sequence.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    tags: TagStore,
    index: HashMap<NodeId, usize>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// All live nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All live edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// True when an edge connects the pair, in either order.
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Neighbors of a node, in first-seen edge order. Empty for unknown ids.
    pub fn neighbors(&self, id: &NodeId) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, id: &NodeId) -> usize {
        self.neighbors(id).len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagStore {
        &mut self.tags
    }

    /// Add a validated node. Rejects bad ids, out-of-range coordinates, and
    /// duplicate ids with the full violation list; nothing is inserted on
    /// rejection.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        let mut errors = validate::validate_node(&node);
        if self.contains(&node.id) {
            errors.push(format!("node '{}' already exists", node.id));
        }
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        self.insert_node_unchecked(node);
        Ok(())
    }

    /// Add a validated edge. Rejects self-loops, unknown endpoints, and
    /// duplicates of the unordered pair; nothing is inserted on rejection.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let errors = validate::validate_edge(self, &a, &b);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        self.insert_edge_unchecked(a, b);
        Ok(())
    }

    /// Remove a node and cascade to its incident edges and tags. Returns
    /// whether the node existed.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let Some(pos) = self.index.remove(id) else {
            return false;
        };

        self.nodes.remove(pos);
        for (i, node) in self.nodes.iter().enumerate().skip(pos) {
            self.index.insert(node.id.clone(), i);
        }

        self.edges.retain(|e| !e.touches(id));
        self.adjacency.remove(id);
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|n| n != id);
        }
        self.tags.remove(id);

        debug!("removed node '{id}' and its incident edges");
        true
    }

    /// Remove every edge matching the unordered pair; idempotent over
    /// duplicates. Returns whether anything was removed.
    pub fn remove_edge(&mut self, a: &NodeId, b: &NodeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| !e.connects(a, b));
        if self.edges.len() == before {
            return false;
        }

        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.retain(|n| n != b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.retain(|n| n != a);
        }
        true
    }

    /// Drop all nodes, edges, and tags.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.tags.clear();
        self.index.clear();
        self.adjacency.clear();
    }

    /// Insert a node without the editing layer's validation pass.
    ///
    /// Road descriptors are trusted construction data; the id-uniqueness
    /// invariant is the caller's to uphold.
    pub(crate) fn insert_node_unchecked(&mut self, node: Node) {
        debug_assert!(
            !self.index.contains_key(&node.id),
            "duplicate node id '{}'",
            node.id
        );
        self.index.insert(node.id.clone(), self.nodes.len());
        self.adjacency.entry(node.id.clone()).or_default();
        self.nodes.push(node);
    }

    /// Insert an edge without the editing layer's validation pass.
    ///
    /// The adjacency projection only records endpoints that exist as nodes;
    /// a chain anchored on a not-yet-created start id stays out of the
    /// projection until the node appears and the projection is rebuilt.
    pub(crate) fn insert_edge_unchecked(&mut self, a: NodeId, b: NodeId) {
        if self.index.contains_key(&a) && self.index.contains_key(&b) {
            self.adjacency.entry(a.clone()).or_default().push(b.clone());
            self.adjacency.entry(b.clone()).or_default().push(a.clone());
        }
        self.edges.push(Edge::new(a, b));
    }

    /// Recompute the adjacency projection from the node and edge lists.
    ///
    /// Mutations maintain the projection incrementally; this full rebuild
    /// backs bulk snapshot loads.
    pub(crate) fn rebuild_adjacency(&mut self) {
        self.adjacency.clear();
        for node in &self.nodes {
            self.adjacency.insert(node.id.clone(), Vec::new());
        }
        for edge in &self.edges {
            if !self.index.contains_key(&edge.a) || !self.index.contains_key(&edge.b) {
                continue;
            }
            if let Some(neighbors) = self.adjacency.get_mut(&edge.a) {
                neighbors.push(edge.b.clone());
            }
            if let Some(neighbors) = self.adjacency.get_mut(&edge.b) {
                neighbors.push(edge.a.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> RoadGraph {
        let mut graph = RoadGraph::new();
        for id in ["1", "2", "3", "4"] {
            graph.add_node(Node::new(id, 0, 0)).unwrap();
        }
        graph
            .add_edge(NodeId::from("1"), NodeId::from("2"))
            .unwrap();
        graph
            .add_edge(NodeId::from("2"), NodeId::from("3"))
            .unwrap();
        graph
            .add_edge(NodeId::from("3"), NodeId::from("4"))
            .unwrap();
        graph
    }

    #[test]
    fn add_node_rejects_duplicate_id() {
        let mut graph = RoadGraph::new();
        graph.add_node(Node::new("001", 0, 0)).unwrap();

        let err = graph.add_node(Node::new("001", 5, 5)).unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors, vec!["node '001' already exists".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_edge_rejects_duplicate_in_either_order() {
        let mut graph = chain_graph();
        let before = graph.edge_count();

        assert!(graph
            .add_edge(NodeId::from("1"), NodeId::from("2"))
            .is_err());
        assert!(graph
            .add_edge(NodeId::from("2"), NodeId::from("1"))
            .is_err());
        assert_eq!(graph.edge_count(), before);
    }

    #[test]
    fn add_edge_rejects_self_loop_and_unknown_endpoints() {
        let mut graph = chain_graph();

        let err = graph
            .add_edge(NodeId::from("ghost"), NodeId::from("ghost"))
            .unwrap_err();
        match err {
            Error::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn remove_node_cascades_to_edges_and_adjacency() {
        let mut graph = chain_graph();
        assert!(graph.remove_node(&NodeId::from("2")));

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(&NodeId::from("3"), &NodeId::from("4")));
        assert!(graph.neighbors(&NodeId::from("1")).is_empty());
        for node in graph.nodes() {
            assert!(!graph
                .neighbors(&node.id)
                .contains(&NodeId::from("2")));
        }
    }

    #[test]
    fn remove_node_reindexes_later_nodes() {
        let mut graph = chain_graph();
        graph.remove_node(&NodeId::from("1"));

        // Lookups for the shifted nodes must still resolve.
        assert_eq!(graph.node(&NodeId::from("4")).unwrap().id, NodeId::from("4"));
        assert!(graph.remove_node(&NodeId::from("4")));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn remove_edge_updates_adjacency() {
        let mut graph = chain_graph();
        assert!(graph.remove_edge(&NodeId::from("2"), &NodeId::from("1")));
        assert!(!graph.has_edge(&NodeId::from("1"), &NodeId::from("2")));
        assert!(!graph
            .neighbors(&NodeId::from("2"))
            .contains(&NodeId::from("1")));
        assert!(!graph.remove_edge(&NodeId::from("1"), &NodeId::from("2")));
    }

    #[test]
    fn rebuild_matches_incremental_projection() {
        let mut graph = chain_graph();
        let incremental: Vec<Vec<NodeId>> = graph
            .nodes()
            .iter()
            .map(|n| graph.neighbors(&n.id).to_vec())
            .collect();

        graph.rebuild_adjacency();
        let rebuilt: Vec<Vec<NodeId>> = graph
            .nodes()
            .iter()
            .map(|n| graph.neighbors(&n.id).to_vec())
            .collect();

        assert_eq!(incremental, rebuilt);
    }

    #[test]
    fn dangling_chain_edges_stay_out_of_projection() {
        let mut graph = RoadGraph::new();
        graph.add_node(Node::new("A", 0, 0)).unwrap();
        // Chain anchored on a start node that does not exist yet.
        graph.insert_edge_unchecked(NodeId::from("missing"), NodeId::from("A"));

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(&NodeId::from("A")).is_empty());
        assert!(graph.neighbors(&NodeId::from("missing")).is_empty());
    }
}
