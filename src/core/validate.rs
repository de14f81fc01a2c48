//! Input validation for nodes and edges.
//!
//! Violations are collected into human-readable message lists; the graph
//! store rejects the mutation as a whole when the list is non-empty.

use crate::core::graph::RoadGraph;
use crate::core::model::{Node, NodeId};

/// Longest accepted node id, in characters.
pub const MAX_NODE_ID_LEN: usize = 50;

/// World-coordinate bounds, both axes.
pub const COORD_MIN: i32 = -5000;
pub const COORD_MAX: i32 = 5000;

/// Check a node's id and coordinates. Returns one message per violation;
/// empty means the node is acceptable.
pub fn validate_node(node: &Node) -> Vec<String> {
    let mut errors = Vec::new();

    if node.id.as_str().is_empty() {
        errors.push("node id must not be empty".to_string());
    } else if node.id.as_str().chars().count() > MAX_NODE_ID_LEN {
        errors.push(format!(
            "node id '{}' is too long (maximum {MAX_NODE_ID_LEN} characters)",
            node.id
        ));
    }

    if node.x < COORD_MIN || node.x > COORD_MAX {
        errors.push(format!(
            "x coordinate {} must be between {COORD_MIN} and {COORD_MAX}",
            node.x
        ));
    }
    if node.y < COORD_MIN || node.y > COORD_MAX {
        errors.push(format!(
            "y coordinate {} must be between {COORD_MIN} and {COORD_MAX}",
            node.y
        ));
    }

    errors
}

/// Check an edge against the current graph: no self-loops, both endpoints
/// present, no duplicate of the unordered pair in either order.
pub fn validate_edge(graph: &RoadGraph, a: &NodeId, b: &NodeId) -> Vec<String> {
    let mut errors = Vec::new();

    if a == b {
        errors.push(format!("edge cannot connect node '{a}' to itself"));
    }
    if !graph.contains(a) {
        errors.push(format!("unknown node '{a}'"));
    }
    if !graph.contains(b) {
        errors.push(format!("unknown node '{b}'"));
    }
    if graph.has_edge(a, b) {
        errors.push(format!("edge between '{a}' and '{b}' already exists"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_node_at_limits() {
        let id: String = "x".repeat(MAX_NODE_ID_LEN);
        let node = Node::new(id, COORD_MAX, COORD_MIN);
        assert!(validate_node(&node).is_empty());
    }

    #[test]
    fn rejects_empty_and_overlong_ids() {
        assert_eq!(validate_node(&Node::new("", 0, 0)).len(), 1);

        let long: String = "x".repeat(MAX_NODE_ID_LEN + 1);
        let errors = validate_node(&Node::new(long, 0, 0));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("too long"));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let errors = validate_node(&Node::new("001", COORD_MAX + 1, COORD_MIN - 1));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn collects_every_edge_violation() {
        let graph = RoadGraph::new();
        let id = NodeId::from("ghost");
        let errors = validate_edge(&graph, &id, &id);
        // Self-loop plus two unknown-endpoint messages.
        assert_eq!(errors.len(), 3);
    }
}
