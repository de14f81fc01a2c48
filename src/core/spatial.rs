//! Euclidean nearest-node and radius queries over stored coordinates.
//!
//! No graph traversal is involved: these queries serve pointer snapping and
//! "what is around this point" lookups for the front end.

use rstar::{primitives::GeomWithData, RTree};

use crate::core::graph::RoadGraph;
use crate::core::model::{Node, NodeId};

/// Straight-line distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}

/// Linear scan for the nearest node - O(n) complexity.
/// Use [`SpatialIndex`] for O(log n) lookups over a stable node set.
pub fn nearest_node<'a>(point: (f64, f64), nodes: &'a [Node]) -> Option<&'a Node> {
    nodes
        .iter()
        .min_by(|m, n| {
            let dm = distance(point, m.position());
            let dn = distance(point, n.position());
            dm.total_cmp(&dn)
        })
}

/// Nearest node no farther than `max_distance`; used to snap pointer
/// positions onto the network.
pub fn nearest_within<'a>(
    point: (f64, f64),
    max_distance: f64,
    nodes: &'a [Node],
) -> Option<&'a Node> {
    nearest_node(point, nodes).filter(|n| distance(point, n.position()) <= max_distance)
}

/// All nodes within `radius` of `point`, boundary inclusive, in node order.
pub fn nodes_in_radius<'a>(point: (f64, f64), radius: f64, nodes: &'a [Node]) -> Vec<&'a Node> {
    nodes
        .iter()
        .filter(|n| distance(point, n.position()) <= radius)
        .collect()
}

/// R-tree index over a graph's nodes.
pub struct SpatialIndex {
    tree: RTree<GeomWithData<[f64; 2], NodeId>>,
}

impl SpatialIndex {
    /// Build the index from the graph's current nodes. The index is a
    /// point-in-time copy; rebuild it after nodes move or change.
    pub fn build(graph: &RoadGraph) -> Self {
        let points = graph
            .nodes()
            .iter()
            .map(|n| GeomWithData::new([n.x as f64, n.y as f64], n.id.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Id of the nearest indexed node, or `None` for an empty index.
    pub fn nearest(&self, point: (f64, f64)) -> Option<&NodeId> {
        self.tree
            .nearest_neighbor(&[point.0, point.1])
            .map(|p| &p.data)
    }

    /// Ids of every indexed node within `radius`, boundary inclusive,
    /// sorted for stable output.
    pub fn within_radius(&self, point: (f64, f64), radius: f64) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self
            .tree
            .locate_within_distance([point.0, point.1], radius * radius)
            .map(|p| &p.data)
            .collect();
        ids.sort();
        ids
    }
}
