//! Declarative road construction: circular rings, linear chains, branches,
//! and interchange splicing.
//!
//! Descriptors are trusted construction data (the bundled atlas, import
//! scripts) and append straight into the graph without the editing layer's
//! validation pass. Splice operations require their endpoints to exist
//! already; the caller orders the construction script accordingly — the
//! builder does not sort descriptors itself.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;

use crate::core::graph::RoadGraph;
use crate::core::model::{Node, NodeId};

/// A circular road: names placed evenly around a circle and closed into a
/// ring of edges.
#[derive(Debug, Clone, Default)]
pub struct RingSpec {
    pub names: Vec<NodeId>,
    pub center: (i32, i32),
    pub radius: f64,
    pub corner_tags: HashMap<NodeId, String>,
    pub km_tags: HashMap<NodeId, String>,
}

/// An open road: ordered names plus display-tag tables.
#[derive(Debug, Clone, Default)]
pub struct RoadSpec {
    pub names: Vec<NodeId>,
    pub corner_tags: HashMap<NodeId, String>,
    pub km_tags: HashMap<NodeId, String>,
}

/// Build a circular road: node `i` of `n` sits at angle `i/n * 2π - π/2`,
/// so the first name is at the top of the circle and the rest proceed
/// clockwise. Positions are rounded to integer coordinates. An empty name
/// list is a no-op.
pub fn build_circular_road(graph: &mut RoadGraph, spec: &RingSpec) {
    let n = spec.names.len();
    if n == 0 {
        return;
    }

    for (i, id) in spec.names.iter().enumerate() {
        let angle = (i as f64 / n as f64) * 2.0 * PI - PI / 2.0;
        let x = (spec.center.0 as f64 + spec.radius * angle.cos()).round() as i32;
        let y = (spec.center.1 as f64 + spec.radius * angle.sin()).round() as i32;
        graph.insert_node_unchecked(Node::new(id.clone(), x, y));
    }

    if n > 1 {
        for i in 0..n {
            let a = &spec.names[i];
            let b = &spec.names[(i + 1) % n];
            // A two-name ring folds to a single edge.
            if graph.has_edge(a, b) {
                continue;
            }
            graph.insert_edge_unchecked(a.clone(), b.clone());
        }
    }

    merge_road_tags_from(graph, &spec.corner_tags, &spec.km_tags);
    debug!("built circular road with {n} nodes");
}

/// Splice an interchange into the middle of the edge between `from` and
/// `to`. See [`insert_interchange_at`].
pub fn insert_interchange(
    graph: &mut RoadGraph,
    from: &NodeId,
    to: &NodeId,
    id: impl Into<NodeId>,
    name: Option<String>,
) -> Option<Node> {
    insert_interchange_at(graph, from, to, id, name, 0.5)
}

/// Splice an interchange at parameter `t` along the segment from `from` to
/// `to` (`t = 0.5` is the midpoint), rounded to integer coordinates.
///
/// Every edge matching the unordered pair `(from, to)` is removed, then
/// `(from, id)` and `(id, to)` are inserted. Returns `None` without touching
/// the graph when either endpoint is missing; callers treat that as a skip,
/// not a failure.
pub fn insert_interchange_at(
    graph: &mut RoadGraph,
    from: &NodeId,
    to: &NodeId,
    id: impl Into<NodeId>,
    name: Option<String>,
    t: f64,
) -> Option<Node> {
    let (ax, ay) = graph.node(from)?.position();
    let (bx, by) = graph.node(to)?.position();

    let junction = Node {
        id: id.into(),
        name,
        x: (ax + (bx - ax) * t).round() as i32,
        y: (ay + (by - ay) * t).round() as i32,
    };
    graph.insert_node_unchecked(junction.clone());

    graph.remove_edge(from, to);
    graph.insert_edge_unchecked(from.clone(), junction.id.clone());
    graph.insert_edge_unchecked(junction.id.clone(), to.clone());

    debug!("spliced '{}' between '{from}' and '{to}'", junction.id);
    Some(junction)
}

/// Chain new nodes off `start` with a fixed per-step offset: name `k`
/// (0-based) is placed at `origin + k * step` and connected to its
/// predecessor (initially `start`).
///
/// `start` itself is not required to exist yet; referential integrity of the
/// anchor is the caller's concern.
pub fn build_linear_road(
    graph: &mut RoadGraph,
    start: &NodeId,
    names: &[NodeId],
    step: (i32, i32),
    origin: (i32, i32),
) {
    let mut prev = start.clone();
    let (mut x, mut y) = origin;

    for id in names {
        graph.insert_node_unchecked(Node::new(id.clone(), x, y));
        graph.insert_edge_unchecked(prev.clone(), id.clone());
        prev = id.clone();
        x += step.0;
        y += step.1;
    }
}

/// [`build_linear_road`] driven by a [`RoadSpec`], merging the spec's tag
/// tables as well. An empty spec is a no-op.
pub fn build_road(
    graph: &mut RoadGraph,
    spec: &RoadSpec,
    start: &NodeId,
    step: (i32, i32),
    origin: (i32, i32),
) {
    if spec.names.is_empty() {
        return;
    }
    build_linear_road(graph, start, &spec.names, step, origin);
    merge_road_tags(graph, spec);
}

/// Branch a road off an existing node: like [`build_road`], but the first
/// position is the anchor node's stored position plus `offset`. Silently a
/// no-op when the anchor does not exist.
pub fn build_branch(
    graph: &mut RoadGraph,
    spec: &RoadSpec,
    anchor: &NodeId,
    offset: (i32, i32),
    step: (i32, i32),
) {
    if spec.names.is_empty() {
        return;
    }
    let Some(anchor_node) = graph.node(anchor) else {
        debug!("branch anchor '{anchor}' missing, skipping {} nodes", spec.names.len());
        return;
    };

    let origin = (anchor_node.x + offset.0, anchor_node.y + offset.1);
    build_road(graph, spec, anchor, step, origin);
}

/// Merge a road spec's tag tables into the graph's dynamic tag store,
/// last write wins. Used on its own when a road's nodes were laid out
/// by an earlier operation.
pub fn merge_road_tags(graph: &mut RoadGraph, spec: &RoadSpec) {
    merge_road_tags_from(graph, &spec.corner_tags, &spec.km_tags);
}

fn merge_road_tags_from(
    graph: &mut RoadGraph,
    corner: &HashMap<NodeId, String>,
    km: &HashMap<NodeId, String>,
) {
    graph.tags_mut().merge(
        corner.iter().map(|(k, v)| (k.clone(), v.clone())),
        km.iter().map(|(k, v)| (k.clone(), v.clone())),
    );
}
