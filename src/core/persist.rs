//! JSON snapshot persistence for road graphs.
//!
//! A snapshot replaces the entire graph on load: nodes, edges, and tag
//! tables are validated and repopulated as a whole, then the adjacency
//! projection is rebuilt before the graph is handed back. A document with
//! any invalid node or edge is rejected outright.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::graph::RoadGraph;
use crate::core::model::{Node, NodeId};
use crate::core::validate;

/// Current snapshot document version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized form of a road graph: node list, edge pairs, and both tag
/// tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub version: u32,
    pub nodes: Vec<Node>,
    pub edges: Vec<(NodeId, NodeId)>,
    #[serde(default)]
    pub corner_tags: HashMap<NodeId, String>,
    #[serde(default)]
    pub km_tags: HashMap<NodeId, String>,
}

impl RoadGraph {
    /// Capture the graph as a snapshot document.
    pub fn to_snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            version: SNAPSHOT_VERSION,
            nodes: self.nodes().to_vec(),
            edges: self
                .edges()
                .iter()
                .map(|e| (e.a.clone(), e.b.clone()))
                .collect(),
            corner_tags: self.tags().corner_tags().clone(),
            km_tags: self.tags().km_tags().clone(),
        }
    }

    /// Build a graph from a snapshot, all-or-nothing.
    ///
    /// Every node and edge is validated first and the complete violation
    /// list is returned on rejection; nothing is partially loaded. On
    /// success the adjacency projection is rebuilt from the loaded edges.
    pub fn from_snapshot(snapshot: MapSnapshot) -> Result<Self> {
        let errors = validate_snapshot(&snapshot);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let mut graph = RoadGraph::new();
        for node in snapshot.nodes {
            graph.insert_node_unchecked(node);
        }
        for (a, b) in snapshot.edges {
            graph.insert_edge_unchecked(a, b);
        }
        graph
            .tags_mut()
            .merge(snapshot.corner_tags, snapshot.km_tags);
        graph.rebuild_adjacency();
        Ok(graph)
    }
}

fn validate_snapshot(snapshot: &MapSnapshot) -> Vec<String> {
    let mut errors = Vec::new();

    if snapshot.version != SNAPSHOT_VERSION {
        errors.push(format!(
            "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
            snapshot.version
        ));
    }

    let mut ids: HashSet<&NodeId> = HashSet::new();
    for node in &snapshot.nodes {
        errors.extend(validate::validate_node(node));
        if !ids.insert(&node.id) {
            errors.push(format!("duplicate node id '{}'", node.id));
        }
    }

    let mut pairs: HashSet<(&NodeId, &NodeId)> = HashSet::new();
    for (a, b) in &snapshot.edges {
        if a == b {
            errors.push(format!("edge cannot connect node '{a}' to itself"));
            continue;
        }
        if !ids.contains(a) {
            errors.push(format!("edge references unknown node '{a}'"));
        }
        if !ids.contains(b) {
            errors.push(format!("edge references unknown node '{b}'"));
        }
        let key = if a <= b { (a, b) } else { (b, a) };
        if !pairs.insert(key) {
            errors.push(format!("duplicate edge between '{a}' and '{b}'"));
        }
    }

    errors
}

/// Write a graph to `path` as pretty-printed JSON.
pub fn save_snapshot(graph: &RoadGraph, path: &Path) -> Result<()> {
    let snapshot = graph.to_snapshot();
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;
    info!(
        "saved {} nodes / {} edges to {}",
        snapshot.nodes.len(),
        snapshot.edges.len(),
        path.display()
    );
    Ok(())
}

/// Load a graph from a JSON snapshot file.
pub fn load_snapshot(path: &Path) -> Result<RoadGraph> {
    let json = fs::read_to_string(path)?;
    let snapshot: MapSnapshot = serde_json::from_str(&json)?;
    let graph = RoadGraph::from_snapshot(snapshot)?;
    info!(
        "loaded {} nodes / {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}
