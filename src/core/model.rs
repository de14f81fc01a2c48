//! Core data model: node ids, nodes, edges, and display-tag tables.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node in the road network.
///
/// Ids are stable keys: unique across all live nodes, never reused within a
/// session after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A point in the road network: a toll gate, an interchange, or a plain
/// waypoint.
///
/// Corner/km display tags are NOT stored on the node; they live in the
/// [`TagStore`] side maps so dynamic edits can override config-derived tags
/// without touching node identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: i32,
    pub y: i32,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            name: None,
            x,
            y,
        }
    }

    pub fn named(id: impl Into<NodeId>, name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            x,
            y,
        }
    }

    /// Display label, falling back to the id when no name is set.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.id.as_str())
    }

    /// World-space position as floating-point, for distance computations.
    pub fn position(&self) -> (f64, f64) {
        (self.x as f64, self.y as f64)
    }
}

/// An unordered pair of node ids.
///
/// Edges reference nodes by id only; no node data is embedded, so a node can
/// move without invalidating its edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn new(a: impl Into<NodeId>, b: impl Into<NodeId>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// True when this edge connects the given pair, in either order.
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.a == a && &self.b == b) || (&self.a == b && &self.b == a)
    }

    /// True when either endpoint is the given node.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.a == id || &self.b == id
    }
}

/// Display annotations keyed by node id.
///
/// Two tables: corner tags (construction phase, section, sector) and km tags
/// (kilometer posts). Road descriptors merge their static tables in at
/// construction time, last write wins; later explicit edits overwrite
/// entries directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagStore {
    corner: HashMap<NodeId, String>,
    km: HashMap<NodeId, String>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corner_tag(&self, id: &NodeId) -> Option<&str> {
        self.corner.get(id).map(String::as_str)
    }

    pub fn km_tag(&self, id: &NodeId) -> Option<&str> {
        self.km.get(id).map(String::as_str)
    }

    pub fn set_corner_tag(&mut self, id: NodeId, tag: impl Into<String>) {
        self.corner.insert(id, tag.into());
    }

    pub fn set_km_tag(&mut self, id: NodeId, tag: impl Into<String>) {
        self.km.insert(id, tag.into());
    }

    /// Merge both tables from another source, last write wins on collisions.
    pub fn merge(
        &mut self,
        corner: impl IntoIterator<Item = (NodeId, String)>,
        km: impl IntoIterator<Item = (NodeId, String)>,
    ) {
        self.corner.extend(corner);
        self.km.extend(km);
    }

    /// Drop every tag attached to the given node id.
    pub fn remove(&mut self, id: &NodeId) {
        self.corner.remove(id);
        self.km.remove(id);
    }

    pub fn corner_tags(&self) -> &HashMap<NodeId, String> {
        &self.corner
    }

    pub fn km_tags(&self) -> &HashMap<NodeId, String> {
        &self.km
    }

    pub fn clear(&mut self) {
        self.corner.clear();
        self.km.clear();
    }
}
