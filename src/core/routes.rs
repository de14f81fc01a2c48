//! Route queries over the road network: BFS shortest path, depth-bounded
//! enumeration of simple paths, and toll-free segment classification.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::graph::RoadGraph;
use crate::core::model::NodeId;

/// Depth bound (in edges) for alternative-route enumeration.
const ALTERNATIVE_DEPTH_LIMIT: usize = 10;

/// Route queries over a road graph.
///
/// Holds only a borrow and caches nothing, so a router always reads the
/// graph's current adjacency projection; create one per query batch.
pub struct Router<'a> {
    graph: &'a RoadGraph,
}

impl<'a> Router<'a> {
    pub fn new(graph: &'a RoadGraph) -> Self {
        Self { graph }
    }

    /// Shortest path by edge count, from `from` to `to` inclusive.
    ///
    /// Returns `None` when either id is unknown or the nodes lie in
    /// different connected components. `from == to` yields the one-node
    /// path without traversal. Among equal-length paths the first one in
    /// BFS layer order wins, with neighbors visited in adjacency insertion
    /// order.
    pub fn shortest_path(&self, from: &NodeId, to: &NodeId) -> Option<Vec<NodeId>> {
        if !self.graph.contains(from) || !self.graph.contains(to) {
            return None;
        }
        if from == to {
            return Some(vec![from.clone()]);
        }

        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();

        visited.insert(from.clone());
        queue.push_back(from.clone());

        while let Some(current) = queue.pop_front() {
            for neighbor in self.graph.neighbors(&current) {
                if visited.contains(neighbor) {
                    continue;
                }
                visited.insert(neighbor.clone());
                parent.insert(neighbor.clone(), current.clone());
                if neighbor == to {
                    return Some(reconstruct_path(&parent, from, to));
                }
                queue.push_back(neighbor.clone());
            }
        }

        None
    }

    /// Every simple path from `from` to `to` with at most `max_depth`
    /// edges, in depth-first discovery order.
    ///
    /// A node may appear in many enumerated paths but never twice within
    /// one path; the visited set is restored after each branch, and the
    /// depth bound guarantees termination.
    pub fn find_all_paths(
        &self,
        from: &NodeId,
        to: &NodeId,
        max_depth: usize,
    ) -> Vec<Vec<NodeId>> {
        if !self.graph.contains(from) || !self.graph.contains(to) {
            return Vec::new();
        }
        if from == to {
            return vec![vec![from.clone()]];
        }
        if max_depth == 0 {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut visited = HashSet::from([from.clone()]);
        let mut current = vec![from.clone()];
        self.enumerate(from, to, max_depth, &mut visited, &mut current, &mut paths);
        paths
    }

    fn enumerate(
        &self,
        current: &NodeId,
        to: &NodeId,
        depth_left: usize,
        visited: &mut HashSet<NodeId>,
        path: &mut Vec<NodeId>,
        out: &mut Vec<Vec<NodeId>>,
    ) {
        for neighbor in self.graph.neighbors(current) {
            if visited.contains(neighbor) {
                continue;
            }
            path.push(neighbor.clone());
            if neighbor == to {
                out.push(path.clone());
            } else if depth_left > 1 {
                visited.insert(neighbor.clone());
                self.enumerate(neighbor, to, depth_left - 1, visited, path, out);
                visited.remove(neighbor);
            }
            path.pop();
        }
    }

    /// The `count` shortest routes found by bounded enumeration, length
    /// ascending; fewer when fewer exist. Stable sort keeps discovery order
    /// among routes of equal length.
    pub fn find_alternative_routes(
        &self,
        from: &NodeId,
        to: &NodeId,
        count: usize,
    ) -> Vec<Vec<NodeId>> {
        let mut paths = self.find_all_paths(from, to, ALTERNATIVE_DEPTH_LIMIT);
        paths.sort_by_key(Vec::len);
        paths.truncate(count);
        paths
    }
}

/// Walk the BFS parent map back from `to` and reverse into a forward path.
fn reconstruct_path(
    parent: &HashMap<NodeId, NodeId>,
    from: &NodeId,
    to: &NodeId,
) -> Vec<NodeId> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        if let Some(prev) = parent.get(current) {
            path.push(prev.clone());
            current = prev;
        } else {
            break;
        }
    }

    path.reverse();
    path
}

/// Toll-free segments, keyed by unordered node-id pair.
///
/// Display classification only: route search treats every edge as unit
/// cost, free or not.
#[derive(Debug, Clone, Default)]
pub struct FreeSegments {
    pairs: Vec<(NodeId, NodeId)>,
}

impl FreeSegments {
    pub fn new(pairs: impl IntoIterator<Item = (NodeId, NodeId)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// True when the unordered pair is listed as toll-free, in either order.
    pub fn is_free(&self, a: &NodeId, b: &NodeId) -> bool {
        self.pairs
            .iter()
            .any(|(f, t)| (f == a && t == b) || (f == b && t == a))
    }

    pub fn pairs(&self) -> &[(NodeId, NodeId)] {
        &self.pairs
    }
}
