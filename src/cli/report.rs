//! Plain-text rendering of query results for the terminal.

use roadgraph::{FreeSegments, NodeId, RoadGraph};

/// Render a route as one line per node, with tags and toll-free segment
/// markers between the lines that have them.
pub fn render_route(graph: &RoadGraph, free: &FreeSegments, route: &[NodeId]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "route: {} nodes, {} jumps\n",
        route.len(),
        route.len().saturating_sub(1)
    ));

    for (i, id) in route.iter().enumerate() {
        out.push_str(&format!("  {}\n", node_line(graph, id)));
        if let Some(next) = route.get(i + 1) {
            if free.is_free(id, next) {
                out.push_str("    | (toll-free segment)\n");
            }
        }
    }
    out
}

/// One-line node summary: label, position, tags.
fn node_line(graph: &RoadGraph, id: &NodeId) -> String {
    let Some(node) = graph.node(id) else {
        return format!("{id} (unknown)");
    };

    let mut line = format!("{} ({}, {})", node.label(), node.x, node.y);
    if let Some(corner) = graph.tags().corner_tag(id) {
        line.push_str(&format!(" [{corner}]"));
    }
    if let Some(km) = graph.tags().km_tag(id) {
        line.push_str(&format!(" [km {km}]"));
    }
    line
}

/// Full node details: identity, position, tags, and neighbor list.
pub fn render_node_info(graph: &RoadGraph, id: &NodeId) -> Option<String> {
    let node = graph.node(id)?;

    let mut out = format!("id:       {}\n", node.id);
    if let Some(name) = &node.name {
        out.push_str(&format!("name:     {name}\n"));
    }
    out.push_str(&format!("position: ({}, {})\n", node.x, node.y));
    if let Some(corner) = graph.tags().corner_tag(id) {
        out.push_str(&format!("corner:   {corner}\n"));
    }
    if let Some(km) = graph.tags().km_tag(id) {
        out.push_str(&format!("km:       {km}\n"));
    }

    let neighbors = graph.neighbors(id);
    out.push_str(&format!("degree:   {}\n", neighbors.len()));
    for neighbor in neighbors {
        out.push_str(&format!("  - {neighbor}\n"));
    }
    Some(out)
}

/// Node/edge counts.
pub fn render_stats(graph: &RoadGraph) -> String {
    format!(
        "nodes: {}\nedges: {}\n",
        graph.node_count(),
        graph.edge_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadgraph::Node;

    fn graph() -> RoadGraph {
        let mut graph = RoadGraph::new();
        graph.add_node(Node::new("A", 0, 0)).unwrap();
        graph.add_node(Node::new("B", 10, 0)).unwrap();
        graph
            .add_edge(NodeId::from("A"), NodeId::from("B"))
            .unwrap();
        graph.tags_mut().set_km_tag(NodeId::from("A"), "13");
        graph
    }

    #[test]
    fn route_rendering_marks_free_segments() {
        let graph = graph();
        let free = FreeSegments::new([(NodeId::from("A"), NodeId::from("B"))]);
        let rendered = render_route(
            &graph,
            &free,
            &[NodeId::from("A"), NodeId::from("B")],
        );

        assert!(rendered.contains("2 nodes, 1 jumps"));
        assert!(rendered.contains("[km 13]"));
        assert!(rendered.contains("toll-free segment"));
    }

    #[test]
    fn node_info_lists_neighbors() {
        let graph = graph();
        let info = render_node_info(&graph, &NodeId::from("A")).unwrap();
        assert!(info.contains("degree:   1"));
        assert!(info.contains("- B"));

        assert!(render_node_info(&graph, &NodeId::from("ghost")).is_none());
    }
}
