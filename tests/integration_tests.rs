//! End-to-end tests for the roadgraph library: atlas construction, route
//! queries, editing flows, and snapshot persistence working together.

use roadgraph::{atlas, persist, spatial, Error, Node, NodeId, RoadGraph, Router, SpatialIndex};

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn atlas_routes_across_the_whole_network() {
    let graph = atlas::default_atlas();
    let router = Router::new(&graph);

    // Express motorway to the coastal terminal, across the beltway and the
    // southern motorway.
    let route = router.shortest_path(&id("112"), &id("IC-303-END")).unwrap();
    assert_eq!(route.first(), Some(&id("112")));
    assert_eq!(route.last(), Some(&id("IC-303-END")));

    // Consecutive route entries are always connected.
    for pair in route.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]));
    }

    // No shorter enumerated route exists within the alternative bound.
    for path in router.find_all_paths(&id("112"), &id("IC-303-END"), route.len() + 2) {
        assert!(route.len() <= path.len());
    }
}

#[test]
fn editing_flow_updates_routes() {
    let mut graph = atlas::default_atlas();

    // A new bypass between the express motorway and the northern one.
    graph.add_node(Node::new("BYPASS", 900, -200)).unwrap();
    graph.add_edge(id("112"), id("BYPASS")).unwrap();
    graph.add_edge(id("BYPASS"), id("412")).unwrap();

    let with_bypass = Router::new(&graph).shortest_path(&id("112"), &id("412")).unwrap();
    assert_eq!(with_bypass, vec![id("112"), id("BYPASS"), id("412")]);

    // Removing the bypass node cascades to both edges and restores the
    // long way around.
    assert!(graph.remove_node(&id("BYPASS")));
    let around = Router::new(&graph).shortest_path(&id("112"), &id("412")).unwrap();
    assert!(around.len() > 3);
    assert!(!around.contains(&id("BYPASS")));
}

#[test]
fn rejected_mutations_leave_the_graph_untouched() {
    let mut graph = atlas::default_atlas();
    let nodes_before = graph.node_count();
    let edges_before = graph.edge_count();

    // Duplicate id, duplicate edge, self-loop, out-of-range coordinates.
    assert!(graph.add_node(Node::new("001", 0, 0)).is_err());
    assert!(graph.add_edge(id("IC-005-004"), id("005")).is_err());
    assert!(graph.add_edge(id("005"), id("005")).is_err());
    assert!(graph.add_node(Node::new("FAR", 9000, 0)).is_err());

    assert_eq!(graph.node_count(), nodes_before);
    assert_eq!(graph.edge_count(), edges_before);
}

#[test]
fn validation_reports_every_violation_at_once() {
    let mut graph = RoadGraph::new();
    let long_id: String = "x".repeat(60);

    let err = graph.add_node(Node::new(long_id, 6000, -6000)).unwrap_err();
    match err {
        Error::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn snapshot_round_trip_preserves_routing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atlas.json");

    let graph = atlas::default_atlas();
    persist::save_snapshot(&graph, &path).unwrap();
    let restored = persist::load_snapshot(&path).unwrap();

    assert_eq!(restored.node_count(), graph.node_count());
    assert_eq!(restored.edge_count(), graph.edge_count());

    let original_route = Router::new(&graph).shortest_path(&id("101"), &id("301"));
    let restored_route = Router::new(&restored).shortest_path(&id("101"), &id("301"));
    assert_eq!(original_route, restored_route);

    assert_eq!(restored.tags().corner_tag(&id("001")), Some("Phase 3"));
}

#[test]
fn edited_snapshot_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edited.json");

    let mut graph = atlas::default_atlas();
    graph.add_node(Node::named("X1", "Test gate", 700, 700)).unwrap();
    graph.add_edge(id("X1"), id("303")).unwrap();
    persist::save_snapshot(&graph, &path).unwrap();

    let restored = persist::load_snapshot(&path).unwrap();
    assert!(restored.has_edge(&id("X1"), &id("303")));
    let route = Router::new(&restored).shortest_path(&id("X1"), &id("302")).unwrap();
    assert_eq!(route.len(), 4);
}

#[test]
fn spatial_queries_agree_with_the_graph() {
    let graph = atlas::default_atlas();
    let index = SpatialIndex::build(&graph);

    // Gate 001 sits at the top of the beltway circle.
    let top_of_ring = (520.0, 30.0);
    assert_eq!(index.nearest(top_of_ring), Some(&id("001")));
    assert_eq!(
        spatial::nearest_node(top_of_ring, graph.nodes()).map(|n| &n.id),
        Some(&id("001"))
    );

    // Every node the index returns within the radius really is within it.
    let center = (520.0, 120.0);
    for hit in index.within_radius(center, 95.0) {
        let node = graph.node(hit).unwrap();
        assert!(spatial::distance(center, node.position()) <= 95.0);
    }
}

#[test]
fn free_segments_lie_on_shortest_routes() {
    let graph = atlas::default_atlas();
    let free = atlas::default_free_segments();
    let router = Router::new(&graph);

    // The toll-free chord is the shortest way between its endpoints.
    let route = router.shortest_path(&id("011"), &id("012")).unwrap();
    let free_jumps = route
        .windows(2)
        .filter(|pair| free.is_free(&pair[0], &pair[1]))
        .count();
    assert_eq!(free_jumps, 2);
}
