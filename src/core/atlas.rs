//! The bundled default atlas: an orbital beltway with spliced interchanges
//! and five spur highways.
//!
//! Construction is a hand-ordered script: every splice references nodes
//! created by an earlier step. Interchange ids follow the `IC-<from>-<to>`
//! scheme of the edge they split.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::builder::{
    build_branch, build_circular_road, build_linear_road, insert_interchange,
    insert_interchange_at, merge_road_tags, RingSpec, RoadSpec,
};
use crate::core::graph::RoadGraph;
use crate::core::model::NodeId;
use crate::core::routes::FreeSegments;

const RING_CENTER: (i32, i32) = (520, 120);
const RING_RADIUS: f64 = 90.0;

fn names(ids: &[&str]) -> Vec<NodeId> {
    ids.iter().map(|&id| NodeId::from(id)).collect()
}

fn tags(entries: &[(&str, &str)]) -> HashMap<NodeId, String> {
    entries
        .iter()
        .map(|&(id, tag)| (NodeId::from(id), tag.to_string()))
        .collect()
}

/// The orbital beltway: thirteen toll gates on a circle.
static RING: Lazy<RingSpec> = Lazy::new(|| RingSpec {
    names: names(&[
        "001", "002", "003", "004", "005", "006", "007", "008", "009", "010", "011", "012", "013",
    ]),
    center: RING_CENTER,
    radius: RING_RADIUS,
    corner_tags: tags(&[
        ("001", "Phase 3"),
        ("002", "Phase 3"),
        ("003", "Phase 3"),
        ("004", "Phase 1"),
        ("005", "Phase 1"),
        ("006", "Phase 1"),
        ("007", "Phase 1"),
        ("008", "Phase 1"),
        ("009", "Phase 1"),
        ("010", "Phase 1"),
        ("011", "Phase 1"),
        ("012", "Phase 5"),
        ("013", "Phase 3-5"),
    ]),
    km_tags: tags(&[
        ("001", "13"),
        ("002", "50"),
        ("003", "83"),
        ("004", "108"),
        ("005", "134"),
        ("006", "151"),
        ("007", "194"),
        ("008", "197"),
        ("009", "207"),
        ("010", "239"),
        ("011", "250"),
        ("012", "274"),
        ("013", "338"),
    ]),
});

/// Beltway edges that receive a midpoint interchange. The `011`-`012` chord
/// is deliberately absent: it gets the parametrized double splice below.
const RING_SPLICES: &[(&str, &str)] = &[
    ("011", "010"),
    ("010", "009"),
    ("009", "008"),
    ("008", "007"),
    ("007", "006"),
    ("006", "005"),
    ("005", "004"),
    ("004", "003"),
    ("003", "002"),
    ("002", "001"),
    ("001", "013"),
    ("013", "012"),
];

/// The eastern express motorway, chained off the beltway.
static EXPRESS: Lazy<RoadSpec> = Lazy::new(|| RoadSpec {
    names: names(&[
        "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111", "112",
    ]),
    corner_tags: tags(&[
        ("101", "Stage 0.1"),
        ("102", "Stage 0.2"),
        ("103", "Stage 0.2"),
        ("104", "Stage 1"),
        ("105", "Stage 2"),
        ("106", "Stage 2"),
        ("107", "Stage 3"),
        ("108", "Stage 3"),
        ("109", "Stage 4"),
        ("110", "Stage 4"),
        ("111", "Stage 5"),
        ("112", "Stage 5"),
    ]),
    km_tags: tags(&[
        ("101", "81"),
        ("102", "65"),
        ("103", "33"),
        ("104", "118"),
        ("105", "175"),
        ("106", "185"),
        ("107", "281"),
        ("108", "314"),
        ("109", "392"),
        ("110", "420"),
        ("111", "485"),
        ("112", "591"),
    ]),
});

/// Short western spur off the B junction.
static WEST_ONE: Lazy<RoadSpec> = Lazy::new(|| RoadSpec {
    names: names(&["W1-46"]),
    corner_tags: tags(&[("W1-46", "33-66")]),
    km_tags: tags(&[("W1-46", "46")]),
});

/// Two-gate western spur off the A junction.
static WEST_TWO: Lazy<RoadSpec> = Lazy::new(|| RoadSpec {
    names: names(&["W2-137", "W2-169"]),
    corner_tags: tags(&[("W2-137", "124-173"), ("W2-169", "173-194")]),
    km_tags: tags(&[("W2-137", "137"), ("W2-169", "169")]),
});

/// The southern motorway, branched off the `009`-`008` interchange.
static SOUTH: Lazy<RoadSpec> = Lazy::new(|| RoadSpec {
    names: names(&[
        "201", "202", "203", "204", "205", "206", "207", "208", "209", "210",
    ]),
    corner_tags: tags(&[
        ("201", "Section 1"),
        ("202", "Section 1"),
        ("203", "Section 1"),
        ("204", "Section 2"),
        ("205", "Section 2"),
        ("206", "Section 2"),
        ("207", "Section 2"),
        ("208", "Section 2"),
        ("209", "Section 4"),
        ("210", "Section 4"),
    ]),
    km_tags: tags(&[
        ("201", "62"),
        ("202", "71"),
        ("203", "133"),
        ("204", "228"),
        ("205", "322"),
        ("206", "339"),
        ("207", "355"),
        ("208", "380"),
        ("209", "401"),
        ("210", "416"),
    ]),
});

/// The coastal road continuing from the southern motorway's end.
static COAST: Lazy<RoadSpec> = Lazy::new(|| RoadSpec {
    names: names(&["301", "302", "303"]),
    corner_tags: HashMap::new(),
    km_tags: tags(&[("301", "24"), ("302", "83"), ("303", "103")]),
});

/// The northern motorway, branched off the north gate link.
static NORTH: Lazy<RoadSpec> = Lazy::new(|| RoadSpec {
    names: names(&[
        "401", "402", "403", "404", "405", "406", "407", "408", "409", "410", "411", "412",
    ]),
    corner_tags: HashMap::new(),
    km_tags: tags(&[
        ("401", "48"),
        ("402", "50"),
        ("403", "59"),
        ("404", "67"),
        ("405", "89"),
        ("406", "97"),
        ("407", "124"),
        ("408", "147"),
        ("409", "159"),
        ("410", "177"),
        ("411", "208"),
        ("412", "214"),
    ]),
});

/// Toll-free segments of the default atlas.
static FREE_SEGMENT_PAIRS: &[(&str, &str)] = &[
    ("IC-012-RIDGE", "IC-013-012"),
    ("IC-011-012-B", "IC-011-012-A"),
    ("IC-011-012-A", "011"),
];

/// Build the default road network.
///
/// The script order matters: interchanges splice edges created by the steps
/// before them.
pub fn default_atlas() -> RoadGraph {
    let mut graph = RoadGraph::new();

    build_circular_road(&mut graph, &RING);

    for &(from, to) in RING_SPLICES {
        let from = NodeId::from(from);
        let to = NodeId::from(to);
        let id = format!("IC-{from}-{to}");
        insert_interchange(&mut graph, &from, &to, id, None);
    }

    // Express motorway: its own interchange between gate 004 and the
    // neighboring beltway interchange, then the chain east of it.
    if let Some(express_jct) = insert_interchange(
        &mut graph,
        &NodeId::from("004"),
        &NodeId::from("IC-005-004"),
        "IC-004-EXPRESS",
        Some("Express interchange".to_string()),
    ) {
        build_linear_road(
            &mut graph,
            &express_jct.id,
            &names(&["101", "102"]),
            (40, 30),
            (express_jct.x + 40, express_jct.y + 30),
        );
        build_linear_road(
            &mut graph,
            &NodeId::from("102"),
            &names(&[
                "103", "104", "105", "106", "107", "108", "109", "110", "111", "112",
            ]),
            (55, 10),
            (express_jct.x + 120, express_jct.y + 90),
        );
        merge_road_tags(&mut graph, &EXPRESS);
    }

    // Ridge interchange splits the segment between gate 012 and the
    // 013-012 interchange.
    insert_interchange(
        &mut graph,
        &NodeId::from("012"),
        &NodeId::from("IC-013-012"),
        "IC-012-RIDGE",
        Some("Ridge interchange".to_string()),
    );

    // Double splice on the 011-012 chord: A at one third from 011, B at
    // the midpoint of the remainder (two thirds of the original chord).
    insert_interchange_at(
        &mut graph,
        &NodeId::from("011"),
        &NodeId::from("012"),
        "IC-011-012-A",
        None,
        1.0 / 3.0,
    );
    insert_interchange(
        &mut graph,
        &NodeId::from("IC-011-012-A"),
        &NodeId::from("012"),
        "IC-011-012-B",
        None,
    );

    build_branch(
        &mut graph,
        &WEST_ONE,
        &NodeId::from("IC-011-012-B"),
        (-40, 40),
        (55, 6),
    );
    build_branch(
        &mut graph,
        &WEST_TWO,
        &NodeId::from("IC-011-012-A"),
        (-40, 20),
        (-55, 6),
    );

    build_branch(
        &mut graph,
        &SOUTH,
        &NodeId::from("IC-009-008"),
        (40, 20),
        (55, 6),
    );

    // Coastal road continues from the southern motorway's last gate, with
    // two interchanges of its own and a terminal stub past 303.
    build_branch(&mut graph, &COAST, &NodeId::from("210"), (55, 6), (55, 6));
    insert_interchange(
        &mut graph,
        &NodeId::from("301"),
        &NodeId::from("302"),
        "IC-301-302",
        Some("Harbor interchange".to_string()),
    );
    insert_interchange(
        &mut graph,
        &NodeId::from("302"),
        &NodeId::from("303"),
        "IC-302-303",
        Some("Lagoon interchange".to_string()),
    );
    if let Some((x, y)) = graph.node(&NodeId::from("303")).map(|n| (n.x, n.y)) {
        build_linear_road(
            &mut graph,
            &NodeId::from("303"),
            &names(&["IC-303-END"]),
            (55, 6),
            (x + 55, y + 6),
        );
    }

    // North gate link between gate 001 and its beltway interchange, then
    // the northern motorway off the link.
    if let Some(gate) = insert_interchange(
        &mut graph,
        &NodeId::from("001"),
        &NodeId::from("IC-001-013"),
        "IC-NORTH-GATE",
        Some("Toll plaza 18".to_string()),
    ) {
        graph.tags_mut().set_corner_tag(gate.id.clone(), "Phase 3");
        graph.tags_mut().set_km_tag(gate.id.clone(), "1");
        build_branch(&mut graph, &NORTH, &gate.id, (60, 10), (55, 6));
    }

    graph
}

/// The toll-free segment table matching [`default_atlas`].
pub fn default_free_segments() -> FreeSegments {
    FreeSegments::new(
        FREE_SEGMENT_PAIRS
            .iter()
            .map(|&(a, b)| (NodeId::from(a), NodeId::from(b))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::Router;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn atlas_has_the_expected_shape() {
        let graph = default_atlas();
        assert_eq!(graph.node_count(), 73);
        assert_eq!(graph.edge_count(), 73);
    }

    #[test]
    fn atlas_builds_deterministically() {
        let first = default_atlas();
        let second = default_atlas();
        assert_eq!(first.nodes(), second.nodes());
        assert_eq!(first.edges(), second.edges());
    }

    #[test]
    fn beltway_gates_keep_degree_two_after_splicing() {
        let graph = default_atlas();
        // Plain gates sit between two interchanges.
        for gate in ["002", "003", "005", "006", "007", "008", "010", "013"] {
            assert_eq!(graph.degree(&id(gate)), 2, "gate {gate}");
        }
        // No direct gate-to-gate edge survives.
        assert!(!graph.has_edge(&id("011"), &id("012")));
        assert!(!graph.has_edge(&id("001"), &id("002")));
    }

    #[test]
    fn splice_on_spliced_edge_chains_correctly() {
        let graph = default_atlas();
        let router = Router::new(&graph);

        let path = router.shortest_path(&id("005"), &id("004")).unwrap();
        assert_eq!(
            path,
            vec![id("005"), id("IC-005-004"), id("IC-004-EXPRESS"), id("004")]
        );
    }

    #[test]
    fn double_splice_keeps_the_chord_routable() {
        let graph = default_atlas();

        assert!(graph.has_edge(&id("011"), &id("IC-011-012-A")));
        assert!(graph.has_edge(&id("IC-011-012-A"), &id("IC-011-012-B")));
        assert!(graph.has_edge(&id("IC-011-012-B"), &id("012")));

        let router = Router::new(&graph);
        let path = router.shortest_path(&id("011"), &id("012")).unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn spur_highways_are_reachable_from_each_other() {
        let graph = default_atlas();
        let router = Router::new(&graph);

        // Express end to northern motorway end, across the beltway.
        assert!(router.shortest_path(&id("112"), &id("412")).is_some());
        // Coastal terminal back to a western spur gate.
        assert!(router.shortest_path(&id("IC-303-END"), &id("W2-169")).is_some());
    }

    #[test]
    fn free_segments_classify_known_pairs() {
        let graph = default_atlas();
        let free = default_free_segments();

        for (a, b) in free.pairs() {
            assert!(graph.has_edge(a, b), "free pair {a}-{b} must be an edge");
        }
        assert!(free.is_free(&id("IC-011-012-A"), &id("IC-011-012-B")));
        assert!(free.is_free(&id("011"), &id("IC-011-012-A")));
        assert!(!free.is_free(&id("011"), &id("IC-011-010")));
    }

    #[test]
    fn gate_tags_survive_construction() {
        let graph = default_atlas();
        let tags = graph.tags();

        assert_eq!(tags.corner_tag(&id("001")), Some("Phase 3"));
        assert_eq!(tags.km_tag(&id("012")), Some("274"));
        assert_eq!(tags.corner_tag(&id("104")), Some("Stage 1"));
        assert_eq!(tags.km_tag(&id("IC-NORTH-GATE")), Some("1"));
    }
}
