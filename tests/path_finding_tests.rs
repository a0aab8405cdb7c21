use ordered_float::OrderedFloat;
use route_finder::algorithm::dijkstra::Dijkstra;
use route_finder::algorithm::floyd_warshall::FloydWarshall;
use route_finder::algorithm::traits::{ShortestPathAlgorithm, ShortestPathResult, ShortestPathTree};
use route_finder::algorithm::reconstruct_path;
use route_finder::graph::generators::generate_grid;
use route_finder::graph::{demo_graph, Graph, MutableGraph, RoadGraph};
use route_finder::{find_path, Algorithm, Error, RouteIndex};

fn s(name: &str) -> String {
    name.to_string()
}

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::FloydWarshall];

// Test the city road network scenario
#[test]
fn test_karachi_to_lahore_takes_true_minimum() {
    let graph = demo_graph();

    // Via QUETTA: 686 + 633 + 339 = 1658; via HYDERABAD: 164 + 745 + 339 = 1248
    for algorithm in ALGORITHMS {
        let path = find_path(&graph, algorithm, &s("KARACHI"), &s("LAHORE")).unwrap();
        assert_eq!(
            path.nodes(),
            &[s("KARACHI"), s("HYDERABAD"), s("MULTAN"), s("LAHORE")],
            "{} picked a longer route",
            algorithm
        );
        assert_eq!(path.total_weight(), OrderedFloat(1248.0));
        assert_eq!(path.hops(), 3);
    }
}

#[test]
fn test_demo_distances() {
    let graph = demo_graph();
    let index = RouteIndex::new(graph);

    let cases = [
        ("KARACHI", "MULTAN", 909.0),
        ("QUETTA", "LAHORE", 972.0),
        ("HYDERABAD", "QUETTA", 707.0),
        ("LAHORE", "KARACHI", 1248.0),
    ];
    for (from, to, expected) in cases {
        assert_eq!(
            index.distance(&s(from), &s(to)).unwrap(),
            Some(OrderedFloat(expected)),
            "{} -> {}",
            from,
            to
        );
    }
}

#[test]
fn test_unknown_node_is_not_no_path() {
    let graph = demo_graph();

    for algorithm in ALGORITHMS {
        let err = find_path(&graph, algorithm, &s("KARACHI"), &s("LONDON")).unwrap_err();
        assert!(matches!(err, Error::UnknownNode(ref n) if n == "LONDON"));
        assert!(!err.is_no_path());

        let err = find_path(&graph, algorithm, &s("LONDON"), &s("KARACHI")).unwrap_err();
        assert!(matches!(err, Error::UnknownNode(_)));
    }

    let index = RouteIndex::new(graph);
    assert!(matches!(
        index.query(&s("LONDON"), &s("LAHORE")),
        Err(Error::UnknownNode(_))
    ));
    assert!(matches!(
        index.distance(&s("KARACHI"), &s("LONDON")),
        Err(Error::UnknownNode(_))
    ));
}

#[test]
fn test_disconnected_nodes_report_no_path() {
    let mut graph = demo_graph();
    graph.add_edge(s("GILGIT"), s("SKARDU"), OrderedFloat(210.0)).unwrap();

    for algorithm in ALGORITHMS {
        let err = find_path(&graph, algorithm, &s("KARACHI"), &s("SKARDU")).unwrap_err();
        assert!(err.is_no_path(), "{}: expected NoPathFound, got {:?}", algorithm, err);
        assert!(matches!(
            err,
            Error::NoPathFound { ref from, ref to } if from == "KARACHI" && to == "SKARDU"
        ));
    }

    let index = RouteIndex::new(graph);
    assert!(index.query(&s("SKARDU"), &s("LAHORE")).unwrap_err().is_no_path());
    assert_eq!(index.distance(&s("SKARDU"), &s("LAHORE")).unwrap(), None);

    // A failed lookup leaves the table usable
    let path = index.query(&s("GILGIT"), &s("SKARDU")).unwrap();
    assert_eq!(path.total_weight(), OrderedFloat(210.0));
}

#[test]
fn test_isolated_node_has_no_path_but_reaches_itself() {
    let mut graph = demo_graph();
    graph.add_node(s("ISLAMABAD"));

    for algorithm in ALGORITHMS {
        let err = find_path(&graph, algorithm, &s("ISLAMABAD"), &s("LAHORE")).unwrap_err();
        assert!(err.is_no_path());

        let path = find_path(&graph, algorithm, &s("ISLAMABAD"), &s("ISLAMABAD")).unwrap();
        assert_eq!(path.nodes(), &[s("ISLAMABAD")]);
    }
}

#[test]
fn test_source_equals_destination() {
    let graph = demo_graph();

    for algorithm in ALGORITHMS {
        for node in graph.nodes() {
            let path = find_path(&graph, algorithm, node, node).unwrap();
            assert_eq!(path.nodes(), std::slice::from_ref(node));
            assert_eq!(path.total_weight(), OrderedFloat(0.0));
            assert_eq!(path.hops(), 0);
            assert_eq!(path.edges().count(), 0);
        }
    }
}

#[test]
fn test_ties_broken_by_insertion_order() {
    // 2x2 grid: both r0c0 -> r0c1 -> r1c1 and r0c0 -> r1c0 -> r1c1 cost 2
    let graph = generate_grid(2, 2);

    for algorithm in ALGORITHMS {
        for _ in 0..3 {
            let path = find_path(&graph, algorithm, &s("r0c0"), &s("r1c1")).unwrap();
            assert_eq!(path.nodes(), &[s("r0c0"), s("r0c1"), s("r1c1")], "{}", algorithm);
            assert_eq!(path.total_weight(), OrderedFloat(2.0));
        }
    }
}

#[test]
fn test_zero_weight_edges() {
    let graph = RoadGraph::from_edges(vec![
        (s("A"), s("B"), OrderedFloat(0.0)),
        (s("B"), s("C"), OrderedFloat(0.0)),
        (s("A"), s("C"), OrderedFloat(1.0)),
    ])
    .unwrap();

    for algorithm in ALGORITHMS {
        let path = find_path(&graph, algorithm, &s("A"), &s("C")).unwrap();
        assert_eq!(path.nodes(), &[s("A"), s("B"), s("C")]);
        assert_eq!(path.total_weight(), OrderedFloat(0.0));
    }
}

#[test]
fn test_dijkstra_result_tables() {
    let graph = demo_graph();
    let karachi = graph.index_of(&s("KARACHI")).unwrap();
    let lahore = graph.index_of(&s("LAHORE")).unwrap();
    let multan = graph.index_of(&s("MULTAN")).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, karachi).unwrap();
    assert_eq!(result.source(), karachi);
    assert_eq!(result.distance_to(karachi), Some(OrderedFloat(0.0)));
    assert_eq!(result.predecessor_of(karachi), None);
    assert_eq!(result.distance_to(lahore), Some(OrderedFloat(1248.0)));
    assert_eq!(result.predecessor_of(lahore), Some(multan));
    assert_eq!(result.distance_to(99), None);
}

#[test]
fn test_floyd_warshall_matrices() {
    let graph = demo_graph();
    let table = FloydWarshall::new().compute_all_pairs(&graph);
    let n = graph.node_count();
    assert_eq!(table.node_count(), n);

    for i in 0..n {
        assert_eq!(table.distance(i, i), Some(OrderedFloat(0.0)));
        assert_eq!(table.predecessor(i, i), None);
    }

    let karachi = graph.index_of(&s("KARACHI")).unwrap();
    let hyderabad = graph.index_of(&s("HYDERABAD")).unwrap();
    let multan = graph.index_of(&s("MULTAN")).unwrap();
    assert_eq!(table.predecessor(karachi, hyderabad), Some(karachi));
    assert_eq!(table.predecessor(karachi, multan), Some(hyderabad));
    assert_eq!(table.distance(karachi, n), None);
    assert!(matches!(table.from_source(n), Err(Error::InvalidIndex(_))));
}

#[test]
fn test_algorithm_names_and_bad_index() {
    let graph = demo_graph();
    let dijkstra = Dijkstra::new();
    let floyd = FloydWarshall::new();

    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<String, OrderedFloat<f64>, RoadGraph>>::name(&dijkstra),
        "Dijkstra"
    );
    assert_eq!(
        <FloydWarshall as ShortestPathAlgorithm<String, OrderedFloat<f64>, RoadGraph>>::name(&floyd),
        "Floyd-Warshall"
    );

    assert!(matches!(
        dijkstra.compute_shortest_paths(&graph, 42),
        Err(Error::InvalidIndex(42))
    ));
    assert!(matches!(
        floyd.compute_shortest_paths(&graph, 42),
        Err(Error::InvalidIndex(42))
    ));
}

#[test]
fn test_algorithm_parsing() {
    assert_eq!("dijkstra".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
    assert_eq!(" Floyd-Warshall ".parse::<Algorithm>().unwrap(), Algorithm::FloydWarshall);
    assert_eq!("floyd_warshall".parse::<Algorithm>().unwrap(), Algorithm::FloydWarshall);
    assert!(matches!("bellman-ford".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));
    assert_eq!(Algorithm::default(), Algorithm::Dijkstra);
    assert_eq!(Algorithm::FloydWarshall.to_string(), "floyd-warshall");
}

fn three_node_graph() -> RoadGraph {
    RoadGraph::from_edges(vec![
        (s("A"), s("B"), OrderedFloat(1.0)),
        (s("B"), s("C"), OrderedFloat(2.0)),
    ])
    .unwrap()
}

#[test]
fn test_reconstruct_rejects_chain_not_ending_at_source() {
    let graph = three_node_graph();

    // C claims a finite distance but its chain stops at B, not at the source A
    let tree = ShortestPathResult {
        distances: vec![OrderedFloat(0.0), OrderedFloat(f64::INFINITY), OrderedFloat(2.0)],
        predecessors: vec![None, None, Some(1)],
        source: 0,
    };
    let err = reconstruct_path(&graph, &tree, 2).unwrap_err();
    assert!(err.is_no_path());

    // No predecessor at all for a target other than the source
    let tree = ShortestPathResult {
        distances: vec![OrderedFloat(0.0), OrderedFloat(1.0), OrderedFloat(3.0)],
        predecessors: vec![None, Some(0), None],
        source: 0,
    };
    assert!(reconstruct_path(&graph, &tree, 2).unwrap_err().is_no_path());
}

#[test]
fn test_reconstruct_rejects_unreached_target() {
    let graph = three_node_graph();
    let tree = ShortestPathResult {
        distances: vec![OrderedFloat(0.0), OrderedFloat(1.0), OrderedFloat(f64::INFINITY)],
        predecessors: vec![None, Some(0), Some(1)],
        source: 0,
    };
    assert!(reconstruct_path(&graph, &tree, 2).unwrap_err().is_no_path());
}

#[test]
fn test_reconstruct_detects_predecessor_cycle() {
    let graph = three_node_graph();
    let tree = ShortestPathResult {
        distances: vec![OrderedFloat(0.0), OrderedFloat(1.0), OrderedFloat(1.0)],
        predecessors: vec![None, Some(2), Some(1)],
        source: 0,
    };
    assert!(reconstruct_path(&graph, &tree, 2).unwrap_err().is_no_path());
}

#[test]
fn test_reconstruct_from_valid_tree() {
    let graph = three_node_graph();
    let tree = ShortestPathResult {
        distances: vec![OrderedFloat(0.0), OrderedFloat(1.0), OrderedFloat(3.0)],
        predecessors: vec![None, Some(0), Some(1)],
        source: 0,
    };
    let path = reconstruct_path(&graph, &tree, 2).unwrap();
    assert_eq!(path.nodes(), &[s("A"), s("B"), s("C")]);
    assert_eq!(path.source(), "A");
    assert_eq!(path.target(), "C");
    assert_eq!(path.to_string(), "A -> B -> C (3)");

    assert!(matches!(
        reconstruct_path(&graph, &tree, 7),
        Err(Error::InvalidIndex(7))
    ));
}
