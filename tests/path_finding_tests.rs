use ordered_float::OrderedFloat;
use route_graph::graph::generators::{generate_grid, generate_random};
use route_graph::{Dijkstra, Edge, Error, Graph, RouteMap, ShortestPathAlgorithm};

type W = OrderedFloat<f64>;

fn w(value: f64) -> W {
    OrderedFloat(value)
}

// The spec's optimality example: the direct a--c edge is a trap.
//   a--b(1), b--c(2), a--c(5), c--d(1)
fn trap_graph() -> Graph<&'static str, W> {
    let mut graph = Graph::new();
    for vertex in ["a", "b", "c", "d"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge(&"a", &"b", w(1.0)).unwrap();
    graph.add_edge(&"b", &"c", w(2.0)).unwrap();
    graph.add_edge(&"a", &"c", w(5.0)).unwrap();
    graph.add_edge(&"c", &"d", w(1.0)).unwrap();
    graph
}

#[test]
fn test_dijkstra_prefers_cheaper_indirect_path() {
    let graph = trap_graph();
    let tree = Dijkstra::new().shortest_paths_from(&graph, &"a").unwrap();

    assert_eq!(tree.distance(&"a"), Some(w(0.0)));
    assert_eq!(tree.distance(&"b"), Some(w(1.0)));
    assert_eq!(tree.distance(&"c"), Some(w(3.0)), "via b, not direct");
    assert_eq!(tree.distance(&"d"), Some(w(4.0)));

    assert_eq!(tree.predecessor(&"a"), None);
    assert_eq!(tree.predecessor(&"c"), Some(&"b"));
    assert_eq!(tree.predecessor(&"d"), Some(&"c"));
}

#[test]
fn test_unreachable_vertices_are_absent() {
    let mut graph = trap_graph();
    graph.add_vertex("island");

    let tree = Dijkstra::new().shortest_paths_from(&graph, &"a").unwrap();
    assert_eq!(tree.len(), 4);
    assert!(!tree.is_reached(&"island"));
    assert_eq!(tree.distance(&"island"), None);
    assert!(matches!(
        tree.path_to(&"island"),
        Err(Error::UnreachableTarget(_))
    ));
}

#[test]
fn test_missing_source_is_an_error() {
    let graph = trap_graph();
    assert!(matches!(
        Dijkstra::new().shortest_paths_from(&graph, &"ghost"),
        Err(Error::SourceNotFound(_))
    ));
}

#[test]
fn test_path_reconstruction_steps_and_round_trip() {
    let graph = trap_graph();
    let dijkstra = Dijkstra::new();
    let tree = dijkstra.shortest_paths_from(&graph, &"a").unwrap();
    let path = tree.path_to(&"d").unwrap();

    let vertices: Vec<&str> = path.iter().map(|step| step.vertex).collect();
    assert_eq!(vertices, vec!["a", "b", "c", "d"]);

    let costs: Vec<W> = path.iter().map(|step| step.cost).collect();
    assert_eq!(costs, vec![w(0.0), w(1.0), w(2.0), w(1.0)]);

    let total: W = path.iter().map(|step| step.cost).fold(w(0.0), |a, b| a + b);
    assert_eq!(Some(total), tree.distance(&"d"), "increments sum to the distance");

    // The convenience surface agrees with the tree walk.
    assert_eq!(dijkstra.shortest_path(&graph, &"a", &"d").unwrap(), path);
}

#[test]
fn test_path_to_source_is_a_single_zero_step() {
    let graph = trap_graph();
    let tree = Dijkstra::new().shortest_paths_from(&graph, &"a").unwrap();
    let path = tree.path_to(&"a").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].vertex, "a");
    assert_eq!(path[0].cost, w(0.0));
}

#[test]
fn test_grid_corner_to_corner_distance() {
    let graph = generate_grid(10, 10);
    let tree = Dijkstra::new().shortest_paths_from(&graph, &0).unwrap();

    // Manhattan distance on a unit grid: 9 right + 9 down.
    assert_eq!(tree.distance(&99), Some(w(18.0)));
    assert_eq!(tree.len(), 100);

    let path = tree.path_to(&99).unwrap();
    assert_eq!(path.len(), 19);
    for steps in path.windows(2) {
        assert!(
            graph.get_edge(&steps[0].vertex, &steps[1].vertex).is_some(),
            "path must only use existing edges"
        );
    }
}

// Exhaustive edge relaxation; slow but obviously correct reference.
fn naive_distances(graph: &Graph<usize, W>, source: usize) -> Vec<Option<W>> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<W>> = vec![None; n];
    distances[source] = Some(w(0.0));
    let edges: Vec<&Edge<usize, W>> = graph.edges().collect();
    for _ in 0..n {
        for edge in &edges {
            let (u, v) = edge.endpoints();
            for (from, to) in [(*u, *v), (*v, *u)] {
                if let Some(base) = distances[from] {
                    let candidate = base + edge.weight();
                    if distances[to].map_or(true, |current| candidate < current) {
                        distances[to] = Some(candidate);
                    }
                }
            }
        }
    }
    distances
}

#[test]
fn test_dijkstra_matches_naive_relaxation_on_random_graphs() {
    for _ in 0..5 {
        let graph = generate_random(40, 80);
        let tree = Dijkstra::new().shortest_paths_from(&graph, &0).unwrap();
        let reference = naive_distances(&graph, 0);

        for vertex in 0..graph.vertex_count() {
            assert_eq!(
                tree.distance(&vertex),
                reference[vertex],
                "distance mismatch at vertex {}",
                vertex
            );
        }
    }
}

#[test]
fn test_route_map_routes_with_coordinates() {
    let mut map: RouteMap<u64, W> = RouteMap::new();
    map.add_vertex(1, 51.893, -8.492);
    map.add_vertex(2, 51.896, -8.486);
    map.add_vertex(3, 51.901, -8.479);
    map.add_vertex(4, 51.905, -8.471);
    map.add_edge(&1, &2, w(4.0)).unwrap();
    map.add_edge(&2, &3, w(3.0)).unwrap();
    map.add_edge(&1, &3, w(9.0)).unwrap();
    map.add_edge(&3, &4, w(2.0)).unwrap();

    let route = map.route(&1, &4).unwrap();
    let vertices: Vec<u64> = route.iter().map(|step| step.vertex).collect();
    assert_eq!(vertices, vec![1, 2, 3, 4]);
    let total: W = route.iter().map(|step| step.cost).fold(w(0.0), |a, b| a + b);
    assert_eq!(total, w(9.0));

    for step in &route {
        assert!(map.coords(&step.vertex).is_some());
    }
    assert_eq!(map.coords(&1), Some((51.893, -8.492)));
    assert_eq!(map.coords(&99), None);

    // Re-adding a vertex keeps its original coordinates.
    map.add_vertex(1, 0.0, 0.0);
    assert_eq!(map.coords(&1), Some((51.893, -8.492)));
}

#[test]
fn test_remove_vertex_reroutes_traffic() {
    let mut map: RouteMap<u64, W> = RouteMap::new();
    for (id, lat, lon) in [(1, 0.0, 0.0), (2, 0.0, 1.0), (3, 1.0, 1.0)] {
        map.add_vertex(id, lat, lon);
    }
    map.add_edge(&1, &2, w(1.0)).unwrap();
    map.add_edge(&2, &3, w(1.0)).unwrap();
    map.add_edge(&1, &3, w(5.0)).unwrap();

    let via_two: Vec<u64> = map.route(&1, &3).unwrap().iter().map(|s| s.vertex).collect();
    assert_eq!(via_two, vec![1, 2, 3]);

    assert!(map.remove_vertex(&2));
    assert_eq!(map.coords(&2), None);
    let direct: Vec<u64> = map.route(&1, &3).unwrap().iter().map(|s| s.vertex).collect();
    assert_eq!(direct, vec![1, 3]);
}

#[test]
fn test_algorithm_trait_object_surface() {
    let graph = trap_graph();
    let algorithm: &dyn ShortestPathAlgorithm<&str, W, Graph<&str, W>> = &Dijkstra::new();
    assert_eq!(algorithm.name(), "Dijkstra");
    let tree = algorithm.compute(&graph, &"a").unwrap();
    assert_eq!(tree.source(), &"a");
    assert_eq!(tree.iter().count(), 4);
}
