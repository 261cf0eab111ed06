use ordered_float::OrderedFloat;
use rand::prelude::*;

use crate::graph::Graph;

/// Generates a width x height grid graph with unit-weight edges between
/// 4-neighbors. Vertices are numbered row-major.
pub fn generate_grid(width: usize, height: usize) -> Graph<usize, OrderedFloat<f64>> {
    let mut graph = Graph::new();

    for vertex in 0..(width * height) {
        graph.add_vertex(vertex);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph
                    .add_edge(&vertex, &(vertex + 1), OrderedFloat(1.0))
                    .expect("grid vertices were just inserted");
            }
            if y + 1 < height {
                graph
                    .add_edge(&vertex, &(vertex + width), OrderedFloat(1.0))
                    .expect("grid vertices were just inserted");
            }
        }
    }

    graph
}

/// Generates a connected random graph: a spanning chain plus `extra_edges`
/// random edges, all with weights drawn from 1.0..100.0.
pub fn generate_random(n: usize, extra_edges: usize) -> Graph<usize, OrderedFloat<f64>> {
    assert!(n > 1, "n must be at least 2");
    assert!(
        extra_edges <= n * (n - 1) / 2 - (n - 1),
        "extra_edges exceeds the remaining vertex pairs"
    );

    let mut graph = Graph::new();
    let mut rng = rand::thread_rng();

    for vertex in 0..n {
        graph.add_vertex(vertex);
    }

    // Spanning chain keeps every vertex reachable.
    for vertex in 1..n {
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph
            .add_edge(&(vertex - 1), &vertex, weight)
            .expect("chain vertices were just inserted");
    }

    let mut added = 0;
    while added < extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || graph.get_edge(&u, &v).is_some() {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        graph
            .add_edge(&u, &v, weight)
            .expect("random vertices were just inserted");
        added += 1;
    }

    graph
}
