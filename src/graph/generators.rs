use crate::graph::{MutableGraph, RoadGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Integral weights keep every path sum exact in `f64`, so distances from
/// different algorithms can be compared with `==`.
fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> OrderedFloat<f64> {
    OrderedFloat(rng.gen_range(1..100) as f64)
}

fn add_random_component<R: Rng + ?Sized>(
    graph: &mut RoadGraph,
    prefix: &str,
    n: usize,
    extra_edges: usize,
    rng: &mut R,
) {
    let name = |i: usize| format!("{}{}", prefix, i);

    if n == 1 {
        graph.add_node(name(0));
        return;
    }

    // Random spanning tree: every new node attaches to an earlier one
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let _ = graph.add_edge(name(i), name(parent), random_weight(rng));
    }

    // Extra chords; an existing pair just gets a new weight
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let _ = graph.add_edge(name(u), name(v), random_weight(rng));
        }
    }
}

/// Generates a connected graph on nodes `v0..v{n-1}` with a random spanning
/// tree plus up to `extra_edges` random chords, weights in `1..100`
pub fn generate_connected<R: Rng + ?Sized>(n: usize, extra_edges: usize, rng: &mut R) -> RoadGraph {
    let mut graph = RoadGraph::with_capacity(n);
    if n > 0 {
        add_random_component(&mut graph, "v", n, extra_edges, rng);
    }
    graph
}

/// Generates two disjoint connected components, `a0..` and `b0..`
pub fn generate_two_components<R: Rng + ?Sized>(
    left: usize,
    right: usize,
    extra_edges: usize,
    rng: &mut R,
) -> RoadGraph {
    let mut graph = RoadGraph::with_capacity(left + right);
    if left > 0 {
        add_random_component(&mut graph, "a", left, extra_edges, rng);
    }
    if right > 0 {
        add_random_component(&mut graph, "b", right, extra_edges, rng);
    }
    graph
}

/// Generates a `width` x `height` grid with unit weights and 4-connectivity
/// Node `r{y}c{x}` sits at row `y`, column `x`; many equal-length routes exist.
pub fn generate_grid(width: usize, height: usize) -> RoadGraph {
    let mut graph = RoadGraph::with_capacity(width * height);
    let name = |x: usize, y: usize| format!("r{}c{}", y, x);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(name(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                let _ = graph.add_edge(name(x, y), name(x + 1, y), OrderedFloat(1.0));
            }
            if y + 1 < height {
                let _ = graph.add_edge(name(x, y), name(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    graph
}
