use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    edge,
    graph::{vertex_index, GeoPoint, Graph, Point},
};

/// Graph of the basic examples:
/// A -> B (2), B -> C (3), A -> C (10), D without edges
pub fn generate_scenario_graph() -> Graph<Point> {
    let mut g = Graph::new();

    let a = g.add_vertex(Point::new(0.0, 0.0)).unwrap();
    let b = g.add_vertex(Point::new(1.0, 1.0)).unwrap();
    let c = g.add_vertex(Point::new(2.0, 0.0)).unwrap();
    let _d = g.add_vertex(Point::new(5.0, 5.0)).unwrap();

    g.add_edge(edge!(a => b, 2.0)).unwrap();
    g.add_edge(edge!(b => c, 3.0)).unwrap();
    g.add_edge(edge!(a => c, 10.0)).unwrap();

    g
}

pub fn generate_complex_graph() -> Graph<Point> {
    let mut graph = Graph::new();

    let a = graph.add_vertex(Point::new(6.0, 2.0)).unwrap();
    let b = graph.add_vertex(Point::new(3.0, 3.0)).unwrap();
    let c = graph.add_vertex(Point::new(4.0, 6.0)).unwrap();
    let d = graph.add_vertex(Point::new(2.0, 7.0)).unwrap();
    let e = graph.add_vertex(Point::new(3.0, 10.0)).unwrap();
    let f = graph.add_vertex(Point::new(2.0, 13.0)).unwrap();
    let g = graph.add_vertex(Point::new(7.0, 15.0)).unwrap();
    let h = graph.add_vertex(Point::new(5.0, 12.0)).unwrap();
    let i = graph.add_vertex(Point::new(7.0, 11.0)).unwrap();
    let j = graph.add_vertex(Point::new(5.0, 9.0)).unwrap();
    let k = graph.add_vertex(Point::new(7.0, 7.0)).unwrap();

    let edges = [
        edge!(a, b, 3.0), // A <=> B
        edge!(a, c, 5.0), // A <=> C
        edge!(a, k, 3.0), // A <=> K
        edge!(b, d, 5.0), // B <=> D
        edge!(b, c, 3.0), // B <=> C
        edge!(c, d, 2.0), // C <=> D
        edge!(c, j, 2.0), // C <=> J
        edge!(d, j, 4.0), // D <=> J
        edge!(d, e, 7.0), // D <=> E
        edge!(e, j, 3.0), // E <=> J
        edge!(e, f, 6.0), // E <=> F
        edge!(f, h, 2.0), // F <=> H
        edge!(f, g, 4.0), // F <=> G
        edge!(g, h, 3.0), // G <=> H
        edge!(g, i, 5.0), // G <=> I
        edge!(h, i, 3.0), // H <=> I
        edge!(h, j, 2.0), // H <=> J
        edge!(i, j, 4.0), // I <=> J
        edge!(i, k, 6.0), // I <=> K
        edge!(j, k, 3.0), // J <=> K
    ];
    for pair in edges {
        graph.add_edges(pair).unwrap();
    }

    graph
}

pub fn generate_simple_graph() -> Graph<Point> {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let mut g = Graph::new();
    g.create_vertices(5, |i| Point::new(i as f64, 0.0)).unwrap();

    let (a, b, c, d, e) = (
        vertex_index(0),
        vertex_index(1),
        vertex_index(2),
        vertex_index(3),
        vertex_index(4),
    );

    g.add_edge(edge!(a => c, 1.0)).unwrap();
    g.add_edge(edge!(a => d, 1.0)).unwrap();
    g.add_edge(edge!(e => a, 1.0)).unwrap();
    g.add_edges(edge!(c, b, 1.0)).unwrap();
    g.add_edges(edge!(c, d, 1.0)).unwrap();

    g
}

/// Some cities with road distances in km. Every road is at least as long as
/// the great-circle distance of its endpoints.
pub fn generate_city_graph() -> Graph<GeoPoint> {
    let mut g = Graph::new();

    let munich = g.add_vertex(GeoPoint::new(48.1374, 11.5755)).unwrap();
    let augsburg = g.add_vertex(GeoPoint::new(48.3705, 10.8978)).unwrap();
    let nuremberg = g.add_vertex(GeoPoint::new(49.4521, 11.0767)).unwrap();
    let stuttgart = g.add_vertex(GeoPoint::new(48.7758, 9.1829)).unwrap();
    let frankfurt = g.add_vertex(GeoPoint::new(50.1109, 8.6821)).unwrap();
    let leipzig = g.add_vertex(GeoPoint::new(51.3397, 12.3731)).unwrap();
    let berlin = g.add_vertex(GeoPoint::new(52.5200, 13.4050)).unwrap();

    let roads = [
        edge!(munich, augsburg, 80.0),
        edge!(munich, nuremberg, 170.0),
        edge!(augsburg, stuttgart, 160.0),
        edge!(augsburg, nuremberg, 140.0),
        edge!(nuremberg, frankfurt, 225.0),
        edge!(stuttgart, frankfurt, 205.0),
        edge!(nuremberg, leipzig, 280.0),
        edge!(frankfurt, leipzig, 390.0),
        edge!(leipzig, berlin, 190.0),
    ];
    for pair in roads {
        g.add_edges(pair).unwrap();
    }

    g
}

/// Largest grid side accepted by the CLIs. Vertex creation compares each
/// payload against all existing ones, larger grids take too long to build.
pub const MAX_GRID_SIDE: usize = 100;

/// 4-connected `width` x `height` grid with unit spacing. Vertex `y * width + x`
/// sits at `(x, y)`. Every vertex except the first and the last is blocked
/// with probability `obstacle_ratio`; blocked vertices have no edges. Edge
/// weights are integers in `1..=4`, the same in both directions.
///
/// A ratio outside of `[0, 1]` (or NaN) blocks nothing.
pub fn grid_graph(width: usize, height: usize, obstacle_ratio: f64, seed: u64) -> Graph<Point> {
    let obstacle_ratio = if (0.0..=1.0).contains(&obstacle_ratio) {
        obstacle_ratio
    } else {
        0.0
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let num_vertices = width * height;

    let mut g = Graph::with_capacity(num_vertices, 4 * num_vertices);
    g.create_vertices(num_vertices, |i| {
        Point::new((i % width) as f64, (i / width) as f64)
    })
    .unwrap();

    let blocked: Vec<bool> = (0..num_vertices)
        .map(|i| i != 0 && i != num_vertices - 1 && rng.gen_bool(obstacle_ratio))
        .collect();

    for y in 0..height {
        for x in 0..width {
            let from = y * width + x;
            if blocked[from] {
                continue;
            }
            let right = (x + 1 < width).then_some(from + 1);
            let down = (y + 1 < height).then_some(from + width);
            for to in [right, down].into_iter().flatten() {
                if blocked[to] {
                    continue;
                }
                let weight = rng.gen_range(1..=4) as f64;
                g.add_bidir_edge(edge!(vertex_index(from) => vertex_index(to), weight))
                    .unwrap();
            }
        }
    }

    g
}

/// Random directed graph. Vertex `i` sits at `(i, r)` with random `r`, edges
/// connect random vertices with weights in `1..100`.
pub fn random_graph(num_vertices: usize, num_edges: usize, seed: u64) -> Graph<Point> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut g = Graph::with_capacity(num_vertices, num_edges);
    g.create_vertices(num_vertices, |i| Point::new(i as f64, rng.gen_range(0.0..100.0)))
        .unwrap();

    for _ in 0..num_edges {
        let from = rng.gen_range(0..num_vertices);
        let to = rng.gen_range(0..num_vertices);
        let weight = rng.gen_range(1..100) as f64;
        g.add_edge(edge!(vertex_index(from) => vertex_index(to), weight))
            .unwrap();
    }

    g
}
