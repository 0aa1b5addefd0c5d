use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pathfinder_core::{
    graph::{vertex_index, Graph, Point},
    heuristic::{Euclidean, Manhattan},
    search::{dijkstra::Dijkstra, path_finder::PathFinder},
    util::test_graphs::{grid_graph, random_graph},
};
use rand::prelude::*;

criterion_group!(benches, grid_benchmark, random_graph_benchmark);
criterion_main!(benches);

fn random_pairs(g: &Graph<Point>, n: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            (
                rng.gen_range(0..g.num_vertices()),
                rng.gen_range(0..g.num_vertices()),
            )
        })
        .collect()
}

fn grid_benchmark(c: &mut Criterion) {
    let graphs: Vec<Graph<Point>> = [32, 64, 100]
        .iter()
        .map(|size| grid_graph(*size, *size, 0.2, 7))
        .collect();

    let mut group = c.benchmark_group("grid_coefficients");
    for graph in graphs.iter() {
        let pairs = random_pairs(graph, 20);

        for coeff in [1.0, 0.75, 0.5, 0.0] {
            group.bench_with_input(
                BenchmarkId::new(format!("PathFinder c={}", coeff), graph.num_vertices()),
                graph,
                |b, g| {
                    let mut pf = PathFinder::new(g);
                    b.iter(|| {
                        for (src, dst) in pairs.iter() {
                            let _ = pf.find_path(vertex_index(*src), vertex_index(*dst), &Manhattan, coeff);
                        }
                    });
                },
            );
        }
        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.num_vertices()),
            graph,
            |b, g| {
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| {
                    for (src, dst) in pairs.iter() {
                        let _ = dijkstra.search(vertex_index(*src), vertex_index(*dst));
                    }
                });
            },
        );
    }
    group.finish();
}

fn random_graph_benchmark(c: &mut Criterion) {
    // 2.5 edges per vertex on average
    let graphs: Vec<Graph<Point>> = [1000, 5000]
        .iter()
        .map(|n| random_graph(*n, (*n as f32 * 2.5) as usize, 7))
        .collect();

    let mut group = c.benchmark_group("random_graph");
    for graph in graphs.iter() {
        let pairs = random_pairs(graph, 20);

        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.num_vertices()),
            graph,
            |b, g| {
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| {
                    for (src, dst) in pairs.iter() {
                        let _ = dijkstra.search(vertex_index(*src), vertex_index(*dst));
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("PathFinder c=1", graph.num_vertices()),
            graph,
            |b, g| {
                let mut pf = PathFinder::new(g);
                b.iter(|| {
                    for (src, dst) in pairs.iter() {
                        let _ = pf.find_path(vertex_index(*src), vertex_index(*dst), &Euclidean, 1.0);
                    }
                });
            },
        );
    }
    group.finish();
}
