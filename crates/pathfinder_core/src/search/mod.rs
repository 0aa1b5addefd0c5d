pub mod bellman_ford;
pub mod dijkstra;
pub mod path;
pub mod path_finder;

#[cfg(test)]
use crate::{
    edge_weight::EdgeWeight,
    graph::{vertex_index, Graph},
};

#[cfg(test)]
pub(crate) fn assert_path<V, E: EdgeWeight>(
    g: &Graph<V, E>,
    expected_vertices: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Option<path::Path>,
) {
    let path = path.expect("expected a path");
    let expected: Vec<_> = expected_vertices.into_iter().map(vertex_index).collect();
    assert_eq!(expected, path.vertices(g));
    approx::assert_abs_diff_eq!(expected_weight, path.weight, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(path.total_weight(g), path.weight, epsilon = 1e-9);
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<path::Path>) {
    assert_eq!(None, path);
}
