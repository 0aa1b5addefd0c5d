//! Re-exports of the most commonly used items in `pathfinder_core`.
pub use crate::coefficient::Coefficient;
pub use crate::edge_weight::{EdgeWeight, EdgeWeightComparer};
pub use crate::error::{InvalidArgument, PathError};
pub use crate::heuristic::{Euclidean, Heuristic, Manhattan, NullHeuristic, Scaled, StraightLine};
pub use crate::search_params::SearchParams;

pub use crate::search;
pub use crate::search::path::Path;
pub use crate::search::path_finder::PathFinder;

pub use crate::graph::vertex_index;
pub use crate::graph::{Edge, GeoPoint, Graph, Point, VertexIndex};
pub use crate::util::test_graphs::generate_simple_graph;
