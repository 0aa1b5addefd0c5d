//! Weighted A* path finding on static directed graphs.
//!
//! A single coefficient `c` in `[0, 1]` blends accumulated path weight and a
//! heuristic estimate: `c = 1` is Dijkstra's algorithm, `c = 0` greedy
//! best-first search.
//!
//! # Basic usage
//! ```
//! use pathfinder_core::prelude::*;
//!
//! let mut g = Graph::new();
//! let a = g.add_vertex(Point::new(0.0, 0.0)).unwrap();
//! let b = g.add_vertex(Point::new(1.0, 0.0)).unwrap();
//! let c = g.add_vertex(Point::new(2.0, 0.0)).unwrap();
//!
//! g.add_edge(Edge::weighted(a, b, 2.0)).unwrap();
//! g.add_edge(Edge::weighted(b, c, 3.0)).unwrap();
//! g.add_edge(Edge::weighted(a, c, 10.0)).unwrap();
//!
//! let mut pf = PathFinder::new(&g);
//! let path = pf.find_path(a, c, &Euclidean, 1.0).unwrap().expect("reachable");
//!
//! assert_eq!(path.vertices(&g), vec![a, b, c]);
//! assert_eq!(path.weight, 5.0);
//!```
pub mod coefficient;
pub mod constants;
pub mod edge_weight;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod prelude;
pub mod search;
pub mod search_params;
pub mod statistics;
pub mod track;
pub mod util;
pub mod vertex_info;
