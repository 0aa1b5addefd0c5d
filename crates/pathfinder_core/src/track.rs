//! Partial paths of the weighted A* search.
//!
//! A [`Track`] is one node of the open or closed set. Tracks never own their
//! predecessor: every track of a search lives in one [`TrackArena`] and links
//! to its predecessor by [`TrackId`], so tracks sharing a prefix share the
//! records of that prefix.
use std::ops::Index;

use crate::{
    coefficient::Coefficient,
    constants::Weight,
    edge_weight::EdgeWeight,
    graph::{Edge, EdgeIndex, Graph, VertexIndex},
    heuristic::Heuristic,
};

/// Address of a [`Track`] inside its [`TrackArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(u32);

impl TrackId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Candidate path from the source of the search to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub end: VertexIndex,
    /// Edge traversed last, `None` for the root track
    pub edge: Option<EdgeIndex>,
    pub previous: Option<TrackId>,
    /// Sum of the edge weights from the source to `end`
    pub weight: Weight,
    pub edges_visited: usize,
}

impl Track {
    /// Track of the search origin
    pub fn root(source: VertexIndex) -> Self {
        Track {
            end: source,
            edge: None,
            previous: None,
            weight: 0.0,
            edges_visited: 0,
        }
    }

    /// Extends the track `previous` (stored at `previous_id`) by `edge`.
    pub fn extend<E: EdgeWeight>(
        previous_id: TrackId,
        previous: &Track,
        edge_idx: EdgeIndex,
        edge: &Edge<E>,
    ) -> Self {
        debug_assert_eq!(previous.end, edge.from);
        Track {
            end: edge.to,
            edge: Some(edge_idx),
            previous: Some(previous_id),
            weight: previous.weight + edge.weight(),
            edges_visited: previous.edges_visited + 1,
        }
    }

    #[inline]
    pub fn succeed(&self, target: VertexIndex) -> bool {
        self.end == target
    }

    /// Compares only the end vertex, weights are ignored.
    #[inline]
    pub fn same_end(&self, other: &Track) -> bool {
        self.end == other.end
    }

    /// `c * weight + (1 - c) * heuristic(end, target)`.
    ///
    /// Recomputed on every call, the heuristic is queried each time.
    pub fn evaluation<V, E, H>(
        &self,
        g: &Graph<V, E>,
        target: VertexIndex,
        heuristic: &H,
        coefficient: Coefficient,
    ) -> Weight
    where
        H: Heuristic<V> + ?Sized,
    {
        let estimate = heuristic.estimate(&g[self.end], &g[target]);
        coefficient.blend(self.weight, estimate)
    }
}

/// Storage of all tracks created by one search.
#[derive(Debug, Default)]
pub struct TrackArena {
    tracks: Vec<Track>,
}

impl TrackArena {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, track: Track) -> TrackId {
        let id = TrackId(self.tracks.len() as u32);
        self.tracks.push(track);
        id
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterates from the track `id` back to the root track.
    pub fn chain(&self, id: TrackId) -> impl Iterator<Item = &Track> + '_ {
        std::iter::successors(self.get(id), move |track| {
            track.previous.and_then(|prev| self.get(prev))
        })
    }

    /// Edges from the root to the track `id`, in travel order.
    pub fn edges_to(&self, id: TrackId) -> Vec<EdgeIndex> {
        let mut edges: Vec<EdgeIndex> = self.chain(id).filter_map(|track| track.edge).collect();
        edges.reverse();
        edges
    }
}

impl Index<TrackId> for TrackArena {
    type Output = Track;

    fn index(&self, id: TrackId) -> &Track {
        &self.tracks[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{vertex_index, Point},
        heuristic::{Euclidean, NullHeuristic},
        util::test_graphs::generate_complex_graph,
    };
    use proptest::prelude::*;

    #[test]
    fn root_track() {
        let root = Track::root(vertex_index(3));

        assert_eq!(root.weight, 0.0);
        assert_eq!(root.edges_visited, 0);
        assert!(root.previous.is_none());
        assert!(root.succeed(vertex_index(3)));
        assert!(!root.succeed(vertex_index(4)));
    }

    #[test]
    fn chain_of_tracks() {
        let g = generate_complex_graph();
        let mut arena = TrackArena::new();

        let root = arena.push(Track::root(vertex_index(0)));
        let mut current = root;
        // A -> B -> C -> J
        for target in [1, 2, 9] {
            let (edge_idx, edge) = g
                .neighbors_outgoing(arena[current].end)
                .find(|(_, e)| e.to == vertex_index(target))
                .unwrap();
            let track = Track::extend(current, &arena[current], edge_idx, edge);
            current = arena.push(track);
        }

        let last = arena[current];
        assert_eq!(last.edges_visited, 3);
        assert_eq!(last.weight, 3.0 + 3.0 + 2.0);
        assert_eq!(arena.chain(current).count(), 4);

        let edges = arena.edges_to(current);
        let sum: Weight = edges.iter().map(|e| g.edge(*e).unwrap().weight()).sum();
        assert_eq!(sum, last.weight);
        assert_eq!(g.edge(edges[0]).unwrap().from, vertex_index(0));
        assert!(arena.edges_to(root).is_empty());
    }

    #[test]
    fn same_end_ignores_weight() {
        let a = Track {
            weight: 1.0,
            ..Track::root(vertex_index(2))
        };
        let b = Track {
            weight: 5.0,
            edges_visited: 3,
            ..Track::root(vertex_index(2))
        };

        assert!(a.same_end(&b));
        assert!(!a.same_end(&Track::root(vertex_index(1))));
    }

    #[test]
    fn evaluation_is_recomputed() {
        use std::cell::Cell;

        let g = generate_complex_graph();
        let calls = Cell::new(0);
        let counting = |_: &Point, _: &Point| {
            calls.set(calls.get() + 1);
            1.0
        };

        let track = Track::root(vertex_index(0));
        let c = Coefficient::new(0.5).unwrap();
        assert_eq!(track.evaluation(&g, vertex_index(6), &counting, c), 0.5);
        assert_eq!(track.evaluation(&g, vertex_index(6), &counting, c), 0.5);
        assert_eq!(calls.get(), 2);
    }

    proptest! {
        #[test]
        fn evaluation_extremes(weight in 0.0..1e6f64, end in 0..11usize, target in 0..11usize) {
            let g = generate_complex_graph();
            let track = Track {
                weight,
                ..Track::root(vertex_index(end))
            };
            let target = vertex_index(target);

            prop_assert_eq!(
                track.evaluation(&g, target, &NullHeuristic, Coefficient::DIJKSTRA),
                weight
            );
            prop_assert_eq!(
                track.evaluation(&g, target, &Euclidean, Coefficient::DIJKSTRA),
                weight
            );
            prop_assert_eq!(
                track.evaluation(&g, target, &Euclidean, Coefficient::GREEDY),
                Euclidean.estimate(&g[track.end], &g[target])
            );
        }
    }
}
