//! Per search scratch records for relaxation based algorithms.
use std::ops::{Index, IndexMut};

use crate::{
    constants::Weight,
    edge_weight::EdgeWeight,
    graph::{Edge, EdgeIndex, Graph, VertexIndex},
    search::path::Path,
};

/// Tentative distance, the edge it was reached over and whether the
/// distance is final.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInfo {
    pub distance: Weight,
    pub predecessor: Option<EdgeIndex>,
    pub finalized: bool,
}

impl Default for VertexInfo {
    fn default() -> Self {
        VertexInfo {
            distance: Weight::INFINITY,
            predecessor: None,
            finalized: false,
        }
    }
}

/// One [`VertexInfo`] slot per vertex of a graph. Lives for exactly one
/// search and is never attached to the graph.
#[derive(Debug, Clone)]
pub struct VertexInfoArena {
    slots: Vec<VertexInfo>,
}

impl VertexInfoArena {
    pub fn new(num_vertices: usize) -> Self {
        VertexInfoArena {
            slots: vec![VertexInfo::default(); num_vertices],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sets `source` as the origin of the search.
    pub fn init_source(&mut self, source: VertexIndex) {
        self[source] = VertexInfo {
            distance: 0.0,
            predecessor: None,
            finalized: false,
        };
    }

    /// Finite distance of `vertex`, `None` if it was not reached.
    pub fn distance(&self, vertex: VertexIndex) -> Option<Weight> {
        self.slots
            .get(vertex.index())
            .map(|info| info.distance)
            .filter(|distance| distance.is_finite())
    }

    /// Relaxes `edge`. Returns `true` if the distance of `edge.to` improved.
    pub fn relax<E: EdgeWeight>(&mut self, edge_idx: EdgeIndex, edge: &Edge<E>) -> bool {
        let candidate = self[edge.from].distance + edge.weight();
        let target = &mut self[edge.to];

        if candidate < target.distance {
            target.distance = candidate;
            target.predecessor = Some(edge_idx);
            true
        } else {
            false
        }
    }

    /// Follows the predecessor edges from `target` back to `source`.
    ///
    /// Returns `None` if `target` was not reached.
    pub fn path_to<V, E: EdgeWeight>(
        &self,
        g: &Graph<V, E>,
        source: VertexIndex,
        target: VertexIndex,
    ) -> Option<Path> {
        let weight = self.distance(target)?;

        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            // Predecessors form a tree, a longer walk means the arena is corrupt
            if edges.len() >= self.slots.len() {
                return None;
            }
            let edge_idx = self[current].predecessor?;
            edges.push(edge_idx);
            current = g.edge(edge_idx)?.from;
        }
        edges.reverse();

        Some(Path::new(source, edges, weight))
    }
}

impl Index<VertexIndex> for VertexInfoArena {
    type Output = VertexInfo;

    fn index(&self, vertex: VertexIndex) -> &VertexInfo {
        &self.slots[vertex.index()]
    }
}

impl IndexMut<VertexIndex> for VertexInfoArena {
    fn index_mut(&mut self, vertex: VertexIndex) -> &mut VertexInfo {
        &mut self.slots[vertex.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{edge, graph::vertex_index, util::test_graphs::generate_scenario_graph};

    #[test]
    fn relax_improves_only() {
        let mut info = VertexInfoArena::new(3);
        info.init_source(vertex_index(0));

        let e1: Edge = edge!(0 => 1, 4.0);
        let e2: Edge = edge!(0 => 1, 2.0);
        let e3: Edge = edge!(2 => 1, 1.0);

        assert!(info.relax(0.into(), &e1));
        assert!(info.relax(1.into(), &e2));
        assert!(!info.relax(0.into(), &e1));
        // Unreached tail never improves anything
        assert!(!info.relax(2.into(), &e3));

        assert_eq!(info[vertex_index(1)].distance, 2.0);
        assert_eq!(info[vertex_index(1)].predecessor, Some(1.into()));
        assert_eq!(info.distance(vertex_index(2)), None);
    }

    #[test]
    fn path_to_unreached() {
        let g = generate_scenario_graph();
        let mut info = VertexInfoArena::new(g.num_vertices());
        info.init_source(vertex_index(0));

        assert!(info.path_to(&g, vertex_index(0), vertex_index(3)).is_none());

        let sp = info.path_to(&g, vertex_index(0), vertex_index(0)).unwrap();
        assert!(sp.edges.is_empty());
        assert_eq!(sp.weight, 0.0);
    }
}
