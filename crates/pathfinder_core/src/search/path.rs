use serde::{Deserialize, Serialize};

use crate::{
    constants::Weight,
    edge_weight::EdgeWeight,
    graph::{Edge, EdgeIndex, Graph, VertexIndex},
};

/// Ordered sequence of edges leading from `source` to the target of a search.
///
/// `source == target` yields an empty edge sequence with weight 0.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Path {
    pub source: VertexIndex,
    pub edges: Vec<EdgeIndex>,
    pub weight: Weight,
}

impl Path {
    pub fn new(source: VertexIndex, edges: Vec<EdgeIndex>, weight: Weight) -> Self {
        Path {
            source,
            edges,
            weight,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolves the edge indices against `g`.
    ///
    /// **Panics** if `g` is not the graph the path was found on
    pub fn resolve<'g, V, E: EdgeWeight>(
        &'g self,
        g: &'g Graph<V, E>,
    ) -> impl Iterator<Item = &'g Edge<E>> + 'g {
        self.edges
            .iter()
            .map(move |edge_idx| g.edge(*edge_idx).expect("edge of path not in graph"))
    }

    /// Vertices along the path, starting with `source`.
    pub fn vertices<V, E: EdgeWeight>(&self, g: &Graph<V, E>) -> Vec<VertexIndex> {
        let mut vertices = Vec::with_capacity(self.edges.len() + 1);
        vertices.push(self.source);
        vertices.extend(self.resolve(g).map(|edge| edge.to));
        vertices
    }

    /// Sum of the edge weights. Equal to `weight` up to rounding.
    pub fn total_weight<V, E: EdgeWeight>(&self, g: &Graph<V, E>) -> Weight {
        self.resolve(g).map(Edge::weight).sum()
    }
}
