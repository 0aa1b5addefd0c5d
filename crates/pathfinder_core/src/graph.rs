use crate::{
    constants::{Weight, NO_WEIGHT},
    edge_weight::{EdgeWeight, EdgeWeightComparer},
    error::{InvalidArgument, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, hash::Hash, ops::Index};

/// Integer type backing vertex and edge indices. Graphs with more than
/// `u32::MAX` vertices or edges need a wider type.
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Vertex identifier. Two vertices are the same vertex iff their indices are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct VertexIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> VertexIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        VertexIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        VertexIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for VertexIndex<Idx> {
    fn from(ix: Idx) -> Self {
        VertexIndex(ix)
    }
}

/// Short version of `VertexIndex::new`
pub fn vertex_index(index: usize) -> VertexIndex {
    VertexIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> From<Idx> for EdgeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        EdgeIndex(ix)
    }
}

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

/// Vertex of the graph carrying an opaque payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Vertex<V> {
    pub index: VertexIndex,
    pub payload: V,
}

/// Planar vertex payload used by the demo, the REPL and most tests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Geographic vertex payload (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// Directed edge `from -> to`. An edge without payload weighs nothing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Edge<E = Weight> {
    pub from: VertexIndex,
    pub to: VertexIndex,
    pub data: Option<E>,
}

impl<E: EdgeWeight> Edge<E> {
    pub fn new(from: VertexIndex, to: VertexIndex, data: Option<E>) -> Self {
        Edge { from, to, data }
    }

    pub fn weighted(from: VertexIndex, to: VertexIndex, data: E) -> Self {
        Edge::new(from, to, Some(data))
    }

    pub fn unweighted(from: VertexIndex, to: VertexIndex) -> Self {
        Edge::new(from, to, None)
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.data.as_ref().map_or(NO_WEIGHT, EdgeWeight::weight)
    }

    pub(crate) fn reverse(&self) -> Self
    where
        E: Clone,
    {
        Edge {
            from: self.to,
            to: self.from,
            data: self.data.clone(),
        }
    }
}

/// Static directed graph. Built once, then shared read-only between searches.
///
/// Searches never store state in the graph, so a `&Graph` can be used by
/// several searches at once (also from different threads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<V, E = Weight> {
    edges_in: Vec<Vec<EdgeIndex>>,
    edges_out: Vec<Vec<EdgeIndex>>,
    vertices: Vec<Vertex<V>>,
    edges: Vec<Edge<E>>,
}

impl<V: PartialEq, E: EdgeWeight> Graph<V, E> {
    pub fn new() -> Self {
        Self {
            edges_in: Vec::new(),
            edges_out: Vec::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            edges_in: Vec::with_capacity(num_vertices),
            edges_out: Vec::with_capacity(num_vertices),
            vertices: Vec::with_capacity(num_vertices),
            edges: Vec::with_capacity(num_edges),
        }
    }

    /// Creates a new vertex whose payload is produced by `create`, which
    /// receives the index the vertex is going to have.
    ///
    /// Fails with [`InvalidArgument::DuplicateVertex`] if an existing vertex
    /// carries an equal payload. The check is a linear scan.
    ///
    /// **Panics** if the Graph is at the maximum number of vertices for its
    /// index type
    pub fn create_vertex<F>(&mut self, create: F) -> Result<VertexIndex>
    where
        F: FnOnce(usize) -> V,
    {
        let index = self.vertices.len();
        let vertex_idx = VertexIndex::new(index);

        assert!(
            VertexIndex::end() != vertex_idx,
            "Maximum number of vertices for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        let payload = create(index);
        if let Some(existing) = self.find_vertex(&payload) {
            return Err(InvalidArgument::DuplicateVertex { index, existing }.into());
        }

        // Create new entry in adjacency list for new vertex
        self.edges_in.push(Vec::new());
        self.edges_out.push(Vec::new());

        self.vertices.push(Vertex {
            index: vertex_idx,
            payload,
        });

        Ok(vertex_idx)
    }

    /// Adds a vertex with the given payload.
    pub fn add_vertex(&mut self, payload: V) -> Result<VertexIndex> {
        self.create_vertex(|_| payload)
    }

    /// Creates `count` vertices, calling `create` with each new index.
    pub fn create_vertices<F>(&mut self, count: usize, mut create: F) -> Result<()>
    where
        F: FnMut(usize) -> V,
    {
        self.vertices.reserve(count);
        for _ in 0..count {
            self.create_vertex(&mut create)?;
        }
        Ok(())
    }

    /// Add a new directed edge to the graph.
    ///
    /// Fails if one of the endpoints does not exist or if the weight is
    /// negative or not finite.
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(&mut self, edge: Edge<E>) -> Result<EdgeIndex> {
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.check_vertex(edge.from)?;
        self.check_vertex(edge.to)?;

        let weight = edge.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(InvalidArgument::InvalidEdgeWeight {
                from: edge.from,
                to: edge.to,
                weight,
            }
            .into());
        }

        self.edges_out[edge.from.index()].push(edge_idx);
        self.edges_in[edge.to.index()].push(edge_idx);
        self.edges.push(edge);

        Ok(edge_idx)
    }

    pub fn add_edges(&mut self, edges: Vec<Edge<E>>) -> Result<()> {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Adds `edge` and its reverse.
    pub fn add_bidir_edge(&mut self, edge: Edge<E>) -> Result<(EdgeIndex, EdgeIndex)>
    where
        E: Clone,
    {
        let reverse = edge.reverse();
        let forward = self.add_edge(edge)?;
        let backward = self.add_edge(reverse)?;
        Ok((forward, backward))
    }

}

impl<V, E: EdgeWeight> Graph<V, E> {
    pub(crate) fn check_vertex(&self, vertex_idx: VertexIndex) -> Result<()> {
        if vertex_idx.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(InvalidArgument::UnknownVertex(vertex_idx).into())
        }
    }

    pub fn vertex(&self, vertex_idx: VertexIndex) -> Option<&Vertex<V>> {
        self.vertices.get(vertex_idx.index())
    }

    pub fn payload(&self, vertex_idx: VertexIndex) -> Option<&V> {
        self.vertex(vertex_idx).map(|vertex| &vertex.payload)
    }

    pub fn edge(&self, edge_idx: EdgeIndex) -> Option<&Edge<E>> {
        self.edges.get(edge_idx.index())
    }

    /// Returns the index of the vertex carrying `payload`
    pub fn find_vertex(&self, payload: &V) -> Option<VertexIndex>
    where
        V: PartialEq,
    {
        self.vertices
            .iter()
            .find(|vertex| vertex.payload == *payload)
            .map(|vertex| vertex.index)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all vertices of the graph
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge<E>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeIndex::new(i), edge))
    }

    /// Outgoing edges of `vertex_idx` in insertion order. Unknown vertices
    /// have no edges.
    pub fn neighbors_outgoing(
        &self,
        vertex_idx: VertexIndex,
    ) -> impl Iterator<Item = (EdgeIndex, &Edge<E>)> + '_ {
        self.edges_out
            .get(vertex_idx.index())
            .into_iter()
            .flatten()
            .map(move |edge_idx| (*edge_idx, &self.edges[edge_idx.index()]))
    }

    /// Incoming edges of `vertex_idx` in insertion order.
    pub fn neighbors_incoming(
        &self,
        vertex_idx: VertexIndex,
    ) -> impl Iterator<Item = (EdgeIndex, &Edge<E>)> + '_ {
        self.edges_in
            .get(vertex_idx.index())
            .into_iter()
            .flatten()
            .map(move |edge_idx| (*edge_idx, &self.edges[edge_idx.index()]))
    }

    /// Outgoing edges ordered by weight, lightest first. Edges of equal
    /// weight keep their insertion order.
    pub fn sorted_outgoing(&self, vertex_idx: VertexIndex) -> Vec<(EdgeIndex, &Edge<E>)> {
        let mut edges: Vec<_> = self.neighbors_outgoing(vertex_idx).collect();
        edges.sort_by(|(_, a), (_, b)| EdgeWeightComparer.compare(a, b));
        edges
    }

    pub fn out_degree(&self, vertex_idx: VertexIndex) -> usize {
        self.edges_out.get(vertex_idx.index()).map_or(0, Vec::len)
    }

    pub fn in_degree(&self, vertex_idx: VertexIndex) -> usize {
        self.edges_in.get(vertex_idx.index()).map_or(0, Vec::len)
    }

    pub fn print_info(&self) {
        println!("{}", self);
    }
}

impl<V: PartialEq, E: EdgeWeight> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Index<VertexIndex> for Graph<V, E> {
    type Output = V;

    /// **Panics** if the vertex does not exist
    fn index(&self, vertex_idx: VertexIndex) -> &V {
        &self.vertices[vertex_idx.index()].payload
    }
}

impl<V, E> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph:\t#Vertices: {}, #Edges: {}",
            self.vertices.len(),
            self.edges.len()
        )
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0 , 1, 3.0) Returns edge in both directions
///
/// edge!(0 => 1, 3.0) Returns directed edge
///
/// edge!(0 => 1) Returns directed edge without payload
#[macro_export]
macro_rules! edge {
    ($from:expr => $to:expr, $weight:expr) => {
        $crate::graph::Edge::weighted($from.into(), $to.into(), $weight)
    };
    ($from:expr => $to:expr) => {
        $crate::graph::Edge::unweighted($from.into(), $to.into())
    };
    ($from:expr , $to:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::weighted($from.into(), $to.into(), $weight),
            $crate::graph::Edge::weighted($to.into(), $from.into(), $weight),
        ]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;

    fn points(n: usize) -> Graph<Point> {
        let mut g = Graph::new();
        g.create_vertices(n, |i| Point::new(i as f64, 0.0)).unwrap();
        g
    }

    #[test]
    fn create_vertex_passes_index() {
        let mut g: Graph<usize> = Graph::new();
        let a = g.create_vertex(|i| i * 10).unwrap();
        let b = g.create_vertex(|i| i * 10).unwrap();

        assert_eq!(a, vertex_index(0));
        assert_eq!(b, vertex_index(1));
        assert_eq!(g[b], 10);
        assert_eq!(g.num_vertices(), 2);
    }

    #[test]
    fn reject_duplicate_vertex() {
        let mut g: Graph<Point> = Graph::new();
        let a = g.add_vertex(Point::new(1.0, 2.0)).unwrap();

        let res = g.create_vertex(|_| Point::new(1.0, 2.0));
        assert_eq!(
            res,
            Err(PathError::InvalidArgument(
                InvalidArgument::DuplicateVertex {
                    index: 1,
                    existing: a
                }
            ))
        );
        // Nothing was added
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.neighbors_outgoing(a).count(), 0);
    }

    #[test]
    fn add_edge_to_unknown_vertex() {
        let mut g = points(2);

        let res = g.add_edge(edge!(0 => 5, 1.0));
        assert_eq!(
            res,
            Err(PathError::from(InvalidArgument::UnknownVertex(vertex_index(5))))
        );
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn reject_negative_and_nan_weights() {
        let mut g = points(2);

        assert!(g.add_edge(edge!(0 => 1, -1.0)).is_err());
        assert!(g.add_edge(edge!(0 => 1, f64::NAN)).is_err());
        assert!(g.add_edge(edge!(0 => 1, f64::INFINITY)).is_err());
        assert!(g.add_edge(edge!(0 => 1, 0.0)).is_ok());
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let mut g = points(4);
        let e1 = g.add_edge(edge!(0 => 3, 5.0)).unwrap();
        let e2 = g.add_edge(edge!(0 => 1, 1.0)).unwrap();
        let e3 = g.add_edge(edge!(0 => 2)).unwrap();
        // Parallel edges are kept
        let e4 = g.add_edge(edge!(0 => 1, 0.5)).unwrap();

        let out: Vec<EdgeIndex> = g.neighbors_outgoing(0.into()).map(|(i, _)| i).collect();
        assert_eq!(out, vec![e1, e2, e3, e4]);

        let incoming: Vec<EdgeIndex> = g.neighbors_incoming(1.into()).map(|(i, _)| i).collect();
        assert_eq!(incoming, vec![e2, e4]);

        assert_eq!(g.out_degree(0.into()), 4);
        assert_eq!(g.in_degree(0.into()), 0);
    }

    #[test]
    fn sorted_outgoing_uses_weight() {
        let mut g = points(4);
        let heavy = g.add_edge(edge!(0 => 3, 5.0)).unwrap();
        let light = g.add_edge(edge!(0 => 1, 1.0)).unwrap();
        let empty = g.add_edge(edge!(0 => 2)).unwrap();
        let light2 = g.add_edge(edge!(0 => 2, 1.0)).unwrap();

        let sorted: Vec<EdgeIndex> = g.sorted_outgoing(0.into()).iter().map(|(i, _)| *i).collect();
        assert_eq!(sorted, vec![empty, light, light2, heavy]);
    }

    #[test]
    fn bidir_edges() {
        let mut g = points(2);
        g.add_edges(edge!(0, 1, 2.0)).unwrap();
        let (fwd, bwd) = g.add_bidir_edge(edge!(1 => 0, 3.0)).unwrap();

        assert_eq!(g.num_edges(), 4);
        assert_eq!(g.edge(fwd).unwrap().from, vertex_index(1));
        assert_eq!(g.edge(bwd).unwrap().from, vertex_index(0));
        assert_eq!(g.edge(bwd).unwrap().weight(), 3.0);
    }

    // Only needs the payload type, no bounds on it
    fn first_is_known<V>(g: &Graph<V>) -> bool {
        g.check_vertex(vertex_index(0)).is_ok()
    }

    #[test]
    fn check_vertex_without_payload_bounds() {
        assert!(first_is_known(&points(1)));
        assert!(!first_is_known(&points(0)));
        assert_eq!(
            points(2).check_vertex(vertex_index(2)),
            Err(PathError::from(InvalidArgument::UnknownVertex(vertex_index(2))))
        );
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let g = points(1);
        assert_eq!(g.neighbors_outgoing(vertex_index(7)).count(), 0);
        assert!(g.payload(vertex_index(7)).is_none());
    }
}
