//! Bellman-Ford search over a [`VertexInfoArena`].
//!
//! Relaxes every edge until nothing improves. Slower than Dijkstra, but does
//! not depend on a priority queue, which makes it a useful reference.
use crate::{
    constants::Weight,
    edge_weight::EdgeWeight,
    error::Result,
    graph::{Graph, VertexIndex},
    search::path::Path,
    statistics::SearchStats,
    vertex_info::VertexInfoArena,
};
use log::{debug, info};

pub struct BellmanFord<'a, V, E = Weight> {
    pub stats: SearchStats,
    /// Relaxation rounds of the last search
    pub rounds: usize,
    g: &'a Graph<V, E>,
}

impl<'a, V, E: EdgeWeight> BellmanFord<'a, V, E> {
    pub fn new(g: &'a Graph<V, E>) -> Self {
        BellmanFord {
            g,
            stats: SearchStats::default(),
            rounds: 0,
        }
    }

    pub fn search(&mut self, source: VertexIndex, target: VertexIndex) -> Result<Option<Path>> {
        self.g.check_vertex(target)?;
        let info = self.shortest_path_tree(source)?;

        let sp = info.path_to(self.g, source, target);
        debug!("Bellman-Ford result after {} rounds: {:?}", self.rounds, sp);
        Ok(sp)
    }

    pub fn shortest_path_tree(&mut self, source: VertexIndex) -> Result<VertexInfoArena> {
        self.g.check_vertex(source)?;
        self.stats.init();
        self.rounds = 0;

        let mut info = VertexInfoArena::new(self.g.num_vertices());
        info.init_source(source);

        // Weights are non-negative, so n - 1 rounds always suffice
        for _ in 0..self.g.num_vertices().saturating_sub(1) {
            self.rounds += 1;
            let mut changed = false;
            for (edge_idx, edge) in self.g.edges() {
                changed |= info.relax(edge_idx, edge);
            }
            if !changed {
                break;
            }
        }

        for i in 0..info.len() {
            let vertex = VertexIndex::new(i);
            if info.distance(vertex).is_some() {
                info[vertex].finalized = true;
                self.stats.nodes_settled += 1;
            }
        }
        self.stats.finish();
        info!("Bellman-Ford finished after {} rounds: {}", self.rounds, self.stats);

        Ok(info)
    }
}
