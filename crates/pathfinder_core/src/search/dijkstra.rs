//! Dijkstra search over a [`VertexInfoArena`].
//!
//! Equivalent to a [`PathFinder`](super::path_finder::PathFinder) search with
//! coefficient 1, but keeps only one parent edge per vertex instead of a
//! track per queue entry.
use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::edge_weight::EdgeWeight;
use crate::error::Result;
use crate::graph::*;
use crate::search::path::Path;
use crate::statistics::SearchStats;
use crate::vertex_info::VertexInfoArena;
use log::{debug, info};

#[derive(Debug)]
pub struct Candidate {
    pub vertex: VertexIndex,
    pub weight: Weight,
}

impl Candidate {
    pub fn new(vertex: VertexIndex, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.weight.total_cmp(&self.weight)
    }
}

pub struct Dijkstra<'a, V, E = Weight> {
    pub stats: SearchStats,
    g: &'a Graph<V, E>,
}

impl<'a, V, E: EdgeWeight> Dijkstra<'a, V, E> {
    pub fn new(graph: &'a Graph<V, E>) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Shortest path from `source` to `target`, `Ok(None)` if there is none.
    pub fn search(&mut self, source: VertexIndex, target: VertexIndex) -> Result<Option<Path>> {
        self.g.check_vertex(source)?;
        self.g.check_vertex(target)?;

        let info = self.run(source, Some(target));

        let sp = info.path_to(self.g, source, target);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!("Path found: {}", self.stats);
        } else {
            info!("No path found: {}", self.stats);
        }

        Ok(sp)
    }

    /// Shortest path tree rooted at `source`.
    pub fn shortest_path_tree(&mut self, source: VertexIndex) -> Result<VertexInfoArena> {
        self.g.check_vertex(source)?;
        Ok(self.run(source, None))
    }

    fn run(&mut self, source: VertexIndex, target: Option<VertexIndex>) -> VertexInfoArena {
        self.stats.init();

        let mut info = VertexInfoArena::new(self.g.num_vertices());
        info.init_source(source);

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0.0));
        self.stats.tracks_created += 1;

        while let Some(Candidate { vertex, .. }) = queue.pop() {
            if info[vertex].finalized {
                continue;
            }
            info[vertex].finalized = true;
            self.stats.nodes_settled += 1;

            if Some(vertex) == target {
                break;
            }

            for (edge_idx, edge) in self.g.neighbors_outgoing(vertex) {
                if !info[edge.to].finalized && info.relax(edge_idx, edge) {
                    queue.push(Candidate::new(edge.to, info[edge.to].distance));
                    self.stats.tracks_created += 1;
                }
            }
        }
        self.stats.finish();

        info
    }
}
