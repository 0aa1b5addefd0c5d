use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

use crate::{edge_weight::EdgeWeight, graph::Graph};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Vertices finalized (closed) by the search
    pub nodes_settled: usize,
    /// Tracks or queue entries created by the search
    pub tracks_created: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.tracks_created = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} tracks created in {:?}",
            self.nodes_settled, self.tracks_created, self.duration
        )
    }
}

pub fn average_in_degree<V, E: EdgeWeight>(g: &Graph<V, E>) -> f64 {
    if g.num_vertices() == 0 {
        return 0.0;
    }
    let sum: usize = g.vertices().map(|v| g.in_degree(v.index)).sum();
    sum as f64 / g.num_vertices() as f64
}

pub fn average_out_degree<V, E: EdgeWeight>(g: &Graph<V, E>) -> f64 {
    if g.num_vertices() == 0 {
        return 0.0;
    }
    let sum: usize = g.vertices().map(|v| g.out_degree(v.index)).sum();
    sum as f64 / g.num_vertices() as f64
}
