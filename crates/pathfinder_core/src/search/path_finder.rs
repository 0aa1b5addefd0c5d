//! Weighted A* search over [`Track`]s.
//!
//! The open set is ordered by the track evaluation
//! `c * weight + (1 - c) * heuristic(end, target)`, see [`Coefficient`] for the
//! meaning of `c`. Tracks with equal evaluation leave the open set in the
//! order they entered it.
use std::collections::BinaryHeap;

use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use crate::{
    coefficient::Coefficient,
    constants::Weight,
    edge_weight::EdgeWeight,
    error::{InvalidArgument, PathError, Result},
    graph::{Graph, VertexIndex},
    heuristic::Heuristic,
    search::path::Path,
    search_params::SearchParams,
    statistics::SearchStats,
    track::{Track, TrackArena, TrackId},
};

#[derive(Debug)]
struct Candidate {
    evaluation: Weight,
    sequence: u64,
    track: TrackId,
}

impl Candidate {
    fn new(evaluation: Weight, sequence: u64, track: TrackId) -> Self {
        Self {
            evaluation,
            sequence,
            track,
        }
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
    // Reversed for the max heap: lowest evaluation first, then oldest entry
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .evaluation
            .total_cmp(&self.evaluation)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Open set of a search. Hands out insertion sequence numbers for FIFO tie
/// breaking.
#[derive(Default)]
struct OpenSet {
    heap: BinaryHeap<Candidate>,
    sequence: u64,
}

impl OpenSet {
    fn push(&mut self, evaluation: Weight, track: TrackId) {
        self.heap
            .push(Candidate::new(evaluation, self.sequence, track));
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    fn peek_evaluation(&self) -> Option<Weight> {
        self.heap.peek().map(|c| c.evaluation)
    }
}

pub struct PathFinder<'a, V, E = Weight> {
    pub stats: SearchStats,
    expansion_order: Vec<VertexIndex>,
    max_expansions: Option<usize>,
    g: &'a Graph<V, E>,
}

impl<'a, V, E: EdgeWeight> PathFinder<'a, V, E> {
    pub fn new(g: &'a Graph<V, E>) -> Self {
        PathFinder {
            g,
            stats: SearchStats::default(),
            expansion_order: Vec::new(),
            max_expansions: None,
        }
    }

    /// Aborts searches with [`PathError::ExpansionLimitReached`] after
    /// `limit` expansions.
    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Vertices closed by the last search, in the order they were expanded.
    pub fn expansion_order(&self) -> &[VertexIndex] {
        &self.expansion_order
    }

    /// Searches a path from `source` to `target`.
    ///
    /// Returns `Ok(None)` if `target` can not be reached. Fails if a vertex
    /// does not exist or `coefficient` is outside of `[0, 1]`.
    pub fn find_path<H>(
        &mut self,
        source: VertexIndex,
        target: VertexIndex,
        heuristic: &H,
        coefficient: f64,
    ) -> Result<Option<Path>>
    where
        H: Heuristic<V> + ?Sized,
    {
        let coefficient = Coefficient::new(coefficient)?;
        self.run(source, target, heuristic, coefficient, self.max_expansions)
    }

    /// Like [`find_path`](Self::find_path) with heuristic, coefficient and
    /// expansion limit taken from `params`.
    pub fn search(
        &mut self,
        source: VertexIndex,
        target: VertexIndex,
        params: &SearchParams<'_, V>,
    ) -> Result<Option<Path>> {
        let heuristic = params.heuristic.ok_or(InvalidArgument::MissingHeuristic)?;
        let coefficient = Coefficient::new(params.coefficient)?;
        let limit = params.max_expansions.or(self.max_expansions);
        self.run(source, target, heuristic, coefficient, limit)
    }

    fn run<H>(
        &mut self,
        source: VertexIndex,
        target: VertexIndex,
        heuristic: &H,
        coefficient: Coefficient,
        limit: Option<usize>,
    ) -> Result<Option<Path>>
    where
        H: Heuristic<V> + ?Sized,
    {
        self.g.check_vertex(source)?;
        self.g.check_vertex(target)?;

        info!(
            "BEGIN WEIGHTED ASTAR SEARCH from {:?} to {:?} (coefficient {})",
            source,
            target,
            coefficient.value()
        );
        self.stats.init();
        self.expansion_order.clear();

        let mut tracks = TrackArena::new();
        let mut closed: FxHashMap<VertexIndex, TrackId> = FxHashMap::default();
        let mut open = OpenSet::default();

        let root = tracks.push(Track::root(source));
        open.push(
            tracks[root].evaluation(self.g, target, heuristic, coefficient),
            root,
        );
        self.stats.tracks_created += 1;

        while let Some(Candidate {
            evaluation,
            track: track_id,
            ..
        }) = open.pop()
        {
            let track = tracks[track_id];

            // The key may be stale if the heuristic changed since the push
            let fresh = track.evaluation(self.g, target, heuristic, coefficient);
            if fresh.total_cmp(&evaluation).is_ne()
                && open
                    .peek_evaluation()
                    .is_some_and(|next| next.total_cmp(&fresh).is_lt())
            {
                trace!("Re-keying track to {:?}: {} -> {}", track.end, evaluation, fresh);
                open.push(fresh, track_id);
                continue;
            }

            if track.succeed(target) {
                let path = Path::new(source, tracks.edges_to(track_id), track.weight);
                self.stats.finish();
                debug!("Path found: {:?}", path);
                info!("{}, weight: {}", self.stats, path.weight);
                return Ok(Some(path));
            }

            if let Some(best) = closed.get(&track.end) {
                if tracks[*best].weight <= track.weight {
                    continue;
                }
            }

            if let Some(limit) = limit {
                if self.stats.nodes_settled >= limit {
                    self.stats.finish();
                    info!("Expansion limit of {} reached: {}", limit, self.stats);
                    return Err(PathError::ExpansionLimitReached { limit });
                }
            }

            closed.insert(track.end, track_id);
            self.expansion_order.push(track.end);
            self.stats.nodes_settled += 1;

            for (edge_idx, edge) in self.g.neighbors_outgoing(track.end) {
                let child = Track::extend(track_id, &track, edge_idx, edge);
                let child_evaluation = child.evaluation(self.g, target, heuristic, coefficient);
                let child_id = tracks.push(child);
                open.push(child_evaluation, child_id);
                self.stats.tracks_created += 1;
            }
        }

        self.stats.finish();
        info!("No path found: {}", self.stats);
        Ok(None)
    }
}
