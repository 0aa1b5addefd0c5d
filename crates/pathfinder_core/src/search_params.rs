//! Parameters of the weighted A* search

use crate::heuristic::Heuristic;

/// Parameters of a [`PathFinder`](crate::search::path_finder::PathFinder)
/// search.
///
/// The values are validated when a search starts, not when they are set.
pub struct SearchParams<'h, V> {
    pub(crate) heuristic: Option<&'h dyn Heuristic<V>>,
    pub(crate) coefficient: f64,
    /// Abort after this many expansions
    pub(crate) max_expansions: Option<usize>,
}

impl<'h, V> SearchParams<'h, V> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn heuristic(mut self, heuristic: &'h dyn Heuristic<V>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

impl<'h, V> Default for SearchParams<'h, V> {
    fn default() -> Self {
        SearchParams {
            heuristic: None,
            coefficient: 1.0,
            max_expansions: None,
        }
    }
}

impl<'h, V> Clone for SearchParams<'h, V> {
    fn clone(&self) -> Self {
        SearchParams {
            heuristic: self.heuristic,
            coefficient: self.coefficient,
            max_expansions: self.max_expansions,
        }
    }
}

impl<'h, V> std::fmt::Debug for SearchParams<'h, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchParams")
            .field("heuristic", &self.heuristic.map(|_| "dyn Heuristic"))
            .field("coefficient", &self.coefficient)
            .field("max_expansions", &self.max_expansions)
            .finish()
    }
}
