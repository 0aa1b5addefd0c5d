//! The blend coefficient of the weighted A* evaluation.
use serde::{Deserialize, Serialize};

use crate::{constants::Weight, error::InvalidArgument};

/// Coefficient `c` in `[0, 1]` of the evaluation
/// `c * weight + (1 - c) * heuristic`.
///
/// * `1.0` orders the frontier by accumulated weight only, which makes the
///   search a Dijkstra search (optimal for non-negative weights).
/// * `0.0` orders by the heuristic only (greedy best-first). Fewer
///   expansions, no optimality guarantee.
/// * Everything in between blends both. Whether the result is optimal
///   depends on the heuristic and its scale relative to the edge weights,
///   which the engine does not check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Coefficient(f64);

impl Coefficient {
    pub const DIJKSTRA: Coefficient = Coefficient(1.0);
    pub const GREEDY: Coefficient = Coefficient(0.0);

    /// Fails for values outside of `[0, 1]` and NaN.
    pub fn new(value: f64) -> Result<Self, InvalidArgument> {
        if (0.0..=1.0).contains(&value) {
            Ok(Coefficient(value))
        } else {
            Err(InvalidArgument::InvalidCoefficient(value))
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn blend(self, weight: Weight, estimate: Weight) -> Weight {
        self.0 * weight + (1.0 - self.0) * estimate
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Coefficient::DIJKSTRA
    }
}

impl TryFrom<f64> for Coefficient {
    type Error = InvalidArgument;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Coefficient::new(value)
    }
}
