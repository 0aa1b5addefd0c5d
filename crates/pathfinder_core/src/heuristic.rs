//! Estimates of the remaining cost between two vertices.
//!
//! The engine never checks admissibility or consistency of a heuristic. Only
//! at coefficient `1.0` the result is guaranteed to be optimal regardless of
//! the heuristic.
use crate::{
    constants::Weight,
    graph::{GeoPoint, Point},
    util::math,
};

/// Pure function estimating the cost to go from `from` to `to`. Estimates
/// should be non-negative.
///
/// Implemented for every `Fn(&V, &V) -> Weight`, so plain functions and
/// closures can be used directly.
pub trait Heuristic<V> {
    fn estimate(&self, from: &V, to: &V) -> Weight;
}

impl<V, F> Heuristic<V> for F
where
    F: Fn(&V, &V) -> Weight,
{
    #[inline]
    fn estimate(&self, from: &V, to: &V) -> Weight {
        self(from, to)
    }
}

/// Payloads with planar coordinates
pub trait Position {
    fn position(&self) -> Point;
}

impl Position for Point {
    fn position(&self) -> Point {
        *self
    }
}

/// Payloads with geographic coordinates
pub trait GeoPosition {
    fn geo_position(&self) -> GeoPoint;
}

impl GeoPosition for GeoPoint {
    fn geo_position(&self) -> GeoPoint {
        *self
    }
}

/// Always estimates 0. Turns any coefficient into a pure cost ordering
/// (up to the scale `c`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<V> Heuristic<V> for NullHeuristic {
    #[inline]
    fn estimate(&self, _: &V, _: &V) -> Weight {
        0.0
    }
}

/// Straight line distance in the plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<V: Position> Heuristic<V> for Euclidean {
    #[inline]
    fn estimate(&self, from: &V, to: &V) -> Weight {
        math::euclidean(&from.position(), &to.position())
    }
}

/// L1 distance in the plane. Admissible on 4-connected grids with unit
/// spacing and weights >= 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<V: Position> Heuristic<V> for Manhattan {
    #[inline]
    fn estimate(&self, from: &V, to: &V) -> Weight {
        math::manhattan(&from.position(), &to.position())
    }
}

/// Great-circle distance in km.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLine;

impl<V: GeoPosition> Heuristic<V> for StraightLine {
    #[inline]
    fn estimate(&self, from: &V, to: &V) -> Weight {
        math::haversine(&from.geo_position(), &to.geo_position())
    }
}

/// Multiplies the estimate of `inner` by `factor`, e.g. to convert a
/// distance into a travel time.
#[derive(Debug, Clone, Copy)]
pub struct Scaled<H> {
    inner: H,
    factor: f64,
}

impl<H> Scaled<H> {
    pub fn new(inner: H, factor: f64) -> Self {
        Scaled { inner, factor }
    }
}

impl<V, H: Heuristic<V>> Heuristic<V> for Scaled<H> {
    #[inline]
    fn estimate(&self, from: &V, to: &V) -> Weight {
        self.factor * self.inner.estimate(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(_: &Point, _: &Point) -> Weight {
        42.0
    }

    #[test]
    fn closures_and_functions_are_heuristics() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(constant.estimate(&a, &b), 42.0);

        let offset = 1.0;
        let closure = |x: &Point, y: &Point| math::euclidean(x, y) + offset;
        assert_eq!(closure.estimate(&a, &b), 6.0);
    }

    #[test]
    fn builtin_heuristics() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(NullHeuristic.estimate(&a, &b), 0.0);
        assert_eq!(Euclidean.estimate(&a, &b), 5.0);
        assert_eq!(Manhattan.estimate(&a, &b), 7.0);
        assert_eq!(Scaled::new(Manhattan, 0.5).estimate(&a, &b), 3.5);
    }

    #[test]
    fn straight_line_is_symmetric() {
        let a = GeoPoint::new(48.1, 11.6);
        let b = GeoPoint::new(48.2, 11.7);

        let ab = StraightLine.estimate(&a, &b);
        assert!(ab > 0.0);
        assert_eq!(ab, StraightLine.estimate(&b, &a));
        assert_eq!(StraightLine.estimate(&a, &a), 0.0);
    }
}
