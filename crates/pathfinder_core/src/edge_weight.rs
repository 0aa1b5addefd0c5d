//! Weight bearing edge payloads and the comparer used to order edges.
use std::cmp::Ordering;

use crate::{constants::Weight, graph::Edge};

/// Payload of an edge that knows its traversal cost.
pub trait EdgeWeight {
    fn weight(&self) -> Weight;
}

impl EdgeWeight for f64 {
    #[inline]
    fn weight(&self) -> Weight {
        *self
    }
}

impl EdgeWeight for f32 {
    #[inline]
    fn weight(&self) -> Weight {
        *self as Weight
    }
}

impl EdgeWeight for u32 {
    #[inline]
    fn weight(&self) -> Weight {
        *self as Weight
    }
}

impl EdgeWeight for u64 {
    #[inline]
    fn weight(&self) -> Weight {
        *self as Weight
    }
}

impl EdgeWeight for usize {
    #[inline]
    fn weight(&self) -> Weight {
        *self as Weight
    }
}

/// Total order over edges by weight. An edge without payload weighs 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeWeightComparer;

impl EdgeWeightComparer {
    pub const INSTANCE: EdgeWeightComparer = EdgeWeightComparer;

    pub fn compare<E: EdgeWeight>(&self, a: &Edge<E>, b: &Edge<E>) -> Ordering {
        a.weight().total_cmp(&b.weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{edge, graph::vertex_index};

    struct Road {
        length: f64,
        speed: f64,
    }

    impl EdgeWeight for Road {
        fn weight(&self) -> Weight {
            self.length / self.speed
        }
    }

    #[test]
    fn missing_payload_weighs_nothing() {
        let empty: Edge = edge!(0 => 1);
        let five: Edge = edge!(0 => 1, 5.0);

        assert_eq!(
            EdgeWeightComparer::INSTANCE.compare(&empty, &five),
            Ordering::Less
        );
        assert_eq!(EdgeWeightComparer.compare(&five, &empty), Ordering::Greater);
        assert_eq!(EdgeWeightComparer.compare(&empty, &empty), Ordering::Equal);
    }

    #[test]
    fn custom_payload() {
        let fast = Edge::weighted(
            vertex_index(0),
            vertex_index(1),
            Road {
                length: 100.0,
                speed: 50.0,
            },
        );
        let slow = Edge::weighted(
            vertex_index(0),
            vertex_index(1),
            Road {
                length: 30.0,
                speed: 10.0,
            },
        );

        assert_eq!(fast.weight(), 2.0);
        assert_eq!(EdgeWeightComparer.compare(&fast, &slow), Ordering::Less);
    }

    #[test]
    fn integer_payloads() {
        let a: Edge<u32> = edge!(0 => 1, 3u32);
        let b: Edge<u32> = edge!(0 => 1, 7u32);
        assert_eq!(EdgeWeightComparer.compare(&a, &b), Ordering::Less);
        assert_eq!(b.weight(), 7.0);
    }
}
