//! Exact-match vertex deduplication.
//!
//! Both the ingestion stage and the ribbon emitter store every distinct
//! position once and refer to it by index. Two positions are "the same" only
//! when all three components compare equal; there is no epsilon welding.

use crate::float_types::{Real, RealBits, canonical_bits};
use hashbrown::HashMap;
use nalgebra::Point3;

type PositionKey = [RealBits; 3];

#[inline]
fn key(pos: &Point3<Real>) -> PositionKey {
    [
        canonical_bits(pos.x),
        canonical_bits(pos.y),
        canonical_bits(pos.z),
    ]
}

/// Insertion-ordered set of positions with O(1) average find-or-insert.
#[derive(Debug, Clone, Default)]
pub struct VertexPool {
    positions: Vec<Point3<Real>>,
    lookup: HashMap<PositionKey, usize>,
}

impl VertexPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VertexPool {
            positions: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity(capacity),
        }
    }

    /// Index of `pos` in the pool, appending it if no equal position exists yet.
    pub fn find_or_insert(&mut self, pos: Point3<Real>) -> usize {
        let next = self.positions.len();
        let index = *self.lookup.entry(key(&pos)).or_insert(next);
        if index == next {
            self.positions.push(pos);
        }
        index
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn into_positions(self) -> Vec<Point3<Real>> {
        self.positions
    }
}
