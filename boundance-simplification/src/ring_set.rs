//! Dropping degenerate rings

use boundance_core::{Ring, RingSet};

/// Keep only the rings with strictly more than `min_vertices` positions.
///
/// Surviving rings are returned untouched and in their original order.
pub fn filter_ring_set(rings: Vec<Ring>, min_vertices: usize) -> Vec<Ring> {
    rings.into_iter().filter(|ring| ring.len() > min_vertices).collect()
}

/// Drop the holes of a polygon that have `min_vertices` positions or fewer.
///
/// The outer ring, always first, is kept whatever its size.
pub fn filter_holes(ring_set: &mut RingSet, min_vertices: usize) {
    if ring_set.len() < 2 {
        return;
    }
    let holes = ring_set.split_off(1);
    ring_set.extend(filter_ring_set(holes, min_vertices));
}
