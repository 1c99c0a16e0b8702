//! Ring thinning
//!
//! Both strategies keep the first and last position of a ring and never
//! reorder, duplicate or invent positions, so the output is always an
//! order-preserving subsequence of the input. Closure is inherited: a ring
//! that did not start and end on the same position will not afterwards.

use boundance_core::{Position, Ring, Thinning};
use rand::Rng;

/// Randomly thin a ring.
///
/// Each interior position survives independently when a uniform draw from
/// `[0, 1)` falls below `retention`. Retention above 1 keeps every position;
/// at or below 0 only the endpoints remain. Rings shorter than two positions
/// are returned unchanged without consuming any randomness.
///
/// Calling this twice on the same ring gives different results; that
/// variation is what makes the boundaries move between frames.
///
/// # Example
/// ```rust
/// use boundance_core::Position;
/// use boundance_simplification::reduce_ring;
///
/// let square = vec![
///     Position::new(0.0, 0.0),
///     Position::new(0.0, 1.0),
///     Position::new(1.0, 1.0),
///     Position::new(1.0, 0.0),
///     Position::new(0.0, 0.0),
/// ];
/// let reduced = reduce_ring(&square, 0.0, &mut rand::thread_rng());
/// assert_eq!(reduced, vec![Position::new(0.0, 0.0), Position::new(0.0, 0.0)]);
/// ```
pub fn reduce_ring<R: Rng + ?Sized>(ring: &[Position], retention: f64, rng: &mut R) -> Ring {
    if ring.len() < 2 {
        return ring.to_vec();
    }

    let last = ring.len() - 1;
    ring.iter()
        .enumerate()
        .filter(|&(i, _)| i == 0 || i == last || rng.gen::<f64>() < retention)
        .map(|(_, position)| *position)
        .collect()
}

/// Keep every `step`-th position of a ring plus its last position.
///
/// A step of 0 is treated as 1.
pub fn decimate_ring(ring: &[Position], step: usize) -> Ring {
    if ring.len() < 2 {
        return ring.to_vec();
    }

    let step = step.max(1);
    let last = ring.len() - 1;
    ring.iter()
        .enumerate()
        .filter(|&(i, _)| i % step == 0 || i == last)
        .map(|(_, position)| *position)
        .collect()
}

/// Thin a ring with the given strategy
pub fn thin_ring<R: Rng + ?Sized>(ring: &[Position], thinning: Thinning, rng: &mut R) -> Ring {
    match thinning {
        Thinning::Random { retention } => reduce_ring(ring, retention, rng),
        Thinning::Stride { step } => decimate_ring(ring, step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Ring {
        vec![
            Position::new(0.0, 0.0),
            Position::new(0.0, 1.0),
            Position::new(1.0, 1.0),
            Position::new(1.0, 0.0),
            Position::new(0.0, 0.0),
        ]
    }

    fn circle(n: usize) -> Ring {
        let mut ring: Ring = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                Position::new(angle.cos(), angle.sin())
            })
            .collect();
        ring.push(ring[0]);
        ring
    }

    /// Indices of `reduced` within `original`, matched greedily left to right
    fn subsequence_indices(original: &[Position], reduced: &[Position]) -> Option<Vec<usize>> {
        let mut indices = Vec::with_capacity(reduced.len());
        let mut from = 0;
        for position in reduced {
            let offset = original[from..].iter().position(|p| p == position)?;
            indices.push(from + offset);
            from += offset + 1;
        }
        Some(indices)
    }

    #[test]
    fn test_zero_retention_keeps_only_endpoints() {
        let mut rng = StdRng::seed_from_u64(1);
        let reduced = reduce_ring(&square(), 0.0, &mut rng);
        assert_eq!(reduced, vec![Position::new(0.0, 0.0), Position::new(0.0, 0.0)]);
    }

    #[test]
    fn test_negative_retention_keeps_only_endpoints() {
        let mut rng = StdRng::seed_from_u64(2);
        let ring = circle(64);
        let reduced = reduce_ring(&ring, -3.0, &mut rng);
        assert_eq!(reduced, vec![ring[0], ring[64]]);
    }

    #[test]
    fn test_full_retention_keeps_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let ring = circle(200);
        assert_eq!(reduce_ring(&ring, 1.0, &mut rng), ring);
        assert_eq!(reduce_ring(&ring, 7.5, &mut rng), ring);
    }

    #[test]
    fn test_endpoints_length_and_order() {
        let mut rng = StdRng::seed_from_u64(4);
        let ring = circle(100);
        for retention in [0.1, 0.25, 0.5, 0.75, 0.9] {
            for _ in 0..50 {
                let reduced = reduce_ring(&ring, retention, &mut rng);
                assert!(reduced.len() >= 2);
                assert!(reduced.len() <= ring.len());
                assert_eq!(reduced.first(), ring.first());
                assert_eq!(reduced.last(), ring.last());

                // strictly increasing indices: nothing reordered or duplicated
                let indices = subsequence_indices(&ring[..ring.len() - 1], &reduced[..reduced.len() - 1])
                    .expect("reduced ring is not a subsequence");
                assert!(indices.iter().tuple_windows().all(|(a, b)| a < b));
            }
        }
    }

    #[test]
    fn test_reduction_is_not_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let ring = circle(500);
        let first = reduce_ring(&ring, 0.5, &mut rng);
        let second = reduce_ring(&ring, 0.5, &mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn test_retention_is_a_probability() {
        let mut rng = StdRng::seed_from_u64(6);
        let ring = circle(10_000);
        let kept = reduce_ring(&ring, 0.75, &mut rng).len() - 2;
        let ratio = kept as f64 / (ring.len() - 2) as f64;
        assert!((ratio - 0.75).abs() < 0.03, "kept ratio {}", ratio);
    }

    #[test]
    fn test_short_rings_are_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(reduce_ring(&[], 0.5, &mut rng).is_empty());

        let single = vec![Position::new(3.0, 4.0)];
        assert_eq!(reduce_ring(&single, 0.0, &mut rng), single);

        let pair = vec![Position::new(3.0, 4.0), Position::new(5.0, 6.0)];
        assert_eq!(reduce_ring(&pair, 0.0, &mut rng), pair);
    }

    #[test]
    fn test_open_ring_stays_open() {
        let mut rng = StdRng::seed_from_u64(8);
        let open: Ring = (0..10).map(|i| Position::new(i as f64, 0.0)).collect();
        let reduced = reduce_ring(&open, 0.0, &mut rng);
        assert_eq!(reduced, vec![Position::new(0.0, 0.0), Position::new(9.0, 0.0)]);
    }

    #[test]
    fn test_decimate_ring() {
        let ring: Ring = (0..10).map(|i| Position::new(i as f64, 0.0)).collect();
        let xs = |r: Ring| r.iter().map(|p| p.lon as usize).collect::<Vec<_>>();

        assert_eq!(xs(decimate_ring(&ring, 3)), vec![0, 3, 6, 9]);
        assert_eq!(xs(decimate_ring(&ring, 4)), vec![0, 4, 8, 9]);
        assert_eq!(decimate_ring(&ring, 1), ring);
        assert_eq!(decimate_ring(&ring, 0), ring);
        assert_eq!(xs(decimate_ring(&ring, 100)), vec![0, 9]);
    }

    #[test]
    fn test_thin_ring_dispatch() {
        let mut rng = StdRng::seed_from_u64(9);
        let ring = circle(30);
        assert_eq!(thin_ring(&ring, Thinning::Stride { step: 1 }, &mut rng), ring);
        assert_eq!(thin_ring(&ring, Thinning::Random { retention: 0.0 }, &mut rng).len(), 2);
    }
}
