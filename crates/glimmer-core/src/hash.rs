//! Lattice hashing for pseudo-random per-cell values.
//!
//! The classic fract-of-sine construction: deterministic, stateless, and
//! good enough to decorrelate neighboring grid cells. Not a statistical RNG.

use crate::ease::fract;
use crate::types::Vec2;

/// Hash a 2D point to one pseudo-random value in [0, 1)
pub fn hash21(p: Vec2) -> f32 {
    fract(p.dot(&Vec2::new(127.1, 311.7)).sin() * 43758.5453)
}

/// Hash a 2D point to two decorrelated pseudo-random values in [0, 1)
pub fn hash22(p: Vec2) -> Vec2 {
    Vec2::new(
        fract(p.dot(&Vec2::new(127.1, 311.7)).sin() * 43758.5453),
        fract(p.dot(&Vec2::new(269.5, 183.3)).sin() * 43758.5453),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let p = Vec2::new(7.0, -3.0);
        assert_eq!(hash22(p), hash22(p));
        assert_eq!(hash21(p), hash21(p));
    }

    #[test]
    fn hash_stays_in_unit_range() {
        for i in -10..10 {
            for j in -10..10 {
                let h = hash22(Vec2::new(i as f32, j as f32));
                assert!((0.0..1.0).contains(&h.x));
                assert!((0.0..1.0).contains(&h.y));
            }
        }
    }

    #[test]
    fn neighboring_cells_decorrelate() {
        let a = hash22(Vec2::new(4.0, 9.0));
        let b = hash22(Vec2::new(5.0, 9.0));
        assert!((a.x - b.x).abs() > 1e-3 || (a.y - b.y).abs() > 1e-3);
    }
}
